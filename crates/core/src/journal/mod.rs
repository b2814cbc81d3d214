//! Journal line mutation guards and row-level constraints.
//!
//! This module implements the protection layer for journal entry lines:
//! - Line records and source-document links
//! - Typed change sets for proposed writes
//! - Guards refusing direct edits to generated lines
//! - Secondary-currency constraints
//! - A store decorator wiring guards and constraints in front of persistence
//! - Error types for refused mutations

pub mod error;
pub mod guard;
pub mod line;
pub mod patch;
pub mod store;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LineError;
pub use guard::{MutationContext, check_invoice_generated, check_statement_generated, reconcile_only};
pub use line::{DocumentRef, JournalLine};
pub use patch::{LineField, LinePatch};
pub use store::{GuardedLineStore, LineStore};
pub use validation::{ConstraintContext, LINE_CONSTRAINTS, LineConstraint, check_lines};
