//! Mutation guards for generated journal lines.
//!
//! Lines generated by an invoice or a bank statement must be edited through
//! their source document. The only direct writes allowed on them are the
//! ones recording reconciliation state, e.g. manually unreconciling an entry
//! generated by an invoice.

use super::error::LineError;
use super::line::JournalLine;
use super::patch::{LineField, LinePatch};

/// Calling context for a guarded mutation.
///
/// The host sets `from_parent_object` when the mutation is issued by the
/// source document itself (an invoice rewriting its own lines); the
/// source-document guard is skipped entirely for such calls. Row-level
/// constraints still run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationContext {
    /// The mutation originates from a trusted parent document.
    pub from_parent_object: bool,
}

impl MutationContext {
    /// Creates a context for a direct user mutation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            from_parent_object: false,
        }
    }

    /// Creates a context for a mutation issued by a parent document.
    #[must_use]
    pub const fn from_parent() -> Self {
        Self {
            from_parent_object: true,
        }
    }
}

/// Returns true if the proposed change set only touches reconciliation
/// links.
///
/// An absent (`None`, i.e. unlink) or empty change set is not
/// reconcile-only: those mutations stay refused on generated lines.
#[must_use]
pub fn reconcile_only(patch: Option<&LinePatch>) -> bool {
    match patch {
        Some(patch) if !patch.is_empty() => {
            patch.fields().iter().all(LineField::is_reconcile_link)
        }
        _ => false,
    }
}

/// Refuses the mutation if any line in the batch was generated by an
/// invoice, unless the change set is reconcile-only.
pub fn check_invoice_generated(
    lines: &[JournalLine],
    patch: Option<&LinePatch>,
) -> Result<(), LineError> {
    for line in lines {
        if let Some(invoice) = &line.invoice {
            if reconcile_only(patch) {
                return Ok(());
            }
            return Err(LineError::GeneratedByInvoice {
                name: invoice.name.clone(),
                id: invoice.id,
            });
        }
    }
    Ok(())
}

/// Refuses the mutation if any line in the batch was generated by a bank
/// statement, unless the change set is reconcile-only.
pub fn check_statement_generated(
    lines: &[JournalLine],
    patch: Option<&LinePatch>,
) -> Result<(), LineError> {
    for line in lines {
        if let Some(statement) = &line.statement {
            if reconcile_only(patch) {
                return Ok(());
            }
            return Err(LineError::GeneratedByStatement {
                name: statement.name.clone(),
                id: statement.id,
            });
        }
    }
    Ok(())
}
