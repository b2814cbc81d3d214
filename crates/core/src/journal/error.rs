//! Error types for refused journal line mutations.

use ledgerguard_shared::types::{CompanyId, InvoiceId, JournalLineId, StatementId};
use thiserror::Error;

use super::patch::{LineField, join_fields};

/// Errors raised while guarding or validating journal line mutations.
///
/// Every variant is fatal to the enclosing operation: the whole batch is
/// refused and nothing is delegated to the base store.
#[derive(Debug, Error)]
pub enum LineError {
    /// The line was generated by an invoice; edit the invoice instead.
    #[error(
        "You cannot do this on an entry generated by an invoice. \
         You must change the related invoice directly. \
         Invoice name (id): {name} ({id})"
    )]
    GeneratedByInvoice {
        /// Display name of the invoice.
        name: String,
        /// Identifier of the invoice.
        id: InvoiceId,
    },

    /// The line was generated by a bank statement; edit the statement
    /// instead.
    #[error(
        "You cannot do this on an entry generated by a bank statement. \
         You must change the related bank statement directly. \
         Bank statement name (id): {name} ({id})"
    )]
    GeneratedByStatement {
        /// Display name of the bank statement.
        name: String,
        /// Identifier of the bank statement.
        id: StatementId,
    },

    /// A row-level constraint predicate returned false.
    #[error("{message} (fields: {})", join_fields(.fields))]
    ConstraintViolation {
        /// Fixed message of the violated constraint.
        message: &'static str,
        /// Fields implicated by the violated constraint.
        fields: &'static [LineField],
    },

    /// Journal line not found.
    #[error("Journal line not found: {0}")]
    LineNotFound(JournalLineId),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(CompanyId),
}

impl LineError {
    /// Returns the error code for host integration.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::GeneratedByInvoice { .. } => "GENERATED_BY_INVOICE",
            Self::GeneratedByStatement { .. } => "GENERATED_BY_STATEMENT",
            Self::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
            Self::LineNotFound(_) => "LINE_NOT_FOUND",
            Self::CompanyNotFound(_) => "COMPANY_NOT_FOUND",
        }
    }
}
