//! Journal line domain types.

use chrono::NaiveDate;
use ledgerguard_shared::types::{
    AccountId, CompanyId, Currency, InvoiceId, JournalEntryId, JournalLineId, PartialReconcileId,
    ReconcileId, StatementId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference to the source document that generated a journal line.
///
/// Carries the display name alongside the id so a refused mutation can
/// identify the document without a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef<Id> {
    /// Unique identifier of the document.
    pub id: Id,
    /// Human-readable document name (e.g. "INV/2026/0042").
    pub name: String,
}

impl<Id> DocumentRef<Id> {
    /// Creates a new document reference.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single debit/credit posting within a journal entry.
///
/// Lines generated by an invoice or a bank statement keep a link to their
/// source document and may only be edited through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier for this line.
    pub id: JournalLineId,
    /// The journal entry this line belongs to.
    pub entry_id: JournalEntryId,
    /// The account affected by this line.
    pub account_id: AccountId,
    /// The company owning this line.
    pub company_id: CompanyId,
    /// Line label.
    pub name: String,
    /// Posting date.
    pub date: NaiveDate,
    /// Debit amount in the company's base currency.
    pub debit: Decimal,
    /// Credit amount in the company's base currency.
    pub credit: Decimal,
    /// Secondary currency, when the line is also expressed in a currency
    /// other than the company's base currency.
    pub currency: Option<Currency>,
    /// Amount expressed in the secondary currency. Zero means no secondary
    /// amount is recorded.
    pub amount_currency: Decimal,
    /// The invoice that generated this line, if any.
    pub invoice: Option<DocumentRef<InvoiceId>>,
    /// The bank statement that generated this line, if any.
    pub statement: Option<DocumentRef<StatementId>>,
    /// Full reconciliation this line is matched under.
    pub reconcile_id: Option<ReconcileId>,
    /// Partial reconciliation this line is matched under.
    pub reconcile_partial_id: Option<PartialReconcileId>,
}

impl JournalLine {
    /// Returns true if this line was generated by an invoice or a bank
    /// statement.
    #[must_use]
    pub fn has_source_document(&self) -> bool {
        self.invoice.is_some() || self.statement.is_some()
    }

    /// Returns true if this line is matched against another line, fully or
    /// partially.
    #[must_use]
    pub fn is_reconciled(&self) -> bool {
        self.reconcile_id.is_some() || self.reconcile_partial_id.is_some()
    }

    /// Returns true if a secondary-currency amount is recorded on this line.
    #[must_use]
    pub fn has_secondary_amount(&self) -> bool {
        !self.amount_currency.is_zero()
    }
}
