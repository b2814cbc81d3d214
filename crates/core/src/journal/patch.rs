//! Typed change sets for proposed journal line writes.

use chrono::NaiveDate;
use ledgerguard_shared::types::{AccountId, Currency, PartialReconcileId, ReconcileId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::JournalLine;

/// Identifies a mutable journal line field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineField {
    /// Line label.
    Name,
    /// Posting date.
    Date,
    /// Affected account.
    Account,
    /// Debit amount.
    Debit,
    /// Credit amount.
    Credit,
    /// Secondary currency.
    Currency,
    /// Secondary-currency amount.
    AmountCurrency,
    /// Full reconciliation link.
    ReconcileId,
    /// Partial reconciliation link.
    ReconcilePartialId,
}

impl LineField {
    /// Returns the stable field name used in messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Account => "account_id",
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Currency => "currency",
            Self::AmountCurrency => "amount_currency",
            Self::ReconcileId => "reconcile_id",
            Self::ReconcilePartialId => "reconcile_partial_id",
        }
    }

    /// Returns true if this field only records reconciliation state.
    #[must_use]
    pub fn is_reconcile_link(&self) -> bool {
        matches!(self, Self::ReconcileId | Self::ReconcilePartialId)
    }
}

impl std::fmt::Display for LineField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats a field list for messages.
pub(crate) fn join_fields(fields: &[LineField]) -> String {
    fields
        .iter()
        .map(LineField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A proposed set of field changes against one or more journal lines.
///
/// `None` leaves the field untouched. Link fields use a nested `Option` so a
/// write can also clear them.
#[derive(Debug, Clone, Default)]
pub struct LinePatch {
    /// New line label.
    pub name: Option<String>,
    /// New posting date.
    pub date: Option<NaiveDate>,
    /// New account.
    pub account_id: Option<AccountId>,
    /// New debit amount.
    pub debit: Option<Decimal>,
    /// New credit amount.
    pub credit: Option<Decimal>,
    /// New secondary currency (or clear it).
    pub currency: Option<Option<Currency>>,
    /// New secondary-currency amount.
    pub amount_currency: Option<Decimal>,
    /// New full reconciliation link (or clear it).
    pub reconcile_id: Option<Option<ReconcileId>>,
    /// New partial reconciliation link (or clear it).
    pub reconcile_partial_id: Option<Option<PartialReconcileId>>,
}

impl LinePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the posting date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the account.
    #[must_use]
    pub const fn with_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Sets the debit amount.
    #[must_use]
    pub const fn with_debit(mut self, debit: Decimal) -> Self {
        self.debit = Some(debit);
        self
    }

    /// Sets the credit amount.
    #[must_use]
    pub const fn with_credit(mut self, credit: Decimal) -> Self {
        self.credit = Some(credit);
        self
    }

    /// Sets or clears the secondary currency.
    #[must_use]
    pub const fn with_currency(mut self, currency: Option<Currency>) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the secondary-currency amount.
    #[must_use]
    pub const fn with_amount_currency(mut self, amount: Decimal) -> Self {
        self.amount_currency = Some(amount);
        self
    }

    /// Sets or clears the full reconciliation link.
    #[must_use]
    pub const fn with_reconcile(mut self, reconcile: Option<ReconcileId>) -> Self {
        self.reconcile_id = Some(reconcile);
        self
    }

    /// Sets or clears the partial reconciliation link.
    #[must_use]
    pub const fn with_partial_reconcile(mut self, partial: Option<PartialReconcileId>) -> Self {
        self.reconcile_partial_id = Some(partial);
        self
    }

    /// Returns the set of fields this patch touches.
    #[must_use]
    pub fn fields(&self) -> Vec<LineField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(LineField::Name);
        }
        if self.date.is_some() {
            fields.push(LineField::Date);
        }
        if self.account_id.is_some() {
            fields.push(LineField::Account);
        }
        if self.debit.is_some() {
            fields.push(LineField::Debit);
        }
        if self.credit.is_some() {
            fields.push(LineField::Credit);
        }
        if self.currency.is_some() {
            fields.push(LineField::Currency);
        }
        if self.amount_currency.is_some() {
            fields.push(LineField::AmountCurrency);
        }
        if self.reconcile_id.is_some() {
            fields.push(LineField::ReconcileId);
        }
        if self.reconcile_partial_id.is_some() {
            fields.push(LineField::ReconcilePartialId);
        }
        fields
    }

    /// Returns true if the patch touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Applies the patch to a line, producing the post-write state.
    pub fn apply(&self, line: &mut JournalLine) {
        if let Some(name) = &self.name {
            line.name.clone_from(name);
        }
        if let Some(date) = self.date {
            line.date = date;
        }
        if let Some(account_id) = self.account_id {
            line.account_id = account_id;
        }
        if let Some(debit) = self.debit {
            line.debit = debit;
        }
        if let Some(credit) = self.credit {
            line.credit = credit;
        }
        if let Some(currency) = self.currency {
            line.currency = currency;
        }
        if let Some(amount) = self.amount_currency {
            line.amount_currency = amount;
        }
        if let Some(reconcile) = self.reconcile_id {
            line.reconcile_id = reconcile;
        }
        if let Some(partial) = self.reconcile_partial_id {
            line.reconcile_partial_id = partial;
        }
    }
}
