//! Row-level secondary-currency constraints for journal lines.
//!
//! Constraints are declared as a fixed list of (predicate, message,
//! implicated fields) tuples and evaluated by a generic runner on every
//! create and write.

use ledgerguard_shared::types::{CompanyId, Currency};
use rust_decimal::Decimal;

use super::error::LineError;
use super::line::JournalLine;
use super::patch::LineField;

/// Per-line context resolved by the runner before predicates run.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintContext {
    /// Base currency of the company owning the line.
    pub company_currency: Currency,
}

/// A row-level constraint: a predicate with its fixed refusal message and
/// the fields it implicates.
pub struct LineConstraint {
    /// Fixed human-readable message reported on violation.
    pub message: &'static str,
    /// Fields implicated by the constraint.
    pub fields: &'static [LineField],
    check: fn(&JournalLine, &ConstraintContext) -> bool,
}

impl LineConstraint {
    /// Evaluates the predicate for one line; false is a violation.
    #[must_use]
    pub fn holds(&self, line: &JournalLine, ctx: &ConstraintContext) -> bool {
        (self.check)(line, ctx)
    }
}

/// Secondary currency and secondary amount must be recorded together.
///
/// Only lines carrying both a nonzero debit and a nonzero credit are
/// subject to the pairing rule; lines with a zero side are exempt.
fn currency_and_amount_paired(line: &JournalLine, _ctx: &ConstraintContext) -> bool {
    if line.debit.is_zero() || line.credit.is_zero() {
        return true;
    }
    line.currency.is_some() == line.has_secondary_amount()
}

/// The secondary amount must be positive on the debit side and negative on
/// the credit side.
fn secondary_amount_sign_matches_side(line: &JournalLine, _ctx: &ConstraintContext) -> bool {
    if !line.has_secondary_amount() {
        return true;
    }
    !((line.amount_currency > Decimal::ZERO && line.credit > Decimal::ZERO)
        || (line.amount_currency < Decimal::ZERO && line.debit > Decimal::ZERO))
}

/// The secondary currency must differ from the company's base currency.
fn currency_differs_from_company(line: &JournalLine, ctx: &ConstraintContext) -> bool {
    line.currency != Some(ctx.company_currency)
}

/// Row-level constraints evaluated on every create and write.
pub const LINE_CONSTRAINTS: &[LineConstraint] = &[
    LineConstraint {
        message: "You cannot create journal items with a secondary currency without \
                  recording both 'currency' and 'amount currency' fields.",
        fields: &[LineField::Currency, LineField::AmountCurrency],
        check: currency_and_amount_paired,
    },
    LineConstraint {
        message: "The amount expressed in the secondary currency must be positive when \
                  the journal item is a debit and negative when it is a credit.",
        fields: &[LineField::AmountCurrency],
        check: secondary_amount_sign_matches_side,
    },
    LineConstraint {
        message: "You cannot provide a secondary currency identical to the company one.",
        fields: &[LineField::Currency],
        check: currency_differs_from_company,
    },
];

/// Checks every line against every row-level constraint.
///
/// The owning company's base currency is resolved through the injected
/// lookup before any predicate runs; an unknown company aborts the batch.
/// Constraints are evaluated in declaration order across the whole batch,
/// and the first predicate returning false aborts it.
pub fn check_lines<F>(lines: &[JournalLine], company_currency: F) -> Result<(), LineError>
where
    F: Fn(CompanyId) -> Option<Currency>,
{
    let contexts = lines
        .iter()
        .map(|line| {
            company_currency(line.company_id)
                .map(|company_currency| ConstraintContext { company_currency })
                .ok_or(LineError::CompanyNotFound(line.company_id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for constraint in LINE_CONSTRAINTS {
        for (line, ctx) in lines.iter().zip(&contexts) {
            if !constraint.holds(line, ctx) {
                return Err(LineError::ConstraintViolation {
                    message: constraint.message,
                    fields: constraint.fields,
                });
            }
        }
    }
    Ok(())
}
