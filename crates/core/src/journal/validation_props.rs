//! Property-based tests for the secondary-currency constraints.

use proptest::prelude::*;
use rust_decimal::Decimal;

use ledgerguard_shared::types::{
    AccountId, CompanyId, Currency, JournalEntryId, JournalLineId,
};

use super::line::JournalLine;
use super::validation::{ConstraintContext, LINE_CONSTRAINTS, check_lines};

const COMPANY_CURRENCY: Currency = Currency::Usd;

/// Strategy to generate a strictly positive amount in cents.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a nonzero amount of either sign.
fn nonzero_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        positive_amount(),
        positive_amount().prop_map(|amount| -amount),
    ]
}

/// Strategy to generate an optional secondary currency distinct from the
/// company currency.
fn foreign_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Eur),
        Just(Currency::Chf),
        Just(Currency::Gbp),
        Just(Currency::Jpy),
    ]
}

/// Helper to create a journal line for testing.
fn make_line(debit: Decimal, credit: Decimal) -> JournalLine {
    JournalLine {
        id: JournalLineId::new(),
        entry_id: JournalEntryId::new(),
        account_id: AccountId::new(),
        company_id: CompanyId::new(),
        name: "Line".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        debit,
        credit,
        currency: None,
        amount_currency: Decimal::ZERO,
        invoice: None,
        statement: None,
        reconcile_id: None,
        reconcile_partial_id: None,
    }
}

fn ctx() -> ConstraintContext {
    ConstraintContext {
        company_currency: COMPANY_CURRENCY,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* line with a zero debit or a zero credit, the pairing rule
    /// holds regardless of the secondary currency and amount.
    #[test]
    fn prop_pairing_exempts_single_sided_lines(
        amount in positive_amount(),
        secondary in nonzero_amount(),
        currency in proptest::option::of(foreign_currency()),
        debit_side in any::<bool>(),
        with_secondary in any::<bool>(),
    ) {
        let (debit, credit) = if debit_side {
            (amount, Decimal::ZERO)
        } else {
            (Decimal::ZERO, amount)
        };
        let mut line = make_line(debit, credit);
        line.currency = currency;
        if with_secondary {
            line.amount_currency = secondary;
        }

        prop_assert!(LINE_CONSTRAINTS[0].holds(&line, &ctx()));
    }

    /// *For any* line carrying both a nonzero debit and a nonzero credit,
    /// the pairing rule holds exactly when the secondary currency and the
    /// secondary amount are set together.
    #[test]
    fn prop_pairing_requires_both_fields_on_two_sided_lines(
        debit in positive_amount(),
        credit in positive_amount(),
        secondary in nonzero_amount(),
        currency in proptest::option::of(foreign_currency()),
        with_secondary in any::<bool>(),
    ) {
        let mut line = make_line(debit, credit);
        line.currency = currency;
        if with_secondary {
            line.amount_currency = secondary;
        }

        let expected = currency.is_some() == with_secondary;
        prop_assert_eq!(LINE_CONSTRAINTS[0].holds(&line, &ctx()), expected);
    }

    /// *For any* line with a positive secondary amount, the sign rule fails
    /// exactly when the credit side is nonzero; with a negative secondary
    /// amount, exactly when the debit side is nonzero.
    #[test]
    fn prop_sign_rule_matches_sides(
        amount in positive_amount(),
        secondary in nonzero_amount(),
        debit_side in any::<bool>(),
    ) {
        let (debit, credit) = if debit_side {
            (amount, Decimal::ZERO)
        } else {
            (Decimal::ZERO, amount)
        };
        let mut line = make_line(debit, credit);
        line.amount_currency = secondary;

        let violates = (secondary > Decimal::ZERO && !debit_side)
            || (secondary < Decimal::ZERO && debit_side);
        prop_assert_eq!(LINE_CONSTRAINTS[1].holds(&line, &ctx()), !violates);
    }

    /// *For any* line without a secondary amount, the sign rule holds.
    #[test]
    fn prop_sign_rule_ignores_lines_without_secondary_amount(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        let line = make_line(debit, credit);
        prop_assert!(LINE_CONSTRAINTS[1].holds(&line, &ctx()));
    }

    /// *For any* secondary currency, the distinctness rule fails exactly
    /// when it equals the company currency.
    #[test]
    fn prop_distinctness_compares_against_company_currency(
        currency in proptest::option::of(prop_oneof![
            Just(COMPANY_CURRENCY),
            foreign_currency(),
        ]),
        amount in positive_amount(),
    ) {
        let mut line = make_line(amount, Decimal::ZERO);
        line.currency = currency;

        let expected = currency != Some(COMPANY_CURRENCY);
        prop_assert_eq!(LINE_CONSTRAINTS[2].holds(&line, &ctx()), expected);
    }

    /// *For any* batch of valid single-sided lines, the runner accepts the
    /// batch; flipping one line's secondary currency to the company
    /// currency makes it refuse the whole batch.
    #[test]
    fn prop_runner_accepts_then_refuses(
        amounts in proptest::collection::vec(positive_amount(), 1..6),
    ) {
        let mut lines: Vec<JournalLine> = amounts
            .iter()
            .map(|amount| make_line(*amount, Decimal::ZERO))
            .collect();

        let lookup = |_: CompanyId| Some(COMPANY_CURRENCY);
        prop_assert!(check_lines(&lines, lookup).is_ok());

        lines[0].currency = Some(COMPANY_CURRENCY);
        prop_assert!(check_lines(&lines, lookup).is_err());
    }
}
