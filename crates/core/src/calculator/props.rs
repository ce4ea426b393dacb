//! Property-based tests for the tax schedule.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::FinancialCalculator;
use super::tax::bracket_for;

/// Strategy for amounts between -50,000.00 and 500,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-5_000_000i64..50_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Only the difference between income and deductions matters.
    #[test]
    fn prop_tax_depends_only_on_taxable_income(
        income in amount_strategy(),
        deductions in amount_strategy(),
    ) {
        let calc = FinancialCalculator::new();
        prop_assert_eq!(
            calc.calculate_tax(income, deductions),
            calc.calculate_tax(income - deductions, Decimal::ZERO)
        );
    }

    /// More taxable income never lowers the tax owed.
    #[test]
    fn prop_tax_is_monotonic(a in amount_strategy(), b in amount_strategy()) {
        let calc = FinancialCalculator::new();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calc.calculate_tax(low, Decimal::ZERO) <= calc.calculate_tax(high, Decimal::ZERO));
    }

    /// Moving one cent within a bracket changes the tax by exactly that bracket's rate.
    #[test]
    fn prop_marginal_rate_matches_bracket(taxable in amount_strategy()) {
        let calc = FinancialCalculator::new();
        let next = taxable + dec!(0.01);
        prop_assume!(bracket_for(taxable) == bracket_for(next));

        let delta = calc.calculate_tax(next, Decimal::ZERO) - calc.calculate_tax(taxable, Decimal::ZERO);
        prop_assert_eq!(delta, dec!(0.01) * bracket_for(next).rate);
    }

    /// Positive taxable income is never taxed above the top marginal rate.
    #[test]
    fn prop_effective_rate_bounded(taxable in 1i64..50_000_000i64) {
        let calc = FinancialCalculator::new();
        let taxable = Decimal::new(taxable, 2);
        let tax = calc.calculate_tax(taxable, Decimal::ZERO);
        prop_assert!(tax >= Decimal::ZERO);
        prop_assert!(tax <= taxable * dec!(0.30));
    }
}
