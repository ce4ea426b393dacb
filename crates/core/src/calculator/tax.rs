//! Progressive income tax schedule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One bracket of the marginal tax schedule.
///
/// Only the portion of taxable income between the previous bracket's upper
/// bound and this bracket's upper bound is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    /// Inclusive upper bound; `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied inside this bracket.
    pub rate: Decimal,
}

/// The marginal schedule, lowest bracket first.
///
/// Boundary values belong to the lower bracket.
pub static TAX_SCHEDULE: [TaxBracket; 3] = [
    TaxBracket {
        upper_bound: Some(dec!(50000)),
        rate: dec!(0.10),
    },
    TaxBracket {
        upper_bound: Some(dec!(100000)),
        rate: dec!(0.20),
    },
    TaxBracket {
        upper_bound: None,
        rate: dec!(0.30),
    },
];

/// Returns the bracket a taxable amount falls in.
#[must_use]
pub fn bracket_for(taxable: Decimal) -> &'static TaxBracket {
    let top = &TAX_SCHEDULE[TAX_SCHEDULE.len() - 1];
    TAX_SCHEDULE
        .iter()
        .find(|bracket| bracket.upper_bound.is_some_and(|upper| taxable <= upper))
        .unwrap_or(top)
}

/// Applies the schedule to a taxable amount.
///
/// Negative taxable income falls in the lowest bracket and produces a
/// negative result; it is not clamped.
#[must_use]
pub fn apply_schedule(taxable: Decimal) -> Decimal {
    let mut lower = Decimal::ZERO;
    let mut base = Decimal::ZERO;

    for bracket in &TAX_SCHEDULE {
        match bracket.upper_bound {
            Some(upper) if taxable > upper => {
                base += (upper - lower) * bracket.rate;
                lower = upper;
            }
            _ => return base + (taxable - lower) * bracket.rate,
        }
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_is_ordered_with_open_top_bracket() {
        let bounds: Vec<_> = TAX_SCHEDULE.iter().map(|b| b.upper_bound).collect();
        assert_eq!(bounds, vec![Some(dec!(50000)), Some(dec!(100000)), None]);
    }

    #[test]
    fn test_bracket_for_boundaries_belong_to_lower_bracket() {
        assert_eq!(bracket_for(dec!(50000)).rate, dec!(0.10));
        assert_eq!(bracket_for(dec!(50000.01)).rate, dec!(0.20));
        assert_eq!(bracket_for(dec!(100000)).rate, dec!(0.20));
        assert_eq!(bracket_for(dec!(100000.01)).rate, dec!(0.30));
    }

    #[test]
    fn test_bracket_for_negative_is_lowest() {
        assert_eq!(bracket_for(dec!(-500)).rate, dec!(0.10));
    }

    #[test]
    fn test_apply_schedule_bases() {
        // Base tax at each bracket boundary
        assert_eq!(apply_schedule(dec!(50000)), dec!(5000));
        assert_eq!(apply_schedule(dec!(100000)), dec!(15000));
    }
}
