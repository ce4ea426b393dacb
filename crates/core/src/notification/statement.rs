//! Statement rendering.

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use tally_shared::email::OutgoingMail;

use crate::ledger::PeriodAggregate;

/// Subject line of every monthly statement.
pub const STATEMENT_SUBJECT: &str = "Monthly Financial Statement";

/// Renders an amount as dollars with two decimal places, e.g. `$1234.50`.
///
/// Midpoints round away from zero.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Builds the statement message for one recipient.
///
/// One line per aggregate, in the order given.
#[must_use]
pub fn render_statement(email: &str, balance: Decimal, report: &[PeriodAggregate]) -> OutgoingMail {
    let mut body = format!("Your current balance: {}\n\n", format_money(balance));
    body.push_str("Transactions this month:\n");

    for row in report {
        // Writing to a String cannot fail
        let _ = writeln!(
            body,
            "- {}: {} transactions, total: {}",
            row.kind,
            row.count,
            format_money(row.total)
        );
    }

    OutgoingMail {
        to: email.to_string(),
        subject: STATEMENT_SUBJECT.to_string(),
        body,
    }
}
