//! Monthly statement notification.

pub mod service;
pub mod statement;

#[cfg(test)]
pub(crate) mod testing;

pub use service::EmailService;
pub use statement::{STATEMENT_SUBJECT, format_money, render_statement};
