//! Statement dispatch.

use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::email::MailTransport;
use tracing::{info, warn};

use super::statement::render_statement;
use crate::ledger::PeriodAggregate;

/// Formats monthly statements and hands them to a mail transport.
#[derive(Debug)]
pub struct EmailService<M> {
    transport: Arc<M>,
}

impl<M> Clone for EmailService<M> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<M: MailTransport> EmailService<M> {
    /// Creates a service that delivers through `transport`.
    pub const fn new(transport: Arc<M>) -> Self {
        Self { transport }
    }

    /// Sends one statement.
    ///
    /// The transport is invoked exactly once. Delivery failures are logged
    /// and not returned.
    pub async fn send_monthly_statement(
        &self,
        email: &str,
        balance: Decimal,
        report: &[PeriodAggregate],
    ) {
        let mail = render_statement(email, balance, report);

        match self.transport.send(mail).await {
            Ok(()) => info!(to = %email, kinds = report.len(), "Monthly statement sent"),
            Err(e) => warn!(to = %email, error = %e, "Failed to send monthly statement"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::testing::RecordingTransport;
    use crate::notification::STATEMENT_SUBJECT;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_send_invokes_transport_once() {
        let transport = Arc::new(RecordingTransport::default());
        let service = EmailService::new(Arc::clone(&transport));

        service
            .send_monthly_statement("ada@example.com", dec!(10), &[])
            .await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].subject, STATEMENT_SUBJECT);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_propagated() {
        let transport = Arc::new(RecordingTransport::failing());
        let service = EmailService::new(Arc::clone(&transport));

        service
            .send_monthly_statement("ada@example.com", dec!(10), &[])
            .await;

        assert_eq!(transport.attempts(), 1);
        assert!(transport.sent().is_empty());
    }
}
