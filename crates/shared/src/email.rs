//! Outgoing mail transport.
//!
//! [`MailTransport`] is the seam the statement service hands finished messages
//! to. [`SmtpMailer`] is the production transport and uses `lettre` for SMTP.

use std::future::Future;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::debug;

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// A fully formatted message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Destination address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Delivers formatted messages.
///
/// Implementations own their retry and failure handling; callers only learn
/// whether the hand-off succeeded.
pub trait MailTransport: Send + Sync {
    /// Attempts delivery of one message.
    fn send(&self, mail: OutgoingMail) -> impl Future<Output = Result<(), EmailError>> + Send;
}

/// SMTP mail transport.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    /// Creates a new SMTP mailer.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an SMTP transport.
    ///
    /// Without a username the relay is treated as a local, unauthenticated
    /// mail catcher and no TLS is negotiated.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        if self.config.smtp_username.is_empty() {
            return Ok(
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.smtp_host)
                    .port(self.config.smtp_port)
                    .build(),
            );
        }

        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        Ok(AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build())
    }

    /// Opens a connection to the relay and checks that it answers.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::SendError` if the relay is unreachable.
    pub async fn check_connection(&self) -> Result<(), EmailError> {
        let reachable = self
            .create_transport()?
            .test_connection()
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        if reachable {
            Ok(())
        } else {
            Err(EmailError::SendError(format!(
                "relay {}:{} did not answer",
                self.config.smtp_host, self.config.smtp_port
            )))
        }
    }

    /// Builds the `lettre` message for an outgoing mail.
    fn build_message(&self, mail: &OutgoingMail) -> Result<Message, EmailError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .to(mail
                .to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| EmailError::BuildError(e.to_string()))
    }
}

impl MailTransport for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), EmailError> {
        let message = self.build_message(&mail)?;
        let transport = self.create_transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        debug!(to = %mail.to, subject = %mail.subject, "Mail handed to SMTP relay");
        Ok(())
    }
}
