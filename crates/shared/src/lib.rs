//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - The outgoing mail transport seam and its SMTP implementation

pub mod config;
pub mod email;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, EmailConfig};
pub use email::{EmailError, MailTransport, OutgoingMail, SmtpMailer};
pub use error::AppError;
