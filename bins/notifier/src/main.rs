//! Tally statement notifier.
//!
//! Sends the monthly financial statement to each user given on the command
//! line.
//!
//! Usage:
//!   tally-notifier [--month M --year Y] <user-id>...
//!
//! Without `--month`/`--year` the current UTC month is used.

use std::sync::Arc;

use anyhow::{Context, bail};
use tally_core::FinancialService;
use tally_core::ledger::MonthPeriod;
use tally_db::{TransactionRepository, UserRepository, connect_with};
use tally_shared::types::UserId;
use tally_shared::{AppConfig, AppError, SmtpMailer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    period: Option<MonthPeriod>,
    users: Vec<UserId>,
}

fn parse_args<I>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut month = None;
    let mut year = None;
    let mut users = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--month" => {
                let value = args.next().context("--month needs a value")?;
                let value: u32 = value.parse().context("--month must be a number")?;
                if !(1..=12).contains(&value) {
                    bail!("--month must be between 1 and 12");
                }
                month = Some(value);
            }
            "--year" => {
                let value = args.next().context("--year needs a value")?;
                year = Some(value.parse::<i32>().context("--year must be a number")?);
            }
            id => users.push(
                id.parse::<UserId>()
                    .with_context(|| format!("invalid user id: {id}"))?,
            ),
        }
    }

    let period = match (month, year) {
        (Some(month), Some(year)) => Some(MonthPeriod::new(month, year)),
        (None, None) => None,
        _ => bail!("--month and --year must be given together"),
    };

    if users.is_empty() {
        bail!("usage: tally-notifier [--month M --year Y] <user-id>...");
    }

    Ok(Args { period, users })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = AppConfig::load().map_err(AppError::from)?;

    let db = connect_with(&config.database).await?;

    let mailer = SmtpMailer::new(config.email.clone());
    mailer.check_connection().await.map_err(AppError::from)?;
    info!(
        smtp_host = %config.email.smtp_host,
        smtp_port = %config.email.smtp_port,
        "Email transport reachable"
    );

    let service = FinancialService::new(
        Arc::new(TransactionRepository::new(db.clone())),
        Arc::new(UserRepository::new(db)),
        Arc::new(mailer),
    );

    let period = args.period.unwrap_or_else(MonthPeriod::current);
    let mut failures = 0usize;

    for user_id in &args.users {
        if let Err(e) = service
            .send_statement_for_period(*user_id, period.month, period.year)
            .await
        {
            failures += 1;
            error!(user_id = %user_id, error = %e, code = e.error_code(), "Statement failed");
        }
    }

    info!(
        users = args.users.len(),
        failures,
        month = period.month,
        year = period.year,
        "Statement run finished"
    );

    if failures > 0 {
        bail!("{failures} statement(s) failed");
    }
    Ok(())
}
