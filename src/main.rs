mod config;
mod context;
mod domain;
mod error;
mod infra;
mod observability;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;
use crate::infra::log_only::LogOnlyMailer;
use crate::infra::ses::SesMailer;
use crate::observability::LogFormat;
use crate::services::MailerService;

/// Emails every assignee a summary of their in-progress and in-review Jira
/// tickets. Configuration is read from the environment.
#[derive(Parser)]
#[command(name = "jira-reminder", version)]
struct Cli {
    /// Render every reminder but log it instead of sending.
    #[arg(long)]
    dry_run: bool,

    /// Log output format: pretty or json.
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    observability::init_tracing(cli.log_format);

    if let Err(error) = run(cli.dry_run).await {
        tracing::error!(%error, "reminder run failed");
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(dry_run: bool) -> AppResult<()> {
    let config = AppConfig::from_env()?;

    let issue_tracker = Arc::new(JiraClient::new(
        config.jira_base_url.clone(),
        config.jira_username.clone(),
        config.jira_password.clone(),
    ));
    let mailer: Arc<dyn MailerService> = if dry_run {
        Arc::new(LogOnlyMailer)
    } else {
        Arc::new(SesMailer::from_region(&config.ses_region).await)
    };

    tracing::info!(jira = %config.jira_base_url, dry_run, "starting reminder run");

    let context = AppContext::new(config, issue_tracker, mailer);
    let summary = workflow::reminder::run_reminders(&context).await?;

    for receipt in &summary.receipts {
        tracing::debug!(
            recipient = %receipt.recipient,
            message_id = %receipt.message_id,
            "delivery receipt"
        );
    }
    tracing::info!(
        tickets = summary.tickets,
        reminders = summary.receipts.len(),
        "reminder run finished"
    );

    Ok(())
}
