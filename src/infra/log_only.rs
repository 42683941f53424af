use async_trait::async_trait;

use crate::domain::notification::EmailMessage;
use crate::error::AppResult;
use crate::services::MailerService;

/// Mailer used by `--dry-run`: logs what would be sent and sends nothing.
#[derive(Debug, Clone, Default)]
pub struct LogOnlyMailer;

#[async_trait]
impl MailerService for LogOnlyMailer {
    async fn send_email(&self, message: &EmailMessage) -> AppResult<String> {
        tracing::info!(
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            "dry run: skipping send"
        );
        tracing::debug!(text_body = %message.text_body, "dry run: reminder body");
        Ok(format!("dry-run:{}", message.to))
    }
}
