use async_trait::async_trait;

use crate::domain::notification::EmailMessage;
use crate::error::AppResult;

#[async_trait]
pub trait MailerService: Send + Sync {
    /// Sends one message and returns the delivery identifier.
    async fn send_email(&self, message: &EmailMessage) -> AppResult<String>;
}
