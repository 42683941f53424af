use async_trait::async_trait;
use aws_sdk_sesv2::{
    Client,
    error::DisplayErrorContext,
    types::{Body, Content, Destination, EmailContent, Message},
};

use crate::domain::notification::{CHARSET, EmailMessage};
use crate::error::{AppError, AppResult};
use crate::services::MailerService;

/// Sends reminders through the SES v2 API. The sender address must be
/// verified in SES.
pub struct SesMailer {
    client: Client,
}

impl SesMailer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_sesv2::config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config))
    }
}

fn utf8_content(data: &str, part: &str, recipient: &str) -> AppResult<Content> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|err| AppError::Dispatch {
            recipient: recipient.to_string(),
            message: format!("failed to build {part}: {err}"),
        })
}

#[async_trait]
impl MailerService for SesMailer {
    async fn send_email(&self, message: &EmailMessage) -> AppResult<String> {
        let recipient = message.to.as_str();
        let destination = Destination::builder().to_addresses(recipient).build();

        let content = EmailContent::builder()
            .simple(
                Message::builder()
                    .subject(utf8_content(&message.subject, "subject", recipient)?)
                    .body(
                        Body::builder()
                            .html(utf8_content(&message.html_body, "HTML body", recipient)?)
                            .text(utf8_content(&message.text_body, "text body", recipient)?)
                            .build(),
                    )
                    .build(),
            )
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&message.from)
            .destination(destination)
            .content(content)
            .send()
            .await
            .map_err(|err| AppError::Dispatch {
                recipient: recipient.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SesMailer>();
    }

    #[test]
    fn content_carries_utf8_charset() {
        let content = utf8_content("Bitte aktualisieren – danke", "subject", "a@x.com").unwrap();
        assert_eq!(content.charset(), Some(CHARSET));
        assert_eq!(content.data(), "Bitte aktualisieren – danke");
    }
}
