use crate::context::AppContext;
use crate::domain::issue::{DEFAULT_PAGE_SIZE, OPEN_ASSIGNED_JQL};
use crate::domain::notification::{EmailMessage, NotificationContent, ReminderRenderer};
use crate::error::AppResult;
use crate::services::MailerService;
use crate::workflow::fetch::collect_assignments;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub recipient: String,
    pub message_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tickets: usize,
    pub receipts: Vec<DispatchReceipt>,
}

/// Fetches every open assignment, then sends one reminder per assignee.
///
/// Sends happen only after the fetch has fully succeeded. The first rejected
/// send stops the run; recipients after it are not attempted.
pub async fn run_reminders(ctx: &AppContext) -> AppResult<RunSummary> {
    let renderer = ReminderRenderer::new(ctx.config.browse_url())?;
    let assignments =
        collect_assignments(ctx.issue_tracker.as_ref(), OPEN_ASSIGNED_JQL, DEFAULT_PAGE_SIZE)
            .await?;

    let sender = ctx.config.sender_identity();
    let mut summary = RunSummary {
        tickets: assignments.ticket_count(),
        receipts: Vec::with_capacity(assignments.recipient_count()),
    };

    for (recipient, tickets) in &assignments {
        let content = renderer.render(tickets)?;
        let receipt =
            dispatch_reminder(ctx.mailer.as_ref(), recipient, &sender, content).await?;
        summary.receipts.push(receipt);
    }

    Ok(summary)
}

pub async fn dispatch_reminder(
    mailer: &dyn MailerService,
    recipient: &str,
    sender: &str,
    content: NotificationContent,
) -> AppResult<DispatchReceipt> {
    let message = EmailMessage::reminder(recipient, sender, content);

    match mailer.send_email(&message).await {
        Ok(message_id) => {
            tracing::info!(%recipient, %message_id, "reminder sent");
            Ok(DispatchReceipt {
                recipient: recipient.to_string(),
                message_id,
            })
        }
        Err(err) => {
            tracing::error!(%recipient, error = %err, "reminder rejected");
            Err(err)
        }
    }
}
