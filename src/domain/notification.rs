use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::ticket::TicketRecord;
use crate::error::{AppError, AppResult};

pub const REMINDER_SUBJECT: &str = "Please update your Jira tickets";
pub const CHARSET: &str = "UTF-8";

const INTRO: &str = "The following tickets are open or in code review. \
Please ensure their status and remaining hours are up to date.";
const COLUMNS: [&str; 4] = ["Ticket Number", "Status", "Time Remaining", "Description"];
const TEXT_SEPARATOR: &str = "     ";

const HTML_TEMPLATE: &str = "reminder.html";
const TEXT_TEMPLATE: &str = "reminder.txt";

/// The two bodies of one reminder. Both list the same tickets in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub html_body: String,
    pub text_body: String,
}

/// Renders reminder bodies from the embedded templates. The `.html` template
/// is autoescaped by tera; the `.txt` one is not.
pub struct ReminderRenderer {
    engine: Tera,
    browse_url: String,
}

#[derive(Serialize)]
struct TicketRow<'a> {
    key: &'a str,
    status: &'a str,
    hours: String,
    summary: &'a str,
}

impl ReminderRenderer {
    /// `browse_url` is the prefix a ticket key is appended to for its link.
    pub fn new(browse_url: impl Into<String>) -> AppResult<Self> {
        let mut engine = Tera::default();
        engine
            .add_raw_templates(vec![
                (HTML_TEMPLATE, include_str!("../../templates/reminder.html")),
                (TEXT_TEMPLATE, include_str!("../../templates/reminder.txt")),
            ])
            .map_err(|err| AppError::TemplateFailed(err.to_string()))?;

        Ok(Self {
            engine,
            browse_url: browse_url.into(),
        })
    }

    pub fn render(&self, tickets: &[TicketRecord]) -> AppResult<NotificationContent> {
        let context = self.context(tickets);
        let render = |name: &str| {
            self.engine
                .render(name, &context)
                .map_err(|err| AppError::TemplateFailed(err.to_string()))
        };

        Ok(NotificationContent {
            html_body: render(HTML_TEMPLATE)?,
            text_body: render(TEXT_TEMPLATE)?,
        })
    }

    fn context(&self, tickets: &[TicketRecord]) -> Context {
        let rows: Vec<TicketRow<'_>> = tickets
            .iter()
            .map(|ticket| TicketRow {
                key: &ticket.key,
                status: &ticket.status,
                hours: ticket.remaining_hours.to_string(),
                summary: &ticket.summary,
            })
            .collect();

        let mut context = Context::new();
        context.insert("intro", INTRO);
        context.insert("columns", &COLUMNS);
        context.insert("separator", TEXT_SEPARATOR);
        context.insert("browse_url", &self.browse_url);
        context.insert("tickets", &rows);
        context
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl EmailMessage {
    pub fn reminder(to: &str, from: &str, content: NotificationContent) -> Self {
        Self {
            to: to.to_string(),
            from: from.to_string(),
            subject: REMINDER_SUBJECT.to_string(),
            html_body: content.html_body,
            text_body: content.text_body,
        }
    }
}
