use serde::Deserialize;

use crate::domain::ticket::{RemainingHours, TicketRecord};
use crate::error::{AppError, AppResult};

/// Issues still being worked on by somebody.
pub const OPEN_ASSIGNED_JQL: &str =
    r#"status in ("IN PROGRESS", "CODE REVIEW") AND assignee != Unassigned"#;

pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub jql: String,
    pub start_at: usize,
    pub max_results: usize,
}

impl SearchRequest {
    pub fn new(jql: impl Into<String>, start_at: usize, max_results: usize) -> Self {
        Self {
            jql: jql.into(),
            start_at,
            max_results,
        }
    }
}

/// One page of search results. `start_at` echoes the requested offset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub start_at: usize,
    pub total: usize,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// Issue payload as returned by the tracker. Every field is optional here so
/// that gaps surface as [`AppError::MalformedRecord`] instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIssue {
    pub key: Option<String>,
    #[serde(default)]
    pub fields: RawFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    pub summary: Option<String>,
    pub status: Option<RawStatus>,
    pub timeestimate: Option<f64>,
    pub assignee: Option<RawUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStatus {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub email_address: Option<String>,
}

/// A normalized ticket together with the address it should be reported to.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub assignee: String,
    pub ticket: TicketRecord,
}

impl RawIssue {
    /// `offset` is the issue's position in the overall result set; it names
    /// the issue in errors when the key itself is missing.
    pub fn normalize(self, offset: usize) -> AppResult<Assignment> {
        let key = self.key.filter(|key| !key.is_empty()).ok_or_else(|| {
            AppError::MalformedRecord {
                issue: format!("at offset {offset}"),
                field: "key",
            }
        })?;
        let missing = |field: &'static str| AppError::MalformedRecord {
            issue: key.clone(),
            field,
        };

        let fields = self.fields;
        let summary = fields.summary.ok_or_else(|| missing("summary"))?;
        let status = fields
            .status
            .and_then(|status| status.name)
            .ok_or_else(|| missing("status"))?;
        let assignee = fields
            .assignee
            .and_then(|user| user.email_address)
            .filter(|email| !email.is_empty())
            .ok_or_else(|| missing("assignee email"))?;

        Ok(Assignment {
            assignee,
            ticket: TicketRecord {
                key,
                summary,
                status,
                remaining_hours: RemainingHours::from_seconds(fields.timeestimate),
            },
        })
    }
}
