use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{IssueTrackerService, MailerService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub mailer: Arc<dyn MailerService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        issue_tracker: Arc<dyn IssueTrackerService>,
        mailer: Arc<dyn MailerService>,
    ) -> Self {
        Self {
            config,
            issue_tracker,
            mailer,
        }
    }
}
