use std::env;

use crate::error::{AppError, AppResult};

const DEFAULT_SES_REGION: &str = "us-east-1";
const SENDER_DISPLAY_NAME: &str = "Jira Reminder";

/// Settings read once at process start and handed to every component that
/// needs them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira_base_url: String,
    pub jira_username: String,
    pub jira_password: String,
    pub sender_address: String,
    pub ses_region: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |name: &str| {
            read(name).ok_or_else(|| AppError::Configuration(format!("{name} is not set")))
        };

        let jira_base_url = match read("JIRA_BASE_URL") {
            Some(url) => url,
            None => {
                let prefix = require("COMPANY_JIRA_PREFIX")?;
                format!("https://{prefix}.atlassian.net")
            }
        };

        Ok(Self {
            jira_base_url: jira_base_url.trim_end_matches('/').to_string(),
            jira_username: require("JIRA_USERNAME")?,
            jira_password: require("JIRA_PASSWORD")?,
            sender_address: require("SENDER_EMAIL_ADDRESS")?,
            ses_region: read("SES_REGION").unwrap_or_else(|| DEFAULT_SES_REGION.to_string()),
        })
    }

    /// Prefix that turns a ticket key into a link, e.g. `.../browse/PROJ-1`.
    pub fn browse_url(&self) -> String {
        format!("{}/browse/", self.jira_base_url)
    }

    pub fn sender_identity(&self) -> String {
        format!("{SENDER_DISPLAY_NAME} <{}>", self.sender_address)
    }
}
