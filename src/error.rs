use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("issue search failed: {0}")]
    UpstreamFetch(String),
    #[error("malformed issue {issue}: missing {field}")]
    MalformedRecord { issue: String, field: &'static str },
    #[error("failed to render reminder: {0}")]
    TemplateFailed(String),
    #[error("failed to send reminder to {recipient}: {message}")]
    Dispatch { recipient: String, message: String },
}

pub type AppResult<T> = Result<T, AppError>;
