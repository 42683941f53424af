pub mod issue_tracker;
pub mod mailer;

pub use issue_tracker::IssueTrackerService;
pub use mailer::MailerService;
