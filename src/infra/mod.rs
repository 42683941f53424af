pub mod jira;
pub mod log_only;
pub mod ses;
