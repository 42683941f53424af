pub mod fetch;
pub mod reminder;
