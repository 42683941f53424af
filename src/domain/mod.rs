pub mod assignment;
pub mod issue;
pub mod notification;
pub mod ticket;
