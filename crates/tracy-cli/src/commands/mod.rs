pub mod customer;
pub mod dashboard;
pub mod debug;
pub mod dispatch;
pub mod hours;
pub mod init;
pub mod project;
pub mod report;
