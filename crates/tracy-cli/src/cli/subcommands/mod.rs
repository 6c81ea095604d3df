mod customer;
mod hours;
mod project;

pub use customer::CustomerCommands;
pub use hours::HoursCommands;
pub use project::ProjectCommands;
