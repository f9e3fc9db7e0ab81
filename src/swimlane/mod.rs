//! Swimlane operations

mod add;
mod delete;
mod mv;
mod update;

pub use add::AddSwimlane;
pub use delete::DeleteSwimlane;
pub use mv::MoveSwimlane;
pub use update::UpdateSwimlane;
