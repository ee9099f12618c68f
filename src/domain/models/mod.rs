mod agent;
mod backend;
mod feedback;
mod lesson;
mod message;
mod session;
mod slash_commands;
mod tutorial;
mod user;

pub use agent::*;
pub use backend::*;
pub use feedback::*;
pub use lesson::*;
pub use message::*;
pub use session::*;
pub use slash_commands::*;
pub use tutorial::*;
pub use user::*;
