mod agent;
mod feedback;
pub mod intent;
mod sessions;
mod synthesizer;
mod users;

pub use agent::*;
pub use feedback::*;
pub use sessions::*;
pub use synthesizer::*;
pub use users::*;
