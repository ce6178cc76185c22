//! Runtime environment detection abstractions

mod traits;
mod system;
mod fixed;

pub use traits::{Environment, SharedEnvironment};
pub use system::SystemEnvironment;
pub use fixed::StaticEnvironment;
