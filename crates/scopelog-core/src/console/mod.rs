//! Console sink abstractions for runtime-agnostic output

mod traits;
mod stdout;
mod memory;

pub use traits::{Console, SharedConsole};
pub use stdout::StdoutConsole;
pub use memory::{ConsoleEntry, MemoryConsole};
