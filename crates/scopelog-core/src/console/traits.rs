//! Console trait definition

use std::sync::Arc;

/// Output sink abstraction for runtime-agnostic console writes
///
/// Implementations:
/// - `StdoutConsole`: Writes to the real stdout/stderr
/// - `MemoryConsole`: Captures output for testing
pub trait Console: Send + Sync {
    /// Write a full line to standard output
    fn out_line(&self, message: &str);

    /// Write a full line to the error channel
    fn err_line(&self, message: &str);

    /// Write a raw chunk to standard output with no newline appended
    ///
    /// The chunk is flushed immediately; carriage-return line overwrites
    /// rely on this.
    fn write(&self, chunk: &str);
}

/// Type alias for an Arc-wrapped console
pub type SharedConsole = Arc<dyn Console>;
