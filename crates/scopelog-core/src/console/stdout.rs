//! Standard output console implementation

use std::io::Write;

use super::traits::Console;

/// A console that writes to the process stdout/stderr
///
/// Write failures are ignored: console output is best-effort and never a
/// failure path of the logger itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Create a new stdout console
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn out_line(&self, message: &str) {
        println!("{message}");
    }

    fn err_line(&self, message: &str) {
        eprintln!("{message}");
    }

    fn write(&self, chunk: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(chunk.as_bytes());
        let _ = out.flush();
    }
}
