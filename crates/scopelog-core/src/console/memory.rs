//! In-memory console implementation

use parking_lot::Mutex;

use super::traits::Console;

/// A single captured console emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEntry {
    /// Full line written to standard output
    OutLine(String),
    /// Full line written to the error channel
    ErrLine(String),
    /// Raw chunk written without a trailing newline
    Raw(String),
}

/// In-memory console for testing
///
/// Captures every emission in order so tests can assert on exact output.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    entries: Mutex<Vec<ConsoleEntry>>,
}

impl MemoryConsole {
    /// Create a new empty memory console
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured emissions in write order
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.lock().clone()
    }

    /// Lines written to standard output, in order
    pub fn out_lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                ConsoleEntry::OutLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Lines written to the error channel, in order
    pub fn err_lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                ConsoleEntry::ErrLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Raw chunks written without a trailing newline, in order
    pub fn raw_writes(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                ConsoleEntry::Raw(chunk) => Some(chunk.clone()),
                _ => None,
            })
            .collect()
    }

    /// Discard all captured emissions
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn out_line(&self, message: &str) {
        self.entries
            .lock()
            .push(ConsoleEntry::OutLine(message.to_string()));
    }

    fn err_line(&self, message: &str) {
        self.entries
            .lock()
            .push(ConsoleEntry::ErrLine(message.to_string()));
    }

    fn write(&self, chunk: &str) {
        self.entries
            .lock()
            .push(ConsoleEntry::Raw(chunk.to_string()));
    }
}
