//! Fixed-answer environment implementation

use super::traits::Environment;

/// An environment with fixed answers, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct StaticEnvironment {
    process_runtime: bool,
    interactive_terminal: bool,
}

impl StaticEnvironment {
    /// Create an environment with explicit answers
    pub fn new(process_runtime: bool, interactive_terminal: bool) -> Self {
        Self {
            process_runtime,
            interactive_terminal,
        }
    }

    /// A process runtime attached to an interactive terminal
    pub fn terminal() -> Self {
        Self::new(true, true)
    }

    /// A process runtime with non-interactive output (piped or redirected)
    pub fn plain() -> Self {
        Self::new(true, false)
    }

    /// A browser-like runtime without a process or terminal
    pub fn browser() -> Self {
        Self::new(false, false)
    }
}

impl Environment for StaticEnvironment {
    fn is_process_runtime(&self) -> bool {
        self.process_runtime
    }

    fn is_interactive_terminal(&self) -> bool {
        self.interactive_terminal
    }
}
