//! Environment trait definition

use std::sync::Arc;

/// Runtime environment probes consumed by the progress indicator
///
/// Implementations:
/// - `SystemEnvironment`: Probes the real process and terminal
/// - `StaticEnvironment`: Fixed answers for deterministic tests
///
/// The two booleans together select the progress strategy; see
/// [`ScopedLogger::loading`](crate::ScopedLogger::loading).
pub trait Environment: Send + Sync {
    /// Whether the runtime is a server-side, process-like environment
    ///
    /// A browser-like runtime answers false and gets timed progress output
    /// instead of terminal line overwrites.
    fn is_process_runtime(&self) -> bool;

    /// Whether standard output is an interactive terminal
    ///
    /// An interactive terminal supports carriage-return line overwrites.
    fn is_interactive_terminal(&self) -> bool;
}

/// Type alias for an Arc-wrapped environment
pub type SharedEnvironment = Arc<dyn Environment>;
