//! Scoped logger implementation

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::loading;
use crate::clock::{Clock, MonotonicClock};
use crate::console::{Console, StdoutConsole};
use crate::environment::{Environment, SystemEnvironment};

/// Options for creating a logger
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Label prefixed to every line this logger emits
    pub scope: String,
}

impl LoggerOptions {
    /// Create options with the given scope label
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }
}

/// A logger bound to one scope label
///
/// Every line carries an emoji level marker and the bracketed scope.
/// Debug output is gated by a flag toggled through [`set_debug`]; the
/// [`loading`] helper shows progress for one asynchronous operation.
///
/// The console, environment, and clock are injected capabilities, so the
/// logger can be driven deterministically in tests without touching global
/// process state.
///
/// [`set_debug`]: ScopedLogger::set_debug
/// [`loading`]: ScopedLogger::loading
pub struct ScopedLogger {
    prefix: String,
    debug_enabled: AtomicBool,
    console: Arc<dyn Console>,
    environment: Arc<dyn Environment>,
    clock: Arc<dyn Clock>,
}

impl ScopedLogger {
    /// Create a logger bound to the real console, environment, and clock
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_capabilities(
            options,
            Arc::new(StdoutConsole::new()),
            Arc::new(SystemEnvironment::new()),
            MonotonicClock::shared(),
        )
    }

    /// Create a logger with explicit capabilities
    pub fn with_capabilities(
        options: LoggerOptions,
        console: Arc<dyn Console>,
        environment: Arc<dyn Environment>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            prefix: format!("[{}]", options.scope),
            debug_enabled: AtomicBool::new(false),
            console,
            environment,
            clock,
        }
    }

    /// Whether debug messages are currently emitted
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::SeqCst)
    }

    /// Enable or disable debug messages
    ///
    /// Announces the new state through `info` before storing it. The
    /// announcement fires on every call, including calls that restate the
    /// current value.
    pub fn set_debug(&self, enabled: bool) {
        self.info(if enabled {
            "Debug is enabled"
        } else {
            "Debug is disabled"
        });
        self.debug_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Log a debug message, if debug is enabled
    pub fn debug(&self, message: &str) {
        if self.debug_enabled() {
            self.console
                .out_line(&format!("⚪ {}: {message}", self.prefix));
        }
    }

    /// Log an informative message
    pub fn info(&self, message: &str) {
        self.console
            .out_line(&format!("🔵 {}: {message}", self.prefix));
    }

    /// Log a success
    pub fn success(&self, message: &str) {
        self.console
            .out_line(&format!("🟢 {}: {message}", self.prefix));
    }

    /// Log a warning message
    pub fn warn(&self, message: &str) {
        self.console
            .out_line(&format!("🟡 {}: {message}", self.prefix));
    }

    /// Log an error message
    ///
    /// Errors share the standard log channel with the other levels; only
    /// the marker distinguishes them.
    pub fn error(&self, message: &str) {
        self.console
            .out_line(&format!("🔴 {}: {message}", self.prefix));
    }

    /// Show a progress indicator while `operation` is in flight
    ///
    /// Drives the operation to settlement, emits progress output for it,
    /// and returns its result unaltered: a failure is forwarded verbatim,
    /// never masked or wrapped.
    ///
    /// The output strategy is chosen once per call from the environment
    /// probes: a browser-like runtime gets the label with elapsed
    /// milliseconds at settlement, piped output gets a plain one-line
    /// status, and an interactive terminal gets the whale animation.
    pub async fn loading<T, E, F>(&self, label: &str, operation: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        if !self.environment.is_process_runtime() {
            return loading::run_timed(
                self.console.as_ref(),
                self.clock.as_ref(),
                &self.prefix,
                label,
                operation,
            )
            .await;
        }
        if self.environment.is_interactive_terminal() {
            loading::run_animated(self.console.as_ref(), &self.prefix, label, operation).await
        } else {
            loading::run_plain(self.console.as_ref(), label, operation).await
        }
    }
}

impl std::fmt::Debug for ScopedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedLogger")
            .field("prefix", &self.prefix)
            .field("debug_enabled", &self.debug_enabled())
            .finish()
    }
}
