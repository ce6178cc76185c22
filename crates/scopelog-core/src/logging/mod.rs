//! Scoped logging with leveled emoji markers and progress indication

mod logger;
mod loading;

pub use logger::{LoggerOptions, ScopedLogger};

/// Create a logger bound to the real console, environment, and clock
///
/// Equivalent to [`ScopedLogger::new`]; kept as the conventional entry
/// point for callers that only ever need the default capabilities.
pub fn create_logger(options: LoggerOptions) -> ScopedLogger {
    ScopedLogger::new(options)
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $($arg:tt)*) => {
        $logger.success(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}
