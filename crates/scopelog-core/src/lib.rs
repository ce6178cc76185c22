//! Scopelog Core
//!
//! Runtime-agnostic scoped console logging.
//! Every line carries an emoji level marker and a fixed scope label, and the
//! `loading` helper shows a progress indicator while an asynchronous
//! operation is in flight (a whale animation on an interactive terminal,
//! a plain status line when output is piped, elapsed milliseconds in
//! browser-like runtimes).
//!
//! The output sink, environment probes, and clock are injected capability
//! traits, so behavior is deterministic under test without faking global
//! process state.
//!
//! ```rust,ignore
//! use scopelog_core::{create_logger, LoggerOptions};
//!
//! let logger = create_logger(LoggerOptions::new("SYNC"));
//! logger.info("starting");
//!
//! let result = logger.loading("fetch data", fetch()).await?;
//!
//! logger.set_debug(true);
//! logger.debug("response parsed");
//! ```

pub mod console;
pub mod clock;
pub mod environment;
pub mod logging;

// Re-export commonly used types
pub use console::{Console, ConsoleEntry, MemoryConsole, StdoutConsole};

pub use clock::{Clock, ManualClock, MonotonicClock};

pub use environment::{Environment, StaticEnvironment, SystemEnvironment};

pub use logging::{create_logger, LoggerOptions, ScopedLogger};
