//! System environment implementation

use std::io::IsTerminal;

use super::traits::Environment;

/// Environment probes backed by the real process and terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    /// Create a new system environment
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn is_process_runtime(&self) -> bool {
        // wasm32 builds run in browser-like hosts without a process or tty
        cfg!(not(target_arch = "wasm32"))
    }

    fn is_interactive_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_probes() {
        let env = SystemEnvironment::new();
        assert!(env.is_process_runtime());
        // Under the test harness stdout is captured, not a terminal
        let _ = env.is_interactive_terminal();
    }
}
