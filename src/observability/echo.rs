//! Stdout echo of serialized reports.
//!
//! Separate from logging on purpose: echoed reports are program output
//! meant for pipelines, logs are diagnostics. Echoing goes to stdout
//! unfiltered while tracing writes to its own layer.

/// Writes serialized reports to stdout when enabled.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleEcho {
    enabled: bool,
}

impl ConsoleEcho {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Print one report line, or nothing when echoing is off.
    pub fn write_line(&self, line: &str) {
        if self.enabled {
            println!("{line}");
        }
    }
}
