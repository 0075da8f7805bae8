use std::io::Write;

use engine_logging::{engine_error, engine_warn};
use wpharvest_core::ProgressEvent;
use wpharvest_engine::ProgressSink;

/// Reports progress on stderr so stdout carries only the final result.
///
/// Warnings and errors go through the logger, which prints them at the
/// default level and copies them to `--log-file`. Everything else is a plain
/// status line, hidden by `--quiet`.
pub struct TerminalProgress {
    quiet: bool,
}

impl TerminalProgress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn status_line(&self, event: &ProgressEvent) -> Option<String> {
        match event {
            ProgressEvent::Warning(_) | ProgressEvent::Error(_) => None,
            _ if self.quiet => None,
            _ => Some(event.to_string()),
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn emit(&self, event: ProgressEvent) {
        match &event {
            ProgressEvent::Warning(message) => engine_warn!("{}", message),
            ProgressEvent::Error(message) => engine_error!("{}", message),
            _ => {}
        }
        if let Some(line) = self.status_line(&event) {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }
}
