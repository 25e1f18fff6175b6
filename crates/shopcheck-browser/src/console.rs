//! Console error capture over the CDP Log domain
//!
//! The observer is attached when the session is created, before any
//! navigation, so errors emitted during the initial page load are captured
//! too. Entries accumulate in a bounded, ordered buffer owned by the session
//! and are discarded with it.

use headless_chrome::protocol::cdp::types::Event;
use headless_chrome::protocol::cdp::Log::LogEntryLevel;
use headless_chrome::Tab;
use serde::{Deserialize, Serialize};
use shopcheck_core::{CheckError, Result};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Cap on captured entries; a page stuck in an error loop must not grow the
/// buffer without bound during a long wait.
pub const MAX_CONSOLE_ENTRIES: usize = 256;

/// One captured console message of severity error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleEntry {
    /// CDP log source (javascript, network, ...)
    pub source: String,
    /// Message text
    pub text: String,
}

/// Register the error observer on a tab, appending into `buffer`
pub(crate) fn attach(tab: &Arc<Tab>, buffer: Arc<Mutex<Vec<ConsoleEntry>>>) -> Result<()> {
    tab.enable_log()
        .map_err(|e| CheckError::Browser(format!("Failed to enable log domain: {}", e)))?;

    tab.add_event_listener(Arc::new(move |event: &Event| {
        if let Event::LogEntryAdded(added) = event {
            let entry = &added.params.entry;
            if matches!(entry.level, LogEntryLevel::Error) {
                debug!("Console error captured: {}", entry.text);
                push_bounded(
                    &buffer,
                    ConsoleEntry {
                        source: format!("{:?}", entry.source).to_lowercase(),
                        text: entry.text.clone(),
                    },
                );
            }
        }
    }))
    .map_err(|e| CheckError::Browser(format!("Failed to register console observer: {}", e)))?;

    Ok(())
}

fn push_bounded(buffer: &Mutex<Vec<ConsoleEntry>>, entry: ConsoleEntry) {
    if let Ok(mut buf) = buffer.lock() {
        if buf.len() < MAX_CONSOLE_ENTRIES {
            buf.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> ConsoleEntry {
        ConsoleEntry {
            source: "javascript".to_string(),
            text: format!("error {}", n),
        }
    }

    #[test]
    fn test_push_bounded_preserves_order() {
        let buffer = Mutex::new(Vec::new());
        for n in 0..5 {
            push_bounded(&buffer, entry(n));
        }
        let buf = buffer.lock().unwrap();
        assert_eq!(buf.len(), 5);
        assert_eq!(buf[0].text, "error 0");
        assert_eq!(buf[4].text, "error 4");
    }

    #[test]
    fn test_push_bounded_caps_at_limit() {
        let buffer = Mutex::new(Vec::new());
        for n in 0..(MAX_CONSOLE_ENTRIES + 10) {
            push_bounded(&buffer, entry(n));
        }
        let buf = buffer.lock().unwrap();
        assert_eq!(buf.len(), MAX_CONSOLE_ENTRIES);
        // Oldest entries win; overflow is dropped, not rotated
        assert_eq!(buf[0].text, "error 0");
    }

    #[test]
    fn test_console_entry_serialization() {
        let json = serde_json::to_value(entry(1)).unwrap();
        assert_eq!(json["source"], "javascript");
        assert_eq!(json["text"], "error 1");
    }
}
