use std::sync::Mutex;

use token_watchlist_wasm::domain::logging::{
    LogComponent, LogEntry, LogLevel, Logger, TimeProvider, get_logger, init_logger,
};
use token_watchlist_wasm::{log_debug, log_warn};
use wasm_bindgen_test::*;

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct FixedClock;

impl TimeProvider for FixedClock {
    fn current_timestamp(&self) -> u64 {
        42
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("t{timestamp}")
    }
}

struct WarnOnlyLogger;

impl Logger for WarnOnlyLogger {
    fn threshold(&self) -> LogLevel {
        LogLevel::Warn
    }

    fn log(&self, entry: LogEntry) {
        if let Ok(mut lines) = LINES.lock() {
            lines.push(entry.line(&FixedClock));
        }
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn entry_line_carries_level_component_and_message() {
    let entry = LogEntry {
        timestamp: 7,
        level: LogLevel::Warn,
        component: LogComponent::Application("TokenCatalog"),
        message: "token list fetch failed".to_string(),
    };
    assert_eq!(entry.line(&FixedClock), "[t7]  WARN APP:TokenCatalog | token list fetch failed");
}

#[wasm_bindgen_test(unsupported = test)]
fn entries_below_the_threshold_are_dropped() {
    init_logger(Box::new(WarnOnlyLogger));
    assert!(!get_logger().enabled(LogLevel::Info));
    assert!(get_logger().enabled(LogLevel::Error));

    log_debug!(LogComponent::Domain("Windower"), "deferring {}", 1);
    get_logger().info(LogComponent::Presentation("App"), "Loaded 3 tokens");
    log_warn!(LogComponent::Presentation("Config"), "ignoring page config: {}", "bad json");
    get_logger().error(LogComponent::Presentation("IndicatorCharts"), "no 2d context");

    let lines = LINES.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" WARN PRE:Config | ignoring page config: bad json"));
    assert!(lines[1].contains("ERROR PRE:IndicatorCharts | no 2d context"));
}

#[wasm_bindgen_test(unsupported = test)]
fn levels_parse_from_config_names() {
    let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
    assert_eq!(level, LogLevel::Debug);
    assert!(LogLevel::Trace < LogLevel::Error);
}
