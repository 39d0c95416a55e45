use std::sync::Mutex;

use token_watchlist_wasm::application::{CatalogUpdate, TokenCatalog};
use token_watchlist_wasm::domain::errors::NetworkError;
use token_watchlist_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use wasm_bindgen_test::*;

static ENTRIES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut entries) = ENTRIES.lock() {
            entries.push((entry.level, format!("{} {}", entry.component, entry.message)));
        }
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn failed_fetch_is_logged_as_warning() {
    init_logger(Box::new(CapturingLogger));

    let mut catalog = TokenCatalog::new();
    let ticket = catalog.begin_refresh();
    let update = catalog.apply(ticket, Err(NetworkError::HttpStatus { status: 503, text: "down".into() }.into()));
    assert_eq!(update, CatalogUpdate::Retained);

    let entries = ENTRIES.lock().unwrap();
    let warning = entries.iter().find(|(level, _)| *level == LogLevel::Warn).expect("warning logged");
    assert!(warning.1.contains("APP:TokenCatalog"));
    assert!(warning.1.contains("HTTP status 503"));
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test(async)]
async fn unreachable_endpoint_keeps_empty_catalog() {
    let catalog = std::cell::RefCell::new(TokenCatalog::new());
    let client = token_watchlist_wasm::infrastructure::TokenListHttpClient::new("http://127.0.0.1:9/token/list");
    let update = TokenCatalog::refresh(&catalog, &client).await;
    assert_eq!(update, CatalogUpdate::Retained);
    assert!(catalog.borrow().tokens().is_empty());
}
