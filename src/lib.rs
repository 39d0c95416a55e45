use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Install the panic hook, the console logger and the browser clock.
/// Mounting is left to the host page via `mountDashboard`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_document() {
        Ok(config) => (config, None),
        Err(error) => (config::AppConfig::default(), Some(error)),
    };
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    if let Some(error) = config_error {
        get_logger().warn(LogComponent::Presentation("Initialize"), &format!("ignoring page config: {}", error));
    }
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("Token watchlist ready, token list at {}", config.token_list_url),
    );
}
