use common::EnhancerConfig;
use log::Level;
use web_sys::window;

const LOG_LEVEL_KEY: &str = "stockroom_log_level";

/// Global page settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Log level handed to `wasm-logger`
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Low-stock pass tunables, always the fixed defaults in the browser
    pub enhancer: EnhancerConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            enhancer: EnhancerConfig::default(),
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = is_local_host(&hostname);
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
            }
        }

        settings
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at module start)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
