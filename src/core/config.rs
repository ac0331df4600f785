// src/core/config.rs
use std::env;

use log::LevelFilter;

pub const DEV_SESSION_SECRET: &str = "dev-secret-key-change-in-production";

// Configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,

    // Process-wide secret, initialized once at startup
    pub session_secret: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_address: "0.0.0.0".to_string(),
            web_port: 5000,
            default_password_length: 12,
            session_secret: DEV_SESSION_SECRET.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(secret) = env::var("SESSION_SECRET") {
            config.session_secret = secret;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using Info", level),
            }
        }

        config
    }
}
