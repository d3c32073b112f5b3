//! Configuration module for the NutriKids backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Default daily calorie target used for meal progress bars.
pub const DEFAULT_DAILY_CALORIES: f64 = 1000.0;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Food document on disk; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format (pretty or json)
    pub log_format: LogFormat,
    /// Default daily calorie target for meal summaries
    pub daily_calories: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let catalog_path = env::var("NUTRI_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let bind_addr = env::var("NUTRI_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid NUTRI_BIND_ADDR: {}", e)))?;

        let log_level = env::var("NUTRI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("NUTRI_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(other) => {
                return Err(AppError::Config(format!(
                    "Invalid NUTRI_LOG_FORMAT: {} (expected pretty or json)",
                    other
                )))
            }
        };

        let daily_calories = match env::var("NUTRI_DAILY_CALORIES") {
            Ok(raw) => parse_calories(&raw)?,
            Err(_) => DEFAULT_DAILY_CALORIES,
        };

        Ok(Self {
            catalog_path,
            bind_addr,
            log_level,
            log_format,
            daily_calories,
        })
    }
}

fn parse_calories(raw: &str) -> Result<f64, AppError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid NUTRI_DAILY_CALORIES: {}", e)))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Config(format!(
            "NUTRI_DAILY_CALORIES must be positive, got {}",
            raw
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("NUTRI_CATALOG_PATH");
        env::remove_var("NUTRI_BIND_ADDR");
        env::remove_var("NUTRI_LOG_LEVEL");
        env::remove_var("NUTRI_LOG_FORMAT");
        env::remove_var("NUTRI_DAILY_CALORIES");

        let config = Config::from_env().unwrap();

        assert!(config.catalog_path.is_none());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.daily_calories, DEFAULT_DAILY_CALORIES);
    }

    #[test]
    fn test_parse_calories() {
        assert_eq!(parse_calories("1300").unwrap(), 1300.0);
        assert_eq!(parse_calories(" 950.5 ").unwrap(), 950.5);
        assert!(matches!(parse_calories("0"), Err(AppError::Config(_))));
        assert!(matches!(parse_calories("-5"), Err(AppError::Config(_))));
        assert!(matches!(parse_calories("lots"), Err(AppError::Config(_))));
    }
}
