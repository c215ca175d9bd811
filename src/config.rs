//! Built-in application settings
//!
//! Nothing is read from disk or the environment; every value here is the
//! compiled-in default and is checked once at startup.

use crate::error::AppError;
use std::time::Duration;

/// wttr.in reports tomorrow in 8 three-hourly slots
const HOURLY_SLOTS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    /// Hourly slot used as tomorrow's representative reading (4 = 12:00)
    pub forecast_hour_index: usize,
    pub loading_interval_ms: u64,
    pub animation_interval_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub format: String,
    pub timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            forecast_hour_index: 4,
            loading_interval_ms: 300,
            animation_interval_ms: 50,
            window_width: 600.0,
            window_height: 950.0,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wttr.in".to_string(),
            format: "j1".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl AppConfig {
    pub fn loading_interval(&self) -> Duration {
        Duration::from_millis(self.loading_interval_ms)
    }

    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.provider.base_url.trim().is_empty() {
            return Err(AppError::config("provider base URL must not be empty"));
        }
        if self.provider.timeout_seconds == 0 {
            return Err(AppError::config("request timeout must be at least 1 second"));
        }
        if self.forecast_hour_index >= HOURLY_SLOTS {
            return Err(AppError::config(format!(
                "forecast hour index {} is outside 0..{HOURLY_SLOTS}",
                self.forecast_hour_index
            )));
        }
        if self.loading_interval_ms == 0 || self.animation_interval_ms == 0 {
            return Err(AppError::config("timer intervals must be non-zero"));
        }
        Ok(())
    }
}
