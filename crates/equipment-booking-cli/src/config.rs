//! Layered configuration for the `booking` CLI.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults,
//! 2. an optional file passed with `--config` (format picked from its extension),
//! 3. `BOOKING_`-prefixed environment variables, `__` separating nested keys
//!    (`BOOKING_THEME__PRIMARY`, `BOOKING_LOGGING__LEVEL`).

use config::{Config, ConfigError, Environment, File};
use equipment_booking::ThemeColors;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub danger: String,
    pub text_disabled: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BookingConfig {
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl BookingConfig {
    /// Load configuration from the optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix("BOOKING")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn theme_colors(&self) -> ThemeColors {
        ThemeColors {
            primary: self.theme.primary.clone(),
            danger: self.theme.danger.clone(),
            text_disabled: self.theme.text_disabled.clone(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = ThemeColors::default();
        Self {
            primary: colors.primary,
            danger: colors.danger,
            text_disabled: colors.text_disabled,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
