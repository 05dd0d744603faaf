use contracts::system::auth::OTP_CODE_LENGTH;

use super::api_utils::api_base;

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Runtime configuration, resolved once in `App` and shared through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub otp_length: usize,
    /// Countdown start when the service does not report an expiry
    pub otp_default_ttl_secs: u32,
    /// Locale passed to the spreadsheet widget
    pub widget_locale: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            api_base_url: api_base(),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: super::api_utils::FALLBACK_API_BASE.to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            otp_length: OTP_CODE_LENGTH,
            otp_default_ttl_secs: 300,
            widget_locale: "EN_US".to_string(),
        }
    }
}

/// Console log level: `REPORT_LOG_LEVEL` at build time, otherwise
/// debug for debug builds and info for release builds.
pub fn log_level() -> log::Level {
    option_env!("REPORT_LOG_LEVEL")
        .and_then(parse_log_level)
        .unwrap_or(if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        })
}

fn parse_log_level(raw: &str) -> Option<log::Level> {
    raw.trim().parse().ok()
}
