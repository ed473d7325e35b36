//! Frontend configuration
//!
//! Values come from build-time environment variables and can be overridden at
//! runtime through a `window.CHAT_CONFIG` object, so a static deployment can
//! change them without rebuilding. Blank runtime values are ignored.

use crate::auth::DEFAULT_TOKEN_KEY;
use crate::error::{Result, RouterError};
use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;

/// Name of the global object holding runtime overrides.
pub const RUNTIME_CONFIG_GLOBAL: &str = "CHAT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Local storage key holding the auth token.
    pub token_key: String,
    /// Maximum level forwarded to the browser console.
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Loads build-time values, then applies runtime overrides.
    ///
    /// Runs before logging is installed, so problems are returned alongside
    /// the config instead of being logged; the values they concern keep their
    /// previous setting.
    pub fn load() -> (Self, Vec<RouterError>) {
        let mut config = Self::default();
        let mut warnings = config.apply(RuntimeConfig {
            token_key: option_env!("CHAT_TOKEN_KEY").map(str::to_string),
            log_level: option_env!("CHAT_LOG_LEVEL").map(str::to_string),
        });

        match runtime_config() {
            Ok(Some(runtime)) => warnings.extend(config.apply(runtime)),
            Ok(None) => {}
            Err(err) => warnings.push(err),
        }

        (config, warnings)
    }

    fn apply(&mut self, overrides: RuntimeConfig) -> Vec<RouterError> {
        let mut warnings = Vec::new();
        if let Some(key) = overrides.token_key.as_deref().and_then(normalize) {
            self.token_key = key;
        }
        if let Some(level) = overrides.log_level.as_deref().and_then(normalize) {
            match Level::from_str(&level) {
                Ok(level) => self.log_level = level,
                Err(_) => warnings.push(RouterError::Config(format!(
                    "unknown log level {level:?}, keeping {}",
                    self.log_level
                ))),
            }
        }
        warnings
    }
}

#[derive(Debug, Default, Deserialize)]
struct RuntimeConfig {
    #[serde(default)]
    token_key: Option<String>,
    #[serde(default)]
    log_level: Option<String>,
}

impl RuntimeConfig {
    fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Result<Option<RuntimeConfig>> {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL))
        .map_err(|err| RouterError::Config(format!("{err:?}")))?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }

    let json = js_sys::JSON::stringify(&value)
        .map_err(|err| RouterError::Config(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| RouterError::Config(format!("{RUNTIME_CONFIG_GLOBAL} is not serializable")))?;
    RuntimeConfig::parse(&json).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Result<Option<RuntimeConfig>> {
    Ok(None)
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
