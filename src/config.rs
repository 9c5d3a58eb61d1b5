use std::time::Duration;

use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_LINK_PREVIEW_BASE_URL: &str = "https://api.microlink.io";
const DEFAULT_FETCH_ATTEMPTS: u32 = 2;
const MAX_FETCH_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("config fetch failed: {0}")]
    Fetch(String),
    #[error("config decode failed: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub backend_base_url: String,
    pub link_preview_base_url: String,
    pub fetch_attempts: u32,
    pub navigation: NavigationConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            backend_base_url: String::new(),
            link_preview_base_url: DEFAULT_LINK_PREVIEW_BASE_URL.to_string(),
            fetch_attempts: DEFAULT_FETCH_ATTEMPTS,
            navigation: NavigationConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Clamps out-of-range values back to something usable.
    pub fn sanitized(mut self) -> Self {
        self.backend_base_url = self.backend_base_url.trim().trim_end_matches('/').to_string();
        let preview = self.link_preview_base_url.trim().trim_end_matches('/');
        self.link_preview_base_url = if preview.is_empty() {
            DEFAULT_LINK_PREVIEW_BASE_URL.to_string()
        } else {
            preview.to_string()
        };
        self.fetch_attempts = self.fetch_attempts.clamp(1, MAX_FETCH_ATTEMPTS);
        self.navigation = self.navigation.sanitized();
        self
    }
}

/// Scroll-sync thresholds and navigate-then-scroll delays.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub band_top: f64,
    pub band_bottom: f64,
    pub home_threshold_px: f64,
    pub page_settle_ms: u64,
    pub route_settle_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            band_top: 0.5,
            band_bottom: 0.2,
            home_threshold_px: 100.0,
            page_settle_ms: 100,
            route_settle_ms: 300,
        }
    }
}

impl NavigationConfig {
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let ratio_ok = |value: f64| value.is_finite() && value > 0.0 && value <= 1.0;
        let (band_top, band_bottom) =
            if ratio_ok(self.band_top) && ratio_ok(self.band_bottom) && self.band_bottom < self.band_top {
                (self.band_top, self.band_bottom)
            } else {
                (defaults.band_top, defaults.band_bottom)
            };
        let home_threshold_px = if self.home_threshold_px.is_finite() && self.home_threshold_px >= 0.0 {
            self.home_threshold_px
        } else {
            defaults.home_threshold_px
        };
        let (page_settle_ms, route_settle_ms) =
            if self.page_settle_ms > 0 && self.route_settle_ms > self.page_settle_ms {
                (self.page_settle_ms, self.route_settle_ms)
            } else {
                (defaults.page_settle_ms, defaults.route_settle_ms)
            };
        Self {
            band_top,
            band_bottom,
            home_threshold_px,
            page_settle_ms,
            route_settle_ms,
        }
    }

    pub fn page_settle(&self) -> Duration {
        Duration::from_millis(self.page_settle_ms)
    }

    pub fn route_settle(&self) -> Duration {
        Duration::from_millis(self.route_settle_ms)
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, ConfigError>> {
    use_resource(|| async move {
        let config = fetch_runtime_config().await?.sanitized();
        tracing::info!(
            backend = %config.backend_base_url,
            attempts = config.fetch_attempts,
            "config.loaded"
        );
        Ok(config)
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::debug!(error = %err, "config.primary_missing");
            fetch_config_from("/assets/config.json").await
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, ConfigError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Fetch(format!("status {}", response.status())));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| ConfigError::Decode(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    Ok(config_from_env(|key| std::env::var(key).ok()))
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let nav = defaults.navigation.clone();
    RuntimeConfig {
        backend_base_url: lookup("BACKEND_BASE_URL").unwrap_or(defaults.backend_base_url),
        link_preview_base_url: lookup("LINK_PREVIEW_BASE_URL")
            .unwrap_or(defaults.link_preview_base_url),
        fetch_attempts: parse_or(lookup("FETCH_ATTEMPTS"), defaults.fetch_attempts),
        navigation: NavigationConfig {
            band_top: parse_or(lookup("NAV_BAND_TOP"), nav.band_top),
            band_bottom: parse_or(lookup("NAV_BAND_BOTTOM"), nav.band_bottom),
            home_threshold_px: parse_or(lookup("NAV_HOME_THRESHOLD_PX"), nav.home_threshold_px),
            page_settle_ms: parse_or(lookup("NAV_PAGE_SETTLE_MS"), nav.page_settle_ms),
            route_settle_ms: parse_or(lookup("NAV_ROUTE_SETTLE_MS"), nav.route_settle_ms),
        },
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default_value: T) -> T {
    value
        .as_deref()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default_value)
}

/// Subscriber level: `LOG_LEVEL` on native targets, otherwise debug in debug builds and info in release.
pub fn log_level() -> tracing::Level {
    #[cfg(not(target_arch = "wasm32"))]
    let requested = std::env::var("LOG_LEVEL").ok();
    #[cfg(target_arch = "wasm32")]
    let requested = None;
    level_or_default(requested, cfg!(debug_assertions))
}

fn level_or_default(requested: Option<String>, debug_build: bool) -> tracing::Level {
    let fallback = if debug_build {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    parse_or(requested, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"backend_base_url":"https://api.example.org/","navigation":{"page_settle_ms":50}}"#)
                .unwrap();
        let config = config.sanitized();
        assert_eq!(config.backend_base_url, "https://api.example.org");
        assert_eq!(config.link_preview_base_url, DEFAULT_LINK_PREVIEW_BASE_URL);
        assert_eq!(config.navigation.page_settle_ms, 50);
        assert_eq!(config.navigation.route_settle_ms, 300);
        assert_eq!(config.navigation.band_top, 0.5);
    }

    #[test]
    fn inverted_band_is_rejected() {
        let config = NavigationConfig {
            band_top: 0.1,
            band_bottom: 0.6,
            ..NavigationConfig::default()
        }
        .sanitized();
        assert_eq!(config.band_top, 0.5);
        assert_eq!(config.band_bottom, 0.2);
    }

    #[test]
    fn route_settle_must_exceed_page_settle() {
        let config = NavigationConfig {
            page_settle_ms: 400,
            route_settle_ms: 300,
            ..NavigationConfig::default()
        }
        .sanitized();
        assert_eq!(config.page_settle(), Duration::from_millis(100));
        assert_eq!(config.route_settle(), Duration::from_millis(300));
    }

    #[test]
    fn env_values_are_parsed_and_clamped() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("BACKEND_BASE_URL", "http://localhost:5000"),
            ("FETCH_ATTEMPTS", "42"),
            ("NAV_HOME_THRESHOLD_PX", "not-a-number"),
            ("NAV_BAND_TOP", "0.6"),
        ]);
        let config = config_from_env(|key| vars.get(key).map(|value| value.to_string())).sanitized();
        assert_eq!(config.backend_base_url, "http://localhost:5000");
        assert_eq!(config.fetch_attempts, MAX_FETCH_ATTEMPTS);
        assert_eq!(config.navigation.home_threshold_px, 100.0);
        assert_eq!(config.navigation.band_top, 0.6);
    }

    #[test]
    fn log_level_parses_or_falls_back() {
        assert_eq!(level_or_default(Some("warn".to_string()), true), tracing::Level::WARN);
        assert_eq!(level_or_default(Some(" TRACE ".to_string()), false), tracing::Level::TRACE);
        assert_eq!(level_or_default(Some("loud".to_string()), false), tracing::Level::INFO);
        assert_eq!(level_or_default(None, true), tracing::Level::DEBUG);
    }
}
