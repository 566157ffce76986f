use chrono::NaiveTime;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::model::{parse_clock_time, AttendanceStatus};

pub const DEFAULT_DARK_MODE_KEY: &str = "darkMode";
const CONFIG_GLOBAL: &str = "__STAFFSYNC_CONFIG";

/// Raw shape of `window.__STAFFSYNC_CONFIG`; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub late_after: Option<String>,
    pub dark_mode_key: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub late_after: NaiveTime,
    pub dark_mode_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            late_after: AttendanceStatus::default_late_after(),
            dark_mode_key: DEFAULT_DARK_MODE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Resolves a runtime snapshot against the defaults. Values that do not
    /// parse are dropped with a warning.
    pub fn from_runtime(runtime: RuntimeConfig) -> Self {
        let defaults = Self::default();

        let late_after = match runtime.late_after.as_deref().map(parse_clock_time) {
            Some(Ok(time)) => time,
            Some(Err(err)) => {
                log::warn!("ignoring late_after override: {err}");
                defaults.late_after
            }
            None => defaults.late_after,
        };

        let dark_mode_key = runtime
            .dark_mode_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .unwrap_or(defaults.dark_mode_key);

        let log_level = match runtime.log_level.as_deref() {
            Some(raw) => raw.trim().parse::<LevelFilter>().unwrap_or_else(|_| {
                log::warn!("ignoring unknown log_level '{raw}'");
                defaults.log_level
            }),
            None => defaults.log_level,
        };

        Self {
            late_after,
            dark_mode_key,
            log_level,
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__STAFFSYNC_CONFIG = { late_after: "09:30", ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match serde_json::from_str::<RuntimeConfig>(&json) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("window.{CONFIG_GLOBAL} is not a valid config object: {err}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

/// Returns the process-wide configuration, reading the window global once.
pub fn current() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| {
        let runtime = snapshot_from_globals().unwrap_or_default();
        AppConfig::from_runtime(runtime)
    })
}
