// ============================================================================
// CONFIG - Configuración en tiempo de compilación (option_env! + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estrategia para refrescar los contadores tras una acción
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsStrategy {
    /// Re-consultar `/api/admin/estadisticas` tras un pequeño retraso
    Remote,
    /// Recontar las tarjetas presentes en el estado local
    Local,
}

impl StatsStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "remote" | "remoto" => Some(Self::Remote),
            "local" => Some(Self::Local),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo de las rutas de la API ("" = mismo origen)
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub language: String,
    pub notification_duration_ms: u32,
    pub notification_fade_ms: u32,
    pub stats_refresh_delay_ms: u32,
    pub stats_strategy: StatsStrategy,
    pub alert_duration_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    pub navbar_scroll_threshold: f64,
    pub debug_layout: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            language: "ES".to_string(),
            notification_duration_ms: 3000,
            notification_fade_ms: 300,
            stats_refresh_delay_ms: 500,
            stats_strategy: StatsStrategy::Remote,
            alert_duration_ms: 5000,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            navbar_scroll_threshold: 100.0,
            debug_layout: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "LANGUAGE" => option_env!("LANGUAGE"),
            "NOTIFICATION_DURATION_MS" => option_env!("NOTIFICATION_DURATION_MS"),
            "NOTIFICATION_FADE_MS" => option_env!("NOTIFICATION_FADE_MS"),
            "STATS_REFRESH_DELAY_MS" => option_env!("STATS_REFRESH_DELAY_MS"),
            "STATS_STRATEGY" => option_env!("STATS_STRATEGY"),
            "ALERT_DURATION_MS" => option_env!("ALERT_DURATION_MS"),
            "COUNTER_DURATION_MS" => option_env!("COUNTER_DURATION_MS"),
            "COUNTER_FRAME_MS" => option_env!("COUNTER_FRAME_MS"),
            "NAVBAR_SCROLL_THRESHOLD" => option_env!("NAVBAR_SCROLL_THRESHOLD"),
            "DEBUG_LAYOUT" => option_env!("DEBUG_LAYOUT"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda de claves.
    /// Los valores ausentes o inválidos caen en el valor por defecto.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();

        let parse_u32 = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };
        let parse_bool = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_bool("ENABLE_LOGGING", defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(defaults.log_level),
            language: lookup("LANGUAGE")
                .map(|v| v.trim().to_uppercase())
                .filter(|v| v == "ES" || v == "EN")
                .unwrap_or(defaults.language),
            notification_duration_ms: parse_u32(
                "NOTIFICATION_DURATION_MS",
                defaults.notification_duration_ms,
            ),
            notification_fade_ms: parse_u32("NOTIFICATION_FADE_MS", defaults.notification_fade_ms),
            stats_refresh_delay_ms: parse_u32(
                "STATS_REFRESH_DELAY_MS",
                defaults.stats_refresh_delay_ms,
            ),
            stats_strategy: lookup("STATS_STRATEGY")
                .and_then(StatsStrategy::parse)
                .unwrap_or(defaults.stats_strategy),
            alert_duration_ms: parse_u32("ALERT_DURATION_MS", defaults.alert_duration_ms),
            counter_duration_ms: parse_u32("COUNTER_DURATION_MS", defaults.counter_duration_ms),
            counter_frame_ms: parse_u32("COUNTER_FRAME_MS", defaults.counter_frame_ms).max(1),
            navbar_scroll_threshold: lookup("NAVBAR_SCROLL_THRESHOLD")
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(defaults.navbar_scroll_threshold),
            debug_layout: parse_bool("DEBUG_LAYOUT", defaults.debug_layout),
        }
    }

    /// Nivel de log efectivo para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
