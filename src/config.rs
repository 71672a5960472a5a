// ============================================================================
// CONFIG - Configuración del cliente en tiempo de compilación
// ============================================================================
// build.rs reenvía las variables del `.env`; aquí se leen con option_env!.
// La sesión forma parte de la configuración y se pasa explícitamente a cada
// llamada de red.
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_SESSION_ID: &str = "default";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_LANGUAGE: &str = "PT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base del backend, vacío = mismo origen que la página
    pub backend_url: String,
    pub session_id: String,
    /// 0 desactiva el polling de `/get_updates`
    pub poll_interval_ms: u32,
    pub language: String,
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            session_id: DEFAULT_SESSION_ID.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            language: DEFAULT_LANGUAGE.to_string(),
            enable_logging: true,
        }
    }
}

impl ClientConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_parts(
            option_env!("BACKEND_URL"),
            option_env!("SESSION_ID"),
            option_env!("POLL_INTERVAL_MS"),
            option_env!("LANGUAGE"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Valores ausentes, vacíos o mal formados caen al valor por defecto
    pub fn from_parts(
        backend_url: Option<&str>,
        session_id: Option<&str>,
        poll_interval_ms: Option<&str>,
        language: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            backend_url: non_empty(backend_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            session_id: non_empty(session_id)
                .map(str::to_string)
                .unwrap_or(defaults.session_id),
            poll_interval_ms: non_empty(poll_interval_ms)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.poll_interval_ms),
            language: non_empty(language)
                .map(str::to_uppercase)
                .unwrap_or(defaults.language),
            enable_logging: non_empty(enable_logging)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL absoluta (o relativa al origen) de un endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }

    /// Endpoint GET con `?session_id=...` (codificado, valor sin modificar)
    pub fn session_endpoint(&self, path: &str) -> String {
        format!(
            "{}?session_id={}",
            self.endpoint(path),
            urlencoding::encode(&self.session_id)
        )
    }

    pub fn polling_enabled(&self) -> bool {
        self.poll_interval_ms > 0
    }

    /// Periodo del polling, `None` si está desactivado
    pub fn poll_period(&self) -> Option<u32> {
        self.polling_enabled().then_some(self.poll_interval_ms)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: ClientConfig = ClientConfig::from_env();
}
