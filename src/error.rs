// ============================================================================
// ERRORES DE API - Fallos de las llamadas al backend
// ============================================================================
// Dos familias: el backend rechazó la operación (success = false) o la
// petición no pudo completarse / la respuesta no se pudo leer.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// El cuerpo de la respuesta indica fallo explícito
    #[error("backend rejected the request: {message}")]
    BackendRejected { message: String },

    /// La petición no llegó a completarse
    #[error("network error: {0}")]
    Transport(String),

    /// Respuesta HTTP no exitosa sin cuerpo JSON legible
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// El cuerpo no coincide con el contrato esperado
    #[error("parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::BackendRejected {
            message: message.into(),
        }
    }

    /// Todo lo que no es un rechazo explícito cuenta como fallo de conexión
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::BackendRejected { .. })
    }
}
