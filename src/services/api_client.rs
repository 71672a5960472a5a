// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    ConfirmPendingRequest, ConfirmPendingResponse, OrderSnapshot, ResetSessionRequest,
    ResetSessionResponse, SendMessageRequest, SendMessageResponse, UpdateFeed,
};
use crate::services::backend::OrdersBackend;
use crate::utils::constants::{
    CONFIRM_PENDING_PATH, DOWNLOAD_EXCEL_PATH, GET_ORDERS_PATH, GET_UPDATES_PATH,
    RESET_SESSION_PATH, SEND_MESSAGE_PATH,
};

/// Qué hacer con el cuerpo de una respuesta no 2xx
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorBody {
    /// Siempre `ApiError::Http`
    Reject,
    /// Se decodifica si es JSON válido (`{success: false, message}`)
    Read,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    async fn get_with_session<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.session_endpoint(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response, ErrorBody::Reject).await
    }

    async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        error_body: ErrorBody,
    ) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response, error_body).await
    }
}

impl OrdersBackend for ApiClient {
    async fn send_message(&self, message: &str) -> Result<SendMessageResponse, ApiError> {
        log::info!("💬 [API] Enviando mensaje (sesión {})", self.session_id());
        let request = SendMessageRequest::new(message, self.session_id());
        self.post_json(SEND_MESSAGE_PATH, &request, ErrorBody::Reject).await
    }

    async fn fetch_updates(&self) -> Result<UpdateFeed, ApiError> {
        self.get_with_session(GET_UPDATES_PATH).await
    }

    async fn fetch_global_orders(&self) -> Result<OrderSnapshot, ApiError> {
        log::info!("📦 [API] Cargando pedidos globales");
        self.get_with_session(GET_ORDERS_PATH).await
    }

    async fn confirm_pending_order(&self, order_index: usize) -> Result<(), ApiError> {
        log::info!("✅ [API] Confirmando pedido pendiente #{}", order_index);
        let request = ConfirmPendingRequest {
            session_id: self.session_id().to_string(),
            order_index,
        };
        let response: ConfirmPendingResponse = self
            .post_json(CONFIRM_PENDING_PATH, &request, ErrorBody::Read)
            .await?;
        if response.success {
            Ok(())
        } else {
            Err(ApiError::rejected(response.message.unwrap_or_default()))
        }
    }

    async fn reset_session(&self) -> Result<(), ApiError> {
        log::info!("🔄 [API] Reiniciando sesión {}", self.session_id());
        let request = ResetSessionRequest {
            session_id: self.session_id().to_string(),
        };
        let response: ResetSessionResponse = self
            .post_json(RESET_SESSION_PATH, &request, ErrorBody::Reject)
            .await?;
        if response.success {
            Ok(())
        } else {
            Err(ApiError::rejected(String::new()))
        }
    }

    fn download_url(&self) -> String {
        self.config.endpoint(DOWNLOAD_EXCEL_PATH)
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    error_body: ErrorBody,
) -> Result<T, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !ok {
        log::warn!("⚠️ [API] HTTP {} {}", status, status_text);
    }
    decode_body(ok, status, &status_text, &body, error_body)
}

/// Con status no 2xx solo se lee el cuerpo si el endpoint lo pide
/// (`ErrorBody::Read`); si no, un `{"error": ...}` nunca pasa por snapshot vacío.
fn decode_body<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
    error_body: ErrorBody,
) -> Result<T, ApiError> {
    let http_error = || ApiError::Http {
        status,
        status_text: status_text.to_string(),
    };
    if !ok && error_body == ErrorBody::Reject {
        return Err(http_error());
    }
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(http_error()),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}
