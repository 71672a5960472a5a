// ============================================================================
// ORDERS BACKEND - Contrato con el backend del asistente
// ============================================================================
// El ViewModel solo conoce este trait; ApiClient lo implementa sobre HTTP.
// Las llamadas se ejecutan en el hilo de UI (spawn_local), sin Send.
// ============================================================================

use crate::error::ApiError;
use crate::models::{OrderSnapshot, SendMessageResponse, UpdateFeed};

#[allow(async_fn_in_trait)]
pub trait OrdersBackend {
    /// POST `/send_message`
    async fn send_message(&self, message: &str) -> Result<SendMessageResponse, ApiError>;

    /// GET `/get_updates?session_id=...`
    async fn fetch_updates(&self) -> Result<UpdateFeed, ApiError>;

    /// GET `/get_orders?session_id=...` (vista global agregada)
    async fn fetch_global_orders(&self) -> Result<OrderSnapshot, ApiError>;

    /// POST `/confirm_pending_order`; `success = false` llega como `BackendRejected`
    async fn confirm_pending_order(&self, order_index: usize) -> Result<(), ApiError>;

    /// POST `/reset_session`
    async fn reset_session(&self) -> Result<(), ApiError>;

    /// URL que abre la descarga de la planilla
    fn download_url(&self) -> String;
}
