// ============================================================================
// CHAT VIEWMODEL - LÓGICA DEL CHAT Y DE LOS PEDIDOS
// ============================================================================
// Orquesta backend (OrdersBackend) y vista (ChatSurface). Ningún error sale
// de aquí: todos terminan en una notificación del chat o en el log.
// ============================================================================

use std::rc::Rc;
use crate::models::{ChatMessage, OrderSnapshot};
use crate::services::OrdersBackend;
use crate::state::{ChatState, ConfirmationOutcome};
use crate::utils::i18n::t;

/// Lo que el ViewModel necesita de la vista
pub trait ChatSurface {
    /// Texto del input (recortado) y lo limpia; None si está vacío
    fn take_input(&self) -> Option<String>;
    fn add_message(&self, message: &ChatMessage);
    fn set_typing(&self, visible: bool);
    /// Reemplaza por completo las listas de pedidos
    fn render_orders(&self, snapshot: &OrderSnapshot);
}

/// Refrescos que se disparan tras confirmar; independientes entre sí
pub trait RefreshActions {
    fn refresh_updates(&self);
    fn refresh_global_orders(&self);
}

pub struct ChatViewModel<B, S> {
    backend: Rc<B>,
    surface: Rc<S>,
    state: ChatState,
    lang: String,
}

impl<B, S> Clone for ChatViewModel<B, S> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            surface: self.surface.clone(),
            state: self.state.clone(),
            lang: self.lang.clone(),
        }
    }
}

impl<B: OrdersBackend, S: ChatSurface> ChatViewModel<B, S> {
    pub fn new(backend: B, surface: S, lang: &str) -> Self {
        Self {
            backend: Rc::new(backend),
            surface: Rc::new(surface),
            state: ChatState::new(),
            lang: lang.to_string(),
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Enviar lo que haya en el input
    pub async fn submit_input(&self) {
        if let Some(message) = self.surface.take_input() {
            self.send_message(&message).await;
        }
    }

    /// Enviar mensaje al asistente y renderizar su respuesta + pedidos
    pub async fn send_message(&self, text: &str) {
        let message = text.trim();
        if message.is_empty() {
            return;
        }

        self.surface.add_message(&ChatMessage::user(message));
        self.state.reply_started();
        self.surface.set_typing(true);

        let result = self.backend.send_message(message).await;

        if self.state.reply_finished() {
            self.surface.set_typing(false);
        }
        match result {
            Ok(reply) => {
                if !reply.response.is_empty() {
                    self.surface.add_message(&ChatMessage::bot(reply.response));
                }
                self.surface.render_orders(&reply.orders);
            }
            Err(e) => {
                log::error!("❌ [CHAT] Error enviando mensaje: {}", e);
                self.surface.add_message(&ChatMessage::bot(t("send_connection_error", &self.lang)));
            }
        }
    }

    /// Re-fetch del feed de actualizaciones (carga inicial, polling, refresco)
    pub async fn check_updates(&self) {
        match self.backend.fetch_updates().await {
            Ok(feed) => {
                self.surface.render_orders(&feed.orders);
                if let Some(message) = feed.queued_message() {
                    self.surface.add_message(&ChatMessage::bot(message));
                }
            }
            Err(e) => {
                log::warn!("⚠️ [UPDATES] No se pudo obtener actualizaciones: {}", e);
            }
        }
    }

    /// Re-fetch de la vista global de pedidos
    pub async fn load_global_orders(&self) {
        match self.backend.fetch_global_orders().await {
            Ok(snapshot) => self.surface.render_orders(&snapshot),
            Err(e) => log::warn!("⚠️ [ORDERS] No se pudo cargar pedidos globales: {}", e),
        }
    }

    /// Confirmar el pedido pendiente en `index` (0-based)
    pub async fn confirm_pending_order<R: RefreshActions>(
        &self,
        index: usize,
        refresh: &R,
    ) -> ConfirmationOutcome {
        self.state.begin_confirmation(index);

        let result = self.backend.confirm_pending_order(index).await;
        if let Err(e) = &result {
            log::error!("❌ [CONFIRM] Pedido #{}: {}", index, e);
        }
        let outcome = ConfirmationOutcome::from_result(result);

        self.state.finish_confirmation(index, &outcome);
        self.surface.add_message(&outcome.notification(&self.lang));
        if outcome.triggers_refresh() {
            refresh.refresh_updates();
            refresh.refresh_global_orders();
        }
        outcome
    }

    /// Reiniciar la conversación en el backend
    pub async fn reset_session<R: RefreshActions>(&self, refresh: &R) {
        match self.backend.reset_session().await {
            Ok(()) => {
                self.surface.add_message(&ChatMessage::bot(t("session_reset", &self.lang)));
                refresh.refresh_updates();
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error reiniciando sesión: {}", e);
                self.surface
                    .add_message(&ChatMessage::alert(t("reset_connection_error", &self.lang)));
            }
        }
    }

    pub fn download_url(&self) -> String {
        self.backend.download_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use futures::executor::block_on;
    use crate::error::ApiError;
    use crate::models::{PendingOrder, SendMessageResponse, Sender, Tone, UpdateFeed};
    use crate::state::ConfirmationState;

    #[derive(Default)]
    struct FakeBackend {
        replies: RefCell<VecDeque<Result<SendMessageResponse, ApiError>>>,
        feeds: RefCell<VecDeque<Result<UpdateFeed, ApiError>>>,
        globals: RefCell<VecDeque<Result<OrderSnapshot, ApiError>>>,
        confirms: RefCell<VecDeque<Result<(), ApiError>>>,
        resets: RefCell<VecDeque<Result<(), ApiError>>>,
        sent: RefCell<Vec<String>>,
        confirmed_indices: RefCell<Vec<usize>>,
    }

    fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
    }

    impl OrdersBackend for FakeBackend {
        async fn send_message(&self, message: &str) -> Result<SendMessageResponse, ApiError> {
            self.sent.borrow_mut().push(message.to_string());
            next(&self.replies)
        }

        async fn fetch_updates(&self) -> Result<UpdateFeed, ApiError> {
            next(&self.feeds)
        }

        async fn fetch_global_orders(&self) -> Result<OrderSnapshot, ApiError> {
            next(&self.globals)
        }

        async fn confirm_pending_order(&self, order_index: usize) -> Result<(), ApiError> {
            self.confirmed_indices.borrow_mut().push(order_index);
            next(&self.confirms)
        }

        async fn reset_session(&self) -> Result<(), ApiError> {
            next(&self.resets)
        }

        fn download_url(&self) -> String {
            "/download_excel".to_string()
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        input: RefCell<Option<String>>,
        messages: RefCell<Vec<ChatMessage>>,
        typing: RefCell<Vec<bool>>,
        renders: RefCell<Vec<OrderSnapshot>>,
    }

    impl ChatSurface for FakeSurface {
        fn take_input(&self) -> Option<String> {
            self.input.borrow_mut().take()
        }

        fn add_message(&self, message: &ChatMessage) {
            self.messages.borrow_mut().push(message.clone());
        }

        fn set_typing(&self, visible: bool) {
            self.typing.borrow_mut().push(visible);
        }

        fn render_orders(&self, snapshot: &OrderSnapshot) {
            self.renders.borrow_mut().push(snapshot.clone());
        }
    }

    #[derive(Default)]
    struct CountingRefresh {
        updates: Cell<usize>,
        globals: Cell<usize>,
    }

    impl RefreshActions for CountingRefresh {
        fn refresh_updates(&self) {
            self.updates.set(self.updates.get() + 1);
        }

        fn refresh_global_orders(&self) {
            self.globals.set(self.globals.get() + 1);
        }
    }

    fn view_model(backend: FakeBackend) -> ChatViewModel<FakeBackend, FakeSurface> {
        ChatViewModel::new(backend, FakeSurface::default(), "PT")
    }

    fn rice_and_beans() -> OrderSnapshot {
        OrderSnapshot {
            confirmed_orders: [("Rice".to_string(), 2)].into_iter().collect(),
            pending_orders: vec![[("Beans".to_string(), 1)].into_iter().collect::<PendingOrder>()],
        }
    }

    #[test]
    fn successful_confirmation_notifies_and_refreshes_both_views_once() {
        let backend = FakeBackend::default();
        backend.confirms.borrow_mut().push_back(Ok(()));
        let vm = view_model(backend);
        let refresh = CountingRefresh::default();

        let outcome = block_on(vm.confirm_pending_order(0, &refresh));

        assert_eq!(outcome, ConfirmationOutcome::Confirmed);
        assert_eq!(*vm.backend.confirmed_indices.borrow(), vec![0]);
        let messages = vm.surface.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].tone, Tone::Success);
        assert_eq!(refresh.updates.get(), 1);
        assert_eq!(refresh.globals.get(), 1);
        assert_eq!(vm.state().confirmation(), ConfirmationState::Idle);
    }

    #[test]
    fn rejected_confirmation_shows_backend_message_without_refresh() {
        let backend = FakeBackend::default();
        backend.confirms.borrow_mut().push_back(Err(ApiError::rejected("X")));
        let vm = view_model(backend);
        let refresh = CountingRefresh::default();

        block_on(vm.confirm_pending_order(2, &refresh));

        let messages = vm.surface.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].tone, Tone::Alert);
        assert!(messages[0].text.contains('X'));
        assert_eq!(refresh.updates.get(), 0);
        assert_eq!(refresh.globals.get(), 0);
    }

    #[test]
    fn transport_failure_shows_generic_connection_error_without_refresh() {
        let backend = FakeBackend::default();
        backend
            .confirms
            .borrow_mut()
            .push_back(Err(ApiError::Transport("Failed to fetch".into())));
        let vm = view_model(backend);
        let refresh = CountingRefresh::default();

        let outcome = block_on(vm.confirm_pending_order(0, &refresh));

        assert_eq!(outcome, ConfirmationOutcome::ConnectionFailed);
        assert_eq!(
            vm.surface.messages.borrow()[0].text,
            "❌ Erro de conexão ao confirmar pedido."
        );
        assert_eq!(refresh.updates.get() + refresh.globals.get(), 0);
        assert_eq!(vm.backend.confirmed_indices.borrow().len(), 1);
    }

    #[test]
    fn send_message_renders_reply_and_orders() {
        let backend = FakeBackend::default();
        backend.replies.borrow_mut().push_back(Ok(SendMessageResponse {
            response: "Anotado!".into(),
            orders: rice_and_beans(),
        }));
        let vm = view_model(backend);

        block_on(vm.send_message("  2 arroz  "));

        assert_eq!(*vm.backend.sent.borrow(), vec!["2 arroz".to_string()]);
        let messages = vm.surface.messages.borrow();
        assert_eq!(messages[0], ChatMessage::user("2 arroz"));
        assert_eq!(messages[1], ChatMessage::bot("Anotado!"));
        assert_eq!(*vm.surface.typing.borrow(), vec![true, false]);
        assert_eq!(*vm.surface.renders.borrow(), vec![rice_and_beans()]);
    }

    #[test]
    fn blank_message_is_not_sent() {
        let vm = view_model(FakeBackend::default());

        block_on(vm.send_message("   "));
        block_on(vm.submit_input());

        assert!(vm.backend.sent.borrow().is_empty());
        assert!(vm.surface.messages.borrow().is_empty());
        assert!(vm.surface.typing.borrow().is_empty());
    }

    #[test]
    fn submit_input_sends_what_was_typed() {
        let backend = FakeBackend::default();
        backend.replies.borrow_mut().push_back(Ok(SendMessageResponse {
            response: String::new(),
            orders: OrderSnapshot::default(),
        }));
        let vm = view_model(backend);
        *vm.surface.input.borrow_mut() = Some("cinco queijos".into());

        block_on(vm.submit_input());

        assert_eq!(*vm.backend.sent.borrow(), vec!["cinco queijos".to_string()]);
        assert_eq!(vm.surface.messages.borrow().len(), 1);
        assert_eq!(vm.surface.renders.borrow().len(), 1);
    }

    #[test]
    fn send_failure_hides_typing_and_reports_connection_error() {
        let vm = view_model(FakeBackend::default());

        block_on(vm.send_message("oi"));

        let messages = vm.surface.messages.borrow();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[1].text, "Erro de conexão. Tente novamente.");
        assert_eq!(*vm.surface.typing.borrow(), vec![true, false]);
        assert!(vm.surface.renders.borrow().is_empty());
    }

    #[test]
    fn updates_render_snapshot_and_queued_bot_message() {
        let backend = FakeBackend::default();
        backend.feeds.borrow_mut().push_back(Ok(UpdateFeed {
            orders: rice_and_beans(),
            bot_message: Some("🔔 LEMBRETE (1/5)".into()),
            state: Some("confirming".into()),
        }));
        backend.feeds.borrow_mut().push_back(Ok(UpdateFeed::default()));
        let vm = view_model(backend);

        block_on(vm.check_updates());
        block_on(vm.check_updates());

        assert_eq!(
            *vm.surface.renders.borrow(),
            vec![rice_and_beans(), OrderSnapshot::default()]
        );
        assert_eq!(*vm.surface.messages.borrow(), vec![ChatMessage::bot("🔔 LEMBRETE (1/5)")]);
    }

    #[test]
    fn failed_refresh_leaves_display_untouched() {
        let vm = view_model(FakeBackend::default());

        block_on(vm.check_updates());
        block_on(vm.load_global_orders());

        assert!(vm.surface.renders.borrow().is_empty());
        assert!(vm.surface.messages.borrow().is_empty());
    }

    #[test]
    fn global_orders_go_through_the_same_render() {
        let backend = FakeBackend::default();
        backend.globals.borrow_mut().push_back(Ok(rice_and_beans()));
        let vm = view_model(backend);

        block_on(vm.load_global_orders());

        assert_eq!(*vm.surface.renders.borrow(), vec![rice_and_beans()]);
    }

    #[test]
    fn reset_announces_restart_and_refreshes_feed() {
        let backend = FakeBackend::default();
        backend.resets.borrow_mut().push_back(Ok(()));
        let vm = view_model(backend);
        let refresh = CountingRefresh::default();

        block_on(vm.reset_session(&refresh));
        block_on(vm.reset_session(&refresh));

        let messages = vm.surface.messages.borrow();
        assert_eq!(messages[0], ChatMessage::bot("🔄 Conversa reiniciada!"));
        assert_eq!(messages[1].tone, Tone::Alert);
        assert_eq!(refresh.updates.get(), 1);
        assert_eq!(refresh.globals.get(), 0);
    }
}
