// ============================================================================
// DOM CHAT SURFACE - Implementación de ChatSurface sobre el DOM real
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::models::{ChatMessage, OrderSnapshot};
use crate::viewmodels::ChatSurface;
use crate::views::{ChatLog, MessageInput, OrderPanel, TypingIndicator};

/// Todos los handles se resuelven una vez en `resolve`
pub struct DomChatSurface {
    pub log: ChatLog,
    pub typing: TypingIndicator,
    pub input: MessageInput,
    pub orders: OrderPanel,
    lang: String,
}

impl DomChatSurface {
    pub fn resolve(lang: &str) -> Result<Self, JsValue> {
        Ok(Self {
            log: ChatLog::resolve()?,
            typing: TypingIndicator::resolve()?,
            input: MessageInput::resolve()?,
            orders: OrderPanel::resolve()?,
            lang: lang.to_string(),
        })
    }
}

impl ChatSurface for DomChatSurface {
    fn take_input(&self) -> Option<String> {
        self.input.take()
    }

    fn add_message(&self, message: &ChatMessage) {
        if let Err(e) = self.log.append(message) {
            log::error!("❌ [CHAT] Error agregando mensaje: {:?}", e);
        }
    }

    fn set_typing(&self, visible: bool) {
        if let Err(e) = self.typing.set_visible(visible) {
            log::warn!("⚠️ [CHAT] Error en indicador de escritura: {:?}", e);
        }
        if visible {
            self.log.scroll_to_bottom();
        }
    }

    fn render_orders(&self, snapshot: &OrderSnapshot) {
        if let Err(e) = self.orders.render(snapshot, &self.lang) {
            log::error!("❌ [ORDERS] Error renderizando pedidos: {:?}", e);
        }
    }
}
