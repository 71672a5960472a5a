// ============================================================================
// CHAT LOG VIEW - Mensajes, indicador de escritura e input
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use crate::dom::{
    append_child, get_required_element, get_required_html_element, get_required_input,
    scroll_to_bottom, set_visible, ElementBuilder,
};
use crate::models::ChatMessage;
use crate::utils::constants::{CHAT_MESSAGES_ID, MESSAGE_INPUT_ID, TYPING_INDICATOR_ID};

pub struct ChatLog {
    container: Element,
}

impl ChatLog {
    pub fn resolve() -> Result<Self, JsValue> {
        Ok(Self {
            container: get_required_element(CHAT_MESSAGES_ID)?,
        })
    }

    /// Agregar mensaje al final y hacer scroll
    pub fn append(&self, message: &ChatMessage) -> Result<(), JsValue> {
        let element = ElementBuilder::new("div")?
            .class(&message.css_class())
            .text(&message.text)
            .build();
        append_child(&self.container, &element)?;
        scroll_to_bottom(&self.container);
        Ok(())
    }

    pub fn scroll_to_bottom(&self) {
        scroll_to_bottom(&self.container);
    }
}

pub struct TypingIndicator {
    element: HtmlElement,
}

impl TypingIndicator {
    pub fn resolve() -> Result<Self, JsValue> {
        Ok(Self {
            element: get_required_html_element(TYPING_INDICATOR_ID)?,
        })
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), JsValue> {
        set_visible(&self.element, visible)
    }
}

pub struct MessageInput {
    input: HtmlInputElement,
}

impl MessageInput {
    pub fn resolve() -> Result<Self, JsValue> {
        Ok(Self {
            input: get_required_input(MESSAGE_INPUT_ID)?,
        })
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.input
    }

    /// Texto recortado; el input solo se limpia si había algo que enviar
    pub fn take(&self) -> Option<String> {
        let value = self.input.value();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let message = trimmed.to_string();
        self.input.set_value("");
        Some(message)
    }
}
