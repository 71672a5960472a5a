// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Todos los listeners se registran UNA VEZ al iniciar la app sobre elementos
// que no se destruyen (contenedores, input, botones), por lo que
// closure.forget() no acumula listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Handler para la tecla Enter
pub fn on_enter<F>(target: &EventTarget, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    target.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
