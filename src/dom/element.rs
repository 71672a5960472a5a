// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento obligatorio del contrato de la página
pub fn get_required_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

pub fn get_required_html_element(id: &str) -> Result<HtmlElement, JsValue> {
    get_required_element(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HtmlElement", id)))
}

pub fn get_required_input(id: &str) -> Result<HtmlInputElement, JsValue> {
    get_required_element(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Mostrar/ocultar con `display`
pub fn set_visible(element: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    element
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Llevar el scroll al final (chat)
pub fn scroll_to_bottom(element: &Element) {
    element.set_scroll_top(element.scroll_height());
}

/// Abrir URL en una pestaña nueva
pub fn open_in_new_tab(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
}
