// ============================================================================
// ORDER CHAT APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: escriben el DOM a partir de vistas puras (handles resueltos al inicio)
// - ViewModels: lógica del chat y de la confirmación de pedidos
// - Services: SOLO comunicación API
// - State: estado transitorio con Rc<RefCell>
// - Models: estructuras compartidas con backend
// ============================================================================

mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Order Chat - Rust Puro + MVVM");

    let mut app = App::new(&CONFIG).map_err(|e| {
        log::error!("❌ [MAIN] Faltan elementos en la página: {:?}", e);
        e
    })?;
    app.start()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

fn with_app<F: FnOnce(&App)>(action: F) {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => action(app),
        None => log::warn!("⚠️ [MAIN] App no está inicializada"),
    });
}

// ============================================================================
// FUNCIONES EXPORTADAS
// ============================================================================
// wasm-bindgen las exporta desde el módulo, no en `window`. Para que el
// markup con `onclick="confirmPendingOrder(0)"` siga funcionando, la página
// las publica al arrancar:
//
//   import init, * as chat from './pkg/order_chat_pwa.js';
//   await init();
//   Object.assign(window, chat);

/// Enviar el contenido del input (llamable desde JavaScript)
#[wasm_bindgen(js_name = sendMessage)]
pub fn send_message() {
    with_app(App::send_message);
}

/// Confirmar pedido pendiente por índice 0-based (llamable desde JavaScript)
#[wasm_bindgen(js_name = confirmPendingOrder)]
pub fn confirm_pending_order(index: usize) {
    with_app(|app| app.confirm_pending_order(index));
}

#[wasm_bindgen(js_name = downloadExcel)]
pub fn download_excel() {
    with_app(App::download_excel);
}

#[wasm_bindgen(js_name = resetSession)]
pub fn reset_session() {
    with_app(App::reset_session);
}

#[wasm_bindgen(js_name = loadGlobalOrders)]
pub fn load_global_orders() {
    with_app(App::load_global_orders);
}
