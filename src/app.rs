// ============================================================================
// APP - Conecta handles del DOM, listeners, carga inicial y polling
// ============================================================================

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::ClientConfig;
use crate::dom::{get_element_by_id, on_click, on_enter, open_in_new_tab};
use crate::services::ApiClient;
use crate::utils::constants::{DOWNLOAD_BUTTON_ID, RESET_BUTTON_ID, SEND_BUTTON_ID};
use crate::viewmodels::{ChatViewModel, RefreshActions};
use crate::views::DomChatSurface;

pub type AppViewModel = ChatViewModel<ApiClient, DomChatSurface>;

/// Refrescos fire-and-forget: cada uno corre en su propia tarea
#[derive(Clone)]
pub struct SpawnedRefresh {
    vm: AppViewModel,
}

impl RefreshActions for SpawnedRefresh {
    fn refresh_updates(&self) {
        let vm = self.vm.clone();
        spawn_local(async move { vm.check_updates().await });
    }

    fn refresh_global_orders(&self) {
        let vm = self.vm.clone();
        spawn_local(async move { vm.load_global_orders().await });
    }
}

/// Aplicación principal
pub struct App {
    vm: AppViewModel,
    refresh: SpawnedRefresh,
    poll_period: Option<u32>,
    // Se cancela al hacer drop
    poller: Option<Interval>,
}

impl App {
    /// Resuelve todos los elementos de la página una sola vez
    pub fn new(config: &ClientConfig) -> Result<Self, JsValue> {
        let surface = DomChatSurface::resolve(&config.language)?;
        let vm = ChatViewModel::new(ApiClient::new(config.clone()), surface, &config.language);
        let refresh = SpawnedRefresh { vm: vm.clone() };

        log::info!(
            "🛒 [APP] Chat de pedidos listo (sesión {}, backend '{}')",
            config.session_id,
            config.backend_url
        );

        Ok(Self {
            vm,
            refresh,
            poll_period: config.poll_period(),
            poller: None,
        })
    }

    /// Listeners + carga inicial + polling
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.bind_listeners()?;
        self.refresh.refresh_updates();

        if let (Some(period), None) = (self.poll_period, self.poller.as_ref()) {
            let refresh = self.refresh.clone();
            self.poller = Some(Interval::new(period, move || {
                refresh.refresh_updates();
            }));
            log::info!("⏰ [APP] Polling de actualizaciones cada {} ms", period);
        }
        Ok(())
    }

    fn bind_listeners(&self) -> Result<(), JsValue> {
        let surface = self.vm.surface();

        let vm = self.vm.clone();
        on_enter(surface.input.element(), move || spawn_submit(vm.clone()))?;

        if let Some(button) = get_element_by_id(SEND_BUTTON_ID) {
            let vm = self.vm.clone();
            on_click(&button, move |_| spawn_submit(vm.clone()))?;
        }

        let vm = self.vm.clone();
        let refresh = self.refresh.clone();
        surface.orders.on_confirm(move |index| {
            spawn_confirm(vm.clone(), refresh.clone(), index);
        })?;

        if let Some(button) = get_element_by_id(DOWNLOAD_BUTTON_ID) {
            let vm = self.vm.clone();
            on_click(&button, move |_| download(&vm))?;
        }

        if let Some(button) = get_element_by_id(RESET_BUTTON_ID) {
            let vm = self.vm.clone();
            let refresh = self.refresh.clone();
            on_click(&button, move |_| spawn_reset(vm.clone(), refresh.clone()))?;
        }

        Ok(())
    }

    pub fn send_message(&self) {
        spawn_submit(self.vm.clone());
    }

    pub fn confirm_pending_order(&self, index: usize) {
        spawn_confirm(self.vm.clone(), self.refresh.clone(), index);
    }

    pub fn reset_session(&self) {
        spawn_reset(self.vm.clone(), self.refresh.clone());
    }

    pub fn load_global_orders(&self) {
        self.refresh.refresh_global_orders();
    }

    pub fn download_excel(&self) {
        download(&self.vm);
    }
}

fn spawn_submit(vm: AppViewModel) {
    spawn_local(async move { vm.submit_input().await });
}

fn spawn_confirm(vm: AppViewModel, refresh: SpawnedRefresh, index: usize) {
    spawn_local(async move {
        vm.confirm_pending_order(index, &refresh).await;
    });
}

fn spawn_reset(vm: AppViewModel, refresh: SpawnedRefresh) {
    spawn_local(async move { vm.reset_session(&refresh).await });
}

fn download(vm: &AppViewModel) {
    let url = vm.download_url();
    log::info!("📥 [APP] Abriendo descarga: {}", url);
    if let Err(e) = open_in_new_tab(&url) {
        log::error!("❌ [APP] No se pudo abrir la descarga: {:?}", e);
    }
}
