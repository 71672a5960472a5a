// ============================================================================
// CHAT STATE - Estado transitorio de la UI del chat
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::confirmation::{ConfirmationOutcome, ConfirmationState};

#[derive(Clone, Default)]
pub struct ChatState {
    pub confirmation: Rc<RefCell<ConfirmationState>>,
    /// Respuestas de `/send_message` aún en vuelo (indicador de escritura)
    pub replies_in_flight: Rc<RefCell<usize>>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirmation(&self) -> ConfirmationState {
        *self.confirmation.borrow()
    }

    pub fn begin_confirmation(&self, index: usize) {
        let next = self.confirmation().begin(index);
        *self.confirmation.borrow_mut() = next;
    }

    pub fn finish_confirmation(&self, index: usize, outcome: &ConfirmationOutcome) {
        let current = self.confirmation();
        if current.awaited_index() != Some(index) {
            log::info!("🧾 [CONFIRM] Respuesta del pedido #{} ignorada ({:?})", index, current);
            return;
        }
        let resolved = current.resolve(index, outcome);
        log::info!("🧾 [CONFIRM] {:?}", resolved);
        *self.confirmation.borrow_mut() = resolved.settle();
    }

    pub fn reply_started(&self) {
        *self.replies_in_flight.borrow_mut() += 1;
    }

    /// Devuelve true si ya no queda ninguna respuesta pendiente
    pub fn reply_finished(&self) -> bool {
        let mut in_flight = self.replies_in_flight.borrow_mut();
        *in_flight = in_flight.saturating_sub(1);
        *in_flight == 0
    }
}
