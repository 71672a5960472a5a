// ============================================================================
// CONFIRMATION - Máquina de estados de la confirmación de pedidos pendientes
// ============================================================================
// Idle -> Awaiting{index} (click) -> Confirmed | Failed (respuesta) -> Idle
// No hay estado de timeout ni cancelación.
// ============================================================================

use crate::error::ApiError;
use crate::models::ChatMessage;
use crate::utils::i18n::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationState {
    #[default]
    Idle,
    Awaiting { index: usize },
    Confirmed { index: usize },
    Failed { index: usize },
}

impl ConfirmationState {
    /// Click en "Confirmar". Un segundo click mientras se espera se procesa igual.
    pub fn begin(self, index: usize) -> Self {
        if let Some(previous) = self.awaited_index() {
            log::warn!(
                "⚠️ [CONFIRM] Pedido #{} aún sin respuesta, enviando #{}",
                previous,
                index
            );
        }
        Self::Awaiting { index }
    }

    /// Respuesta recibida para `index`. Solo cambia el estado si es la
    /// confirmación que se está esperando; una respuesta de un click
    /// anterior no saca de Awaiting al más reciente.
    pub fn resolve(self, index: usize, outcome: &ConfirmationOutcome) -> Self {
        if self.awaited_index() != Some(index) {
            return self;
        }
        match outcome {
            ConfirmationOutcome::Confirmed => Self::Confirmed { index },
            _ => Self::Failed { index },
        }
    }

    /// Confirmed/Failed vuelven a Idle; Idle y Awaiting no cambian
    pub fn settle(self) -> Self {
        match self {
            Self::Confirmed { .. } | Self::Failed { .. } => Self::Idle,
            other => other,
        }
    }

    /// Índice del pedido cuya respuesta se espera
    pub fn awaited_index(&self) -> Option<usize> {
        match self {
            Self::Awaiting { index } => Some(*index),
            _ => None,
        }
    }
}

/// Resultado visible para el usuario de una confirmación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Confirmed,
    Rejected { message: String },
    ConnectionFailed,
}

impl ConfirmationOutcome {
    pub fn from_result(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Confirmed,
            Err(ApiError::BackendRejected { message }) => Self::Rejected { message },
            Err(_) => Self::ConnectionFailed,
        }
    }

    /// Solo una confirmación aceptada dispara los refrescos
    pub fn triggers_refresh(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Notificación estilo chat para el usuario
    pub fn notification(&self, lang: &str) -> ChatMessage {
        match self {
            Self::Confirmed => ChatMessage::success(t("pending_confirmed", lang)),
            Self::Rejected { message } => {
                ChatMessage::alert(format!("{}{}", t("confirm_failed", lang), message))
            }
            Self::ConnectionFailed => ChatMessage::alert(t("confirm_connection_error", lang)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tone;

    #[test]
    fn walks_idle_awaiting_confirmed_idle() {
        let state = ConfirmationState::default().begin(1);
        assert_eq!(state, ConfirmationState::Awaiting { index: 1 });
        assert_eq!(state.awaited_index(), Some(1));

        let state = state.resolve(1, &ConfirmationOutcome::Confirmed);
        assert_eq!(state, ConfirmationState::Confirmed { index: 1 });
        assert_eq!(state.settle(), ConfirmationState::Idle);
    }

    #[test]
    fn rejection_and_connection_failure_both_fail() {
        let rejected = ConfirmationOutcome::Rejected { message: "x".into() };
        let awaiting = ConfirmationState::Idle.begin(0);
        assert_eq!(awaiting.resolve(0, &rejected), ConfirmationState::Failed { index: 0 });
        assert_eq!(
            awaiting.resolve(0, &ConfirmationOutcome::ConnectionFailed),
            ConfirmationState::Failed { index: 0 }
        );
    }

    #[test]
    fn second_click_replaces_awaited_index() {
        let state = ConfirmationState::Idle.begin(0).begin(2);
        assert_eq!(state, ConfirmationState::Awaiting { index: 2 });
    }

    #[test]
    fn stale_response_keeps_newer_confirmation_awaiting() {
        let state = ConfirmationState::Idle.begin(0).begin(2);

        let after_stale = state.resolve(0, &ConfirmationOutcome::Confirmed);
        assert_eq!(after_stale, ConfirmationState::Awaiting { index: 2 });
        assert_eq!(after_stale.settle(), ConfirmationState::Awaiting { index: 2 });

        let after_current = after_stale.resolve(2, &ConfirmationOutcome::ConnectionFailed);
        assert_eq!(after_current, ConfirmationState::Failed { index: 2 });
        assert_eq!(after_current.settle(), ConfirmationState::Idle);
    }

    #[test]
    fn response_while_idle_changes_nothing() {
        let state = ConfirmationState::Idle.resolve(1, &ConfirmationOutcome::Confirmed);
        assert_eq!(state, ConfirmationState::Idle);
    }

    #[test]
    fn maps_api_errors_to_outcomes() {
        assert_eq!(ConfirmationOutcome::from_result(Ok(())), ConfirmationOutcome::Confirmed);
        assert_eq!(
            ConfirmationOutcome::from_result(Err(ApiError::rejected("Pedido não encontrado"))),
            ConfirmationOutcome::Rejected { message: "Pedido não encontrado".into() }
        );
        assert_eq!(
            ConfirmationOutcome::from_result(Err(ApiError::Decode("eof".into()))),
            ConfirmationOutcome::ConnectionFailed
        );
    }

    #[test]
    fn notifications_carry_backend_message() {
        let msg = ConfirmationOutcome::Rejected { message: "X".into() }.notification("PT");
        assert_eq!(msg.text, "❌ Erro ao confirmar pedido: X");
        assert_eq!(msg.tone, Tone::Alert);

        let ok = ConfirmationOutcome::Confirmed.notification("PT");
        assert_eq!(ok.tone, Tone::Success);
        assert!(ConfirmationOutcome::Confirmed.triggers_refresh());
        assert!(!ConfirmationOutcome::ConnectionFailed.triggers_refresh());
    }
}
