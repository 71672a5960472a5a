// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Order panel
            translations.insert("no_confirmed_orders", "No confirmed orders");
            translations.insert("no_pending_orders", "No pending orders");
            translations.insert("pending_order", "Pending order");
            translations.insert("confirm_button", "✅ Confirm");

            // Chat
            translations.insert(
                "pending_confirmed",
                "✅ PENDING ORDER CONFIRMED! The order was moved to confirmed.",
            );
            translations.insert("confirm_failed", "❌ Error confirming order: ");
            translations.insert(
                "confirm_connection_error",
                "❌ Connection error while confirming order.",
            );
            translations.insert("send_connection_error", "Connection error. Please try again.");
            translations.insert("session_reset", "🔄 Conversation restarted!");
            translations.insert(
                "reset_connection_error",
                "❌ Connection error while restarting the conversation.",
            );
        }
        _ => {
            // PT (por defecto)
            translations.insert("no_confirmed_orders", "Nenhum pedido confirmado");
            translations.insert("no_pending_orders", "Nenhum pedido pendente");
            translations.insert("pending_order", "Pedido Pendente");
            translations.insert("confirm_button", "✅ Confirmar");

            translations.insert(
                "pending_confirmed",
                "✅ PEDIDO PENDENTE CONFIRMADO! O pedido foi movido para confirmados.",
            );
            translations.insert("confirm_failed", "❌ Erro ao confirmar pedido: ");
            translations.insert(
                "confirm_connection_error",
                "❌ Erro de conexão ao confirmar pedido.",
            );
            translations.insert("send_connection_error", "Erro de conexão. Tente novamente.");
            translations.insert("session_reset", "🔄 Conversa reiniciada!");
            translations.insert(
                "reset_connection_error",
                "❌ Erro de conexão ao reiniciar a conversa.",
            );
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_is_the_default() {
        assert_eq!(t("no_pending_orders", "PT"), "Nenhum pedido pendente");
        assert_eq!(t("no_pending_orders", "FR"), "Nenhum pedido pendente");
    }

    #[test]
    fn english_is_case_insensitive() {
        assert_eq!(t("confirm_button", "en"), "✅ Confirm");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("does_not_exist", "PT"), "does_not_exist");
    }
}
