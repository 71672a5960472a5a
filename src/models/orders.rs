// ============================================================================
// ORDER SNAPSHOT - Estado completo de pedidos enviado por el backend
// ============================================================================
// Se reconstruye en cada fetch, nunca se compara con el anterior ni se guarda.
// `pending_orders` tiene una sola forma: lista de pedidos, cada uno un mapa
// producto -> cantidad. El mapa plano antiguo no se acepta.
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Producto -> cantidad, en el orden en que llegan del backend
pub type ProductQuantities = IndexMap<String, u32>;

/// Un pedido pendiente de confirmación humana
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingOrder {
    pub items: ProductQuantities,
}

impl PendingOrder {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.items.iter()
    }
}

impl FromIterator<(String, u32)> for PendingOrder {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub confirmed_orders: ProductQuantities,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_orders: Vec<PendingOrder>,
}

impl OrderSnapshot {
    /// Número de productos distintos confirmados
    pub fn confirmed_count(&self) -> usize {
        self.confirmed_orders.len()
    }

    /// Número de pedidos pendientes (no de productos)
    pub fn pending_count(&self) -> usize {
        self.pending_orders.len()
    }
}

/// Respuesta de `/get_updates`: snapshot + mensaje encolado por el asistente
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateFeed {
    #[serde(flatten)]
    pub orders: OrderSnapshot,
    #[serde(default)]
    pub bot_message: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl UpdateFeed {
    /// Mensaje pendiente del asistente, ignorando cadenas vacías
    pub fn queued_message(&self) -> Option<&str> {
        self.bot_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// `null` se trata igual que un campo ausente
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_confirmed_and_pending_orders() {
        let json = r#"{"confirmed_orders": {"Rice": 2}, "pending_orders": [{"Beans": 1}]}"#;
        let snapshot: OrderSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.confirmed_orders.get("Rice"), Some(&2));
        assert_eq!(snapshot.pending_count(), 1);
        assert_eq!(snapshot.pending_orders[0].items.get("Beans"), Some(&1));
    }

    #[test]
    fn keeps_backend_order_instead_of_sorting() {
        let json = r#"{"confirmed_orders": {"Queijo": 3, "Banana": 1, "Manga": 2}}"#;
        let snapshot: OrderSnapshot = serde_json::from_str(json).unwrap();

        let products: Vec<&str> = snapshot.confirmed_orders.keys().map(String::as_str).collect();
        assert_eq!(products, vec!["Queijo", "Banana", "Manga"]);
    }

    #[test]
    fn missing_or_null_fields_are_empty() {
        let empty: OrderSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, OrderSnapshot::default());

        let nulls: OrderSnapshot =
            serde_json::from_str(r#"{"confirmed_orders": null, "pending_orders": null}"#).unwrap();
        assert_eq!(nulls, OrderSnapshot::default());
    }

    #[test]
    fn flat_pending_mapping_is_rejected() {
        let json = r#"{"confirmed_orders": {}, "pending_orders": {"Beans": 1}}"#;
        assert!(serde_json::from_str::<OrderSnapshot>(json).is_err());
    }

    #[test]
    fn update_feed_carries_queued_message_and_ignores_extra_fields() {
        let json = r#"{
            "state": "confirming",
            "current_orders": {"Manga": 2},
            "confirmed_orders": {"Rice": 2},
            "pending_orders": [],
            "reminders_sent": 1,
            "has_message": true,
            "bot_message": "🔔 LEMBRETE (1/5)"
        }"#;
        let feed: UpdateFeed = serde_json::from_str(json).unwrap();

        assert_eq!(feed.state.as_deref(), Some("confirming"));
        assert_eq!(feed.queued_message(), Some("🔔 LEMBRETE (1/5)"));
        assert_eq!(feed.orders.confirmed_count(), 1);
        assert_eq!(feed.orders.pending_count(), 0);
    }

    #[test]
    fn blank_bot_message_is_not_queued() {
        let feed: UpdateFeed = serde_json::from_str(r#"{"bot_message": "   "}"#).unwrap();
        assert_eq!(feed.queued_message(), None);
        assert_eq!(feed.orders, OrderSnapshot::default());
    }
}
