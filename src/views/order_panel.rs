// ============================================================================
// ORDER PANEL VIEW - Reconciliador de pedidos confirmados/pendientes
// ============================================================================
// `OrderPanelView::from_snapshot` construye la vista (puro, sin DOM).
// `OrderPanel::render` reemplaza por completo las dos regiones y sus
// contadores. El contenido se escribe como texto, nunca como HTML.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use crate::dom::{
    append_child, get_required_element, on_click, set_inner_html, set_text_content, ElementBuilder,
};
use crate::models::{OrderSnapshot, ProductQuantities};
use crate::utils::constants::{
    CONFIRMED_COUNT_ID, CONFIRMED_ORDERS_ID, ORDER_INDEX_ATTR, PENDING_COUNT_ID, PENDING_ORDERS_ID,
};
use crate::utils::i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub product: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBlock {
    /// Índice 0-based que se envía al confirmar
    pub index: usize,
    /// "Pedido Pendente 1:" (1-based)
    pub label: String,
    pub confirm_label: String,
    pub rows: Vec<OrderRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedList {
    pub count: String,
    pub rows: Vec<OrderRow>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingList {
    pub count: String,
    pub blocks: Vec<PendingBlock>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPanelView {
    pub confirmed: ConfirmedList,
    pub pending: PendingList,
}

fn rows(items: &ProductQuantities) -> Vec<OrderRow> {
    items
        .iter()
        .map(|(product, quantity)| OrderRow {
            product: product.clone(),
            quantity: quantity.to_string(),
        })
        .collect()
}

impl OrderPanelView {
    pub fn from_snapshot(snapshot: &OrderSnapshot, lang: &str) -> Self {
        let confirmed = if snapshot.confirmed_orders.is_empty() {
            ConfirmedList {
                count: "0".to_string(),
                rows: Vec::new(),
                placeholder: Some(t("no_confirmed_orders", lang)),
            }
        } else {
            ConfirmedList {
                count: snapshot.confirmed_count().to_string(),
                rows: rows(&snapshot.confirmed_orders),
                placeholder: None,
            }
        };

        let pending = if snapshot.pending_orders.is_empty() {
            PendingList {
                count: "0".to_string(),
                blocks: Vec::new(),
                placeholder: Some(t("no_pending_orders", lang)),
            }
        } else {
            let label = t("pending_order", lang);
            let confirm_label = t("confirm_button", lang);
            PendingList {
                count: snapshot.pending_count().to_string(),
                blocks: snapshot
                    .pending_orders
                    .iter()
                    .enumerate()
                    .map(|(index, order)| PendingBlock {
                        index,
                        label: format!("{} {}:", label, index + 1),
                        confirm_label: confirm_label.clone(),
                        rows: rows(&order.items),
                    })
                    .collect(),
                placeholder: None,
            }
        };

        Self { confirmed, pending }
    }
}

/// Handles de las regiones de pedidos, resueltos una sola vez al iniciar
pub struct OrderPanel {
    confirmed_list: Element,
    confirmed_count: Element,
    pending_list: Element,
    pending_count: Element,
}

impl OrderPanel {
    pub fn resolve() -> Result<Self, JsValue> {
        Ok(Self {
            confirmed_list: get_required_element(CONFIRMED_ORDERS_ID)?,
            confirmed_count: get_required_element(CONFIRMED_COUNT_ID)?,
            pending_list: get_required_element(PENDING_ORDERS_ID)?,
            pending_count: get_required_element(PENDING_COUNT_ID)?,
        })
    }

    /// Reemplaza todo el contenido con el snapshot recibido
    pub fn render(&self, snapshot: &OrderSnapshot, lang: &str) -> Result<(), JsValue> {
        let view = OrderPanelView::from_snapshot(snapshot, lang);
        self.apply(&view)
    }

    fn apply(&self, view: &OrderPanelView) -> Result<(), JsValue> {
        set_text_content(&self.confirmed_count, &view.confirmed.count);
        set_inner_html(&self.confirmed_list, "");
        if let Some(placeholder) = &view.confirmed.placeholder {
            append_child(&self.confirmed_list, &render_placeholder(placeholder)?)?;
        }
        for row in &view.confirmed.rows {
            append_child(&self.confirmed_list, &render_row(row, false)?)?;
        }

        set_text_content(&self.pending_count, &view.pending.count);
        set_inner_html(&self.pending_list, "");
        if let Some(placeholder) = &view.pending.placeholder {
            append_child(&self.pending_list, &render_placeholder(placeholder)?)?;
        }
        for block in &view.pending.blocks {
            append_child(&self.pending_list, &render_pending_block(block)?)?;
        }

        log::info!(
            "📋 [ORDERS] Renderizados {} confirmados, {} pendientes",
            view.confirmed.count,
            view.pending.count
        );
        Ok(())
    }

    /// Un único listener delegado en la región de pendientes.
    /// Sobrevive a los re-renders porque el contenedor no se destruye.
    pub fn on_confirm<F>(&self, handler: F) -> Result<(), JsValue>
    where
        F: Fn(usize) + 'static,
    {
        on_click(&self.pending_list, move |event: MouseEvent| {
            if let Some(index) = clicked_order_index(&event) {
                handler(index);
            }
        })
    }
}

fn clicked_order_index(event: &MouseEvent) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let control = target
        .closest(&format!("[{}]", ORDER_INDEX_ATTR))
        .ok()
        .flatten()?;
    control.get_attribute(ORDER_INDEX_ATTR)?.parse().ok()
}

fn render_placeholder(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("empty-orders").text(text).build())
}

fn render_row(row: &OrderRow, pending: bool) -> Result<Element, JsValue> {
    let (item_class, quantity_class) = if pending {
        ("order-item pending-item", "product-quantity pending-quantity")
    } else {
        ("order-item", "product-quantity")
    };
    let name = ElementBuilder::new("span")?.class("product-name").text(&row.product).build();
    let quantity = ElementBuilder::new("span")?.class(quantity_class).text(&row.quantity).build();

    Ok(ElementBuilder::new("div")?
        .class(item_class)
        .child(name)?
        .child(quantity)?
        .build())
}

fn render_pending_block(block: &PendingBlock) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("confirm-btn")
        .attr("type", "button")?
        .attr(ORDER_INDEX_ATTR, &block.index.to_string())?
        .text(&block.confirm_label)
        .build();
    let header = ElementBuilder::new("div")?
        .class("pending-order-header")
        .text(&block.label)
        .child(button)?
        .build();

    let mut container = ElementBuilder::new("div")?.class("pending-order").child(header)?;
    for row in &block.rows {
        container = container.child(render_row(row, true)?)?;
    }
    Ok(container.build())
}
