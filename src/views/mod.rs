pub mod order_panel;
pub mod chat_log;
pub mod surface;

pub use order_panel::{OrderPanel, OrderPanelView};
pub use chat_log::{ChatLog, MessageInput, TypingIndicator};
pub use surface::DomChatSurface;
