/// IDs de los elementos que la página debe proveer
pub const MESSAGE_INPUT_ID: &str = "messageInput";
pub const CHAT_MESSAGES_ID: &str = "chatMessages";
pub const TYPING_INDICATOR_ID: &str = "typingIndicator";
pub const CONFIRMED_ORDERS_ID: &str = "confirmedOrders";
pub const CONFIRMED_COUNT_ID: &str = "confirmedCount";
pub const PENDING_ORDERS_ID: &str = "pendingOrders";
pub const PENDING_COUNT_ID: &str = "pendingCount";

/// Opcionales: si no existen, se usan las funciones exportadas a JS
pub const SEND_BUTTON_ID: &str = "sendButton";
pub const DOWNLOAD_BUTTON_ID: &str = "downloadButton";
pub const RESET_BUTTON_ID: &str = "resetButton";

/// Atributo que lleva el índice (0-based) del pedido pendiente
pub const ORDER_INDEX_ATTR: &str = "data-order-index";

/// Endpoints del backend
pub const SEND_MESSAGE_PATH: &str = "/send_message";
pub const GET_UPDATES_PATH: &str = "/get_updates";
pub const GET_ORDERS_PATH: &str = "/get_orders";
pub const CONFIRM_PENDING_PATH: &str = "/confirm_pending_order";
pub const RESET_SESSION_PATH: &str = "/reset_session";
pub const DOWNLOAD_EXCEL_PATH: &str = "/download_excel";
