pub mod orders;
pub mod chat;

pub use orders::{OrderSnapshot, PendingOrder, ProductQuantities, UpdateFeed};
pub use chat::{
    ChatMessage, ConfirmPendingRequest, ConfirmPendingResponse, ResetSessionRequest,
    ResetSessionResponse, SendMessageRequest, SendMessageResponse, Sender, Tone,
};
