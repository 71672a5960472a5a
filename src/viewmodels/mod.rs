pub mod chat_viewmodel;

pub use chat_viewmodel::{ChatSurface, ChatViewModel, RefreshActions};
