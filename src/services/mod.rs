pub mod backend;
pub mod api_client;

pub use backend::OrdersBackend;
pub use api_client::ApiClient;
