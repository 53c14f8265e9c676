pub mod backend_client;
pub mod options;

pub use backend_client::BackendClient;
pub use options::{InMemoryOptionsRepository, OptionsError, OptionsRepository};
