pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use api::handlers::{AppService, api_routes};
pub use crate::core::errors::TodoError;
pub use crate::core::services::TodoService;
pub use infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
