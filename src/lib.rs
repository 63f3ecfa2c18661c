// ============================================================================
// item_api Library
// ============================================================================

pub mod config;
pub mod core;
pub mod storage;
pub mod web;

// Re-export main types for convenience
pub use config::{AppConfig, Cli};
pub use crate::core::{Item, ItemId};
pub use storage::{InMemoryItemRepository, ItemRepository};
pub use web::{AppState, WebError, build_router};
