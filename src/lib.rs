// Library entry so integration tests and the binary share the same modules.
pub mod api;
pub mod combat;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod model;
pub mod ranks;
pub mod services;

// Convenient re-exports for frequently used types.
pub use model::AppState;
