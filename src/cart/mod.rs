//! Cart Domain Module
//!
//! This module contains the product store and its HTTP surface:
//! - Domain models (Product, shared constants)
//! - Error types (store and HTTP-facing)
//! - Request helpers (path, content-type and body checks)
//! - Application state management
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::{ApiError, StoreError};
pub use handlers::routes;
pub use models::Product;
pub use state::{AppState, CartStore, SharedState};
