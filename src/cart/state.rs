//! Cart State Management
//!
//! This module owns the in-memory product store and the application state
//! handed to every handler.

use super::{
    error::StoreError,
    models::{Product, SEED_KEY},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info};
use uuid::Uuid;

// =============================================================================
// Store
// =============================================================================

/// Products keyed by id behind a single exclusive lock.
///
/// Reads and writes take the same mutex; there is no reader/writer split.
/// Every call holds the lock for exactly one map operation (or one copy, for
/// [`CartStore::list`]), so each call is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct CartStore {
    products: Mutex<HashMap<String, Product>>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the store the server starts with: one record under `Id1`.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.lock().insert(SEED_KEY.to_string(), Product::seed());
        store
    }

    // A panic while holding the guard cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every record, in no particular order.
    pub fn list(&self) -> Vec<Product> {
        let products: Vec<Product> = self.lock().values().cloned().collect();
        debug!(count = products.len(), "listed products");
        products
    }

    /// Returns a copy of the record stored under `id`.
    pub fn get(&self, id: &str) -> Result<Product, StoreError> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Stores `product` under a freshly generated id and returns that id.
    ///
    /// Whatever `id` the caller supplied is replaced.
    pub fn insert(&self, mut product: Product) -> String {
        let id = Uuid::new_v4().simple().to_string();
        product.id = id.clone();
        self.lock().insert(id.clone(), product);
        info!(%id, "inserted product");
        id
    }

    /// Overwrites both fields of the record stored under `id`.
    ///
    /// The record stays under its original key even when `fields.id` names a
    /// different value.
    pub fn update(&self, id: &str, fields: Product) -> Result<(), StoreError> {
        let mut products = self.lock();
        let existing = products
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        existing.id = fields.id;
        existing.name = fields.name;
        info!(key = %id, "updated product");
        Ok(())
    }

    /// Removes the record stored under `id`.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        match self.lock().remove(id) {
            Some(_) => {
                info!(%id, "deleted product");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the product store
#[derive(Debug)]
pub struct AppState {
    pub store: CartStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state around the seeded store.
    pub fn new() -> Self {
        Self::with_store(CartStore::seeded())
    }

    pub fn with_store(store: CartStore) -> Self {
        Self { store }
    }
}
