//! Cart Domain Models
//!
//! This module contains the record stored by the cart service and the
//! constants shared by its handlers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Content type required on request bodies and set on JSON responses
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Body written by a successful delete
pub const DELETE_SUCCESS_MESSAGE: &str = "Delete Successful";
/// Store key of the record present at startup
pub const SEED_KEY: &str = "Id1";

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A product record held in the cart store.
///
/// Missing fields decode to empty strings and the capitalised `Id` / `Name`
/// keys are accepted alongside the lowercase ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Record identifier. Normally equal to its store key.
    #[serde(default, alias = "Id")]
    pub id: String,

    /// Display name of the product
    #[serde(default, alias = "Name")]
    pub name: String,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The record the store is seeded with.
    pub fn seed() -> Self {
        Self::new("1", "girish")
    }
}
