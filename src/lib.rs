//! Cart Store Library
//!
//! This library provides an in-memory product store served over HTTP with
//! list, get, create, update and delete endpoints.

// Domain modules
pub mod cart;

// Infrastructure
pub mod config;
pub mod router;
