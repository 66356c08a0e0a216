//! Read-only order dataset
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it
//! afterwards.

use std::fs;
use std::path::Path;

use super::error::LoadError;
use super::model::Order;

/// Immutable collection of orders
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Load a JSON array of orders from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: display.clone(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| LoadError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content).map(Self::new)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
