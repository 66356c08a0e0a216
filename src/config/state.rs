// Application state module
// Shared, read-only state handed to every connection

use std::sync::Arc;

use super::types::Config;
use crate::orders::OrderStore;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Order dataset, loaded once before the server starts
    pub orders: Arc<OrderStore>,
}

impl AppState {
    pub fn new(config: Config, orders: OrderStore) -> Self {
        Self {
            config,
            orders: Arc::new(orders),
        }
    }
}
