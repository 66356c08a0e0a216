//! Order query module
//!
//! Holds the in-memory order dataset and the two read-only queries over it:
//! - filtering by id, currency, shipping address and minimum cost
//! - sorting every order by creation time

mod error;
mod filter;
mod model;
mod sort;
mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{LoadError, QueryError, QueryResult};
pub use filter::{filter_orders, OrderFilter};
pub use sort::{sort_orders, SortDirection};
pub use store::OrderStore;
