//! Sorting orders by creation time

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{QueryError, QueryResult};
use super::model::Order;
use super::store::OrderStore;
use crate::logger;

/// Sort direction accepted by `/api/orders/sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Earliest first
    Ascend,
    /// Latest first
    Descend,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascend => "ascend",
            Self::Descend => "descend",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascend" => Ok(Self::Ascend),
            "descend" => Ok(Self::Descend),
            other => Err(QueryError::InvalidRequest(format!(
                "Invalid sort value '{other}': expected 'ascend' or 'descend'"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SortResult<'a> {
    pub results: usize,
    pub sort_order: SortDirection,
    pub orders: Vec<&'a Order>,
}

/// Return every order sorted by `created_at`
///
/// The sort is stable in both directions: orders with equal timestamps keep
/// their dataset order.
pub fn sort_orders(store: &OrderStore, direction: SortDirection) -> QueryResult<SortResult<'_>> {
    let mut keyed = store
        .orders()
        .iter()
        .map(|order| order.created_at_timestamp().map(|ts| (ts, order)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            logger::log_error(&format!("Error sorting orders: {e}"));
            QueryError::sort_failed()
        })?;

    match direction {
        SortDirection::Ascend => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descend => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    let orders: Vec<&Order> = keyed.into_iter().map(|(_, order)| order).collect();
    Ok(SortResult {
        results: orders.len(),
        sort_order: direction,
        orders,
    })
}
