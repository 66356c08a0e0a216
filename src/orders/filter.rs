//! Order filtering
//!
//! Filters narrow the dataset in a fixed order: id, currency, shipped_to,
//! cost. Each stage only sees what the previous stage kept.

use serde::Serialize;

use super::error::{QueryError, QueryResult};
use super::model::Order;
use super::store::OrderStore;

/// Requested filters; empty strings count as "not given"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub id: Option<String>,
    pub currency: Option<String>,
    pub shipped_to: Option<String>,
    pub min_cost: Option<f64>,
}

/// Filters that were actually applied, echoed back to the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FilterResult<'a> {
    pub results: usize,
    pub filters: AppliedFilters,
    pub orders: Vec<&'a Order>,
}

/// Check that `id` parses as a base-16 integer literal
///
/// Follows the usual integer-literal rules: surrounding whitespace, a sign,
/// a `0x` prefix and single underscores between digits are all allowed.
pub fn valid_order_id(id: &str) -> bool {
    let s = id.trim();
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);

    let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        // an underscore may directly follow the prefix
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => s,
    };

    !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_hexdigit() || c == '_')
}

/// Apply `filter` to the dataset
pub fn filter_orders<'a>(store: &'a OrderStore, filter: &OrderFilter) -> QueryResult<FilterResult<'a>> {
    let id = given(filter.id.as_deref());
    let currency = given(filter.currency.as_deref());
    let shipped_to = given(filter.shipped_to.as_deref());

    if id.is_none() && currency.is_none() && shipped_to.is_none() && filter.min_cost.is_none() {
        return Err(QueryError::no_filters());
    }

    let mut applied = AppliedFilters::default();
    let mut orders: Vec<&Order> = store.orders().iter().collect();

    if let Some(id) = id {
        if !valid_order_id(id) {
            return Err(QueryError::invalid_order_id());
        }
        orders.retain(|order| order.id == id);
        applied.id = Some(id.to_string());
    }

    if let Some(currency) = currency {
        orders.retain(|order| order.currency == currency);
        applied.currency = Some(currency.to_string());
    }

    if let Some(shipped_to) = shipped_to {
        orders.retain(|order| order.ships_to(shipped_to));
        if orders.is_empty() {
            return Err(QueryError::no_shipping_match());
        }
        applied.shipped_to = Some(shipped_to.to_string());
    }

    if let Some(min_cost) = filter.min_cost {
        orders = at_least(orders, min_cost)?;
        applied.cost = Some(min_cost);
    }

    if orders.is_empty() {
        return Err(QueryError::no_match());
    }

    Ok(FilterResult {
        results: orders.len(),
        filters: applied,
        orders,
    })
}

fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Keep orders priced at or above `min_cost`
///
/// Every surviving order must carry a parseable price.
fn at_least(orders: Vec<&Order>, min_cost: f64) -> QueryResult<Vec<&Order>> {
    let mut kept = Vec::with_capacity(orders.len());
    for order in orders {
        let price = order.price_value().ok_or_else(QueryError::invalid_price)?;
        if price >= min_cost {
            kept.push(order);
        }
    }
    Ok(kept)
}
