//! Order endpoints
//!
//! Decodes query strings into typed parameters and hands them to the order
//! queries. Parameter validation (non-numeric `cost`, unknown `sort`) happens
//! here, before the queries run.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::http;
use crate::orders::{
    filter_orders, sort_orders, OrderFilter, OrderStore, QueryError, QueryResult, SortDirection,
};

/// `GET /api/orders` parameters
#[derive(Debug, Default, Deserialize)]
struct FilterParams {
    id: Option<String>,
    currency: Option<String>,
    shipped_to: Option<String>,
    cost: Option<String>,
}

/// `GET /api/orders/sort` parameters
#[derive(Debug, Default, Deserialize)]
struct SortParams {
    sort: Option<String>,
}

/// `GET /api/orders`
pub fn filter(query: Option<&str>, store: &OrderStore) -> Response<Full<Bytes>> {
    let params: QueryResult<FilterParams> = parse_query(query);
    let result = params
        .and_then(|p| {
            Ok(OrderFilter {
                min_cost: p.cost.as_deref().map(parse_cost).transpose()?,
                id: p.id,
                currency: p.currency,
                shipped_to: p.shipped_to,
            })
        })
        .and_then(|f| filter_orders(store, &f).map(|r| http::json_response(StatusCode::OK, &r)));

    result.unwrap_or_else(|e| http::error_response(&e))
}

/// `GET /api/orders/sort`
pub fn sort(query: Option<&str>, store: &OrderStore) -> Response<Full<Bytes>> {
    let result = parse_query::<SortParams>(query)
        .and_then(|p| {
            p.sort
                .ok_or_else(|| {
                    QueryError::InvalidRequest(
                        "Missing sort parameter: expected 'ascend' or 'descend'".to_string(),
                    )
                })?
                .parse::<SortDirection>()
        })
        .and_then(|direction| sort_orders(store, direction))
        .map(|r| http::json_response(StatusCode::OK, &r));

    result.unwrap_or_else(|e| http::error_response(&e))
}

/// Decode a query string; `+` and percent escapes are handled
///
/// A repeated key keeps its last value.
fn parse_query<T: DeserializeOwned + Default>(query: Option<&str>) -> QueryResult<T> {
    let q = match query {
        None | Some("") => return Ok(T::default()),
        Some(q) => q,
    };

    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(q)
        .map_err(|e| QueryError::InvalidRequest(format!("Invalid query string: {e}")))?;
    let last: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    serde_json::from_value(Value::Object(last))
        .map_err(|e| QueryError::InvalidRequest(format!("Invalid query string: {e}")))
}

fn parse_cost(raw: &str) -> QueryResult<f64> {
    raw.trim()
        .parse()
        .map_err(|_| QueryError::InvalidRequest("cost must be a number".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::test_support::{sample_store, GBP_ORDER_ID, USD_ORDER_ID};
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_filter_no_params_is_400() {
        let store = sample_store();
        let resp = filter(None, &store);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await["detail"],
            "At least one filter must be provided"
        );
    }

    #[tokio::test]
    async fn test_filter_by_id_body() {
        let store = sample_store();
        let resp = filter(Some(format!("id={USD_ORDER_ID}").as_str()), &store);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["results"], 1);
        assert_eq!(body["filters"], serde_json::json!({ "id": USD_ORDER_ID }));
        assert_eq!(body["orders"][0]["id"], USD_ORDER_ID);
        assert_eq!(body["orders"][0]["uuid"], "30906bb3-ff12-4517-a9ea-71bb2ed79c0e");
    }

    #[tokio::test]
    async fn test_filter_invalid_id_is_400() {
        let store = sample_store();
        let resp = filter(Some("id=invalid"), &store);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_filter_unknown_currency_is_404() {
        let store = sample_store();
        let resp = filter(Some("currency=JPY"), &store);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_filter_cost_echoed_as_number() {
        let store = sample_store();
        let resp = filter(Some("cost=1.0"), &store);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["results"], 1);
        assert_eq!(body["filters"]["cost"], 1.0);
    }

    #[tokio::test]
    async fn test_filter_non_numeric_cost_is_400() {
        let store = sample_store();
        let resp = filter(Some("cost=cheap"), &store);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["detail"], "cost must be a number");
    }

    #[tokio::test]
    async fn test_filter_decodes_escapes() {
        let store = sample_store();
        let resp = filter(Some("shipped_to=124+Veranda%20Place"), &store);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["filters"]["shipped_to"], "124 Veranda Place");
    }

    #[tokio::test]
    async fn test_filter_shipping_miss_detail() {
        let store = sample_store();
        let resp = filter(Some("shipped_to=Nowhere"), &store);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await["detail"],
            "No orders found matching the shipping address"
        );
    }

    #[tokio::test]
    async fn test_filter_ignores_unknown_params() {
        let store = sample_store();
        let resp = filter(Some("currency=GBP&page=2"), &store);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_repeated_param_keeps_last_value() {
        let store = sample_store();
        let resp = filter(Some("currency=USD&currency=GBP"), &store);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["filters"]["currency"], "GBP");
        assert_eq!(body["orders"][0]["id"], GBP_ORDER_ID);

        let resp = sort(Some("sort=sideways&sort=descend"), &store);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sort_ascend_body() {
        let store = sample_store();
        let resp = sort(Some("sort=ascend"), &store);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["results"], 2);
        assert_eq!(body["sort_order"], "ascend");
        assert_eq!(body["orders"][0]["id"], USD_ORDER_ID);
    }

    #[tokio::test]
    async fn test_sort_invalid_or_missing_is_400() {
        let store = sample_store();
        assert_eq!(sort(Some("sort=sideways"), &store).status(), StatusCode::BAD_REQUEST);
        assert_eq!(sort(None, &store).status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sort_bad_timestamp_is_500() {
        let store = OrderStore::from_json(
            r#"[{"id": "01", "currency": "USD", "created_at": "not a date"}]"#,
        )
        .unwrap();
        let resp = sort(Some("sort=descend"), &store);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await["detail"],
            "Error sorting orders by timestamp"
        );
    }
}
