// Shared fixture dataset for order query tests

use super::store::OrderStore;

pub const USD_ORDER_ID: &str = "5889b0a6797714883c501c23";
pub const GBP_ORDER_ID: &str = "5889b0a6664152cb6bccad04";

pub const SAMPLE_ORDERS: &str = r#"[
    {
        "created_at": "2016-01-17T17:02:25.660Z",
        "description": "Test order 1",
        "title": "fugiat magna Lorem aliquip qui",
        "customer": {
            "billing_address": {
                "postcode": "MO73 2ID",
                "county": "Westmorland",
                "city": "Oley",
                "street": "124 Veranda Place"
            },
            "shipping_address": {
                "postcode": "MO73 2ID",
                "county": "Westmorland",
                "city": "Oley",
                "street": "124 Veranda Place"
            },
            "phone": "+447482939767",
            "email": "ingrid.rios@example.com",
            "name": {"last": "Rios", "first": "Ingrid"}
        },
        "currency": "USD",
        "price": "0.33",
        "url": "https://example.com/products/5889b0a6797714883c501c23",
        "index": 13,
        "uuid": "30906bb3-ff12-4517-a9ea-71bb2ed79c0e",
        "id": "5889b0a6797714883c501c23"
    },
    {
        "created_at": "2016-11-22T13:06:15.868Z",
        "description": "Test order 2",
        "title": "duis tempor consectetur aute nisi",
        "customer": {
            "billing_address": {
                "postcode": "SD97 6AZ",
                "county": "Staffordshire",
                "city": "Hardyville",
                "street": "98 Harman Street"
            },
            "shipping_address": {
                "postcode": "SD97 6AZ",
                "county": "Staffordshire",
                "city": "Hardyville",
                "street": "98 Harman Street"
            },
            "phone": "+447748253848",
            "email": "elaine.velazquez@example.com",
            "name": {"last": "Velazquez", "first": "Elaine"}
        },
        "currency": "GBP",
        "price": "2.96",
        "url": "https://example.com/products/5889b0a6664152cb6bccad04",
        "index": 14,
        "uuid": "08274ee9-72e0-4a3f-a9dd-3507e87c7430",
        "id": "5889b0a6664152cb6bccad04"
    }
]"#;

pub fn sample_store() -> OrderStore {
    OrderStore::from_json(SAMPLE_ORDERS).expect("fixture orders are valid JSON")
}
