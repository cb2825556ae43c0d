//! API integration tests: drive the full router with in-memory dashboard
//! data and assert on the JSON the front-end would consume.

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use shoplytics_backend::app::create_app;
use shoplytics_backend::datasets::DashboardData;
use shoplytics_backend::models::{
    CityCount, DailyAggregate, DailySpend, DashboardSummary, MonthlyOrderPoint, OrderRecord,
    ProductRanking, ReviewScoreCount, RfmEntry, StateCount, StatusCount,
};
use shoplytics_backend::state::AppState;

fn order(order_id: &str, approved_at: Option<&str>, payment_value: &str) -> OrderRecord {
    OrderRecord {
        order_id: order_id.into(),
        approved_at: approved_at
            .map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()),
        payment_value: BigDecimal::from_str(payment_value).unwrap(),
    }
}

fn rfm(customer_id: &str, recency: i64, frequency: u64, monetary: &str) -> RfmEntry {
    RfmEntry {
        customer_id: customer_id.into(),
        recency,
        frequency,
        monetary: BigDecimal::from_str(monetary).unwrap(),
    }
}

fn test_app() -> Router {
    let data = DashboardData {
        orders: vec![
            order("o1", Some("2018-01-01 10:00:00"), "50.00"),
            order("o1", Some("2018-01-01 11:00:00"), "25.00"),
            order("o2", Some("2018-01-02 09:00:00"), "100.00"),
            order("o3", None, "7.00"),
        ],
        monthly_orders: vec![
            MonthlyOrderPoint {
                month: "2018-01".into(),
                order_count: 2,
            },
            MonthlyOrderPoint {
                month: "2018-02".into(),
                order_count: 5,
            },
        ],
        best_products: vec![
            ProductRanking {
                product_category: "bed_bath_table".into(),
                order_count: 9417,
            },
            ProductRanking {
                product_category: "health_beauty".into(),
                order_count: 8836,
            },
        ],
        worst_products: vec![ProductRanking {
            product_category: "security_and_services".into(),
            order_count: 2,
        }],
        customers_by_city: vec![
            CityCount {
                customer_city: "sao paulo".into(),
                count: 15540,
            },
            CityCount {
                customer_city: "rio de janeiro".into(),
                count: 6882,
            },
        ],
        customers_by_state: vec![StateCount {
            customer_state: "SP".into(),
            count: 41746,
        }],
        order_status: vec![
            StatusCount {
                order_status: "shipped".into(),
                count: 1107,
            },
            StatusCount {
                order_status: "delivered".into(),
                count: 96478,
            },
        ],
        review_scores: vec![
            ReviewScoreCount {
                review_score: 1,
                count: 11424,
            },
            ReviewScoreCount {
                review_score: 5,
                count: 57328,
            },
        ],
        rfm: vec![
            rfm("c1", 5, 10, "500.00"),
            rfm("c2", 2, 3, "1000.00"),
            rfm("c3", 9, 7, "250.00"),
        ],
    };

    create_app(AppState {
        data: Arc::new(data),
    })
}

async fn get_json<T: DeserializeOwned>(app: Router, uri: &str) -> T {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_status(app: Router, uri: &str) -> StatusCode {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn health_returns_ok() {
    assert_eq!(get_status(test_app(), "/health").await, StatusCode::OK);
}

#[tokio::test]
async fn summary_reports_header_metrics() {
    let summary: DashboardSummary = get_json(test_app(), "/api/dashboard/summary").await;
    assert_eq!(summary.total_orders, 2);
    assert_eq!(
        summary.total_revenue,
        BigDecimal::from_str("175.00").unwrap()
    );
    assert_eq!(summary.currency, "BRL");
    assert_eq!(summary.meta.days, 2);
}

#[tokio::test]
async fn daily_orders_bucket_by_calendar_day() {
    let daily: Vec<DailyAggregate> = get_json(test_app(), "/api/dashboard/daily-orders").await;
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].day.to_string(), "2018-01-01");
    assert_eq!(daily[0].order_count, 1);
    assert_eq!(daily[0].total_value, BigDecimal::from_str("75.00").unwrap());
    assert_eq!(daily[1].day.to_string(), "2018-01-02");
    assert_eq!(daily[1].order_count, 1);
}

#[tokio::test]
async fn daily_spend_matches_daily_totals() {
    let daily: Vec<DailyAggregate> = get_json(test_app(), "/api/dashboard/daily-orders").await;
    let spend: Vec<DailySpend> = get_json(test_app(), "/api/dashboard/daily-spend").await;
    assert_eq!(daily.len(), spend.len());
    for (d, s) in daily.iter().zip(spend.iter()) {
        assert_eq!(d.day, s.day);
        assert_eq!(d.total_value, s.total_spend);
    }
}

#[tokio::test]
async fn monthly_orders_are_served_in_order() {
    let monthly: Vec<MonthlyOrderPoint> =
        get_json(test_app(), "/api/dashboard/monthly-orders").await;
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2018-01");
}

#[tokio::test]
async fn products_default_to_best_bucket() {
    let products: Vec<ProductRanking> = get_json(test_app(), "/api/products").await;
    assert_eq!(products[0].product_category, "bed_bath_table");
}

#[tokio::test]
async fn products_worst_bucket_and_limit() {
    let products: Vec<ProductRanking> =
        get_json(test_app(), "/api/products?bucket=worst&limit=1").await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_category, "security_and_services");
}

#[tokio::test]
async fn unknown_product_bucket_is_rejected() {
    assert_eq!(
        get_status(test_app(), "/api/products?bucket=mediocre").await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn city_limit_is_honored() {
    let cities: Vec<CityCount> = get_json(test_app(), "/api/customers/cities?limit=1").await;
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].customer_city, "sao paulo");
}

#[tokio::test]
async fn status_counts_are_descending() {
    let counts: Vec<StatusCount> = get_json(test_app(), "/api/orders/status").await;
    assert_eq!(counts[0].order_status, "delivered");
    assert!(counts[0].count >= counts[1].count);
}

#[tokio::test]
async fn rfm_ranks_recency_ascending_by_default() {
    let entries: Vec<RfmEntry> = get_json(test_app(), "/api/rfm?limit=2").await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].customer_id, "c2");
    assert_eq!(entries[1].customer_id, "c1");
}

#[tokio::test]
async fn rfm_ranks_monetary_descending() {
    let entries: Vec<RfmEntry> = get_json(test_app(), "/api/rfm?rank_by=monetary").await;
    assert_eq!(entries[0].customer_id, "c2");
    assert_eq!(entries[1].customer_id, "c1");
    assert_eq!(entries[2].customer_id, "c3");
}

#[tokio::test]
async fn unknown_rfm_rank_key_is_rejected() {
    assert_eq!(
        get_status(test_app(), "/api/rfm?rank_by=loyalty").await,
        StatusCode::BAD_REQUEST
    );
}
