//! API Client Tests
//!
//! Each test serves a small fake backend with axum on an ephemeral port and
//! points a real client at it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use super::*;
use crate::domain::{NewComment, Platform};

const ORDER_ID: &str = "6f1c2a8e-3b4d-4f5a-9c7e-1a2b3c4d5e6f";

type Seen = Arc<Mutex<Vec<String>>>;

async fn serve(api: Router) -> ApiClient {
    serve_with_timeout(api, Duration::from_secs(5)).await
}

async fn serve_with_timeout(api: Router, timeout: Duration) -> ApiClient {
    let app = Router::new().nest("/api/v1", api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake backend stopped");
    });

    let config = ApiConfig::new(&format!("http://{}", addr)).with_timeout(timeout);
    ApiClient::new(&config).expect("Failed to build client")
}

fn order_row() -> Value {
    json!({
        "id": ORDER_ID,
        "order_number": "1001",
        "platform": "falabella",
        "current_status": "listo_despachar",
        "customer_name": "Juan Soto",
        "shipping_city": "Valparaíso",
        "limite_despacho": "2026-10-16T15:00:00+00:00",
        "is_delayed": true,
        "hours_delayed": 4
    })
}

#[tokio::test]
async fn test_today_decodes_orders() {
    let client = serve(Router::new().route("/orders/today", get(|| async { Json(json!([order_row()])) }))).await;

    let orders = client.orders().today().await.expect("today should succeed");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].platform, Platform::Falabella);
    assert_eq!(orders[0].hours_delayed, Some(4.0));
}

#[tokio::test]
async fn test_list_sends_clamped_page() {
    let seen: Seen = Arc::default();
    let api = Router::new()
        .route(
            "/orders",
            get(|State(seen): State<Seen>, RawQuery(query): RawQuery| async move {
                seen.lock().unwrap().push(query.unwrap_or_default());
                Json(json!([]))
            }),
        )
        .with_state(seen.clone());
    let client = serve(api).await;

    let orders = client
        .orders()
        .list(OrderPage { limit: 900, offset: 20 })
        .await
        .expect("list should succeed");

    assert!(orders.is_empty());
    assert_eq!(seen.lock().unwrap().as_slice(), ["limit=500&offset=20"]);
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let api = Router::new().route(
        "/orders/{id}",
        get(|Path(id): Path<String>| async move {
            if id == ORDER_ID {
                (StatusCode::OK, Json(order_row()))
            } else {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": "Order not found" })))
            }
        }),
    );
    let client = serve(api).await;

    let found = client.orders().get(Uuid::parse_str(ORDER_ID).unwrap()).await;
    assert!(found.is_ok());

    let missing = client.orders().get(Uuid::nil()).await;
    match missing {
        Err(ApiError::NotFound(body)) => assert!(body.contains("Order not found")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let api = Router::new().route(
        "/orders/delayed",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let client = serve(api).await;

    let err = client.orders().delayed().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    match err {
        ApiError::Server { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_comment_posts_json_body() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let api = Router::new()
        .route(
            "/comments",
            post(|State(seen): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body.clone());
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "id": Uuid::nil(),
                        "order_id": body["order_id"],
                        "comment": body["comment"],
                        "user_name": body["user_name"],
                        "created_at": "2026-10-16T12:00:00+00:00"
                    })),
                )
            }),
        )
        .with_state(seen.clone());
    let client = serve(api).await;

    let order_id = Uuid::parse_str(ORDER_ID).unwrap();
    let created = client
        .comments()
        .create(&NewComment {
            order_id,
            comment: "Cliente pide retiro en tienda".into(),
            user_name: "Usuario".into(),
        })
        .await
        .expect("create should succeed");

    assert_eq!(created.order_id, order_id);
    assert_eq!(created.user_name, "Usuario");
    let bodies = seen.lock().unwrap();
    assert_eq!(bodies[0]["comment"], "Cliente pide retiro en tienda");
    assert_eq!(bodies[0]["order_id"], ORDER_ID);
}

#[tokio::test]
async fn test_stats_error_field_is_a_failure() {
    let api = Router::new().route(
        "/dashboard/stats",
        get(|| async { Json(json!({ "error": "db offline", "orders_today": 0, "orders_delayed": 0 })) }),
    );
    let client = serve(api).await;

    match client.dashboard().stats().await {
        Err(ApiError::Decode(reason)) => assert_eq!(reason, "db offline"),
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_stats_success() {
    let api = Router::new().route(
        "/dashboard/stats",
        get(|| async { Json(json!({ "orders_today": 12, "orders_delayed": 3, "orders_ready_to_ship": 7 })) }),
    );
    let client = serve(api).await;

    let stats = client.dashboard().stats().await.expect("stats should succeed");
    assert_eq!(stats.orders_today, 12);
    assert_eq!(stats.orders_delayed, 3);
    assert_eq!(stats.orders_ready_to_ship, 7);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let api = Router::new().route("/tickets", get(|| async { "<html>maintenance</html>" }));
    let client = serve(api).await;

    assert!(matches!(client.tickets().all().await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let api = Router::new().route(
        "/orders/at-risk",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!([]))
        }),
    );
    let client = serve_with_timeout(api, Duration::from_millis(200)).await;

    match client.orders().at_risk().await {
        Err(ApiError::Timeout(after)) => assert_eq!(after, Duration::from_millis(200)),
        other => panic!("expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sync_trigger() {
    let api = Router::new().route(
        "/sync/falabella",
        post(|| async { Json(json!({ "message": "Falabella sync completed", "result": { "synced": 4 } })) }),
    );
    let client = serve(api).await;

    let report = client.sync().falabella().await.expect("sync should succeed");
    assert_eq!(report.message, "Falabella sync completed");
    assert_eq!(report.result["synced"], 4);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9 of the loopback interface.
    let client = ApiClient::new(&ApiConfig::new("http://127.0.0.1:9")).unwrap();
    assert!(matches!(client.tickets().all().await, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_slow_body_counts_against_the_same_timeout() {
    use axum::body::Body;
    use futures::StreamExt;

    // Headers and the first chunk arrive at once, the rest after 300 ms
    let api = Router::new().route(
        "/orders/today",
        get(|| async {
            let head = futures::stream::iter([Ok::<_, std::io::Error>("[")]);
            let tail = futures::stream::once(async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Ok::<_, std::io::Error>("]")
            });
            Body::from_stream(head.chain(tail))
        }),
    );
    let client = serve_with_timeout(api, Duration::from_millis(200)).await;

    match client.orders().today().await {
        Err(ApiError::Timeout(after)) => assert_eq!(after, Duration::from_millis(200)),
        other => panic!("expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_deadline_covers_every_stage() {
    let timeout = Duration::from_millis(200);
    // Two stages, each shorter than the deadline, together longer
    let staged = async {
        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        "done"
    };

    let raced = race_deadline(staged, tokio::time::sleep(timeout), timeout).await;
    assert!(matches!(raced, Err(ApiError::Timeout(after)) if after == timeout));

    let quick = race_deadline(async { "done" }, tokio::time::sleep(timeout), timeout).await;
    assert_eq!(quick.unwrap(), "done");
}
