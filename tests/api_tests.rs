// HTTP facade tests - drive the router in-process with tower's oneshot

#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use neighborhood_match::{
    create_router, AppState, LatencyProfile, NeighborhoodStore, QueryService,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

fn app() -> Router {
    create_router(AppState::seeded())
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, json_response(response).await)
}

async fn post_search(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/neighborhoods/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, json_response(response).await)
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

// =========================================================================
// Health
// =========================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(app(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Neighborhood API is running");

    let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

// =========================================================================
// List
// =========================================================================

#[tokio::test]
async fn test_list_neighborhoods() {
    let (status, body) = get(app(), "/api/neighborhoods").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 7);
    assert_eq!(body["data"].as_array().unwrap().len(), 7);
    assert_eq!(
        names(&body),
        vec!["Bandra West", "Andheri East", "Powai", "Colaba", "Juhu", "Lower Parel", "Malad West"]
    );
    assert!(body.get("message").is_none());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_list_record_shape() {
    let (_, body) = get(app(), "/api/neighborhoods").await;
    let bandra = &body["data"][0];

    assert_eq!(bandra["id"], "1");
    assert_eq!(bandra["city"], "Mumbai");
    assert_eq!(bandra["state"], "Maharashtra");
    assert_eq!(bandra["matchScore"], 95);
    assert_eq!(bandra["nightlifeScore"], 95);
    assert_eq!(bandra["image"], "/bandra.jpg");
    assert_eq!(
        bandra["highlights"],
        json!(["Seaside promenade", "Cafes", "Nightlife", "Shopping"])
    );
    assert_eq!(
        bandra["demographics"],
        json!({"medianAge": 32, "medianIncome": "₹22,00,000", "population": "150,000"})
    );
    assert_eq!(bandra["cons"], json!(["Expensive", "Traffic", "Noisy"]));
}

#[tokio::test]
async fn test_list_uses_injected_store() {
    let mut record = neighborhood_match::seed::records()[2].clone();
    record.id = "only".to_string();
    let store = NeighborhoodStore::from_records(vec![record]).unwrap();
    let state = AppState::new(QueryService::new(Arc::new(store)), LatencyProfile::off());

    let (status, body) = get(create_router(state), "/api/neighborhoods").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], "only");
}

// =========================================================================
// Get by id
// =========================================================================

#[tokio::test]
async fn test_get_neighborhood_by_id() {
    let (status, body) = get(app(), "/api/neighborhoods/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Powai");
    assert!(body.get("count").is_none());
}

#[tokio::test]
async fn test_get_neighborhood_not_found() {
    let (status, body) = get(app(), "/api/neighborhoods/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Neighborhood not found"}));
}

#[tokio::test]
async fn test_get_search_path_is_an_id_lookup() {
    let (status, body) = get(app(), "/api/neighborhoods/search").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Neighborhood not found");
}

// =========================================================================
// Search
// =========================================================================

#[tokio::test]
async fn test_search_empty_preferences() {
    let (status, body) = post_search(app(), r#"{"preferences": {}}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 7);
    assert_eq!(
        names(&body),
        vec!["Bandra West", "Powai", "Andheri East", "Juhu", "Colaba", "Lower Parel", "Malad West"]
    );
}

#[tokio::test]
async fn test_search_min_walkability() {
    let (status, body) = post_search(app(), r#"{"preferences": {"minWalkability": 90}}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(names(&body), vec!["Bandra West"]);
}

#[tokio::test]
async fn test_search_max_cost() {
    let (_, body) = post_search(app(), r#"{"preferences": {"maxCost": 50}}"#).await;

    assert_eq!(body["count"], 3);
    assert_eq!(names(&body), vec!["Bandra West", "Juhu", "Colaba"]);
}

#[tokio::test]
async fn test_search_combined_filters() {
    let (_, body) = post_search(
        app(),
        r#"{"preferences": {"minWalkability": 82, "minSafety": 80, "maxCost": 55}}"#,
    )
    .await;

    // Bandra (92/80/50), Powai (85/82/55), Juhu (82/80/48)
    assert_eq!(names(&body), vec!["Bandra West", "Powai", "Juhu"]);
}

#[tokio::test]
async fn test_search_no_matches_is_success() {
    let (status, body) = post_search(app(), r#"{"preferences": {"minSafety": 99}}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_search_tolerates_malformed_bodies() {
    let bodies = [
        "",
        "{",
        "[]",
        r#"{"preferences": 12}"#,
        r#"{"preferences": {"minWalkability": "high"}}"#,
    ];
    for raw in bodies {
        let (status, body) = post_search(app(), raw).await;

        assert_eq!(status, StatusCode::OK, "body {:?}", raw);
        assert_eq!(body["count"], 7, "body {:?}", raw);
    }
}

#[tokio::test]
async fn test_search_ignores_unhonored_preferences() {
    let (_, body) = post_search(
        app(),
        r#"{"preferences": {
            "minNightlife": 100, "minFamily": 100, "minTransit": 100,
            "minGreen": 100, "minDiversity": 100
        }}"#,
    )
    .await;

    assert_eq!(body["count"], 7);
}

#[tokio::test]
async fn test_search_with_simulated_latency() {
    let latency = LatencyProfile::uniform(std::time::Duration::from_millis(20));
    let app = create_router(AppState::new(QueryService::seeded(), latency));

    let started = std::time::Instant::now();
    let (status, _) = post_search(app, r#"{"preferences": {}}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= std::time::Duration::from_millis(20));
}

// =========================================================================
// Fallbacks and CORS
// =========================================================================

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get(app(), "/api/towns").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Route not found"}));
}

#[tokio::test]
async fn test_trailing_slash_matches_route() {
    let (status, body) = get(app(), "/api/neighborhoods/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 7);

    let (status, body) = get(app(), "/api/neighborhoods/3/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Powai");

    let (status, body) = get(app(), "/api/health/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Neighborhood API is running");
}

#[tokio::test]
async fn test_wrong_method_is_route_not_found() {
    for (method, uri) in [
        (Method::PUT, "/api/neighborhoods"),
        (Method::DELETE, "/api/neighborhoods/3"),
        (Method::PATCH, "/api/neighborhoods/search"),
        (Method::POST, "/api/health"),
    ] {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(
            json_response(response).await,
            json!({"success": false, "message": "Route not found"})
        );
    }
}

#[tokio::test]
async fn test_cors_headers_present() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/neighborhoods")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
