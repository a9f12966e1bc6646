// HTTP Facade - maps the query service onto /api routes
//
// Every response uses the shared envelope. Errors are converted at this
// boundary; the query service itself never fails for business conditions.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::LatencyProfile;
use crate::envelope::ApiResponse;
use crate::error::{
    ApiError, INTERNAL_MESSAGE, LIST_FAILED_MESSAGE, LOOKUP_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE,
};
use crate::preferences::SearchRequest;
use crate::query::QueryService;

pub const HEALTH_MESSAGE: &str = "Neighborhood API is running";

/// `error` member of a panic response; the panic payload itself stays in the logs
pub const PANIC_DIAGNOSTIC: &str = "unexpected fault while handling request";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: QueryService,
    pub latency: LatencyProfile,
}

impl AppState {
    pub fn new(service: QueryService, latency: LatencyProfile) -> Self {
        AppState { service, latency }
    }

    /// Seed dataset, no artificial latency
    pub fn seeded() -> Self {
        Self::new(QueryService::seeded(), LatencyProfile::off())
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    Json(ApiResponse::status(HEALTH_MESSAGE, timestamp))
}

/// GET /api/neighborhoods - Every neighborhood in store order
async fn list_neighborhoods(State(state): State<AppState>) -> Response {
    simulate_latency(state.latency.list).await;

    let records = state.service.get_all();
    tracing::debug!(count = records.len(), "Listing neighborhoods");

    Json(ApiResponse::counted(records, records.len())).into_response()
}

fn lookup(state: &AppState, id: &str) -> Result<Response, ApiError> {
    match state.service.get_by_id(id) {
        Ok(record) => Ok(Json(ApiResponse::ok(record)).into_response()),
        Err(e) => {
            tracing::debug!(%id, "Neighborhood lookup missed");
            Err(e.into())
        }
    }
}

/// GET /api/neighborhoods/:id - Single neighborhood
async fn get_neighborhood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    lookup(&state, &id)
}

/// GET /api/neighborhoods/search - `search` treated as an id
async fn get_search_as_id(State(state): State<AppState>) -> Result<Response, ApiError> {
    lookup(&state, "search")
}

/// POST /api/neighborhoods/search - Filter by preferences, rank by match score
async fn search_neighborhoods(State(state): State<AppState>, body: Bytes) -> Response {
    let preferences = SearchRequest::from_body(&body).preferences;

    let unhonored = preferences.unhonored_fields();
    if !unhonored.is_empty() {
        tracing::debug!(
            ?unhonored,
            "Search preferences include fields that do not filter"
        );
    }

    simulate_latency(state.latency.search).await;

    let result = state.service.search(&preferences);
    tracing::debug!(?preferences, count = result.count(), "Search complete");

    Json(ApiResponse::counted(&result.records, result.count())).into_response()
}

/// Any unmatched path
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Panic handler answering with a 500 envelope carrying `message`.
/// The payload is logged, never returned.
fn panic_response(
    message: &'static str,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |payload| {
        tracing::error!(detail = %panic_detail(payload.as_ref()), "Handler panicked");
        ApiError::internal_with(message, PANIC_DIAGNOSTIC).into_response()
    }
}

/// Last-resort handler for panics outside a route-specific layer
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    panic_response(INTERNAL_MESSAGE)(payload)
}

// ============================================================================
// Router
// ============================================================================

/// Routes accept a trailing slash, and a wrong method is answered like an
/// unknown route.
pub fn create_router(state: AppState) -> Router {
    let health = get(health_check).fallback(route_not_found);
    let list = get(list_neighborhoods)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response(LIST_FAILED_MESSAGE)));
    let search = post(search_neighborhoods)
        .get(get_search_as_id)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response(SEARCH_FAILED_MESSAGE)));
    let lookup = get(get_neighborhood)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response(LOOKUP_FAILED_MESSAGE)));

    let api_routes = Router::new()
        .route("/health", health.clone())
        .route("/health/", health)
        .route("/neighborhoods", list.clone())
        .route("/neighborhoods/", list)
        .route("/neighborhoods/search", search.clone())
        .route("/neighborhoods/search/", search)
        .route("/neighborhoods/:id", lookup.clone())
        .route("/neighborhoods/:id/", lookup)
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
