use app::api_impl::{build_validation_response, failure_response};
use app::areas::get_all_areas;
use app::config::AppConfig;
use app::report::log_area_report;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

pub const VALIDATE_AREAS_PATH: &str = "/api/areas/validate";

#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<AppConfig>,
}

/// JSON API router. Panics inside handlers become the generic 500 payload.
pub fn area_api_router(config: Arc<AppConfig>) -> Router {
    let router = Router::new().route(VALIDATE_AREAS_PATH, get(validate_areas));
    with_panic_boundary(router).with_state(ApiState { config })
}

/// Wrap every route of `router` so a panicking handler answers with the
/// generic 500 payload instead of dropping the connection.
pub fn with_panic_boundary<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(CatchPanicLayer::custom(panic_response))
}

pub async fn validate_areas(State(state): State<ApiState>) -> Response {
    if state.config.log_area_report {
        log_area_report(get_all_areas());
    }

    match build_validation_response() {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            error!("エリア定義の検証中にエラーが発生しました: {}", e);
            internal_error()
        }
    }
}

pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "panic payload not string".to_string());
    error!(panic = %detail, "Area API handler panicked");
    internal_error()
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(failure_response())).into_response()
}
