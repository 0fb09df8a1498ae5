// 🌐 HTTP API - JSON endpoints over the numerology engine
// Each request is independent; the engine is shared read-only

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::analysis::{NumerologyEngine, Reading};
use crate::report::render_report;
use crate::tables::{hebrew_sign, number_trait, path_definition};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<NumerologyEngine>,
}

impl AppState {
    pub fn new(engine: NumerologyEngine) -> Self {
        AppState {
            engine: Arc::new(engine),
        }
    }
}

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub name: String,
    pub birth_date: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub report: String,
    pub reading: Reading,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/report - Generate a report for one person
async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Response {
    match state.engine.analyze(&request.name, &request.birth_date) {
        Ok(reading) => {
            let response = ReportResponse {
                id: uuid::Uuid::new_v4().to_string(),
                generated_at: Utc::now(),
                report: render_report(&reading),
                reading,
            };
            debug!(id = %response.id, "report generated");
            (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<ReportResponse>::error(e.report_line())),
        )
            .into_response(),
    }
}

fn not_found(what: &str, key: u32) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(format!("{} {} não mapeado", what, key))),
    )
        .into_response()
}

fn bad_key(rejection: PathRejection) -> Response {
    (
        rejection.status(),
        Json(ApiResponse::<()>::error(rejection.body_text())),
    )
        .into_response()
}

/// GET /api/paths/:number - Tree-of-life path (11-32)
async fn get_path(number: Result<Path<u32>, PathRejection>) -> Response {
    let Path(number) = match number {
        Ok(number) => number,
        Err(rejection) => return bad_key(rejection),
    };
    match path_definition(number) {
        Some(path) => Json(ApiResponse::ok(path)).into_response(),
        None => not_found("Caminho", number),
    }
}

/// GET /api/signs/:month - Hebrew sign for a month index (1-13)
async fn get_sign(month: Result<Path<u32>, PathRejection>) -> Response {
    let Path(month) = match month {
        Ok(month) => month,
        Err(rejection) => return bad_key(rejection),
    };
    match hebrew_sign(month) {
        Some(sign) => Json(ApiResponse::ok(sign)).into_response(),
        None => not_found("Mês", month),
    }
}

/// GET /api/traits/:number - Number traits (1-9)
async fn get_trait(number: Result<Path<u32>, PathRejection>) -> Response {
    let Path(number) = match number {
        Ok(number) => number,
        Err(rejection) => return bad_key(rejection),
    };
    match number_trait(number) {
        Some(t) => Json(ApiResponse::ok(t)).into_response(),
        None => not_found("Número", number),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/report", post(create_report))
        .route("/paths/:number", get(get_path))
        .route("/signs/:month", get(get_sign))
        .route("/traits/:number", get(get_trait))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
