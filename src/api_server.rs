// Axum API Server Module
//
// Purpose: REST endpoints for soil analysis and crop advice

#[cfg(feature = "api")]
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use crate::analysis::{SoilAnalyzer, SoilReport};

#[cfg(feature = "api")]
use crate::catalog;

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::error::ValidationError;

#[cfg(feature = "api")]
use crate::types::{CropRecommendations, SoilAnalysisResult, SoilFormData, SoilType};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub analyzer: SoilAnalyzer,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing soil analyzer...");
        let analyzer = config.build_analyzer()?;
        Ok(Self { analyzer })
    }

    /// State with no composition source; every analysis is estimated.
    pub fn offline() -> Self {
        Self {
            analyzer: SoilAnalyzer::offline(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Soil analysis
        .route("/api/soil/analyze", get(analyze_query).post(analyze))
        .route("/api/soil/report", post(report))
        .route("/api/soil-types", get(list_soil_types))

        // Crop advice
        // IMPORTANT: recommend route must come before :soil_type route
        .route("/api/crops/recommend", post(recommend_crops))
        .route("/api/crops/:soil_type", get(get_crops))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<SoilFormData>, JsonRejection>,
) -> Result<Json<SoilAnalysisResult>, AppError> {
    let Json(form) = payload?;
    let result = state.analyzer.analyze(&form).await?;
    Ok(Json(result))
}

#[cfg(feature = "api")]
async fn analyze_query(
    State(state): State<AppState>,
    params: Result<Query<SoilFormData>, QueryRejection>,
) -> Result<Json<SoilAnalysisResult>, AppError> {
    let Query(form) = params?;
    let result = state.analyzer.analyze(&form).await?;
    Ok(Json(result))
}

#[cfg(feature = "api")]
async fn report(
    State(state): State<AppState>,
    payload: Result<Json<SoilFormData>, JsonRejection>,
) -> Result<Json<SoilReport>, AppError> {
    let Json(form) = payload?;
    let report = state.analyzer.report(&form).await?;
    Ok(Json(report))
}

#[cfg(feature = "api")]
async fn recommend_crops(
    payload: Result<Json<CropRequest>, JsonRejection>,
) -> Result<Json<CropRecommendations>, AppError> {
    let Json(request) = payload?;
    Ok(Json(catalog::recommend_for_label(&request.soil_type)))
}

#[cfg(feature = "api")]
async fn get_crops(Path(soil_type): Path<String>) -> Json<CropRecommendations> {
    Json(catalog::recommend_for_label(&soil_type))
}

#[cfg(feature = "api")]
async fn list_soil_types() -> Json<serde_json::Value> {
    let data: Vec<serde_json::Value> = SoilType::ALL
        .iter()
        .filter(|t| **t != SoilType::Unknown)
        .map(|t| {
            serde_json::json!({
                "soilType": t,
                "description": catalog::description(*t),
            })
        })
        .collect();

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CropRequest {
    soil_type: String,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    Validation(ValidationError),
    BadRequest(String),
}

#[cfg(feature = "api")]
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

#[cfg(feature = "api")]
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(feature = "api")]
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::Validation(err) => {
                tracing::debug!("Rejected request: {}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    serde_json::json!({
                        "error": err.to_string(),
                        "field": err.field(),
                    }),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": msg
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
