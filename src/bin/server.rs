//! REST API server for input masking.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! keymask-server
//!
//! # With custom port
//! keymask-server --port 8080
//! KEYMASK_PORT=8080 keymask-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::Query,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use keymask::{batch, format, FormatId, Region};

const DEFAULT_PORT: u16 = 3000;

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "keymask API",
        version = "0.1.0",
        description = "As-you-type input masking for national IDs, phone numbers, dates, currencies and technical codes. Masks reshape input; they do not validate check digits.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Formatting", description = "Masking endpoints"),
        (name = "Formats", description = "Supported format listing"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(format_value, format_batch, list_formats, health),
    components(schemas(
        FormatRequest,
        FormatResponse,
        BatchFormatRequest,
        BatchFormatResponse,
        FormatInfo,
        FormatListResponse,
        ErrorResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"format": "cpf", "value": "12345678901"}))]
struct FormatRequest {
    /// Format tag, e.g. "cpf", "phone-us", "currency-br". See GET /formats.
    format: String,
    /// Raw input. Any characters; those the format cannot contain are dropped.
    value: String,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"format": "cpf", "masked": "123.456.789-01"}))]
struct FormatResponse {
    /// Format tag that was applied
    format: String,
    /// Masked value
    masked: String,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"format": "phone-br", "values": ["11987654321", "1187654321"]}))]
struct BatchFormatRequest {
    /// Format tag applied to every value
    format: String,
    /// Raw inputs
    values: Vec<String>,
}

#[derive(Serialize, ToSchema)]
struct BatchFormatResponse {
    /// Format tag that was applied
    format: String,
    /// Masked values, in request order
    masked: Vec<String>,
}

#[derive(Deserialize, IntoParams)]
struct ListQuery {
    /// Only list formats of this region, e.g. "brazil", "latin-america"
    region: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct FormatInfo {
    /// Format tag
    id: String,
    /// Human-readable name
    name: String,
    /// Region tag
    region: String,
}

#[derive(Serialize, ToSchema)]
struct FormatListResponse {
    /// Number of formats listed
    count: usize,
    /// Formats in table order
    formats: Vec<FormatInfo>,
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    /// Human-readable error message
    error: String,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
    /// Number of supported formats
    formats: usize,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Mask one value
#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Masked value", body = FormatResponse),
        (status = 400, description = "Unknown format", body = ErrorResponse)
    ),
    tag = "Formatting"
)]
async fn format_value(Json(req): Json<FormatRequest>) -> Result<Json<FormatResponse>, ApiError> {
    let id = parse_format(&req.format)?;
    Ok(Json(FormatResponse {
        format: id.to_string(),
        masked: format(id, &req.value),
    }))
}

/// Mask many values with one format
#[utoipa::path(
    post,
    path = "/format/batch",
    request_body = BatchFormatRequest,
    responses(
        (status = 200, description = "Masked values", body = BatchFormatResponse),
        (status = 400, description = "Unknown format", body = ErrorResponse)
    ),
    tag = "Formatting"
)]
async fn format_batch(
    Json(req): Json<BatchFormatRequest>,
) -> Result<Json<BatchFormatResponse>, ApiError> {
    let id = parse_format(&req.format)?;
    tracing::debug!(format = %id, count = req.values.len(), "formatting batch");
    Ok(Json(BatchFormatResponse {
        format: id.to_string(),
        masked: batch::format_batch(id, &req.values),
    }))
}

/// List supported formats
#[utoipa::path(
    get,
    path = "/formats",
    params(ListQuery),
    responses(
        (status = 200, description = "Supported formats", body = FormatListResponse),
        (status = 400, description = "Unknown region", body = ErrorResponse)
    ),
    tag = "Formats"
)]
async fn list_formats(Query(query): Query<ListQuery>) -> Result<Json<FormatListResponse>, ApiError> {
    let region = match query.region.as_deref() {
        Some(tag) => Some(Region::from_tag(tag).ok_or_else(|| {
            bad_request(format!("unknown region '{}'", tag.escape_default()))
        })?),
        None => None,
    };

    let formats: Vec<FormatInfo> = FormatId::ALL
        .iter()
        .filter(|id| region.map_or(true, |r| id.region() == r))
        .map(|id| FormatInfo {
            id: id.as_str().to_string(),
            name: id.name().to_string(),
            region: id.region().tag().to_string(),
        })
        .collect();

    Ok(Json(FormatListResponse {
        count: formats.len(),
        formats,
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        formats: FormatId::COUNT,
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

fn parse_format(tag: &str) -> Result<FormatId, ApiError> {
    tag.parse::<FormatId>().map_err(|e| {
        tracing::warn!(error = %e, "rejected request");
        bad_request(e.to_string())
    })
}

/// `--port N` wins over `KEYMASK_PORT`.
fn port() -> u16 {
    std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .or_else(|| std::env::var("KEYMASK_PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/format", post(format_value))
        .route("/format/batch", post(format_batch))
        .route("/formats", get(list_formats))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await
}
