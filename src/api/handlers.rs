use axum::{extract::State, http::StatusCode, Form, Json};
use sqlx::PgPool;
use utoipa::OpenApi;

use super::{
    dto::{
        LoginRequest, LoginResponse, NewReadingRequest, SensorReadingDto, SetThresholdsRequest,
        ThresholdDto,
    },
    errors::ApiError,
};
use crate::db::models::{SensorReading, Threshold, User};

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// Fetch the 30 most recent readings, oldest first.
#[utoipa::path(
    get,
    path = "/readings",
    responses(
        (status = 200, description = "Most recent readings in ascending time order", body = Vec<SensorReadingDto>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "readings"
)]
pub async fn get_readings(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<SensorReadingDto>>, ApiError> {
    let mut rows: Vec<SensorReading> = sqlx::query_as(
        "SELECT temperature, humidity, relay_status, timestamp \
         FROM sensor_data \
         ORDER BY timestamp DESC \
         LIMIT 30",
    )
    .fetch_all(&pool)
    .await?;

    // Newest-first out of the database, oldest-first on the wire.
    rows.reverse();

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Ingest one reading. The row's timestamp is assigned by the database.
#[utoipa::path(
    post,
    path = "/readings",
    request_body = NewReadingRequest,
    responses(
        (status = 200, description = "Reading persisted"),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "readings"
)]
pub async fn insert_reading(
    State(pool): State<PgPool>,
    Json(body): Json<NewReadingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(temperature), Some(humidity), Some(relay_status)) =
        (body.temperature, body.humidity, body.relay_status)
    else {
        return Err(ApiError::BadRequest("Missing required fields"));
    };

    sqlx::query(
        "INSERT INTO sensor_data (temperature, humidity, relay_status, timestamp) \
         VALUES ($1, $2, $3, now())",
    )
    .bind(temperature)
    .bind(humidity)
    .bind(relay_status)
    .execute(&pool)
    .await?;

    Ok(Json(serde_json::json!({ "status": "success" })))
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Fetch the currently authoritative threshold pair, i.e. the most recently
/// inserted row. Returns JSON `null` when none has been configured yet.
#[utoipa::path(
    get,
    path = "/thresholds",
    responses(
        (status = 200, description = "Latest threshold pair, or null", body = ThresholdDto),
        (status = 500, description = "Internal server error"),
    ),
    tag = "thresholds"
)]
pub async fn get_thresholds(
    State(pool): State<PgPool>,
) -> Result<Json<Option<ThresholdDto>>, ApiError> {
    let row: Option<Threshold> = sqlx::query_as(
        "SELECT id, temp_threshold, humidity_threshold \
         FROM thresholds \
         ORDER BY id DESC \
         LIMIT 1",
    )
    .fetch_optional(&pool)
    .await?;

    Ok(Json(row.map(Into::into)))
}

/// Append a new threshold pair. Older pairs are kept as history; readers
/// only ever see the newest row.
#[utoipa::path(
    post,
    path = "/thresholds",
    request_body = SetThresholdsRequest,
    responses(
        (status = 200, description = "Threshold pair persisted"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "thresholds"
)]
pub async fn set_thresholds(
    State(pool): State<PgPool>,
    Json(body): Json<SetThresholdsRequest>,
) -> Result<StatusCode, ApiError> {
    sqlx::query("INSERT INTO thresholds (temp_threshold, humidity_threshold) VALUES ($1, $2)")
        .bind(body.temp_threshold)
        .bind(body.humidity_threshold)
        .execute(&pool)
        .await?;

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// One-shot credential check. Form-encoded in, JSON out; the verdict lives
/// in the body and the status is always 200. No session or token is issued.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Credential check verdict", body = LoginResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "auth"
)]
pub async fn login(
    State(pool): State<PgPool>,
    Form(body): Form<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Ok(Json(LoginResponse::failure("Missing email or password")));
    }

    let user: Option<User> =
        sqlx::query_as("SELECT id, email, password FROM users WHERE email = $1")
            .bind(&body.email)
            .fetch_optional(&pool)
            .await?;

    let Some(user) = user else {
        return Ok(Json(LoginResponse::failure("User not found")));
    };

    match bcrypt::verify(&body.password, &user.password) {
        Ok(true) => Ok(Json(LoginResponse {
            success: true,
            message: "Login successful".to_owned(),
            user_id: Some(user.id),
        })),
        Ok(false) => Ok(Json(LoginResponse::failure("Incorrect password"))),
        Err(e) => {
            // Stored hash is not parseable bcrypt; indistinguishable from a
            // wrong password as far as the caller is concerned.
            tracing::error!(user_id = user.id, error = %e, "invalid stored password hash");
            Ok(Json(LoginResponse::failure("Incorrect password")))
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(get_readings, insert_reading, get_thresholds, set_thresholds, login, health),
    components(schemas(
        SensorReadingDto,
        NewReadingRequest,
        ThresholdDto,
        SetThresholdsRequest,
        LoginRequest,
        LoginResponse,
    )),
    tags(
        (name = "readings",   description = "Sensor reading endpoints"),
        (name = "thresholds", description = "Alert threshold endpoints"),
        (name = "auth",       description = "Credential check"),
        (name = "system",     description = "System endpoints"),
    ),
    info(
        title = "Telemetry Service API",
        version = "0.1.0",
        description = "REST API for device telemetry ingestion and retrieval"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
