use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SensorReadingDto {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// 0 = relay off, 1 = relay on
    pub relay_status: i32,
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /readings`.
///
/// All three fields are required; a payload missing any of them is rejected
/// before touching the database. Non-numeric values fail deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewReadingRequest {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub relay_status: Option<i32>,
}

/// Request body for `POST /thresholds`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetThresholdsRequest {
    pub temp_threshold: f64,
    pub humidity_threshold: f64,
}

/// The most recently configured alert-boundary pair.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThresholdDto {
    pub temp_threshold: f64,
    pub humidity_threshold: f64,
}

/// Form body for `POST /login`. Fields default to empty so a missing field
/// and an empty one take the same rejection path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response body for `POST /login`. The verdict is carried in the body;
/// the endpoint always answers 200.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

impl LoginResponse {
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_owned(),
            user_id: None,
        }
    }
}

impl From<crate::db::models::SensorReading> for SensorReadingDto {
    fn from(r: crate::db::models::SensorReading) -> Self {
        Self {
            temperature: r.temperature,
            humidity: r.humidity,
            relay_status: r.relay_status,
            timestamp: r.timestamp,
        }
    }
}

impl From<crate::db::models::Threshold> for ThresholdDto {
    fn from(t: crate::db::models::Threshold) -> Self {
        Self {
            temp_threshold: t.temp_threshold,
            humidity_threshold: t.humidity_threshold,
        }
    }
}
