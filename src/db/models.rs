use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One sensor sample as reported by the device. Append-only: rows are
/// never updated or deleted, and `timestamp` is assigned by the server at
/// insert time.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SensorReading {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Relay actuator state: 0 = off, 1 = on
    pub relay_status: i32,
    pub timestamp: DateTime<Utc>,
}

/// One alert-boundary pair. Append-only; the authoritative pair is the row
/// with the highest `id`, older rows remain as history.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Threshold {
    pub id: i32,
    pub temp_threshold: f64,
    pub humidity_threshold: f64,
}

/// Credential row. `password` holds a bcrypt hash and is never serialized
/// into a response. This service only reads users, it never creates them.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
}
