use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/guests`.
///
/// Every field is optional at the wire level so that a missing field surfaces
/// as a validation error naming the field, not as a JSON decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateGuestRequest {
    pub line_user_id: Option<String>,
    pub host_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    /// Visit date, kept as free-form text.
    pub date: Option<String>,
    pub arrival_time: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// A persisted guest visit, as returned by `POST /api/guests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: i64,
    pub line_user_id: String,
    pub host_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub visit_date: String,
    pub arrival_time: Option<String>,
    pub created_at: String,
}

/// One row of `GET /api/guests/by-host/:hostName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostGuestEntry {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub date: String,
    pub arrival_time: Option<String>,
}

/// One row of `GET /api/guests/by-date/:date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateGuestEntry {
    pub host_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub arrival_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// Tests
// ============================================================================
