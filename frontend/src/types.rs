//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Domain Types** - users, projects, assets as returned by the backend
//! - **Processing Types** - the jobs a project can run
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upload::AssetType;

// =============================================================================
// Domain Types
// =============================================================================

/// Authenticated user, from `GET users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Token pair returned by `POST auth/jwt/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub creation_time: String,
    #[serde(default)]
    pub modification_time: Option<String>,
    #[serde(default)]
    pub deletion_time: Option<String>,
    #[serde(default)]
    pub users_ids: Vec<String>,
    #[serde(default)]
    pub assets_ids: Vec<String>,
    #[serde(default)]
    pub processing_requests_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub project_id: String,
    pub creation_time: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Format a backend timestamp (`2024-01-31T09:15:00.123456`, with or
/// without offset) as `2024-01-31 09:15`. Unparseable input is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    match chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

// =============================================================================
// Processing Types
// =============================================================================

/// Kind of backend job a project can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProcessingType {
    Discovery,
    Simulation,
    WaitingTime,
    Optimization,
}

impl ProcessingType {
    pub const ALL: [ProcessingType; 4] = [
        ProcessingType::Discovery,
        ProcessingType::Simulation,
        ProcessingType::WaitingTime,
        ProcessingType::Optimization,
    ];

    /// Path segment under `/projects/:project_id/`.
    pub fn slug(&self) -> &'static str {
        match self {
            ProcessingType::Discovery => "discovery",
            ProcessingType::Simulation => "simulation",
            ProcessingType::WaitingTime => "waiting-time",
            ProcessingType::Optimization => "optimization",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingType::Discovery => "Discovery",
            ProcessingType::Simulation => "Simulation",
            ProcessingType::WaitingTime => "Waiting Time Analysis",
            ProcessingType::Optimization => "Optimization",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProcessingType::Discovery => "Discover a simulation model from an event log",
            ProcessingType::Simulation => "Simulate a business process model",
            ProcessingType::WaitingTime => "Analyze the causes of waiting times in an event log",
            ProcessingType::Optimization => "Search for resource allocations that improve a process",
        }
    }

    /// `type` value of the processing request.
    pub fn request_type(&self) -> &'static str {
        match self {
            ProcessingType::Discovery => "simulation_model_optimization_simod",
            ProcessingType::Simulation => "simulation_prosimos",
            ProcessingType::WaitingTime => "waiting_time_analysis_kronos",
            ProcessingType::Optimization => "simulation_model_optimization_optimos",
        }
    }

    /// Asset types the job takes as input, one asset of each.
    pub fn required_assets(&self) -> &'static [AssetType] {
        match self {
            ProcessingType::Discovery | ProcessingType::WaitingTime => &[AssetType::EventLog],
            ProcessingType::Simulation | ProcessingType::Optimization => {
                &[AssetType::ProcessModel, AssetType::SimulationModel]
            }
        }
    }
}

/// Body of `POST processing-requests/`.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessingRequestCreate {
    #[serde(rename = "type")]
    pub request_type: String,
    pub user_id: String,
    pub project_id: String,
    pub input_assets_ids: Vec<String>,
    pub output_assets_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProcessingRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub request_type: String,
    pub status: String,
    pub project_id: String,
    #[serde(default)]
    pub input_assets_ids: Vec<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Session is missing or the token was rejected.
    #[error("Your session has expired, please log in again")]
    Unauthorized,

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Browser storage unavailable or corrupt.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserialization() {
        let json = r#"{
            "id": "8d9f3c1e-0000-4000-8000-000000000001",
            "name": "Loan application",
            "description": null,
            "creation_time": "2024-02-01T10:20:30.123456",
            "modification_time": null,
            "deletion_time": null,
            "users_ids": ["u1"],
            "assets_ids": ["a1", "a2"],
            "processing_requests_ids": []
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Loan application");
        assert_eq!(project.assets_ids.len(), 2);
        assert!(project.description.is_none());
    }

    #[test]
    fn test_asset_deserialization() {
        let json = r#"{
            "id": "a1",
            "name": "events.csv",
            "type": "event_log",
            "project_id": "p1",
            "creation_time": "2024-02-01T10:20:30+00:00",
            "file_id": "f1"
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.asset_type, AssetType::EventLog);
        assert_eq!(format_timestamp(&asset.creation_time), "2024-02-01 10:20");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-02-01T10:20:30.123456"), "2024-02-01 10:20");
        assert_eq!(format_timestamp("2024-02-01T10:20:30"), "2024-02-01 10:20");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_processing_type_slugs() {
        for t in ProcessingType::ALL {
            assert_eq!(ProcessingType::from_slug(t.slug()), Some(t));
        }
        assert_eq!(ProcessingType::from_slug("mining"), None);
        assert_eq!(
            ProcessingType::Simulation.required_assets(),
            &[AssetType::ProcessModel, AssetType::SimulationModel]
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Http { status: 422, message: "bad file".into() };
        assert_eq!(err.to_string(), "Server error (422): bad file");

        let err = AppError::Upload("JsValue(\"quota\")".into());
        assert!(err.to_string().contains("quota"));
    }
}
