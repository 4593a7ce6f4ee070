//! JSON API for team generation
//!
//! One request in, one envelope out. Hosts embedding the balancer never see
//! a Rust error: every failure is reported inside the response.

use crate::analysis::BalanceSummary;
use crate::balancer::balance;
use crate::error::BalanceError;
use crate::models::{Participant, RunConfiguration, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Caller-facing hint for fixing the selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl From<&BalanceError> for ApiError {
    fn from(err: &BalanceError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            guidance: Some(err.guidance()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTeamsRequest {
    pub schema_version: Option<String>,
    pub config: RunConfiguration,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateTeamsResponse {
    pub teams: Vec<Team>,
    pub summary: BalanceSummary,
}

/// Run the balancer for an already parsed request.
pub fn generate_teams(request: &GenerateTeamsRequest) -> ApiResponse<GenerateTeamsResponse> {
    if let Some(version) = request.schema_version.as_deref() {
        if version != API_VERSION {
            warn!(requested = version, supported = API_VERSION, "schema version mismatch");
        }
    }

    match balance(&request.participants, &request.config) {
        Ok(teams) => {
            let summary = BalanceSummary::of(&teams);
            debug!(teams = teams.len(), spread = summary.total_spread, "teams generated");
            ApiResponse::ok(GenerateTeamsResponse { teams, summary })
        }
        Err(err) => {
            warn!(code = err.code(), "team generation failed: {}", err);
            ApiResponse::err(ApiError::from(&err))
        }
    }
}

/// JSON in, JSON out.
pub fn generate_teams_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<GenerateTeamsRequest>(request_json) {
        Ok(request) => generate_teams(&request),
        Err(e) => {
            warn!("invalid team generation request: {}", e);
            ApiResponse::err(ApiError {
                code: "INVALID_REQUEST".to_string(),
                message: format!("Invalid request JSON: {}", e),
                guidance: None,
            })
        }
    };
    serialize_response(&response)
}

fn serialize_response<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"data":null,"error":{{"code":"SERIALIZATION_ERROR","message":"{}"}},"schema_version":"{}"}}"#,
            e, API_VERSION
        )
    })
}
