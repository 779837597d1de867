//! Public DTOs
//!
//! Bodies of the unauthenticated health and info endpoints.

use serde::Serialize;

use crate::infrastructure::driven_adapters::config::AppInfoConfig;

/// Liveness report
#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: &'static str,
    pub timestamp: String,
    pub application: String,
    pub version: String,
}

impl HealthResponseDto {
    #[must_use]
    pub fn up(app: &AppInfoConfig) -> Self {
        Self {
            status: "UP",
            timestamp: chrono::Utc::now().to_rfc3339(),
            application: app.name.clone(),
            version: app.version.clone(),
        }
    }
}

/// Application identity
#[derive(Debug, Serialize)]
pub struct InfoResponseDto {
    pub name: String,
    pub version: String,
    pub description: String,
    pub timestamp: String,
}

impl From<&AppInfoConfig> for InfoResponseDto {
    fn from(app: &AppInfoConfig) -> Self {
        Self {
            name: app.name.clone(),
            version: app.version.clone(),
            description: app.description.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
