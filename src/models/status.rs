// ABOUTME: Service status payloads - flag cache status, health, and API error bodies
// Polled periodically to drive maintenance mode and the connection indicator

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub total_flags: u64,
    pub enabled_flags: u64,
    pub disabled_flags: u64,
}

/// Response of the movie service's `/flags/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagStatus {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub cache_stats: CacheStats,
}

/// Response of the movie service's `/health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub omdb_api_healthy: bool,
}

impl ServiceHealth {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}

/// Error body the services return alongside non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_flag_status() {
        let json = r#"{
            "darkMode": true,
            "maintenanceMode": false,
            "cacheStats": {"totalFlags": 4, "enabledFlags": 1, "disabledFlags": 3}
        }"#;

        let status: FlagStatus = serde_json::from_str(json).unwrap();
        assert!(status.dark_mode);
        assert!(!status.maintenance_mode);
        assert_eq!(status.cache_stats.total_flags, 4);
    }

    #[test]
    fn parses_health() {
        let health: ServiceHealth =
            serde_json::from_str(r#"{"status":"UP","maintenanceMode":false,"omdbApiHealthy":true}"#).unwrap();
        assert!(health.is_up());
        assert!(health.omdb_api_healthy);
    }

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Flag not found"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Flag not found"));
        assert_eq!(body.status, None);
    }
}
