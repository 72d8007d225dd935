// ABOUTME: Feature flag data models matching the flags service JSON contract
// Field names follow the service's camelCase wire format

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Longest description the flag form accepts.
pub const MAX_DESCRIPTION_LEN: usize = 500;

lazy_static! {
    static ref FLAG_NAME: Regex = Regex::new(r"(?i)^[a-z][a-z0-9_]*$").expect("flag name pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl FeatureFlag {
    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "enabled"
        } else {
            "disabled"
        }
    }

    pub fn indicator(&self) -> &'static str {
        if self.enabled {
            "●"
        } else {
            "○"
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagRequest {
    pub name: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FeatureFlagRequest {
    pub fn new(name: impl Into<String>, enabled: bool, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            enabled,
            description,
        }
    }

    /// Checks the request the way the flag form does before submitting.
    ///
    /// Returns one message per problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let name = self.name.trim();

        if name.is_empty() {
            errors.push("Flag name is required".to_string());
        } else if !FLAG_NAME.is_match(name) {
            errors.push(
                "Flag name must start with a letter and contain only letters, numbers, and underscores"
                    .to_string(),
            );
        }

        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                errors.push(format!(
                    "Description must be at most {} characters",
                    MAX_DESCRIPTION_LEN
                ));
            }
        }

        errors
    }
}

impl From<&FeatureFlag> for FeatureFlagRequest {
    fn from(flag: &FeatureFlag) -> Self {
        Self {
            name: flag.name.clone(),
            enabled: flag.enabled,
            description: flag.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagStats {
    pub total_flags: u64,
    pub enabled_flags: u64,
    pub disabled_flags: u64,
}
