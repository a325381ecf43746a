#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the waste dashboard server.
//!
//! View payloads are serialized straight from the view models; the types
//! here only cover what the API adds around them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waste_dashboard_view_models::Section;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// A dashboard section as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSection {
    /// Tag accepted by the `section` query parameter.
    pub name: String,
    /// Picker label.
    pub label: String,
    /// Heading drawn above the section.
    pub title: String,
}

impl From<Section> for ApiSection {
    fn from(section: Section) -> Self {
        Self {
            name: section.to_string(),
            label: section.label().to_string(),
            title: section.title().to_string(),
        }
    }
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

/// Query parameters for the view endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQueryParams {
    /// Section tag or label. Defaults to the first section.
    pub section: Option<String>,
    /// First date of the preview filter (`YYYY-MM-DD`).
    pub from: Option<NaiveDate>,
    /// Last date of the preview filter (`YYYY-MM-DD`).
    pub to: Option<NaiveDate>,
}

/// Query parameters for the CSV export endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQueryParams {
    /// First date to export (`YYYY-MM-DD`).
    pub from: Option<NaiveDate>,
    /// Last date to export (`YYYY-MM-DD`).
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_listing_uses_tag_and_labels() {
        let api = ApiSection::from(Section::CollectionTrends);
        assert_eq!(api.name, "CollectionTrends");
        assert_eq!(api.label, "Waste Collection Trends");
        assert_eq!(api.title, "Weekly Waste Collection Over Time");
    }

    #[test]
    fn health_serializes_camel_case() {
        let json = serde_json::to_value(ApiHealth {
            healthy: true,
            version: "0.1.0".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "healthy": true, "version": "0.1.0" }));
    }
}
