#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Dashboard sections, view state and the payloads handed to renderers.
//!
//! A [`View`] is what a renderer draws for one interaction: the payload of
//! the selected [`Section`] plus the date-filtered preview shown alongside
//! it. Table-shaped payloads borrow from the session's dataset instead of
//! copying it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use waste_dashboard_dataset_models::{CategoryTotal, DateRange, Record};

/// One of the fixed dashboard views.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum Section {
    /// Total collected and average recycling rate.
    #[default]
    KeyMetrics,
    /// Total waste collected over time.
    CollectionTrends,
    /// Share of each waste category.
    TypesBreakdown,
    /// Recycling rate over time.
    RecyclingTrends,
    /// The full record table.
    RawTable,
}

impl Section {
    /// Returns all variants of this enum, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::KeyMetrics,
            Self::CollectionTrends,
            Self::TypesBreakdown,
            Self::RecyclingTrends,
            Self::RawTable,
        ]
    }

    /// Label shown in the section picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KeyMetrics => "Key Metrics",
            Self::CollectionTrends => "Waste Collection Trends",
            Self::TypesBreakdown => "Waste Types Breakdown",
            Self::RecyclingTrends => "Recycling Rate Trends",
            Self::RawTable => "Raw Data Table",
        }
    }

    /// Heading drawn above the section's chart or table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::KeyMetrics => "Key Metrics",
            Self::CollectionTrends => "Weekly Waste Collection Over Time",
            Self::TypesBreakdown => "Waste Types Distribution",
            Self::RecyclingTrends => "Recycling Rate Over Time",
            Self::RawTable => "Raw Data Table",
        }
    }
}

/// The mutable selection of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Currently shown section.
    pub section: Section,
    /// Date filter for the preview table.
    pub date_range: DateRange,
}

impl ViewState {
    /// The initial state: first section, full dataset span.
    #[must_use]
    pub fn new(span: DateRange) -> Self {
        Self {
            section: Section::default(),
            date_range: span,
        }
    }
}

/// One point of the collection trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPoint {
    /// Record date.
    pub date: NaiveDate,
    /// Total collected that week.
    pub total_waste_kg: u32,
}

/// One point of the recycling rate trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePoint {
    /// Record date.
    pub date: NaiveDate,
    /// Recycling rate that week.
    pub recycling_rate_pct: f64,
}

/// Section-specific data for a renderer.
///
/// Every payload is computed over the full dataset; only the
/// [`FilteredPreview`] honours the date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "kind",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ViewPayload<'a> {
    /// Scalar displays.
    KeyMetrics {
        /// Sum of every record's total.
        total_collected: u64,
        /// Mean of every record's recycling rate.
        average_recycling_rate: f64,
    },
    /// Line chart of totals.
    CollectionTrends {
        /// Ordered by date.
        points: Vec<CollectionPoint>,
    },
    /// Pie chart of category sums.
    TypesBreakdown {
        /// One entry per waste category.
        categories: Vec<CategoryTotal>,
    },
    /// Line chart of recycling rates.
    RecyclingTrends {
        /// Ordered by date.
        points: Vec<RatePoint>,
    },
    /// Styled table of every record.
    RawTable {
        /// Ordered by date.
        records: &'a [Record],
    },
}

/// Records within the session's date range, shown regardless of section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredPreview<'a> {
    /// The effective range after clamping to the dataset span.
    pub range: DateRange,
    /// Ordered by date.
    pub records: &'a [Record],
}

/// Everything a renderer needs for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View<'a> {
    /// The section the payload belongs to.
    pub section: Section,
    /// Section-specific data.
    pub payload: ViewPayload<'a>,
    /// Date-filtered sidebar table.
    pub preview: FilteredPreview<'a>,
}
