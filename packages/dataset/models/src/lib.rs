#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Waste-collection record types and dataset generation settings.
//!
//! This crate defines the shape of the weekly waste-collection table shared
//! by the dataset builder, the view selector and every renderer. Records are
//! plain data; derivation and aggregation live in `waste_dashboard_dataset`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Column headings of the raw data table, in display order.
pub const COLUMN_LABELS: [&str; 6] = [
    "Date",
    "Total Waste Collected (kg)",
    "Recyclable Waste (kg)",
    "Organic Waste (kg)",
    "Non-Recyclable Waste (kg)",
    "Recycling Rate (%)",
];

/// Default generation seed.
pub const DEFAULT_SEED: u64 = 42;

/// A waste category tracked alongside the collected total.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WasteCategory {
    /// Paper, glass, metal and plastics routed to recycling.
    Recyclable,
    /// Food and garden waste.
    Organic,
    /// Residual waste bound for landfill or incineration.
    NonRecyclable,
}

impl WasteCategory {
    /// Returns all variants of this enum, in breakdown order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Recyclable, Self::Organic, Self::NonRecyclable]
    }

    /// Human-readable label, matching the raw table column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recyclable => "Recyclable Waste (kg)",
            Self::Organic => "Organic Waste (kg)",
            Self::NonRecyclable => "Non-Recyclable Waste (kg)",
        }
    }
}

/// Sampling cadence of the generated table.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Frequency {
    /// One record per calendar day.
    Daily,
    /// One record per week, dated on the Sunday that ends it.
    #[default]
    Weekly,
}

/// A half-open `[low, high)` range of whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantityRange {
    /// Inclusive lower bound.
    pub low: u32,
    /// Exclusive upper bound.
    pub high: u32,
}

impl QuantityRange {
    /// Creates a new range. No validation is performed here; see
    /// [`QuantityRange::is_empty`].
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Returns `true` if no value can be drawn from this range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.low >= self.high
    }
}

/// Draw ranges for each generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRanges {
    /// Range for `total_waste_kg`.
    pub total: QuantityRange,
    /// Range for `recyclable_kg`.
    pub recyclable: QuantityRange,
    /// Range for `organic_kg`.
    pub organic: QuantityRange,
    /// Range for `non_recyclable_kg`.
    pub non_recyclable: QuantityRange,
}

impl CategoryRanges {
    /// Returns the draw range for a single category.
    #[must_use]
    pub const fn for_category(&self, category: WasteCategory) -> QuantityRange {
        match category {
            WasteCategory::Recyclable => self.recyclable,
            WasteCategory::Organic => self.organic,
            WasteCategory::NonRecyclable => self.non_recyclable,
        }
    }
}

impl Default for CategoryRanges {
    fn default() -> Self {
        Self {
            total: QuantityRange::new(500, 1500),
            recyclable: QuantityRange::new(200, 800),
            organic: QuantityRange::new(100, 500),
            non_recyclable: QuantityRange::new(100, 400),
        }
    }
}

/// Settings for one generated dataset.
///
/// Every field falls back to its default when omitted from a TOML config,
/// so an empty file reproduces the reference 2024 weekly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed. The same seed and span always yield the same records.
    pub seed: u64,
    /// First date of the span (inclusive).
    pub start: NaiveDate,
    /// Last date of the span (inclusive).
    pub end: NaiveDate,
    /// Sampling cadence.
    pub frequency: Frequency,
    /// Draw ranges per column.
    pub ranges: CategoryRanges,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            frequency: Frequency::Weekly,
            ranges: CategoryRanges::default(),
        }
    }
}

/// One week (or day) of collected waste.
///
/// Category quantities are generated independently of the total and are
/// not expected to sum to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Collection date. Unique within a [`Dataset`].
    pub date: NaiveDate,
    /// Total waste collected.
    pub total_waste_kg: u32,
    /// Recyclable portion.
    pub recyclable_kg: u32,
    /// Organic portion.
    pub organic_kg: u32,
    /// Non-recyclable portion.
    pub non_recyclable_kg: u32,
    /// `recyclable_kg / total_waste_kg * 100`.
    pub recycling_rate_pct: f64,
}

impl Record {
    /// Returns the quantity recorded for `category`.
    #[must_use]
    pub const fn quantity(&self, category: WasteCategory) -> u32 {
        match category {
            WasteCategory::Recyclable => self.recyclable_kg,
            WasteCategory::Organic => self.organic_kg,
            WasteCategory::NonRecyclable => self.non_recyclable_kg,
        }
    }
}

/// An inclusive span of calendar dates.
///
/// Fields are public so that callers can express a requested range as
/// received; consumers validate ordering with [`DateRange::is_ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date (inclusive).
    pub start: NaiveDate,
    /// Last date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidRangeError> {
        let range = Self { start, end };
        if range.is_ordered() {
            Ok(range)
        } else {
            Err(InvalidRangeError { start, end })
        }
    }

    /// Builds a range from optional bounds. Returns `None` when neither
    /// bound is given.
    ///
    /// A missing bound is filled from `span`, but never so that it crosses
    /// the given one: a lone `start` after the span yields `start..start`
    /// and a lone `end` before it yields `end..end`. Only two explicit
    /// bounds can produce an unordered range.
    #[must_use]
    pub fn from_bounds(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        span: Self,
    ) -> Option<Self> {
        match (start, end) {
            (None, None) => None,
            (Some(start), Some(end)) => Some(Self { start, end }),
            (Some(start), None) => Some(Self {
                start,
                end: span.end.max(start),
            }),
            (None, Some(end)) => Some(Self {
                start: span.start.min(end),
                end,
            }),
        }
    }

    /// Returns `true` if `start <= end`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns `true` if `date` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Intersects this range with `bounds`. Returns `None` when they do not
    /// overlap.
    #[must_use]
    pub fn clamp_to(&self, bounds: &Self) -> Option<Self> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        (start <= end).then_some(Self { start, end })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Error returned when a [`DateRange`] would start after it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    /// The requested first date.
    pub start: NaiveDate,
    /// The requested last date.
    pub end: NaiveDate,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid date range: start {} is after end {}",
            self.start, self.end
        )
    }
}

impl std::error::Error for InvalidRangeError {}

/// Error returned when two records share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateDateError {
    /// The repeated date.
    pub date: NaiveDate,
}

impl std::fmt::Display for DuplicateDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate record date {}", self.date)
    }
}

impl std::error::Error for DuplicateDateError {}

/// The ordered, immutable table of records for a session.
///
/// Records are sorted by ascending date with no duplicates, which lets
/// range lookups return contiguous slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset, sorting records by date.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateDateError`] if two records share a date.
    pub fn from_records(mut records: Vec<Record>) -> Result<Self, DuplicateDateError> {
        records.sort_by_key(|r| r.date);
        if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(DuplicateDateError { date: pair[0].date });
        }
        Ok(Self { records })
    }

    /// All records in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first and last record dates, or `None` for an empty dataset.
    #[must_use]
    pub fn span(&self) -> Option<DateRange> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(DateRange {
            start: first.date,
            end: last.date,
        })
    }

    /// The contiguous run of records whose date falls within `range`.
    ///
    /// An unordered range selects nothing.
    #[must_use]
    pub fn records_between(&self, range: &DateRange) -> &[Record] {
        if !range.is_ordered() {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.date < range.start);
        let hi = self.records.partition_point(|r| r.date <= range.end);
        &self.records[lo..hi.max(lo)]
    }
}

/// Summary scalars computed once over the full dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    /// Sum of `total_waste_kg`.
    pub total_collected: u64,
    /// Sum of `recyclable_kg`.
    pub total_recyclable: u64,
    /// Mean of the per-record `recycling_rate_pct`.
    pub average_recycling_rate: f64,
}

/// Summed quantity for one waste category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// The category.
    pub category: WasteCategory,
    /// Sum over all records.
    pub amount_kg: u64,
}
