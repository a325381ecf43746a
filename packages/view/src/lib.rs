#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! View selection over an immutable waste-collection snapshot.
//!
//! [`select`] is a pure function of a snapshot, a section and an optional
//! date range. [`Session`] pairs a snapshot with the one piece of mutable
//! state a dashboard has, its [`ViewState`], and recomputes the view after
//! every interaction.
//!
//! [`ViewState`]: waste_dashboard_view_models::ViewState

pub mod select;
pub mod session;

pub use select::{parse_section, resolve_range, select, select_by_name};
pub use session::Session;

use chrono::NaiveDate;
use thiserror::Error;
use waste_dashboard_dataset_models::InvalidRangeError;

/// Errors that can occur while selecting a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The section name matches no known section.
    #[error(
        "Invalid section '{name}': expected one of KeyMetrics, CollectionTrends, \
         TypesBreakdown, RecyclingTrends, RawTable"
    )]
    InvalidSection {
        /// The name that was given.
        name: String,
    },

    /// The date range starts after it ends.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested first date.
        start: NaiveDate,
        /// Requested last date.
        end: NaiveDate,
    },
}

impl From<InvalidRangeError> for ViewError {
    fn from(e: InvalidRangeError) -> Self {
        Self::InvalidRange {
            start: e.start,
            end: e.end,
        }
    }
}
