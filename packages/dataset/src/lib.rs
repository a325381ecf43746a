#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Synthetic waste-collection dataset builder.
//!
//! Generates one record per date tick from a seeded RNG, derives the
//! per-record recycling rate and reduces the table into its summary
//! aggregates. The result is bundled into an immutable [`Snapshot`]
//! that every view computation reads from.

pub mod aggregate;
pub mod config;
pub mod export;
pub mod generate;
pub mod snapshot;

pub use aggregate::{category_totals, compute_aggregates, derive_record, recycling_rate};
pub use generate::{build, build_snapshot, date_ticks, generate};
pub use snapshot::Snapshot;

use chrono::NaiveDate;
use thiserror::Error;
use waste_dashboard_dataset_models::DuplicateDateError;

/// Errors that can occur while building or exporting a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A record has a zero total, so its recycling rate is undefined.
    #[error("Division by zero: record dated {date} has a total of 0 kg")]
    DivisionByZero {
        /// Date of the offending record.
        date: NaiveDate,
    },

    /// An aggregate was requested over zero records.
    #[error("Empty dataset: aggregates need at least one record")]
    EmptyDataset,

    /// A draw range cannot produce any value.
    #[error("Invalid quantity range for {column}: low {low} must be below high {high}")]
    InvalidQuantityRange {
        /// Column the range belongs to.
        column: &'static str,
        /// Inclusive lower bound.
        low: u32,
        /// Exclusive upper bound.
        high: u32,
    },

    /// Two records share a date.
    #[error("Invalid dataset: {0}")]
    DuplicateDate(#[from] DuplicateDateError),

    /// The generation config could not be parsed.
    #[error("Config error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },

    /// I/O error (config read, export write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
