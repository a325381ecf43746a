//! The immutable per-session bundle of dataset and aggregates.

use waste_dashboard_dataset_models::{Aggregates, CategoryTotal, Dataset, DateRange};

use crate::DatasetError;
use crate::aggregate::{category_totals, compute_aggregates};

/// A dataset together with everything derived from it once.
///
/// A snapshot always holds at least one record, so its [`span`] is always
/// defined.
///
/// [`span`]: Snapshot::span
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    dataset: Dataset,
    aggregates: Aggregates,
    category_totals: Vec<CategoryTotal>,
    span: DateRange,
}

impl Snapshot {
    /// Derives aggregates and category totals for `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::EmptyDataset`] if the dataset has no records.
    pub fn new(dataset: Dataset) -> Result<Self, DatasetError> {
        let span = dataset.span().ok_or(DatasetError::EmptyDataset)?;
        let aggregates = compute_aggregates(&dataset)?;
        let category_totals = category_totals(&dataset);

        log::debug!(
            "Snapshot built: {} records, {span}, {} kg collected",
            dataset.len(),
            aggregates.total_collected
        );

        Ok(Self {
            dataset,
            aggregates,
            category_totals,
            span,
        })
    }

    /// The underlying records.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The summary scalars.
    #[must_use]
    pub const fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    /// Per-category sums over the full dataset.
    #[must_use]
    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    /// First and last record dates.
    #[must_use]
    pub const fn span(&self) -> DateRange {
        self.span
    }
}
