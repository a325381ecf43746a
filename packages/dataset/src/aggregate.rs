//! Per-record derivation and dataset-wide reductions.

use chrono::NaiveDate;
use waste_dashboard_dataset_models::{Aggregates, CategoryTotal, Dataset, Record, WasteCategory};

use crate::DatasetError;

/// Computes `recyclable_kg / total_waste_kg * 100`.
///
/// Returns `None` when `total_waste_kg` is zero.
#[must_use]
pub fn recycling_rate(recyclable_kg: u32, total_waste_kg: u32) -> Option<f64> {
    if total_waste_kg == 0 {
        return None;
    }
    Some(f64::from(recyclable_kg) / f64::from(total_waste_kg) * 100.0)
}

/// Builds a [`Record`] from raw quantities, deriving its recycling rate.
///
/// # Errors
///
/// Returns [`DatasetError::DivisionByZero`] if `total_waste_kg` is zero.
pub fn derive_record(
    date: NaiveDate,
    total_waste_kg: u32,
    recyclable_kg: u32,
    organic_kg: u32,
    non_recyclable_kg: u32,
) -> Result<Record, DatasetError> {
    let recycling_rate_pct =
        recycling_rate(recyclable_kg, total_waste_kg).ok_or(DatasetError::DivisionByZero { date })?;
    Ok(Record {
        date,
        total_waste_kg,
        recyclable_kg,
        organic_kg,
        non_recyclable_kg,
        recycling_rate_pct,
    })
}

/// Reduces the dataset into its summary scalars.
///
/// # Errors
///
/// Returns [`DatasetError::EmptyDataset`] if the dataset has no records.
#[allow(clippy::cast_precision_loss)]
pub fn compute_aggregates(dataset: &Dataset) -> Result<Aggregates, DatasetError> {
    if dataset.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let records = dataset.records();
    let total_collected: u64 = records.iter().map(|r| u64::from(r.total_waste_kg)).sum();
    let total_recyclable: u64 = records.iter().map(|r| u64::from(r.recyclable_kg)).sum();
    let rate_sum: f64 = records.iter().map(|r| r.recycling_rate_pct).sum();

    Ok(Aggregates {
        total_collected,
        total_recyclable,
        average_recycling_rate: rate_sum / records.len() as f64,
    })
}

/// Sums each waste category over the full dataset, in
/// [`WasteCategory::all`] order.
///
/// These sums are independent of `total_collected`; nothing ties the
/// categories to the total.
#[must_use]
pub fn category_totals(dataset: &Dataset) -> Vec<CategoryTotal> {
    WasteCategory::all()
        .iter()
        .map(|&category| CategoryTotal {
            category,
            amount_kg: dataset
                .records()
                .iter()
                .map(|r| u64::from(r.quantity(category)))
                .sum(),
        })
        .collect()
}
