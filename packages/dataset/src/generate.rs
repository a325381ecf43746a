//! Seeded generation of the waste-collection table.
//!
//! Columns are drawn one after another (every total, then every recyclable
//! amount, and so on) from a single `ChaCha8Rng`, so a given seed and span
//! always reproduce the same table on every platform.

use chrono::{Datelike as _, Days, NaiveDate, Weekday};
use rand::{Rng as _, SeedableRng as _};
use rand_chacha::ChaCha8Rng;
use waste_dashboard_dataset_models::{
    Aggregates, CategoryRanges, Dataset, Frequency, GenerationConfig, QuantityRange,
};

use crate::DatasetError;
use crate::aggregate::{compute_aggregates, derive_record};
use crate::config::validate;
use crate::snapshot::Snapshot;

/// Weekly ticks land on the day that closes each week.
const WEEK_ANCHOR: Weekday = Weekday::Sun;

/// Returns every sampling date in `[start, end]` for `frequency`.
///
/// Weekly ticks fall on Sundays, starting with the first Sunday on or after
/// `start`. Returns an empty list when `start > end`.
#[must_use]
pub fn date_ticks(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Vec<NaiveDate> {
    let (first, step) = match frequency {
        Frequency::Daily => (Some(start), Days::new(1)),
        Frequency::Weekly => (first_weekday_on_or_after(start, WEEK_ANCHOR), Days::new(7)),
    };

    let mut ticks = Vec::new();
    let mut next = first;
    while let Some(date) = next {
        if date > end {
            break;
        }
        ticks.push(date);
        next = date.checked_add_days(step);
    }
    ticks
}

fn first_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = date.weekday().num_days_from_sunday();
    let target = weekday.num_days_from_sunday();
    let offset = (7 + target - current) % 7;
    date.checked_add_days(Days::new(u64::from(offset)))
}

fn draw_column(rng: &mut ChaCha8Rng, range: QuantityRange, len: usize) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(range.low..range.high)).collect()
}

/// Generates the dataset described by `config`.
///
/// An empty span yields an empty dataset rather than an error.
///
/// # Errors
///
/// * [`DatasetError::InvalidQuantityRange`] if a draw range is empty
/// * [`DatasetError::DivisionByZero`] if a drawn total is zero
pub fn generate(config: &GenerationConfig) -> Result<Dataset, DatasetError> {
    validate(config)?;

    let dates = date_ticks(config.start, config.end, config.frequency);
    log::debug!(
        "Generating {} {} records from {} to {} (seed {})",
        dates.len(),
        config.frequency,
        config.start,
        config.end,
        config.seed
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let ranges = &config.ranges;
    let totals = draw_column(&mut rng, ranges.total, dates.len());
    let recyclable = draw_column(&mut rng, ranges.recyclable, dates.len());
    let organic = draw_column(&mut rng, ranges.organic, dates.len());
    let non_recyclable = draw_column(&mut rng, ranges.non_recyclable, dates.len());

    let records = dates
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            derive_record(date, totals[i], recyclable[i], organic[i], non_recyclable[i])
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::from_records(records)?)
}

/// Generates a dataset with the default draw ranges and reduces it.
///
/// # Errors
///
/// * [`DatasetError::EmptyDataset`] if the span produces no ticks
/// * [`DatasetError::DivisionByZero`] if a drawn total is zero
pub fn build(
    seed: u64,
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
) -> Result<(Dataset, Aggregates), DatasetError> {
    let config = GenerationConfig {
        seed,
        start,
        end,
        frequency,
        ranges: CategoryRanges::default(),
    };
    let dataset = generate(&config)?;
    let aggregates = compute_aggregates(&dataset)?;
    Ok((dataset, aggregates))
}

/// Generates the dataset described by `config` and wraps it in a
/// [`Snapshot`].
///
/// # Errors
///
/// See [`generate`] and [`Snapshot::new`].
pub fn build_snapshot(config: &GenerationConfig) -> Result<Snapshot, DatasetError> {
    let snapshot = Snapshot::new(generate(config)?)?;
    log::info!(
        "Built dataset: {} records spanning {}",
        snapshot.dataset().len(),
        snapshot.span()
    );
    Ok(snapshot)
}
