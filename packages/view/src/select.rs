//! Section dispatch and date filtering.

use std::str::FromStr as _;

use waste_dashboard_dataset::Snapshot;
use waste_dashboard_dataset_models::DateRange;
use waste_dashboard_view_models::{
    CollectionPoint, FilteredPreview, RatePoint, Section, View, ViewPayload,
};

use crate::ViewError;

/// Resolves a section from its tag (`KeyMetrics`) or its picker label
/// (`Key Metrics`, case-insensitive).
///
/// # Errors
///
/// Returns [`ViewError::InvalidSection`] if `name` matches neither.
pub fn parse_section(name: &str) -> Result<Section, ViewError> {
    let trimmed = name.trim();
    Section::from_str(trimmed)
        .ok()
        .or_else(|| {
            Section::all()
                .iter()
                .copied()
                .find(|s| s.label().eq_ignore_ascii_case(trimmed))
        })
        .ok_or_else(|| ViewError::InvalidSection {
            name: name.to_string(),
        })
}

/// Returns the date range a view should filter by.
///
/// With no request the full `span` is used. A request is clamped to `span`;
/// a request entirely outside it is kept as-is and matches no records.
///
/// # Errors
///
/// Returns [`ViewError::InvalidRange`] if `requested` starts after it ends.
pub fn resolve_range(
    span: DateRange,
    requested: Option<DateRange>,
) -> Result<DateRange, ViewError> {
    let Some(range) = requested else {
        return Ok(span);
    };
    if !range.is_ordered() {
        return Err(ViewError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(range.clamp_to(&span).unwrap_or(range))
}

/// Computes the view for `section`, with the preview filtered by
/// `date_range`.
///
/// # Errors
///
/// Returns [`ViewError::InvalidRange`] if `date_range` starts after it ends.
pub fn select(
    snapshot: &Snapshot,
    section: Section,
    date_range: Option<DateRange>,
) -> Result<View<'_>, ViewError> {
    let range = resolve_range(snapshot.span(), date_range)?;
    let dataset = snapshot.dataset();
    let records = dataset.records();

    let payload = match section {
        Section::KeyMetrics => {
            let aggregates = snapshot.aggregates();
            ViewPayload::KeyMetrics {
                total_collected: aggregates.total_collected,
                average_recycling_rate: aggregates.average_recycling_rate,
            }
        }
        Section::CollectionTrends => ViewPayload::CollectionTrends {
            points: records
                .iter()
                .map(|r| CollectionPoint {
                    date: r.date,
                    total_waste_kg: r.total_waste_kg,
                })
                .collect(),
        },
        Section::TypesBreakdown => ViewPayload::TypesBreakdown {
            categories: snapshot.category_totals().to_vec(),
        },
        Section::RecyclingTrends => ViewPayload::RecyclingTrends {
            points: records
                .iter()
                .map(|r| RatePoint {
                    date: r.date,
                    recycling_rate_pct: r.recycling_rate_pct,
                })
                .collect(),
        },
        Section::RawTable => ViewPayload::RawTable { records },
    };

    let preview = FilteredPreview {
        range,
        records: dataset.records_between(&range),
    };

    log::debug!(
        "Selected {section} with {} of {} records in {range}",
        preview.records.len(),
        records.len()
    );

    Ok(View {
        section,
        payload,
        preview,
    })
}

/// Like [`select`], resolving the section from a name first.
///
/// # Errors
///
/// Returns [`ViewError::InvalidSection`] for an unknown name, or
/// [`ViewError::InvalidRange`] for an inverted range.
pub fn select_by_name<'a>(
    snapshot: &'a Snapshot,
    section: &str,
    date_range: Option<DateRange>,
) -> Result<View<'a>, ViewError> {
    select(snapshot, parse_section(section)?, date_range)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use waste_dashboard_dataset::{build_snapshot, category_totals};
    use waste_dashboard_dataset_models::{GenerationConfig, WasteCategory};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference() -> Snapshot {
        build_snapshot(&GenerationConfig::default()).unwrap()
    }

    #[test]
    fn parses_tags_and_labels() {
        assert_eq!(parse_section("KeyMetrics").unwrap(), Section::KeyMetrics);
        assert_eq!(parse_section("raw data table").unwrap(), Section::RawTable);
        assert_eq!(
            parse_section(" Waste Types Breakdown ").unwrap(),
            Section::TypesBreakdown
        );
    }

    #[test]
    fn unknown_section_is_invalid() {
        let snapshot = reference();
        let err = select_by_name(&snapshot, "InvalidSectionName", None).unwrap_err();
        assert!(matches!(err, ViewError::InvalidSection { name } if name == "InvalidSectionName"));
    }

    #[test]
    fn inverted_range_is_invalid() {
        let snapshot = reference();
        let high = date(2024, 6, 30);
        let low = date(2024, 3, 1);
        let err = select_by_name(
            &snapshot,
            "RawTable",
            Some(DateRange {
                start: high,
                end: low,
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ViewError::InvalidRange { start, end } if start == high && end == low));
    }

    #[test]
    fn key_metrics_match_full_dataset() {
        let snapshot = reference();
        assert_eq!(snapshot.dataset().len(), 52);

        let view = select_by_name(&snapshot, "KeyMetrics", None).unwrap();
        let ViewPayload::KeyMetrics {
            total_collected,
            average_recycling_rate,
        } = view.payload
        else {
            panic!("expected key metrics");
        };
        assert_eq!(total_collected, 50_569);
        assert_eq!(snapshot.aggregates().total_recyclable, 27_585);
        assert!((average_recycling_rate - 58.185_165).abs() < 1e-5);
        assert_eq!(view.preview.records.len(), 52);
        assert_eq!(view.preview.range, snapshot.span());
    }

    #[test]
    fn key_metrics_ignore_date_range() {
        let snapshot = reference();
        let narrow = DateRange::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
        let full = select(&snapshot, Section::KeyMetrics, None).unwrap();
        let filtered = select(&snapshot, Section::KeyMetrics, Some(narrow)).unwrap();
        assert_eq!(full.payload, filtered.payload);
        assert!(filtered.preview.records.len() < full.preview.records.len());
    }

    #[test]
    fn preview_holds_exactly_the_records_in_range() {
        let snapshot = reference();
        let range = DateRange::new(date(2024, 3, 10), date(2024, 4, 14)).unwrap();
        let view = select(&snapshot, Section::RawTable, Some(range)).unwrap();

        let expected: Vec<_> = snapshot
            .dataset()
            .records()
            .iter()
            .filter(|r| range.contains(r.date))
            .collect();
        let actual: Vec<_> = view.preview.records.iter().collect();
        assert_eq!(actual, expected);
        // Sundays 10 Mar .. 14 Apr inclusive.
        assert_eq!(actual.len(), 6);
        assert!(actual.windows(2).all(|w| w[0].date < w[1].date));
        assert!(actual.len() < snapshot.dataset().len());
    }

    #[test]
    fn out_of_span_bounds_are_clamped() {
        let snapshot = reference();
        let wide = DateRange::new(date(2020, 1, 1), date(2030, 1, 1)).unwrap();
        let view = select(&snapshot, Section::KeyMetrics, Some(wide)).unwrap();
        assert_eq!(view.preview.range, snapshot.span());
        assert_eq!(view.preview.records.len(), 52);
    }

    #[test]
    fn disjoint_range_yields_empty_preview() {
        let snapshot = reference();
        let later = DateRange::new(date(2025, 2, 1), date(2025, 3, 1)).unwrap();
        let view = select(&snapshot, Section::KeyMetrics, Some(later)).unwrap();
        assert!(view.preview.records.is_empty());
        assert_eq!(view.preview.range, later);
    }

    #[test]
    fn lone_bound_past_span_yields_empty_preview() {
        let snapshot = reference();
        let after = DateRange::from_bounds(Some(date(2025, 3, 1)), None, snapshot.span());
        let view = select(&snapshot, Section::RawTable, after).unwrap();
        assert!(view.preview.records.is_empty());
        assert_eq!(view.preview.range.start, date(2025, 3, 1));

        let before = DateRange::from_bounds(None, Some(date(2023, 6, 1)), snapshot.span());
        let view = select(&snapshot, Section::KeyMetrics, before).unwrap();
        assert!(view.preview.records.is_empty());
    }

    #[test]
    fn trends_cover_full_dataset_in_order() {
        let snapshot = reference();
        let narrow = DateRange::new(date(2024, 5, 1), date(2024, 5, 31)).unwrap();

        let view = select(&snapshot, Section::CollectionTrends, Some(narrow)).unwrap();
        let ViewPayload::CollectionTrends { points } = view.payload else {
            panic!("expected collection trends");
        };
        assert_eq!(points.len(), 52);
        for (point, record) in points.iter().zip(snapshot.dataset().records()) {
            assert_eq!(point.date, record.date);
            assert_eq!(point.total_waste_kg, record.total_waste_kg);
        }

        let view = select(&snapshot, Section::RecyclingTrends, None).unwrap();
        let ViewPayload::RecyclingTrends { points } = view.payload else {
            panic!("expected recycling trends");
        };
        assert_eq!(points.len(), 52);
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn breakdown_is_labelled_category_sums() {
        let snapshot = reference();
        let view = select(&snapshot, Section::TypesBreakdown, None).unwrap();
        let ViewPayload::TypesBreakdown { categories } = view.payload else {
            panic!("expected breakdown");
        };
        assert_eq!(categories, category_totals(snapshot.dataset()));
        let order: Vec<WasteCategory> = categories.iter().map(|c| c.category).collect();
        assert_eq!(order, WasteCategory::all());
    }

    #[test]
    fn raw_table_is_unfiltered() {
        let snapshot = reference();
        let narrow = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let view = select(&snapshot, Section::RawTable, Some(narrow)).unwrap();
        let ViewPayload::RawTable { records } = view.payload else {
            panic!("expected raw table");
        };
        assert_eq!(records, snapshot.dataset().records());
        assert_eq!(view.preview.records.len(), 4);
    }

    #[test]
    fn selection_is_deterministic() {
        let snapshot = reference();
        let range = DateRange::new(date(2024, 6, 1), date(2024, 8, 31)).unwrap();
        for &section in Section::all() {
            let a = select(&snapshot, section, Some(range)).unwrap();
            let b = select(&snapshot, section, Some(range)).unwrap();
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }
}
