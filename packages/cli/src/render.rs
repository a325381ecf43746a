//! Plain-text rendering of dashboard views.
//!
//! Every function returns a `String` so that the caller decides where it
//! goes. Styling goes through [`console::style`], which drops the escape
//! codes when the output is not a terminal.

use console::style;
use waste_dashboard_dataset_models::{COLUMN_LABELS, CategoryTotal, Record};
use waste_dashboard_view_models::{
    CollectionPoint, FilteredPreview, RatePoint, Section, View, ViewPayload,
};

/// Width of the longest bar in a chart, in cells.
pub const BAR_WIDTH: usize = 40;

/// Formats `n` with comma thousands separators, e.g. `26,130`.
#[must_use]
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a percentage with two decimals, e.g. `46.88%`.
#[must_use]
pub fn format_rate(pct: f64) -> String {
    format!("{pct:.2}%")
}

/// Renders the section and the filtered preview below it.
#[must_use]
pub fn render_view(view: &View<'_>) -> String {
    format!(
        "{}\n\n{}\n{}",
        style(view.section.label()).bold().green(),
        render_payload(view.section, &view.payload),
        render_preview(&view.preview),
    )
}

fn render_payload(section: Section, payload: &ViewPayload<'_>) -> String {
    let mut out = if section == Section::KeyMetrics {
        String::new()
    } else {
        format!("{}\n", style(section.title()).bold())
    };
    let body = match payload {
        ViewPayload::KeyMetrics {
            total_collected,
            average_recycling_rate,
        } => render_key_metrics(*total_collected, *average_recycling_rate),
        ViewPayload::CollectionTrends { points } => render_collection_trends(points),
        ViewPayload::TypesBreakdown { categories } => render_breakdown(categories),
        ViewPayload::RecyclingTrends { points } => render_rate_trends(points),
        ViewPayload::RawTable { records } => render_table(records),
    };
    out.push_str(&body);
    out
}

/// The two headline numbers.
#[must_use]
pub fn render_key_metrics(total_collected: u64, average_recycling_rate: f64) -> String {
    format!(
        "{}: {}\nAverage Recycling Rate (%): {}\n",
        COLUMN_LABELS[1],
        style(format_thousands(total_collected)).bold().blue(),
        style(format_rate(average_recycling_rate)).bold().blue(),
    )
}

/// One bar per week, scaled to the heaviest week.
#[must_use]
pub fn render_collection_trends(points: &[CollectionPoint]) -> String {
    let max = points.iter().map(|p| p.total_waste_kg).max().unwrap_or(0);
    points
        .iter()
        .map(|point| {
            format!(
                "{}  {} {}\n",
                point.date,
                style(bar(f64::from(point.total_waste_kg), f64::from(max))).cyan(),
                format_thousands(u64::from(point.total_waste_kg)),
            )
        })
        .collect()
}

/// One bar per week on a fixed 0-100% scale.
#[must_use]
pub fn render_rate_trends(points: &[RatePoint]) -> String {
    points
        .iter()
        .map(|point| {
            format!(
                "{}  {} {}\n",
                point.date,
                style(bar(point.recycling_rate_pct, 100.0)).green(),
                format_rate(point.recycling_rate_pct),
            )
        })
        .collect()
}

/// Each category's amount and share of the categorised total.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_breakdown(categories: &[CategoryTotal]) -> String {
    let total: u64 = categories.iter().map(|c| c.amount_kg).sum();
    let width = categories
        .iter()
        .map(|c| c.category.label().len())
        .max()
        .unwrap_or(0);

    categories
        .iter()
        .map(|entry| {
            let share = if total == 0 {
                0.0
            } else {
                entry.amount_kg as f64 / total as f64 * 100.0
            };
            format!(
                "{:<width$}  {} {} ({})\n",
                entry.category.label(),
                style(bar(share, 100.0)).magenta(),
                format_thousands(entry.amount_kg),
                format_rate(share),
            )
        })
        .collect()
}

/// The record table with the dashboard's column headings.
#[must_use]
pub fn render_table(records: &[Record]) -> String {
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.date.to_string(),
                format_thousands(u64::from(r.total_waste_kg)),
                format_thousands(u64::from(r.recyclable_kg)),
                format_thousands(u64::from(r.organic_kg)),
                format_thousands(u64::from(r.non_recyclable_kg)),
                format_rate(r.recycling_rate_pct),
            ]
        })
        .collect();

    let mut widths = COLUMN_LABELS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = COLUMN_LABELS
        .iter()
        .zip(widths)
        .map(|(label, width)| format!("{label:<width$}"))
        .collect();
    let mut out = format!("{}\n", style(header.join("  ")).bold().green());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

/// The date-filtered table shown after every section.
#[must_use]
pub fn render_preview(preview: &FilteredPreview<'_>) -> String {
    let mut out = format!(
        "{}\n",
        style(format!(
            "Filtered Data (from {} to {}):",
            preview.range.start, preview.range.end
        ))
        .bold()
    );
    if preview.records.is_empty() {
        out.push_str("No records in range.\n");
    } else {
        out.push_str(&render_table(preview.records));
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max).min(1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use waste_dashboard_dataset_models::{DateRange, WasteCategory};

    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn record(d: NaiveDate, total: u32, recyclable: u32) -> Record {
        Record {
            date: d,
            total_waste_kg: total,
            recyclable_kg: recyclable,
            organic_kg: 100,
            non_recyclable_kg: 100,
            recycling_rate_pct: f64::from(recyclable) / f64::from(total) * 100.0,
        }
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(26_130), "26,130");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn rate_has_two_decimals() {
        assert_eq!(format_rate(46.875), "46.88%");
        assert_eq!(format_rate(25.0), "25.00%");
    }

    #[test]
    fn key_metrics_show_both_numbers() {
        console::set_colors_enabled(false);
        let text = render_key_metrics(26_130, 46.875);
        assert!(text.contains("Total Waste Collected (kg): 26,130"));
        assert!(text.contains("Average Recycling Rate (%): 46.88%"));
    }

    #[test]
    fn trend_bars_scale_to_maximum() {
        console::set_colors_enabled(false);
        let points = [
            CollectionPoint {
                date: date(1, 7),
                total_waste_kg: 1000,
            },
            CollectionPoint {
                date: date(1, 14),
                total_waste_kg: 500,
            },
        ];
        let text = render_collection_trends(&points);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
        assert!(lines[0].starts_with("2024-01-07"));
        assert!(lines[0].ends_with("1,000"));
    }

    #[test]
    fn breakdown_shows_shares() {
        console::set_colors_enabled(false);
        let categories = [
            CategoryTotal {
                category: WasteCategory::Recyclable,
                amount_kg: 500,
            },
            CategoryTotal {
                category: WasteCategory::Organic,
                amount_kg: 300,
            },
            CategoryTotal {
                category: WasteCategory::NonRecyclable,
                amount_kg: 200,
            },
        ];
        let text = render_breakdown(&categories);
        assert!(text.contains("Recyclable Waste (kg)"));
        assert!(text.contains("500 (50.00%)"));
        assert!(text.contains("200 (20.00%)"));
    }

    #[test]
    fn table_has_header_and_one_line_per_record() {
        console::set_colors_enabled(false);
        let records = [record(date(1, 7), 1200, 300), record(date(1, 14), 800, 400)];
        let text = render_table(&records);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[0].contains("Recycling Rate (%)"));
        assert!(lines[1].contains("1,200"));
        assert!(lines[1].ends_with("25.00%"));
        assert!(lines[2].ends_with("50.00%"));
    }

    #[test]
    fn view_is_label_then_payload_then_preview() {
        console::set_colors_enabled(false);
        let records = [record(date(1, 7), 1200, 300)];
        let view = View {
            section: Section::KeyMetrics,
            payload: ViewPayload::KeyMetrics {
                total_collected: 1200,
                average_recycling_rate: 25.0,
            },
            preview: FilteredPreview {
                range: DateRange::new(date(1, 1), date(1, 31)).unwrap(),
                records: &records,
            },
        };
        let text = render_view(&view);
        assert!(text.starts_with(
            "Key Metrics\n\nTotal Waste Collected (kg): 1,200\n\
             Average Recycling Rate (%): 25.00%\n\n\
             Filtered Data (from 2024-01-01 to 2024-01-31):\n"
        ));
        assert_eq!(text.lines().count(), 8);
        assert!(text.ends_with("25.00%\n"));
    }

    #[test]
    fn section_title_precedes_chart() {
        console::set_colors_enabled(false);
        let payload = ViewPayload::RecyclingTrends {
            points: vec![RatePoint {
                date: date(1, 7),
                recycling_rate_pct: 50.0,
            }],
        };
        let text = render_payload(Section::RecyclingTrends, &payload);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Recycling Rate Over Time");
        assert_eq!(
            lines[1],
            format!("2024-01-07  {} 50.00%", "█".repeat(BAR_WIDTH / 2))
        );
    }

    #[test]
    fn preview_heading_names_the_range() {
        console::set_colors_enabled(false);
        let records = [record(date(3, 10), 1000, 500)];
        let preview = FilteredPreview {
            range: DateRange::new(date(3, 1), date(3, 31)).unwrap(),
            records: &records,
        };
        let text = render_preview(&preview);
        assert!(text.starts_with("Filtered Data (from 2024-03-01 to 2024-03-31):"));
        assert!(text.contains("2024-03-10"));

        let empty = FilteredPreview {
            range: preview.range,
            records: &[],
        };
        assert!(render_preview(&empty).contains("No records in range."));
    }
}
