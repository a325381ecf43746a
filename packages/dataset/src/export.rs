//! CSV export of dataset rows, using the raw table's column headings.

use std::io::Write;

use waste_dashboard_dataset_models::{COLUMN_LABELS, Record};

use crate::DatasetError;

/// Writes `records` as CSV, header row first.
///
/// # Errors
///
/// Returns [`DatasetError::Csv`] or [`DatasetError::Io`] if writing fails.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(COLUMN_LABELS)?;

    for record in records {
        csv_writer.write_record([
            record.date.to_string(),
            record.total_waste_kg.to_string(),
            record.recyclable_kg.to_string(),
            record.organic_kg.to_string(),
            record.non_recyclable_kg.to_string(),
            record.recycling_rate_pct.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    log::debug!("Exported {} records as CSV", records.len());
    Ok(())
}

/// Renders `records` as a CSV string.
///
/// # Errors
///
/// See [`write_csv`].
pub fn to_csv_string(records: &[Record]) -> Result<String, DatasetError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::aggregate::derive_record;

    #[test]
    fn writes_header_and_rows() {
        let records = vec![
            derive_record(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), 1000, 250, 300, 200)
                .unwrap(),
        ];
        let csv = to_csv_string(&records).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(
                "Date,Total Waste Collected (kg),Recyclable Waste (kg),Organic Waste (kg),\
                 Non-Recyclable Waste (kg),Recycling Rate (%)"
            )
        );
        assert_eq!(lines.next(), Some("2024-01-07,1000,250,300,200,25"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_export_still_has_header() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
