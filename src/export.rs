// CSV export of selected records

use crate::error::StoreError;
use crate::record::Record;
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// UTF-8 byte-order-mark so spreadsheet tools detect the encoding
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column layout for one document type: display labels and the record
/// field keys they map to, positionally.
#[derive(Debug, Clone)]
pub struct ExportSpec {
    label: String,
    headers: Vec<String>,
    fields: Vec<String>,
}

impl ExportSpec {
    pub fn new<S: Into<String>>(label: S, headers: Vec<S>, fields: Vec<S>) -> Result<Self, StoreError> {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if headers.len() != fields.len() {
            return Err(StoreError::Validation(format!(
                "export spec has {} headers but {} fields",
                headers.len(),
                fields.len()
            )));
        }
        Ok(Self {
            label: label.into(),
            headers,
            fields,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A finished export payload ready to hand to the save mechanism
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Save the payload under its own filename in `dir`. Stands in for the
    /// browser download; failures are terminal, never retried.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes)?;
        info!(path = ?path, bytes = self.bytes.len(), "Export written");
        Ok(path)
    }
}

/// Serialize the selected subset of `records` as BOM-prefixed CSV.
///
/// Rows come out in collection order. An empty selection fails with
/// `NoSelection` before any payload is built. Selected ids not present in
/// the collection contribute no rows.
pub fn export_csv<T: Record>(
    records: &[T],
    selected: &HashSet<String>,
    spec: &ExportSpec,
) -> Result<ExportFile, StoreError> {
    if selected.is_empty() {
        return Err(StoreError::NoSelection);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&spec.headers)?;

    let mut rows = 0usize;
    for record in records {
        if !selected.contains(record.id()) {
            continue;
        }
        let row: Vec<String> = spec
            .fields
            .iter()
            .map(|field| record.field(field).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
        rows += 1;
    }

    let body = writer
        .into_inner()
        .map_err(|e| StoreError::Persistence(format!("flushing csv buffer: {}", e)))?;

    let mut bytes = Vec::with_capacity(BOM.len() + body.len());
    bytes.extend_from_slice(BOM);
    bytes.extend_from_slice(&body);

    let filename = format!("{}_{}.csv", spec.label, Local::now().format("%Y-%m-%d"));
    info!(filename, rows, "Export payload built");

    Ok(ExportFile { filename, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Warranty, WarrantyInput, seed_warranties, warranty_export_spec};
    use crate::record::Record;
    use tempfile::TempDir;

    fn select(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_spec_rejects_header_field_mismatch() {
        let result = ExportSpec::new("x", vec!["a", "b"], vec!["a"]);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_empty_selection_fails() {
        let records = seed_warranties();
        let spec = warranty_export_spec();
        let result = export_csv(&records, &HashSet::new(), &spec);
        assert!(matches!(result, Err(StoreError::NoSelection)));
    }

    #[test]
    fn test_payload_starts_with_bom_and_headers() {
        let records = seed_warranties();
        let spec = warranty_export_spec();
        let file = export_csv(&records, &select(&["ZY10025627"]), &spec).unwrap();

        assert_eq!(&file.bytes[..3], b"\xEF\xBB\xBF");
        let text = String::from_utf8(file.bytes[3..].to_vec()).unwrap();
        assert!(text.starts_with("保单号,车主/公司,联系电话"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_rows_follow_collection_order() {
        let records = seed_warranties();
        let spec = warranty_export_spec();
        // Selection set order must not matter.
        let file = export_csv(&records, &select(&["ZY10024833", "ZY10025627"]), &spec).unwrap();

        let text = String::from_utf8(file.bytes[3..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("ZY10025627,"));
        assert!(lines[2].starts_with("ZY10024833,"));
    }

    #[test]
    fn test_unknown_selected_ids_contribute_nothing() {
        let records = seed_warranties();
        let spec = warranty_export_spec();
        let file = export_csv(&records, &select(&["ZY10025627", "nope"]), &spec).unwrap();
        let text = String::from_utf8(file.bytes[3..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_filename_is_label_and_date() {
        let records = seed_warranties();
        let spec = warranty_export_spec();
        let file = export_csv(&records, &select(&["ZY10025627"]), &spec).unwrap();

        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(file.filename, format!("延保数据_{}.csv", today));
    }

    #[test]
    fn test_round_trip_preserves_embedded_delimiters() {
        // Field values carrying commas, quotes and newlines must survive a
        // read back through a standard CSV parser.
        let input = WarrantyInput {
            customer_name: "张, \"伟\"".to_string(),
            customer_phone: "139\n000".to_string(),
            payment: "6,880".to_string(),
            ..Default::default()
        };
        let record = Warranty::from_input("ZY99999999".to_string(), "2025-04-21 10:00:00", input);
        let records = vec![record];

        let spec = warranty_export_spec();
        let file = export_csv(&records, &select(&["ZY99999999"]), &spec).unwrap();

        let mut reader = csv::Reader::from_reader(&file.bytes[3..]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "张, \"伟\"");
        assert_eq!(&rows[0][2], "139\n000");
        assert_eq!(&rows[0][6], "6,880");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let records = seed_warranties();
        let spec = warranty_export_spec();
        let file = export_csv(&records, &select(&["ZY10025627"]), &spec).unwrap();

        let mut reader = csv::Reader::from_reader(&file.bytes[3..]);
        let row = reader.records().next().unwrap().unwrap();
        // licensePlate is unset on the seed records.
        assert_eq!(&row[13], "");
    }

    #[test]
    fn test_write_to_saves_file() {
        let temp = TempDir::new().unwrap();
        let records = seed_warranties();
        let spec = warranty_export_spec();
        let file = export_csv(&records, &select(&["ZY10025627"]), &spec).unwrap();

        let path = file.write_to(temp.path()).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), file.bytes);
    }

    #[test]
    fn test_write_to_missing_dir_is_terminal() {
        let file = ExportFile {
            filename: "x.csv".to_string(),
            bytes: vec![1, 2, 3],
        };
        let result = file.write_to(Path::new("/nonexistent-dir-for-test"));
        assert!(matches!(result, Err(StoreError::ExportFailed(_))));
    }
}
