//! # Worksheet Export
//!
//! Flattens lesson records into ordered row objects for a spreadsheet sink.
//! The workbook container itself (cell formats, the xlsx byte layout) is the
//! sink's responsibility; this module only decides the columns, their Malay
//! headers, and the row order.

use crate::model::LessonRecord;
use serde::Serialize;

/// Sheet name used for the exported record list.
pub const SHEET_NAME: &str = "Rekod eRPH";

/// One worksheet row. Serializes with the user-facing column headers as
/// keys, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetRow {
    #[serde(rename = "Tarikh")]
    pub tarikh: String,
    #[serde(rename = "Hari")]
    pub hari: String,
    #[serde(rename = "Kelas")]
    pub kelas: String,
    #[serde(rename = "Masa")]
    pub masa: String,
    #[serde(rename = "Subjek")]
    pub subjek: String,
    #[serde(rename = "Tajuk / Standard Kandungan")]
    pub tajuk_standard_kandungan: String,
    #[serde(rename = "Aktiviti")]
    pub aktiviti: String,
    #[serde(rename = "Refleksi")]
    pub refleksi: String,
}

impl From<&LessonRecord> for WorksheetRow {
    fn from(record: &LessonRecord) -> Self {
        Self {
            tarikh: record.tarikh.clone(),
            hari: record.hari.clone(),
            kelas: record.kelas.clone(),
            masa: record.masa.clone(),
            subjek: record.subjek.clone(),
            tajuk_standard_kandungan: record.tajuk_standard_kandungan.clone(),
            aktiviti: record.aktiviti.clone(),
            refleksi: record.refleksi.clone(),
        }
    }
}

/// All records as worksheet rows, in input order.
pub fn worksheet_rows(records: &[LessonRecord]) -> Vec<WorksheetRow> {
    records.iter().map(WorksheetRow::from).collect()
}

/// Suggested file name for the exported workbook.
/// `date_iso` is the caller's date stamp (e.g. "2026-08-05").
pub fn workbook_file_name(date_iso: &str) -> String {
    format!("Rekod_eRPH_Semua_{date_iso}.xlsx")
}
