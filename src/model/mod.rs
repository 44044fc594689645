//! # Record Model
//!
//! The input representation for document generation: a daily lesson record
//! (rancangan pengajaran harian) and the curriculum-standard reference entry
//! it draws from. Field names mirror the application's JSON payloads
//! (camelCase on the wire, Malay domain terms).
//!
//! Storage and auth are external collaborators; nothing here persists. A
//! record is handed in, laid out, and forgotten.

use crate::error::RencanaError;
use serde::{Deserialize, Serialize};

/// One daily lesson record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    #[serde(default)]
    pub id: String,
    /// Date, as entered (e.g. "12/03/2026").
    #[serde(default)]
    pub tarikh: String,
    /// Day of week.
    #[serde(default)]
    pub hari: String,
    /// Class name.
    #[serde(default)]
    pub kelas: String,
    /// Time slot.
    #[serde(default)]
    pub masa: String,
    /// Subject. May be Jawi/Arabic text.
    #[serde(default)]
    pub subjek: String,
    /// Topic / curriculum content standard.
    #[serde(default)]
    pub tajuk_standard_kandungan: String,
    /// Lesson objectives.
    #[serde(default)]
    pub objektif: String,
    /// Activities.
    #[serde(default)]
    pub aktiviti: String,
    /// Teacher's reflection.
    #[serde(default)]
    pub refleksi: String,
}

impl LessonRecord {
    /// Parse a record from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, RencanaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Suggested file name for this record's exported document, e.g.
    /// `RPH_Sains_12-03-2026.pdf`. Pure string work, no filesystem access.
    pub fn pdf_file_name(&self) -> String {
        format!("RPH_{}_{}.pdf", self.subjek, self.tarikh.replace('/', "-"))
    }
}

/// Suggested file name for a bulk export covering many records.
/// `date_iso` is the caller's date stamp (e.g. "2026-08-05").
pub fn bulk_pdf_file_name(date_iso: &str) -> String {
    format!("Rekod_RPH_{date_iso}.pdf")
}

/// A curriculum-standard reference entry (DSKP), used by the application to
/// pre-fill records. Carried here for the wire format only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumStandard {
    pub id: String,
    pub subjek: String,
    /// School year, when the standard is year-specific.
    pub tahun: Option<i32>,
    /// The standard's code/text.
    pub sk: String,
}
