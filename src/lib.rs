//! # Rencana
//!
//! A lesson-record document renderer whose core is a Jawi/Arabic contextual
//! reshaping and bidirectional layout engine.
//!
//! Most PDF canvases draw exactly the code points they are given, which
//! turns logical-order Arabic text into disconnected, left-to-right
//! gibberish. Rencana does the shaping itself: it selects positional glyph
//! forms per letter, fuses lam-alef ligatures, reorders each line for
//! right-to-left painting, and only then hands plain draw commands to the
//! output sink.
//!
//! ## Architecture
//!
//! ```text
//! LessonRecord (JSON/API)
//!       |
//!   [layout]  -- header, field rows, sections, footer, pagination
//!       |
//!   [text]    -- per line: classify script, reshape, reorder
//!       |
//!   [sink]    -- ordered draw commands (text, rule, image, page break)
//! ```
//!
//! The sink owns fonts, text measurement and the actual byte format; the
//! engine stays a pure command producer. Generation is synchronous and
//! per-document: the shaping pipeline is stateless and re-entrant, while a
//! sink belongs to exactly one generation call.

pub mod error;
pub mod excel;
pub mod image_loader;
pub mod layout;
pub mod model;
pub mod sink;
pub mod text;

pub use error::RencanaError;
pub use image_loader::{load_logo, load_logo_bytes, LoadedImage};
pub use model::LessonRecord;
pub use sink::{Align, DrawCommand, FontKind, PageSink, RecordingSink, TextStyle};

/// Generate one record's document onto a sink.
///
/// This is the primary entry point. `logo` is the pre-fetched header image,
/// if any; pass `None` to render a plain header.
pub fn generate(sink: &mut dyn PageSink, record: &LessonRecord, logo: Option<&LoadedImage>) {
    layout::render_record(sink, record, logo);
}

/// Generate many records into one document, a page break between each.
pub fn generate_bulk(
    sink: &mut dyn PageSink,
    records: &[LessonRecord],
    logo: Option<&LoadedImage>,
) {
    layout::render_records(sink, records, logo);
}

/// Parse a record from JSON and generate its document.
pub fn generate_json(
    sink: &mut dyn PageSink,
    json: &str,
    logo: Option<&LoadedImage>,
) -> Result<(), RencanaError> {
    let record = LessonRecord::from_json(json)?;
    generate(sink, &record, logo);
    Ok(())
}
