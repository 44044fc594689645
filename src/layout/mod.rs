//! # Page Layout
//!
//! Lays a lesson record out onto the sink page by page: header (logo, title,
//! school line, rule), the labeled field rows, the four content sections,
//! and the signature footer. All geometry is in millimetres on an A4
//! portrait page.
//!
//! Each section body is wrapped by the sink, then every line goes through
//! the script-aware segmenter: lines containing any Arabic-range code point
//! are reshaped, reordered and right-aligned in the Arabic-capable face;
//! everything else is drawn left-aligned in the Latin face. The page cursor
//! is checked against the safe content height before each section header and
//! before each wrapped line, starting a fresh page when a line would cross
//! into the footer reserve.

use crate::image_loader::LoadedImage;
use crate::model::LessonRecord;
use crate::sink::{Align, PageSink, TextStyle};
use crate::text::{self, shaping};

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const MARGIN_LEFT: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 15.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

/// Vertical advance per body line.
const LINE_HEIGHT: f64 = 6.0;
/// Space reserved above the bottom edge for the signature footer.
const FOOTER_RESERVE: f64 = 40.0;
/// Indent of left-aligned body text from the left margin.
const BODY_INDENT: f64 = 5.0;

const TITLE: &str = "RANCANGAN PENGAJARAN HARIAN";
const SCHOOL: &str = "SEKOLAH RENDAH ISLAM AL-KHAIRIAH";

/// Script classification of one wrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScript {
    /// Contains at least one Arabic-range or Arabic-presentation-range code
    /// point after stripping whitespace. Shaped, reordered, right-aligned.
    ArabicDominant,
    /// Everything else. Drawn verbatim, left-aligned.
    LatinOrOther,
}

/// Classify a wrapped line. The threshold is deliberately "any Arabic code
/// point at all", matching the observable behavior consumers rely on, even
/// though a single stray mark flips a mostly-Latin line to RTL layout.
pub fn classify_line(line: &str) -> LineScript {
    let has_arabic = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .any(shaping::is_arabic_char);
    if has_arabic {
        LineScript::ArabicDominant
    } else {
        LineScript::LatinOrOther
    }
}

/// Tracks the vertical position on the current page.
#[derive(Debug, Clone)]
struct PageCursor {
    y: f64,
}

impl PageCursor {
    fn new(y: f64) -> Self {
        Self { y }
    }

    /// Start a new page if drawing `needed` more millimetres would cross
    /// into the footer reserve.
    fn ensure_fits(&mut self, sink: &mut dyn PageSink, needed: f64) {
        if self.y + needed > PAGE_HEIGHT - FOOTER_RESERVE {
            sink.add_page();
            self.y = MARGIN_TOP;
        }
    }

    fn advance(&mut self, dy: f64) {
        self.y += dy;
    }
}

/// Draw the document header and return the y where body content starts.
fn draw_header(sink: &mut dyn PageSink, logo: Option<&LoadedImage>) -> f64 {
    let y = MARGIN_TOP;
    if let Some(logo) = logo {
        sink.draw_image(logo, MARGIN_LEFT, y, 12.0, 12.0);
    }
    sink.draw_text(
        TITLE,
        PAGE_WIDTH / 2.0,
        y + 5.0,
        Align::Center,
        TextStyle::latin_bold(14.0),
    );
    sink.draw_text(
        SCHOOL,
        PAGE_WIDTH / 2.0,
        y + 11.0,
        Align::Center,
        TextStyle::latin(10.0),
    );
    let rule_y = y + 15.0;
    sink.draw_rule(MARGIN_LEFT, rule_y, PAGE_WIDTH - MARGIN_RIGHT, rule_y, 0.5);
    rule_y + 10.0
}

/// Draw a `LABEL : value` pair at a fixed position.
fn draw_labeled_field(sink: &mut dyn PageSink, label: &str, value: &str, x: f64, y: f64) {
    let value = if value.is_empty() { "-" } else { value };
    sink.draw_text(
        &format!("{label} : {value}"),
        x,
        y,
        Align::Left,
        TextStyle::latin(11.0),
    );
}

/// Draw one labeled content section: bold header line, then each wrapped
/// body line through the segmenter.
fn draw_section(sink: &mut dyn PageSink, cursor: &mut PageCursor, label: &str, content: &str) {
    cursor.ensure_fits(sink, LINE_HEIGHT);
    sink.draw_text(
        &format!("{label} :"),
        MARGIN_LEFT,
        cursor.y,
        Align::Left,
        TextStyle::latin_bold(11.0),
    );
    cursor.advance(LINE_HEIGHT);

    let lines = if content.trim().is_empty() {
        vec!["-".to_string()]
    } else {
        sink.wrap(content, CONTENT_WIDTH - BODY_INDENT)
    };

    for line in lines {
        cursor.ensure_fits(sink, LINE_HEIGHT);
        match classify_line(&line) {
            LineScript::ArabicDominant => {
                let visual = text::shape_line(&line);
                sink.draw_text(
                    &visual,
                    PAGE_WIDTH - MARGIN_RIGHT - BODY_INDENT,
                    cursor.y,
                    Align::Right,
                    TextStyle::arabic(11.0),
                );
            }
            LineScript::LatinOrOther => {
                sink.draw_text(
                    &line,
                    MARGIN_LEFT + BODY_INDENT,
                    cursor.y,
                    Align::Left,
                    TextStyle::latin(11.0),
                );
            }
        }
        cursor.advance(LINE_HEIGHT);
    }

    cursor.advance(4.0);
}

/// Draw the two signature rules with their captions.
fn draw_footer(sink: &mut dyn PageSink) {
    let footer_y = PAGE_HEIGHT - 35.0;
    let sig_width = 60.0;

    sink.draw_rule(MARGIN_LEFT, footer_y, MARGIN_LEFT + sig_width, footer_y, 0.3);
    sink.draw_text(
        "Guru Mata Pelajaran",
        MARGIN_LEFT + sig_width / 2.0,
        footer_y + 5.0,
        Align::Center,
        TextStyle::latin(10.0),
    );

    let right_x = PAGE_WIDTH - MARGIN_RIGHT - sig_width;
    sink.draw_rule(right_x, footer_y, right_x + sig_width, footer_y, 0.3);
    sink.draw_text(
        "Guru Besar",
        right_x + sig_width / 2.0,
        footer_y + 5.0,
        Align::Center,
        TextStyle::latin(10.0),
    );
}

/// Lay out one full record: header, field rows, the four sections, footer.
pub fn render_record(sink: &mut dyn PageSink, record: &LessonRecord, logo: Option<&LoadedImage>) {
    let mut y = draw_header(sink, logo);

    draw_labeled_field(sink, "TARIKH", &record.tarikh, MARGIN_LEFT, y);
    draw_labeled_field(sink, "KELAS", &record.kelas, PAGE_WIDTH / 2.0, y);
    y += 7.0;
    draw_labeled_field(sink, "HARI", &record.hari, MARGIN_LEFT, y);
    draw_labeled_field(sink, "MASA", &record.masa, PAGE_WIDTH / 2.0, y);
    y += 12.0;

    let mut cursor = PageCursor::new(y);
    draw_section(sink, &mut cursor, "SUBJEK", &record.subjek);
    cursor.advance(2.0);
    draw_section(sink, &mut cursor, "OBJEKTIF", &record.objektif);
    cursor.advance(2.0);
    draw_section(sink, &mut cursor, "AKTIVITI", &record.aktiviti);
    cursor.advance(2.0);
    draw_section(sink, &mut cursor, "REFLEKSI", &record.refleksi);

    draw_footer(sink);
}

/// Lay out many records into one document, one record at a time.
///
/// Strictly sequential: each record is fully placed, including its own
/// pagination, before the next begins. The sink's cursor state makes any
/// parallelism here meaningless.
pub fn render_records(
    sink: &mut dyn PageSink,
    records: &[LessonRecord],
    logo: Option<&LoadedImage>,
) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            sink.add_page();
        }
        render_record(sink, record, logo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DrawCommand, FontKind, RecordingSink};

    fn record_with(field: &str, value: &str) -> LessonRecord {
        let mut r = LessonRecord {
            tarikh: "12/03/2026".to_string(),
            hari: "Khamis".to_string(),
            kelas: "5 Amanah".to_string(),
            masa: "8:00 - 9:00".to_string(),
            subjek: "Jawi".to_string(),
            ..Default::default()
        };
        match field {
            "subjek" => r.subjek = value.to_string(),
            "objektif" => r.objektif = value.to_string(),
            "aktiviti" => r.aktiviti = value.to_string(),
            "refleksi" => r.refleksi = value.to_string(),
            _ => unreachable!(),
        }
        r
    }

    #[test]
    fn test_classify_latin_line() {
        assert_eq!(classify_line("Aktiviti 123!"), LineScript::LatinOrOther);
        assert_eq!(classify_line(""), LineScript::LatinOrOther);
        assert_eq!(classify_line("   "), LineScript::LatinOrOther);
    }

    #[test]
    fn test_classify_arabic_line() {
        assert_eq!(classify_line("\u{0628}"), LineScript::ArabicDominant);
        // A single Arabic char among Latin text still triggers RTL layout.
        assert_eq!(
            classify_line("Subjek: \u{0628} extra"),
            LineScript::ArabicDominant
        );
        // Presentation-form range counts too.
        assert_eq!(classify_line("x \u{FE8F}"), LineScript::ArabicDominant);
    }

    #[test]
    fn test_header_geometry() {
        let mut sink = RecordingSink::new();
        let y = draw_header(&mut sink, None);
        assert_eq!(y, 40.0);
        let (title, x, ty, align, style) = sink.texts().next().unwrap();
        assert_eq!(title, TITLE);
        assert_eq!(x, PAGE_WIDTH / 2.0);
        assert_eq!(ty, 20.0);
        assert_eq!(align, Align::Center);
        assert!(style.bold);
        assert_eq!(style.size, 14.0);
    }

    #[test]
    fn test_header_with_logo_places_image() {
        let mut sink = RecordingSink::new();
        let logo = LoadedImage {
            data: vec![0u8; 4],
            format: crate::image_loader::ImageFormat::Png,
            width_px: 64,
            height_px: 64,
        };
        draw_header(&mut sink, Some(&logo));
        assert!(sink.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Image {
                x,
                y,
                width,
                height
            } if *x == MARGIN_LEFT && *y == MARGIN_TOP && *width == 12.0 && *height == 12.0
        )));
    }

    #[test]
    fn test_header_without_logo_has_no_image() {
        let mut sink = RecordingSink::new();
        draw_header(&mut sink, None);
        assert!(!sink
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Image { .. })));
    }

    #[test]
    fn test_empty_field_renders_placeholder_line() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("refleksi", ""), None);
        assert!(
            sink.texts().any(|(content, _, _, _, _)| content == "-"),
            "empty section must render a literal dash"
        );
    }

    #[test]
    fn test_whitespace_only_field_renders_placeholder_line() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("refleksi", "   "), None);
        assert!(sink.texts().any(|(content, _, _, _, _)| content == "-"));
    }

    #[test]
    fn test_latin_body_left_aligned_at_indent() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("aktiviti", "Aktiviti 123!"), None);
        let (_, x, _, align, style) = sink
            .texts()
            .find(|(content, ..)| *content == "Aktiviti 123!")
            .unwrap();
        assert_eq!(x, MARGIN_LEFT + BODY_INDENT);
        assert_eq!(align, Align::Left);
        assert_eq!(style.font, FontKind::Latin);
    }

    #[test]
    fn test_arabic_body_right_aligned_and_shaped() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("objektif", "\u{0628}\u{0628}"), None);
        let (content, x, _, align, style) = sink
            .texts()
            .find(|(_, _, _, _, style)| style.font == FontKind::Arabic)
            .expect("an Arabic line should be drawn");
        assert_eq!(x, PAGE_WIDTH - MARGIN_RIGHT - BODY_INDENT);
        assert_eq!(align, Align::Right);
        // Shaped and visually reordered: final form first.
        let chars: Vec<char> = content.chars().collect();
        assert_eq!(chars, vec!['\u{FE90}', '\u{FE91}']);
    }

    #[test]
    fn test_single_record_fits_one_page() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("refleksi", "Baik"), None);
        assert_eq!(sink.page_count(), 1);
    }

    #[test]
    fn test_long_section_paginates_before_offending_line() {
        // 30 forced lines cannot fit below the section start; the overflow
        // line must move to a new page at the top margin.
        let body = (0..30)
            .map(|i| format!("Baris {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("refleksi", &body), None);
        assert_eq!(sink.page_count(), 2);

        let commands = sink.commands();
        let break_pos = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::PageBreak))
            .unwrap();
        // First command on the new page is a body line at the top margin.
        match &commands[break_pos + 1] {
            DrawCommand::Text { y, .. } => assert_eq!(*y, MARGIN_TOP),
            other => panic!("expected text after page break, got {other:?}"),
        }
        // No line on the first page crossed into the footer reserve.
        for c in &commands[..break_pos] {
            if let DrawCommand::Text { y, .. } = c {
                assert!(*y + LINE_HEIGHT <= PAGE_HEIGHT - FOOTER_RESERVE + f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_section_header_paginates_too() {
        // Fill AKTIVITI so the REFLEKSI header itself would land past the
        // safe height: the break must come before the header is drawn.
        let body = (0..25)
            .map(|i| format!("Langkah {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("aktiviti", &body), None);
        assert_eq!(sink.page_count(), 2);

        let (_, _, y, _, style) = sink
            .texts()
            .find(|(content, ..)| *content == "REFLEKSI :")
            .unwrap();
        assert_eq!(y, MARGIN_TOP, "header should start the new page");
        assert!(style.bold);
    }

    #[test]
    fn test_footer_on_every_record() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("refleksi", "Baik"), None);
        let captions: Vec<&str> = sink
            .texts()
            .map(|(content, ..)| content)
            .filter(|c| *c == "Guru Mata Pelajaran" || *c == "Guru Besar")
            .collect();
        assert_eq!(captions.len(), 2);
    }

    #[test]
    fn test_bulk_inserts_page_break_between_records() {
        let records = vec![
            record_with("refleksi", "Baik"),
            record_with("refleksi", "Sangat baik"),
        ];
        let mut sink = RecordingSink::new();
        render_records(&mut sink, &records, None);
        assert_eq!(sink.page_count(), 2);
        // Both records draw their own header.
        let titles = sink
            .texts()
            .filter(|(content, ..)| *content == TITLE)
            .count();
        assert_eq!(titles, 2);
    }

    #[test]
    fn test_bulk_with_no_records_draws_nothing() {
        let mut sink = RecordingSink::new();
        render_records(&mut sink, &[], None);
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_labeled_fields_present() {
        let mut sink = RecordingSink::new();
        render_record(&mut sink, &record_with("refleksi", ""), None);
        let all: Vec<String> = sink.texts().map(|(c, ..)| c.to_string()).collect();
        assert!(all.iter().any(|c| c == "TARIKH : 12/03/2026"));
        assert!(all.iter().any(|c| c == "KELAS : 5 Amanah"));
        assert!(all.iter().any(|c| c == "HARI : Khamis"));
        assert!(all.iter().any(|c| c == "MASA : 8:00 - 9:00"));
    }

    #[test]
    fn test_empty_labeled_field_shows_dash() {
        let mut sink = RecordingSink::new();
        let mut record = record_with("refleksi", "");
        record.masa = String::new();
        render_record(&mut sink, &record, None);
        assert!(sink.texts().any(|(c, ..)| c == "MASA : -"));
    }
}
