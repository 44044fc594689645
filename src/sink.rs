//! # Output Sink
//!
//! The engine does not own a PDF object model. Layout produces an ordered
//! sequence of draw commands and hands them to a [`PageSink`]; the sink is
//! whatever turns them into bytes on a page (a PDF canvas, a print-preview
//! surface). The sink also supplies the text-measurement capability the
//! segmenter needs: `wrap` splits a field into lines that fit a width using
//! the sink's own font metrics.
//!
//! [`RecordingSink`] is the built-in implementation: it captures the command
//! stream in memory. Every integration test runs against it, and a consumer
//! can drain its commands into any concrete canvas.

use crate::image_loader::LoadedImage;
use crate::text;

/// Which face the sink should select for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// The default Latin text face.
    Latin,
    /// A face with Arabic presentation-form coverage.
    Arabic,
}

/// Horizontal anchoring of drawn text at its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Face, size and weight for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontKind,
    /// Size in points.
    pub size: f64,
    pub bold: bool,
}

impl TextStyle {
    pub fn latin(size: f64) -> Self {
        Self {
            font: FontKind::Latin,
            size,
            bold: false,
        }
    }

    pub fn latin_bold(size: f64) -> Self {
        Self {
            font: FontKind::Latin,
            size,
            bold: true,
        }
    }

    pub fn arabic(size: f64) -> Self {
        Self {
            font: FontKind::Arabic,
            size,
            bold: false,
        }
    }
}

/// One drawing instruction. Coordinates are in millimetres from the top-left
/// of the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        content: String,
        x: f64,
        y: f64,
        align: Align,
        style: TextStyle,
    },
    Rule {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    },
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    PageBreak,
}

/// The output surface a document is generated onto.
///
/// Exclusive to one generation call: the cursor and page state behind a sink
/// must never be shared between two documents being built at once.
pub trait PageSink {
    /// Split `text` into lines that fit within `max_width` millimetres,
    /// using the sink's text measurement.
    fn wrap(&self, text: &str, max_width: f64) -> Vec<String>;

    fn draw_text(&mut self, content: &str, x: f64, y: f64, align: Align, style: TextStyle);

    fn draw_rule(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64);

    fn draw_image(&mut self, image: &LoadedImage, x: f64, y: f64, width: f64, height: f64);

    /// Start a new page. Subsequent commands land on it.
    fn add_page(&mut self);
}

/// An in-memory sink that records the command stream.
#[derive(Debug)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
    /// Font size used for wrap measurement, matching the body text size.
    measure_size: f64,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            measure_size: 11.0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of pages the recorded document spans.
    pub fn page_count(&self) -> usize {
        1 + self
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::PageBreak))
            .count()
    }

    /// All text commands, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f64, f64, Align, TextStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                content,
                x,
                y,
                align,
                style,
            } => Some((content.as_str(), *x, *y, *align, *style)),
            _ => None,
        })
    }
}

impl PageSink for RecordingSink {
    fn wrap(&self, content: &str, max_width: f64) -> Vec<String> {
        text::wrap(content, max_width, |c| {
            text::char_width_mm(c, self.measure_size)
        })
    }

    fn draw_text(&mut self, content: &str, x: f64, y: f64, align: Align, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            x,
            y,
            align,
            style,
        });
    }

    fn draw_rule(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        self.commands.push(DrawCommand::Rule {
            x1,
            y1,
            x2,
            y2,
            width,
        });
    }

    fn draw_image(&mut self, _image: &LoadedImage, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Image {
            x,
            y,
            width,
            height,
        });
    }

    fn add_page(&mut self) {
        self.commands.push(DrawCommand::PageBreak);
    }
}
