//! # Text Support
//!
//! The Jawi/Arabic shaping pipeline (classification, contextual reshaping,
//! bidirectional ordering) plus the reference line-wrapping used by the
//! built-in recording sink.
//!
//! Wrapping is the sink's capability by contract: a concrete PDF canvas
//! measures with its own font metrics. The implementation here exists so the
//! engine is usable and testable without one, using UAX#14 break
//! opportunities and an approximate width model.

pub mod bidi;
pub mod forms;
pub mod shaping;

use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Full shaping pipeline for one Arabic-dominant line: contextual reshaping
/// followed by visual reordering.
pub fn shape_line(text: &str) -> String {
    bidi::visual_order(&shaping::reshape(text))
}

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Approximate advance width of a character in millimetres at a given font
/// size in points. Latin widths follow the Helvetica AFM classes; Arabic
/// code points get a flat average since the reference sink only needs a
/// plausible wrap, not exact metrics.
pub fn char_width_mm(c: char, font_size: f64) -> f64 {
    let milli = if shaping::is_arabic_char(c) {
        520
    } else {
        latin_width_milli(c)
    };
    milli as f64 / 1000.0 * font_size * PT_TO_MM
}

/// Helvetica advance widths in thousandths of an em, grouped by class.
fn latin_width_milli(c: char) -> u32 {
    match c {
        'i' | 'j' | 'l' => 222,
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | 'I' | '[' | '\\' | ']' | 'f' | 't' => 278,
        '\'' => 191,
        '(' | ')' | '-' | '`' | 'r' => 333,
        '"' | '*' => 367,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500,
        'F' | 'T' | 'Z' => 611,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' | '&' => 667,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'G' | 'O' | 'Q' => 778,
        'm' | 'M' | '%' => 833,
        'w' => 722,
        'W' => 944,
        '@' => 1015,
        _ => 556,
    }
}

/// Break text into lines that fit within `max_width`, measuring each
/// character with `width_of`.
///
/// Greedy: breaks at the last UAX#14 opportunity that fits, honors mandatory
/// breaks (newlines), and force-breaks a word longer than the whole line.
/// Trailing whitespace is trimmed from each emitted line.
pub fn wrap(text: &str, max_width: f64, width_of: impl Fn(char) -> f64) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = text.chars().collect();
    let widths: Vec<f64> = chars.iter().map(|&c| width_of(c)).collect();
    let break_opps = compute_break_opportunities(text);

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_width = 0.0;
    let mut last_break: Option<usize> = None;

    for (i, &ch) in chars.iter().enumerate() {
        let char_width = widths[i];

        // A break opportunity at i means "can break before char[i]".
        if i > 0 {
            match break_opps[i] {
                Some(BreakOpportunity::Mandatory) => {
                    let end = if is_newline(chars[i - 1]) { i - 1 } else { i };
                    lines.push(make_line(&chars[line_start..end]));
                    line_start = i;
                    line_width = 0.0;
                    last_break = None;
                }
                Some(BreakOpportunity::Allowed) => {
                    last_break = Some(i - 1);
                }
                None => {}
            }
        }

        if is_newline(ch) {
            continue;
        }

        if line_width + char_width > max_width && line_start < i {
            if let Some(bp) = last_break {
                if bp >= line_start {
                    // bp is the last char on this line; the break is after it.
                    let break_at = bp + 1;
                    lines.push(make_line(&chars[line_start..break_at]));
                    line_start = break_at;
                    line_width = widths[line_start..=i].iter().sum();
                    last_break = None;
                    continue;
                }
            }

            // No break point on this line: hard break before the current char.
            lines.push(make_line(&chars[line_start..i]));
            line_start = i;
            line_width = char_width;
            last_break = None;
            continue;
        }

        line_width += char_width;
    }

    if line_start < chars.len() {
        lines.push(make_line(&chars[line_start..]));
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn make_line(chars: &[char]) -> String {
    let mut s: String = chars.iter().collect();
    s.truncate(s.trim_end().len());
    s
}

/// Compute UAX#14 break opportunities indexed by char position.
///
/// Entry `i` is the opportunity *before* char `i`. Index 0 is always `None`
/// and a break at end-of-text is dropped.
fn compute_break_opportunities(text: &str) -> Vec<Option<BreakOpportunity>> {
    let char_count = text.chars().count();
    let mut result = vec![None; char_count];

    // linebreaks() yields byte offsets; convert to char indices.
    let mut byte_to_char = vec![0usize; text.len() + 1];
    let mut char_idx = 0;
    for (byte_idx, _) in text.char_indices() {
        byte_to_char[byte_idx] = char_idx;
        char_idx += 1;
    }
    byte_to_char[text.len()] = char_idx;

    for (byte_offset, opp) in linebreaks(text) {
        let ci = byte_to_char[byte_offset];
        if ci < char_count {
            result[ci] = Some(opp);
        }
    }

    result
}
