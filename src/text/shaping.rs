//! # Contextual Reshaping
//!
//! Converts a logical-order line of Jawi/Arabic text into presentation-form
//! code points. Each letter's glyph depends on whether its neighbors attach
//! to it, with combining marks invisible to the adjacency computation, and
//! lam followed by an alef variant collapsing into a single ligature glyph.
//!
//! The walk is an explicit index loop rather than an iterator chain because
//! the scan pointer advances by variable amounts: one step normally, past
//! the whole consumed span on a ligature match.

use super::forms::{lam_ligature, letter_forms, GlyphForm};

const LAM: char = '\u{0644}';

/// Category of a single code point for shaping purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A combining mark. Invisible to adjacency, never shaped itself.
    Transparent,
    /// A letter with an entry in the presentation form table.
    Shaped,
    /// One of the four alef variants that fuse with a preceding lam.
    LigatureTrigger,
    /// Everything else. Passed through unchanged, breaks adjacency.
    Other,
}

/// Classify a code point. Total over all of Unicode, no error cases.
pub fn classify(c: char) -> CharClass {
    if is_transparent(c) {
        CharClass::Transparent
    } else if lam_ligature(c).is_some() {
        CharClass::LigatureTrigger
    } else if letter_forms(c).is_some() {
        CharClass::Shaped
    } else {
        CharClass::Other
    }
}

/// Arabic diacritics and Quranic annotation marks that do not interrupt
/// letter-to-letter connectivity.
pub fn is_transparent(c: char) -> bool {
    matches!(c,
        '\u{0610}'
        | '\u{0612}'..='\u{0615}'
        | '\u{064B}'..='\u{0658}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E4}'
        | '\u{06E7}'
        | '\u{06E8}'
        | '\u{06EA}'..='\u{06ED}'
    )
}

/// Whether a code point falls in the Arabic block or the Arabic
/// presentation-form blocks.
pub fn is_arabic_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{FB50}'..='\u{FEFF}')
}

/// Nearest non-transparent code point after `index`, skipping any run of
/// combining marks.
fn next_real(chars: &[char], index: usize) -> Option<char> {
    chars[index + 1..].iter().copied().find(|&c| !is_transparent(c))
}

/// Nearest non-transparent code point before `index`.
fn prev_real(chars: &[char], index: usize) -> Option<char> {
    chars[..index].iter().rev().copied().find(|&c| !is_transparent(c))
}

fn connects_to_next(c: char) -> bool {
    letter_forms(c).is_some_and(|f| f.connects_to_next())
}

fn connects_to_prev(c: char) -> bool {
    letter_forms(c).is_some_and(|f| f.connects_to_prev())
}

/// Reshape a logical-order line into presentation-form code points.
///
/// Transparent marks are copied through verbatim at their original relative
/// positions. Code points without a form-table entry (Latin, digits,
/// punctuation) pass through unchanged and act as non-connecting neighbors.
pub fn reshape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let current = chars[i];

        if is_transparent(current) {
            out.push(current);
            i += 1;
            continue;
        }

        // Lam-alef ligature: consumes the lam, any interposed marks, and the
        // alef as a unit. A lam at the end of the line, or one whose next
        // real neighbor is not an alef variant, shapes normally below.
        if current == LAM && i + 1 < chars.len() {
            if let Some(lig) = next_real(&chars, i).and_then(lam_ligature) {
                let joined = prev_real(&chars, i).is_some_and(connects_to_next);
                out.push(if joined { lig.final_form } else { lig.isolated });

                // The next real neighbor is the alef, so everything before
                // it is a transparent mark: copy those through, then skip
                // past the alef itself.
                let mut j = i + 1;
                while j < chars.len() && is_transparent(chars[j]) {
                    out.push(chars[j]);
                    j += 1;
                }
                i = j + 1;
                continue;
            }
        }

        if let Some(forms) = letter_forms(current) {
            let prev_joins = prev_real(&chars, i).is_some_and(connects_to_next);
            let next_joins = next_real(&chars, i).is_some_and(connects_to_prev);
            let form = match (prev_joins, next_joins) {
                (true, true) => GlyphForm::Medial,
                (true, false) => GlyphForm::Final,
                (false, true) => GlyphForm::Initial,
                (false, false) => GlyphForm::Isolated,
            };
            out.push(forms.select(form));
        } else {
            out.push(current);
        }
        i += 1;
    }

    out
}
