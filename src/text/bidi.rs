//! # Bidirectional Ordering
//!
//! Implements the visual reordering step for right-to-left lines using UAX#9
//! (Unicode Bidirectional Algorithm) via `unicode-bidi`. The input is an
//! already-shaped line still in logical order; the output is the string in
//! visual order, ready to be painted left to right with right alignment.
//!
//! The algorithm sits behind the narrow [`Reorder`] trait so any compliant
//! implementation can be substituted. Every call goes through a guarded
//! boundary: if embedding-level resolution fails, the line degrades to a
//! naive full reversal. Reversal is wrong for embedded LTR runs but it never
//! fails, so the orderer cannot take down document generation.

use thiserror::Error;
use unicode_bidi::{BidiInfo, Level};

/// Embedding-level resolution failed for a line.
#[derive(Debug, Error)]
#[error("bidi embedding-level resolution failed: {0}")]
pub struct ReorderError(pub String);

/// A pluggable bidirectional reordering capability.
pub trait Reorder {
    /// Reorder a logical-order line into visual order with an RTL base
    /// direction. May fail; callers are expected to fall back.
    fn reorder(&self, text: &str) -> Result<String, ReorderError>;
}

/// The default implementation, backed by `unicode-bidi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeReorder;

impl Reorder for UnicodeReorder {
    fn reorder(&self, text: &str) -> Result<String, ReorderError> {
        let info = BidiInfo::new(text, Some(Level::rtl()));
        let para = info
            .paragraphs
            .first()
            .ok_or_else(|| ReorderError("no paragraph in input".to_string()))?;
        Ok(info.reorder_line(para, para.range.clone()).into_owned())
    }
}

/// Produce the visual-order string for a shaped line.
///
/// Never fails: a reorder error falls back to full code-point reversal.
pub fn visual_order(text: &str) -> String {
    visual_order_with(&UnicodeReorder, text)
}

/// Like [`visual_order`] with an explicit reordering implementation.
pub fn visual_order_with(reorderer: &dyn Reorder, text: &str) -> String {
    match reorderer.reorder(text) {
        Ok(visual) => visual,
        Err(err) => {
            tracing::warn!(%err, "bidi reorder failed, falling back to reversal");
            text.chars().rev().collect()
        }
    }
}
