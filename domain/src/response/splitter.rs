//! Marker-delimited segment extraction.
//!
//! Pure text operations, no I/O. Extraction never fails: malformed or
//! marker-free input degrades to empty segments.
//!
//! | Segment | Open | Close |
//! |---------|------|-------|
//! | reasoning | `<think>` | `</think>` |
//! | answer | `<response>` | `</response>` |
//!
//! Each pair is handled in isolation with literal first-occurrence
//! splitting. Nesting, ordering and escaping are not interpreted, so
//! swapped or repeated markers can produce surprising segments.

use serde::{Deserialize, Serialize};

/// A literal opening/closing tag pair delimiting one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair {
    pub open: &'static str,
    pub close: &'static str,
}

/// Markers around the model's chain of thought
pub const REASONING_MARKERS: MarkerPair = MarkerPair {
    open: "<think>",
    close: "</think>",
};

/// Markers around the model's final answer
pub const ANSWER_MARKERS: MarkerPair = MarkerPair {
    open: "<response>",
    close: "</response>",
};

/// Extract the segment delimited by `markers`.
///
/// Both markers must occur somewhere in `text`, otherwise the result is
/// empty. The text is split on the opening marker and the piece after the
/// first occurrence is kept (it runs up to the next opening marker, if
/// any). That piece is split on the closing marker and its first part is
/// returned, trimmed.
///
/// # Examples
///
/// ```
/// use reasoner_domain::response::{REASONING_MARKERS, extract_segment};
///
/// assert_eq!(extract_segment("<think> A </think> rest", REASONING_MARKERS), "A");
/// assert_eq!(extract_segment("no markers", REASONING_MARKERS), "");
/// ```
pub fn extract_segment(text: &str, markers: MarkerPair) -> String {
    if !text.contains(markers.open) || !text.contains(markers.close) {
        return String::new();
    }

    let after_open = text.split(markers.open).nth(1).unwrap_or_default();
    let inner = after_open.split(markers.close).next().unwrap_or_default();
    inner.trim().to_string()
}

/// Reasoning and answer segments of one model response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResponse {
    pub reasoning: String,
    pub answer: String,
}

impl SplitResponse {
    /// Split raw model output into its two segments
    pub fn parse(text: &str) -> Self {
        Self {
            reasoning: extract_segment(text, REASONING_MARKERS),
            answer: extract_segment(text, ANSWER_MARKERS),
        }
    }

    /// True when neither segment could be extracted
    pub fn is_empty(&self) -> bool {
        self.reasoning.is_empty() && self.answer.is_empty()
    }
}
