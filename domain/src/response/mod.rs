//! Response splitting.
//!
//! Model output carries a reasoning segment and an answer segment, each
//! wrapped in a literal marker pair. See [`splitter`] for the exact rules.

pub mod splitter;

pub use splitter::{ANSWER_MARKERS, MarkerPair, REASONING_MARKERS, SplitResponse, extract_segment};
