//! CCBF command-line tools
//!
//! - `build`: turn a newline-separated dictionary into a `.bf` filter file
//! - `check`: report which words are definitely misspelled
//! - `inspect`: show the header and fill statistics of a filter file
//!
//! Word normalization (trim + lowercase) happens here, at the boundary. The
//! filter engine stores and looks up keys exactly as given.

pub mod commands;
pub mod words;

/// Filter file used when none is named
pub const DEFAULT_FILTER_PATH: &str = "words.bf";

/// False positive rate used when building a dictionary filter
pub const DEFAULT_FPR: f64 = 0.01;
