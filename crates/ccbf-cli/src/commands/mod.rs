//! Subcommand implementations
//!
//! Each command writes its report to the supplied writer so the binary can
//! pass stdout and tests can pass a buffer.

pub mod build;
pub mod check;
pub mod inspect;

pub use build::{build_filter, run_build, BuildReport};
pub use check::{check_words, run_check, WordCheck};
pub use inspect::{run_inspect, InspectReport};
