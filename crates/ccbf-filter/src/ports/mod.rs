//! Ports Layer
//!
//! Defines the interfaces (traits) the engine depends on:
//! - Driven Ports (outbound) - where serialized filters are kept

pub mod outbound;

pub use outbound::FilterStore;
