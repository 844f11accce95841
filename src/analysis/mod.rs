//! Analysis modules.
//!
//! Tallying of extracted keys and numeric ordering of the result.

pub mod aggregator;

pub use aggregator::*;
