//! Table analysis modules.
//!
//! Aggregation of match results into team records, and ranking of those
//! records into a standings table.

pub mod aggregator;
pub mod ranker;
pub mod rules;

pub use aggregator::*;
pub use ranker::*;
pub use rules::*;
