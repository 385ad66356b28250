//! mtflab Search - Request-space search over MTF cost
//!
//! Finds the request sequence of a given length that minimizes or
//! maximizes total move-to-front cost for an initial list state:
//! - exhaustive enumeration up to [`EXHAUSTIVE_LENGTH_LIMIT`] requests
//! - a fixed candidate-pattern comparison above it (a documented
//!   heuristic approximation, not a guaranteed global extreme)
//!
//! Also provides seeded random workload generation for experiments
//! beyond fixed literal sequences.

pub mod enumerate;
pub mod error;
pub mod extreme;
pub mod patterns;
pub mod workload;


pub use enumerate::LexicographicSequences;
pub use error::{Result, SearchError};
pub use extreme::{find_extreme_sequence, Direction, SearchOutcome, EXHAUSTIVE_LENGTH_LIMIT};
pub use workload::Workload;
