//! mtflab - Amortized and competitive analysis of self-adjusting lists
//!
//! Simulate Move-to-Front and Improved Move-to-Front over integer-keyed
//! lists, and search the request space for best/worst-case workloads.
//!
//! # Example
//!
//! ```rust
//! use mtflab::prelude::*;
//!
//! let initial = ListState::new([0, 1, 2, 3, 4]).unwrap();
//! let requests = [3; 20];
//!
//! let mtf = run_sequence(&MoveToFront, &initial, &requests).unwrap();
//! let imtf = run_sequence(&ImprovedMoveToFront, &initial, &requests).unwrap();
//!
//! // A repeated element is kept at the front by both policies.
//! assert_eq!(mtf.total_cost, Cost::of(23));
//! assert_eq!(imtf.total_cost, Cost::of(23));
//! ```

// Core types
pub use mtflab_core::{AccessError, AccessRecord, Cost, Element, ListState};

// Policies and the sequence runner
pub use mtflab_engine::{
    run_sequence, run_sequence_observed, run_silent, ImprovedMoveToFront, MoveDecision,
    MoveToFront, RunOutcome, UpdatePolicy,
};

// Best/worst sequence search and workload generation
pub use mtflab_search::{
    find_extreme_sequence, Direction, LexicographicSequences, SearchError, SearchOutcome,
    Workload, EXHAUSTIVE_LENGTH_LIMIT,
};

// Run configuration
pub use mtflab_config::{AnalysisConfig, ConfigError, SearchConfig, SequenceConfig};

pub mod prelude {
    pub use super::{
        find_extreme_sequence, run_sequence, run_sequence_observed, run_silent, AccessRecord,
        AnalysisConfig, Cost, Direction, ImprovedMoveToFront, ListState, MoveToFront, RunOutcome,
        SearchOutcome, UpdatePolicy, Workload,
    };
}
