//! Update policies for a self-adjusting list.

mod imtf;
mod mtf;

use std::fmt::Debug;

use mtflab_core::Element;

pub use imtf::ImprovedMoveToFront;
pub use mtf::MoveToFront;

/// Outcome of a policy's per-access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    /// Whether the accessed element relocates to the front.
    pub moved: bool,
    /// Number of upcoming requests consulted to decide.
    pub lookahead: usize,
}

impl MoveDecision {
    /// A decision made without consulting upcoming requests.
    #[inline]
    pub const fn immediate(moved: bool) -> Self {
        MoveDecision { moved, lookahead: 0 }
    }
}

/// Trait for deciding whether an accessed element moves to the front.
///
/// The runner locates the request and charges its cost before calling
/// [`decide`](UpdatePolicy::decide); policies never alter the cost, only
/// the reordering. `upcoming` holds the not-yet-processed remainder of
/// the request sequence, which look-ahead policies may inspect. The full
/// sequence is known upfront (offline analysis), so this does not model
/// an online cache policy.
pub trait UpdatePolicy: Debug {
    /// Decides the move for an element found at 1-based `position`.
    fn decide(&self, request: Element, position: usize, upcoming: &[Element]) -> MoveDecision;

    /// Short policy name for logs and summaries.
    fn policy_name(&self) -> &'static str;
}
