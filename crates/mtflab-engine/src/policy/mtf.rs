//! Plain Move-to-Front.

use mtflab_core::Element;

use super::{MoveDecision, UpdatePolicy};

/// Move-to-Front: every accessed element relocates to the front,
/// unconditionally.
///
/// A position-1 access still counts as moved even though the ordering is
/// unchanged, because the relocation is unconditional.
///
/// # Example
///
/// ```
/// use mtflab_engine::{MoveToFront, UpdatePolicy};
///
/// let decision = MoveToFront.decide(3, 4, &[]);
/// assert!(decision.moved);
/// assert_eq!(decision.lookahead, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveToFront;

impl UpdatePolicy for MoveToFront {
    fn decide(&self, _request: Element, _position: usize, _upcoming: &[Element]) -> MoveDecision {
        MoveDecision::immediate(true)
    }

    fn policy_name(&self) -> &'static str {
        "MTF"
    }
}
