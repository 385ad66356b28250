//! Improved Move-to-Front with bounded look-ahead.

use mtflab_core::Element;

use super::{MoveDecision, UpdatePolicy};

/// Improved MTF: an element found at position `p > 1` relocates to the
/// front only if it reappears within the next `p - 1` requests.
///
/// Near the end of the sequence the window is shorter and is used as-is,
/// never padded. A position-1 access is a front-resident no-op: no window
/// is consulted and the record carries `moved = false`.
///
/// # Example
///
/// ```
/// use mtflab_engine::{ImprovedMoveToFront, UpdatePolicy};
///
/// // Found at position 5; window is the next 4 requests.
/// let hit = ImprovedMoveToFront.decide(4, 5, &[0, 4, 0, 0, 4]);
/// assert!(hit.moved);
/// assert_eq!(hit.lookahead, 4);
///
/// let miss = ImprovedMoveToFront.decide(4, 5, &[0, 0, 0, 0, 4]);
/// assert!(!miss.moved);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedMoveToFront;

impl UpdatePolicy for ImprovedMoveToFront {
    fn decide(&self, request: Element, position: usize, upcoming: &[Element]) -> MoveDecision {
        if position == 1 {
            return MoveDecision::immediate(false);
        }
        let window = (position - 1).min(upcoming.len());
        MoveDecision {
            moved: upcoming[..window].contains(&request),
            lookahead: window,
        }
    }

    fn policy_name(&self) -> &'static str {
        "IMTF"
    }
}
