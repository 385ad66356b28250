//! Per-access trace records.

use crate::cost::Cost;
use crate::list::{Element, ListState};

/// One entry per request processed during a run.
///
/// Records belong to exactly one run's history, ordered by `step`. The
/// `lookahead` field is the number of upcoming requests the policy
/// consulted before deciding: always 0 for plain move-to-front, and 0
/// for a front-resident access under look-ahead policies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessRecord {
    /// 1-based position of this access within the run.
    pub step: usize,
    /// List ordering immediately before the access.
    pub before: ListState,
    /// The requested element.
    pub request: Element,
    /// Cost charged: 1-based position of `request` in `before`.
    pub cost: Cost,
    /// Whether the policy relocated the element to the front.
    pub moved: bool,
    /// Size of the look-ahead window consulted (possibly truncated near
    /// the end of the sequence).
    pub lookahead: usize,
    /// List ordering immediately after the access.
    pub after: ListState,
}
