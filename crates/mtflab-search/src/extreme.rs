//! Best/worst sequence search over total MTF cost.

use mtflab_core::{Cost, Element, ListState};
use mtflab_engine::{run_silent, MoveToFront};
use tracing::{debug, info};

use crate::enumerate::LexicographicSequences;
use crate::error::{Result, SearchError};
use crate::patterns;

/// Longest sequence searched exhaustively.
///
/// The exhaustive regime evaluates `k^length` candidates; five elements
/// at length 10 is already ~9.8M runs, the practical ceiling.
pub const EXHAUSTIVE_LENGTH_LIMIT: usize = 10;

/// Whether search looks for the cheapest or the costliest sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Find the sequence with minimum total cost (best case).
    Minimize,
    /// Find the sequence with maximum total cost (worst case).
    Maximize,
}

impl Direction {
    fn improves(self, candidate: Cost, incumbent: Cost) -> bool {
        match self {
            Direction::Minimize => candidate < incumbent,
            Direction::Maximize => candidate > incumbent,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Minimize => write!(f, "minimize"),
            Direction::Maximize => write!(f, "maximize"),
        }
    }
}

/// A winning sequence and its total MTF cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The extreme sequence found.
    pub sequence: Vec<Element>,
    /// Its total cost under plain move-to-front.
    pub total_cost: Cost,
    /// The direction searched.
    pub direction: Direction,
    /// True when every candidate of the space was evaluated; false when
    /// only the fixed heuristic candidate set was compared.
    pub exact: bool,
}

/// Finds the request sequence of `length` that minimizes or maximizes
/// total MTF cost against `initial`.
///
/// Up to [`EXHAUSTIVE_LENGTH_LIMIT`] requests the full space is
/// enumerated in lexicographic order and the result is the true extreme
/// (ties broken by first encounter). Above the limit, a fixed set of
/// candidate patterns is compared and the result is the extreme among
/// those candidates only.
///
/// # Errors
///
/// Returns [`SearchError::EmptyUniverse`] when `initial` tracks no
/// elements and `length >= 1`.
///
/// # Example
///
/// ```
/// use mtflab_core::{Cost, ListState};
/// use mtflab_search::{find_extreme_sequence, Direction};
///
/// let initial = ListState::new([0, 1, 2]).unwrap();
/// let best = find_extreme_sequence(&initial, 4, Direction::Minimize).unwrap();
///
/// // Hammering the front element is optimal: four accesses at cost 1.
/// assert_eq!(best.sequence, vec![0, 0, 0, 0]);
/// assert_eq!(best.total_cost, Cost::of(4));
/// assert!(best.exact);
/// ```
pub fn find_extreme_sequence(
    initial: &ListState,
    length: usize,
    direction: Direction,
) -> Result<SearchOutcome> {
    if initial.is_empty() && length > 0 {
        return Err(SearchError::EmptyUniverse);
    }
    if length <= EXHAUSTIVE_LENGTH_LIMIT {
        exhaustive(initial, length, direction)
    } else {
        heuristic(initial, length, direction)
    }
}

fn exhaustive(initial: &ListState, length: usize, direction: Direction) -> Result<SearchOutcome> {
    let candidates = LexicographicSequences::new(initial.elements().to_vec(), length);
    info!(
        event = "search_start",
        mode = "exhaustive",
        %direction,
        length,
        candidates = candidates.candidate_count(),
    );

    let mut best: Option<(Vec<Element>, Cost)> = None;
    for sequence in candidates {
        let cost = run_silent(&MoveToFront, initial, &sequence)?;
        match &best {
            Some((_, incumbent)) if !direction.improves(cost, *incumbent) => {}
            _ => best = Some((sequence, cost)),
        }
    }

    // length == 0 leaves the single empty candidate.
    let (sequence, total_cost) = best.unwrap_or((Vec::new(), Cost::ZERO));
    info!(event = "search_end", mode = "exhaustive", total_cost = %total_cost);
    Ok(SearchOutcome {
        sequence,
        total_cost,
        direction,
        exact: true,
    })
}

fn heuristic(initial: &ListState, length: usize, direction: Direction) -> Result<SearchOutcome> {
    let elements = initial.elements();
    let candidates = match direction {
        Direction::Minimize => [
            patterns::repeat_first(elements, length),
            patterns::cycle(elements, length),
            patterns::cycle_reversed(elements, length),
        ],
        Direction::Maximize => [
            patterns::alternate_ends(elements, length),
            patterns::cycle(elements, length),
            patterns::repeat_last(elements, length),
        ],
    };
    info!(
        event = "search_start",
        mode = "heuristic",
        %direction,
        length,
        candidates = candidates.len(),
    );

    let mut best: Option<(Vec<Element>, Cost)> = None;
    for sequence in candidates {
        let cost = run_silent(&MoveToFront, initial, &sequence)?;
        debug!(event = "candidate", cost = %cost);
        match &best {
            Some((_, incumbent)) if !direction.improves(cost, *incumbent) => {}
            _ => best = Some((sequence, cost)),
        }
    }

    // The candidate arrays are non-empty, so the incumbent is always set.
    let (sequence, total_cost) = best.unwrap_or((Vec::new(), Cost::ZERO));
    info!(event = "search_end", mode = "heuristic", total_cost = %total_cost);
    Ok(SearchOutcome {
        sequence,
        total_cost,
        direction,
        exact: false,
    })
}
