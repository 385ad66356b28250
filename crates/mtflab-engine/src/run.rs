//! Sequence runner shared by all update policies.

use mtflab_core::{AccessRecord, Cost, Element, ListState, Result};
use tracing::{debug, info};

use crate::policy::UpdatePolicy;

/// Everything produced by one run of a request sequence.
///
/// History is a per-run value: the runner holds no state between calls,
/// so policies and runner are freely reusable.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Sum of per-access costs.
    pub total_cost: Cost,
    /// One [`AccessRecord`] per request, in step order.
    pub history: Vec<AccessRecord>,
    /// List ordering after the last access.
    pub final_state: ListState,
}

/// Runs `requests` against `initial` under `policy`.
///
/// # Errors
///
/// Fails with [`mtflab_core::AccessError::ElementNotFound`] on the first
/// request outside the tracked universe; the partial run is discarded.
///
/// # Example
///
/// ```
/// use mtflab_core::{Cost, ListState};
/// use mtflab_engine::{run_sequence, MoveToFront};
///
/// let initial = ListState::new([0, 1, 2, 3, 4]).unwrap();
/// let outcome = run_sequence(&MoveToFront, &initial, &[3; 20]).unwrap();
///
/// assert_eq!(outcome.total_cost, Cost::of(23));
/// assert_eq!(outcome.final_state.front(), Some(3));
/// ```
pub fn run_sequence<P: UpdatePolicy + ?Sized>(
    policy: &P,
    initial: &ListState,
    requests: &[Element],
) -> Result<RunOutcome> {
    run_sequence_observed(policy, initial, requests, |_| {})
}

/// Runs `requests`, feeding each [`AccessRecord`] to `observe` as it is
/// produced.
///
/// The runner performs no presentation itself; `observe` is the seam for
/// the caller's renderer.
pub fn run_sequence_observed<P, F>(
    policy: &P,
    initial: &ListState,
    requests: &[Element],
    mut observe: F,
) -> Result<RunOutcome>
where
    P: UpdatePolicy + ?Sized,
    F: FnMut(&AccessRecord),
{
    info!(
        event = "run_start",
        policy = policy.policy_name(),
        elements = initial.len(),
        requests = requests.len(),
    );

    let mut state = initial.clone();
    let mut total_cost = Cost::ZERO;
    let mut history = Vec::with_capacity(requests.len());

    for (i, &request) in requests.iter().enumerate() {
        let step = i + 1;
        let position = state.locate(request)?;
        let cost = Cost::of(position as u64);
        let decision = policy.decide(request, position, &requests[step..]);
        let after = if decision.moved {
            state.move_to_front(request)?
        } else {
            state.clone()
        };

        debug!(
            event = "access",
            step,
            request,
            cost = %cost,
            moved = decision.moved,
            lookahead = decision.lookahead,
        );

        let record = AccessRecord {
            step,
            before: state,
            request,
            cost,
            moved: decision.moved,
            lookahead: decision.lookahead,
            after: after.clone(),
        };
        observe(&record);
        history.push(record);

        total_cost += cost;
        state = after;
    }

    info!(
        event = "run_end",
        policy = policy.policy_name(),
        total_cost = %total_cost,
    );

    Ok(RunOutcome {
        total_cost,
        history,
        final_state: state,
    })
}

/// Runs `requests` and returns only the total cost.
///
/// Skips history allocation entirely; this is the path sequence search
/// takes through its millions of candidate runs.
pub fn run_silent<P: UpdatePolicy + ?Sized>(
    policy: &P,
    initial: &ListState,
    requests: &[Element],
) -> Result<Cost> {
    let mut state = initial.clone();
    let mut total_cost = Cost::ZERO;

    for (i, &request) in requests.iter().enumerate() {
        let position = state.locate(request)?;
        total_cost += Cost::of(position as u64);
        if policy.decide(request, position, &requests[i + 1..]).moved {
            state = state.move_to_front(request)?;
        }
    }

    Ok(total_cost)
}
