//! Naive reference implementations.
//!
//! Deliberately written with plain `Vec` bookkeeping and no shared code
//! with the engine or search crates, so tests compare two independent
//! derivations of the same quantities.

use mtflab_core::Element;

/// Total move-to-front cost of `requests` against `initial`, computed by
/// a direct simulation.
///
/// # Panics
///
/// Panics if a request is not present in `initial` (fixtures are expected
/// to stay inside the universe).
pub fn reference_total_cost(initial: &[Element], requests: &[Element]) -> u64 {
    let mut order: Vec<Element> = initial.to_vec();
    let mut total = 0u64;
    for &request in requests {
        let idx = order
            .iter()
            .position(|&e| e == request)
            .unwrap_or_else(|| panic!("request {request} outside universe"));
        total += idx as u64 + 1;
        order.remove(idx);
        order.insert(0, request);
    }
    total
}

/// Every sequence of `length` requests over `alphabet`, materialized in
/// lexicographic product order.
///
/// Exponential; keep `alphabet.len().pow(length)` small.
pub fn enumerate_sequences(alphabet: &[Element], length: usize) -> Vec<Vec<Element>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(length);
    fill(alphabet, length, &mut current, &mut out);
    out
}

fn fill(
    alphabet: &[Element],
    length: usize,
    current: &mut Vec<Element>,
    out: &mut Vec<Vec<Element>>,
) {
    if current.len() == length {
        out.push(current.clone());
        return;
    }
    for &e in alphabet {
        current.push(e);
        fill(alphabet, length, current, out);
        current.pop();
    }
}
