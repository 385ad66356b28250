//! Candidate patterns for the long-horizon heuristic regime.
//!
//! Above the exhaustive limit, search compares a small fixed set of
//! hand-picked sequences instead of the full `k^length` space. Each
//! builder tiles or truncates its pattern to exactly `length` requests.
//! All builders expect a non-empty element slice.

use mtflab_core::Element;

/// `length` copies of the first element: after the first access, every
/// request hits the front.
pub fn repeat_first(elements: &[Element], length: usize) -> Vec<Element> {
    vec![elements[0]; length]
}

/// `length` copies of the last element: the deepest possible first
/// access, then front hits.
pub fn repeat_last(elements: &[Element], length: usize) -> Vec<Element> {
    vec![elements[elements.len() - 1]; length]
}

/// The elements cycled in their original order.
pub fn cycle(elements: &[Element], length: usize) -> Vec<Element> {
    (0..length).map(|i| elements[i % elements.len()]).collect()
}

/// The elements cycled in reverse order.
pub fn cycle_reversed(elements: &[Element], length: usize) -> Vec<Element> {
    let k = elements.len();
    (0..length).map(|i| elements[k - 1 - i % k]).collect()
}

/// First and last element alternating, defeating locality.
pub fn alternate_ends(elements: &[Element], length: usize) -> Vec<Element> {
    let (first, last) = (elements[0], elements[elements.len() - 1]);
    (0..length)
        .map(|i| if i % 2 == 0 { first } else { last })
        .collect()
}
