//! Request-sequence builders.

use mtflab_core::Element;

/// `n` copies of `element`.
pub fn repeat(element: Element, n: usize) -> Vec<Element> {
    vec![element; n]
}

/// `elements` repeated cyclically, truncated to exactly `len` requests.
pub fn tile(elements: &[Element], len: usize) -> Vec<Element> {
    elements.iter().copied().cycle().take(len).collect()
}

/// `a` and `b` alternating, starting with `a`, for `len` requests.
pub fn alternate(a: Element, b: Element, len: usize) -> Vec<Element> {
    (0..len).map(|i| if i % 2 == 0 { a } else { b }).collect()
}
