//! List state for a self-adjusting list.
//!
//! # Value Semantics
//!
//! - **Fixed universe**: the element set is fixed at construction; the
//!   only mutation is reordering via move-to-front
//! - **Owned**: accesses return a new `ListState`, so prior states stay
//!   valid inside trace records

use std::fmt;

use smallvec::SmallVec;

use crate::cost::Cost;
use crate::error::{AccessError, Result};

/// Identifier of one list element.
///
/// The analysis tracks integer-keyed lists only.
pub type Element = u32;

/// The ordering of a self-adjusting list at one point in time.
///
/// Positions are 1-based throughout, matching the access-cost definition:
/// an access to the element at position `p` costs `p`.
///
/// # Example
///
/// ```
/// use mtflab_core::ListState;
///
/// let state = ListState::new([0, 1, 2, 3, 4]).unwrap();
/// assert_eq!(state.locate(3).unwrap(), 4);
///
/// let state = state.move_to_front(3).unwrap();
/// assert_eq!(state.elements(), &[3, 0, 1, 2, 4]);
/// assert_eq!(state.locate(3).unwrap(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    order: SmallVec<[Element; 8]>,
}

impl ListState {
    /// Creates a list state from an initial configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::DuplicateElement`] if the configuration
    /// repeats an element.
    pub fn new(initial: impl IntoIterator<Item = Element>) -> Result<Self> {
        let order: SmallVec<[Element; 8]> = initial.into_iter().collect();
        for (i, &element) in order.iter().enumerate() {
            if order[..i].contains(&element) {
                return Err(AccessError::DuplicateElement(element));
            }
        }
        Ok(ListState { order })
    }

    /// Returns the number of tracked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no elements are tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the current ordering, front first.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.order
    }

    /// Returns the front element, if any.
    #[inline]
    pub fn front(&self) -> Option<Element> {
        self.order.first().copied()
    }

    /// Returns true if `element` is a member of the tracked universe.
    #[inline]
    pub fn contains(&self, element: Element) -> bool {
        self.order.contains(&element)
    }

    /// Returns the 1-based position of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ElementNotFound`] if `element` is outside
    /// the tracked universe.
    pub fn locate(&self, element: Element) -> Result<usize> {
        self.order
            .iter()
            .position(|&e| e == element)
            .map(|idx| idx + 1)
            .ok_or(AccessError::ElementNotFound(element))
    }

    /// The cost charged for accessing `element` in this state.
    ///
    /// Equal to [`locate`](Self::locate); always between 1 and
    /// [`len`](Self::len) for a member element.
    pub fn access_cost(&self, element: Element) -> Result<Cost> {
        Ok(Cost::of(self.locate(element)? as u64))
    }

    /// Returns a new state with `element` moved to the front.
    ///
    /// The relative order of all other elements is preserved. Moving the
    /// front element returns an identical ordering.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ElementNotFound`] if `element` is outside
    /// the tracked universe.
    pub fn move_to_front(&self, element: Element) -> Result<ListState> {
        let idx = self.locate(element)? - 1;
        let mut order = self.order.clone();
        order.remove(idx);
        order.insert(0, element);
        Ok(ListState { order })
    }
}

impl fmt::Debug for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListState({:?})", self.order.as_slice())
    }
}

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
