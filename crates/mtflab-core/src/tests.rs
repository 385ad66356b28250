//! Tests for core types.

use crate::cost::Cost;
use crate::error::AccessError;
use crate::list::ListState;

mod cost {
    use super::*;

    #[test]
    fn test_creation() {
        let cost = Cost::of(5);
        assert_eq!(cost.value(), 5);
        assert_eq!(Cost::ONE, Cost::of(1));
        assert_eq!(Cost::ZERO, Cost::default());
    }

    #[test]
    fn test_comparison() {
        assert!(Cost::of(3) < Cost::of(5));
        assert!(Cost::of(5) > Cost::ONE);
        assert_eq!(Cost::of(4).max(Cost::of(2)), Cost::of(4));
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Cost::of(4);
        total += Cost::ONE;
        assert_eq!(total, Cost::of(5));
        assert_eq!(Cost::of(5) + Cost::of(3), Cost::of(8));
        assert_eq!(Cost::of(5) - Cost::of(3), Cost::of(2));
    }

    #[test]
    fn test_sum() {
        let total: Cost = [1u64, 2, 3, 4].iter().map(|&v| Cost::of(v)).sum();
        assert_eq!(total, Cost::of(10));
    }

    #[test]
    fn test_ratio() {
        assert_eq!(Cost::of(30).ratio_to(Cost::of(20)), Some(1.5));
        assert_eq!(Cost::of(30).ratio_to(Cost::ZERO), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::of(23).to_string(), "23");
        assert_eq!(format!("{:?}", Cost::of(23)), "Cost(23)");
    }
}

mod list {
    use super::*;

    #[test]
    fn test_construction() {
        let state = ListState::new([0, 1, 2, 3, 4]).unwrap();
        assert_eq!(state.len(), 5);
        assert_eq!(state.elements(), &[0, 1, 2, 3, 4]);
        assert_eq!(state.front(), Some(0));
    }

    #[test]
    fn test_construction_rejects_duplicates() {
        let err = ListState::new([0, 1, 2, 1]).unwrap_err();
        assert_eq!(err, AccessError::DuplicateElement(1));
    }

    #[test]
    fn test_empty() {
        let state = ListState::new([]).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.front(), None);
        assert_eq!(state.locate(0), Err(AccessError::ElementNotFound(0)));
    }

    #[test]
    fn test_locate_is_one_based() {
        let state = ListState::new([10, 20, 30]).unwrap();
        assert_eq!(state.locate(10).unwrap(), 1);
        assert_eq!(state.locate(20).unwrap(), 2);
        assert_eq!(state.locate(30).unwrap(), 3);
    }

    #[test]
    fn test_locate_unknown_element() {
        let state = ListState::new([0, 1, 2, 3, 4]).unwrap();
        assert_eq!(state.locate(9), Err(AccessError::ElementNotFound(9)));
    }

    #[test]
    fn test_access_cost_matches_position() {
        let state = ListState::new([0, 1, 2, 3, 4]).unwrap();
        for &e in state.elements() {
            assert_eq!(
                state.access_cost(e).unwrap(),
                Cost::of(state.locate(e).unwrap() as u64)
            );
        }
    }

    #[test]
    fn test_move_to_front() {
        let state = ListState::new([0, 1, 2, 3, 4]).unwrap();
        let moved = state.move_to_front(3).unwrap();

        // Element lands at position 1, relative order of the rest preserved.
        assert_eq!(moved.locate(3).unwrap(), 1);
        assert_eq!(moved.elements(), &[3, 0, 1, 2, 4]);

        // Original state is untouched (value semantics).
        assert_eq!(state.elements(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_move_front_element_is_noop_on_order() {
        let state = ListState::new([0, 1, 2]).unwrap();
        let moved = state.move_to_front(0).unwrap();
        assert_eq!(moved, state);
    }

    #[test]
    fn test_move_unknown_element() {
        let state = ListState::new([0, 1, 2]).unwrap();
        assert_eq!(
            state.move_to_front(7).unwrap_err(),
            AccessError::ElementNotFound(7)
        );
    }

    #[test]
    fn test_display() {
        let state = ListState::new([4, 3, 2, 1, 0]).unwrap();
        assert_eq!(state.to_string(), "[4, 3, 2, 1, 0]");
    }
}
