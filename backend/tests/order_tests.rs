//! Production order workflow tests
//!
//! Covers the order state machine and the clamp-and-complete rule for
//! recorded production.

use proptest::prelude::*;

use shared::models::{apply_production, OrderStatus};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Only pending orders can move into production
    #[test]
    fn test_advance_from_pending_only() {
        assert!(OrderStatus::Pending.can_advance());
        assert!(!OrderStatus::InProduction.can_advance());
        assert!(!OrderStatus::Completed.can_advance());
        assert!(!OrderStatus::Cancelled.can_advance());
    }

    /// Cancellation is allowed from pending or in_production
    #[test]
    fn test_cancellation_window() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::InProduction.can_cancel());
        assert!(!OrderStatus::Completed.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }

    /// Production is only recorded against in_production orders
    #[test]
    fn test_production_requires_in_production() {
        assert!(OrderStatus::InProduction.accepts_production());
        assert!(!OrderStatus::Pending.accepts_production());
    }

    /// Recording part of the target keeps the order in production
    #[test]
    fn test_partial_production() {
        let (produced, status) = apply_production(0, 10, 4);
        assert_eq!(produced, 4);
        assert_eq!(status, OrderStatus::InProduction);
    }

    /// Reaching the target exactly completes the order
    #[test]
    fn test_exact_completion() {
        let (produced, status) = apply_production(6, 10, 4);
        assert_eq!(produced, 10);
        assert_eq!(status, OrderStatus::Completed);
    }

    /// Overshooting clamps at the target and completes the order
    #[test]
    fn test_overshoot_clamps() {
        let (produced, status) = apply_production(8, 10, 100);
        assert_eq!(produced, 10);
        assert_eq!(status, OrderStatus::Completed);
    }

    /// Statuses use their wire names
    #[test]
    fn test_status_wire_names() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::InProduction.as_str(), "in_production");
        assert_eq!(OrderStatus::Completed.as_str(), "completed");
        assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Produced amounts never exceed the order target
    #[test]
    fn prop_produced_never_exceeds_target(
        produced in 0i64..1_000,
        quantity in 1i64..1_000,
        amount in 1i64..10_000,
    ) {
        let produced = produced.min(quantity);
        let (new_produced, _) = apply_production(produced, quantity, amount);
        prop_assert!(new_produced <= quantity);
        prop_assert!(new_produced >= produced);
    }

    /// An order is completed exactly when the target is reached
    #[test]
    fn prop_completed_iff_target_reached(
        produced in 0i64..1_000,
        quantity in 1i64..1_000,
        amount in 1i64..10_000,
    ) {
        let produced = produced.min(quantity);
        let (new_produced, status) = apply_production(produced, quantity, amount);
        if new_produced == quantity {
            prop_assert_eq!(status, OrderStatus::Completed);
        } else {
            prop_assert_eq!(status, OrderStatus::InProduction);
        }
    }

    /// Repeated increments of 1 complete the order in exactly `quantity` steps
    #[test]
    fn prop_unit_increments_complete(quantity in 1i64..200) {
        let mut produced = 0;
        let mut status = OrderStatus::InProduction;
        let mut steps = 0;

        while status != OrderStatus::Completed {
            let (p, s) = apply_production(produced, quantity, 1);
            produced = p;
            status = s;
            steps += 1;
        }

        prop_assert_eq!(steps, quantity);
        prop_assert_eq!(produced, quantity);
    }
}
