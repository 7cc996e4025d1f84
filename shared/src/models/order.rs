//! Production order workflow state machine
//!
//! Orders move pending -> in_production -> completed, with cancellation
//! allowed from pending or in_production. Completion happens automatically
//! once the produced amount reaches the order target.

use serde::{Deserialize, Serialize};

/// Lifecycle states of a production order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProduction,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "in_production" => Some(OrderStatus::InProduction),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether the order can move into production
    pub fn can_advance(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Whether the order can still be cancelled
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InProduction)
    }

    /// Whether produced amounts may be recorded against the order
    pub fn accepts_production(&self) -> bool {
        matches!(self, OrderStatus::InProduction)
    }
}

/// Apply a production increment to an order.
///
/// The produced amount is clamped at the order target; reaching the target
/// completes the order. Returns the new produced amount and status.
pub fn apply_production(produced: i64, quantity: i64, amount: i64) -> (i64, OrderStatus) {
    let new_produced = (produced + amount).min(quantity);
    let status = if new_produced >= quantity {
        OrderStatus::Completed
    } else {
        OrderStatus::InProduction
    };
    (new_produced, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_orders_advance() {
        assert!(OrderStatus::Pending.can_advance());
        assert!(!OrderStatus::InProduction.can_advance());
        assert!(!OrderStatus::Completed.can_advance());
        assert!(!OrderStatus::Cancelled.can_advance());
    }

    #[test]
    fn test_cancellation_window() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::InProduction.can_cancel());
        assert!(!OrderStatus::Completed.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }

    #[test]
    fn test_production_only_while_in_production() {
        assert!(OrderStatus::InProduction.accepts_production());
        assert!(!OrderStatus::Pending.accepts_production());
        assert!(!OrderStatus::Completed.accepts_production());
        assert!(!OrderStatus::Cancelled.accepts_production());
    }

    #[test]
    fn test_partial_production_stays_in_production() {
        let (produced, status) = apply_production(0, 10, 4);
        assert_eq!(produced, 4);
        assert_eq!(status, OrderStatus::InProduction);
    }

    #[test]
    fn test_production_clamps_at_target() {
        let (produced, status) = apply_production(0, 10, 15);
        assert_eq!(produced, 10);
        assert_eq!(status, OrderStatus::Completed);
    }

    #[test]
    fn test_exact_completion() {
        let (produced, status) = apply_production(6, 10, 4);
        assert_eq!(produced, 10);
        assert_eq!(status, OrderStatus::Completed);
    }

    #[test]
    fn test_status_round_trip() {
        for s in [
            OrderStatus::Pending,
            OrderStatus::InProduction,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(s.as_str()), Some(s));
        }
    }
}
