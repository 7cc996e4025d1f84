//! Stock movement types and the signed-delta rule

use serde::{Deserialize, Serialize};

/// Kinds of stock-affecting movements recorded in the ledger
///
/// `Incoming`/`ProductionIncoming` add to a product's stock;
/// `Outgoing`/`ProductionOutgoing` subtract from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Outgoing,
    Incoming,
    ProductionIncoming,
    ProductionOutgoing,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Outgoing => "outgoing",
            DeliveryType::Incoming => "incoming",
            DeliveryType::ProductionIncoming => "production_incoming",
            DeliveryType::ProductionOutgoing => "production_outgoing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "outgoing" => Some(DeliveryType::Outgoing),
            "incoming" => Some(DeliveryType::Incoming),
            "production_incoming" => Some(DeliveryType::ProductionIncoming),
            "production_outgoing" => Some(DeliveryType::ProductionOutgoing),
            _ => None,
        }
    }

    /// Whether this movement adds stock
    pub fn is_inbound(&self) -> bool {
        matches!(
            self,
            DeliveryType::Incoming | DeliveryType::ProductionIncoming
        )
    }

    /// Signed stock delta for a movement of `quantity` units
    pub fn signed_delta(&self, quantity: i64) -> i64 {
        if self.is_inbound() {
            quantity
        } else {
            -quantity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_types_add_stock() {
        assert_eq!(DeliveryType::Incoming.signed_delta(20), 20);
        assert_eq!(DeliveryType::ProductionIncoming.signed_delta(7), 7);
    }

    #[test]
    fn test_outbound_types_remove_stock() {
        assert_eq!(DeliveryType::Outgoing.signed_delta(50), -50);
        assert_eq!(DeliveryType::ProductionOutgoing.signed_delta(3), -3);
    }

    #[test]
    fn test_snapshot_chain() {
        // Product at 100: incoming 20 then outgoing 50
        let mut stock = 100;
        let previous = stock;
        stock += DeliveryType::Incoming.signed_delta(20);
        assert_eq!((previous, stock), (100, 120));

        let previous = stock;
        stock += DeliveryType::Outgoing.signed_delta(50);
        assert_eq!((previous, stock), (120, 70));
    }

    #[test]
    fn test_stock_may_go_negative() {
        // No floor is applied to outbound movements
        let stock = 10 + DeliveryType::Outgoing.signed_delta(50);
        assert_eq!(stock, -40);
    }

    #[test]
    fn test_round_trip() {
        for t in [
            DeliveryType::Outgoing,
            DeliveryType::Incoming,
            DeliveryType::ProductionIncoming,
            DeliveryType::ProductionOutgoing,
        ] {
            assert_eq!(DeliveryType::parse(t.as_str()), Some(t));
        }
    }
}
