//! Product classification

use serde::{Deserialize, Serialize};

/// Categories of trackable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    RawMaterial,
    InputGood,
    FinishedGood,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::RawMaterial => "raw_material",
            ProductType::InputGood => "input_good",
            ProductType::FinishedGood => "finished_good",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "raw_material" => Some(ProductType::RawMaterial),
            "input_good" => Some(ProductType::InputGood),
            "finished_good" => Some(ProductType::FinishedGood),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_round_trip() {
        for t in [
            ProductType::RawMaterial,
            ProductType::InputGood,
            ProductType::FinishedGood,
        ] {
            assert_eq!(ProductType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ProductType::FinishedGood).unwrap();
        assert_eq!(json, "\"finished_good\"");
    }
}
