//! User roles

use serde::{Deserialize, Serialize};

/// Staff roles within the operation
///
/// Roles are carried on the session token but not enforced per route; any
/// authenticated role may call any endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Auxiliary,
    Operator,
    Handler,
    Driver,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Auxiliary => "auxiliary",
            UserRole::Operator => "operator",
            UserRole::Handler => "handler",
            UserRole::Driver => "driver",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auxiliary" => Some(UserRole::Auxiliary),
            "operator" => Some(UserRole::Operator),
            "handler" => Some(UserRole::Handler),
            "driver" => Some(UserRole::Driver),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Auxiliary,
            UserRole::Operator,
            UserRole::Handler,
            UserRole::Driver,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse(""), None);
    }
}
