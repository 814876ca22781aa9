//! Seat preference and caller role enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Seat category requested by a passenger. Not persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Window column seat
    Window,

    /// Seat directly beside an aisle column
    Aisle,

    /// Any free seat
    #[default]
    None,
}

impl FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Err("Missing seat preference".to_string()),
            "window" | "w" => Ok(Preference::Window),
            "aisle" | "a" => Ok(Preference::Aisle),
            "none" | "n" | "any" => Ok(Preference::None),
            _ => Err(format!("Invalid seat preference: {}", s.trim())),
        }
    }
}

impl Preference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Window => "window",
            Preference::Aisle => "aisle",
            Preference::None => "none",
        }
    }
}

/// Who is looking at the seat map.
///
/// Staff see booking references; customers only see whether a seat is
/// taken.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Passenger-facing view
    #[default]
    Customer,

    /// Airline staff with full detail
    Staff,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" | "c" => Ok(Role::Customer),
            "staff" | "s" => Ok(Role::Staff),
            _ => Err(format!("Invalid role: {}", s.trim())),
        }
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Staff => "staff",
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Staff)
    }
}
