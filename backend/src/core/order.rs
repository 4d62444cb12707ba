//! Ordering direction
//!
//! Every component in this crate is configured with an [`Order`]. The same
//! question is asked everywhere: "in a sequence sorted by this order, does
//! `a` come strictly before `b`?" Equal elements never rank before each
//! other, which is what keeps queue insertion stable and heap tie-breaks
//! deterministic.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Direction in which a sequence is ordered
///
/// A max-priority queue keeps its slots in `Descending` order (slot 0 holds
/// the maximum); a min-priority queue keeps them `Ascending`.
///
/// # Example
/// ```
/// use sort_tracer_core_rs::Order;
/// use std::cmp::Ordering;
///
/// assert!(Order::Ascending.ranks_before(Ordering::Less));
/// assert!(Order::Descending.ranks_before(Ordering::Greater));
/// assert!(!Order::Descending.ranks_before(Ordering::Equal));
///
/// let order: Order = "max".parse().unwrap();
/// assert_eq!(order, Order::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// Returns true if `a` comes strictly before `b`, given `a.cmp(b)`
    pub fn ranks_before(self, ordering: Ordering) -> bool {
        match self {
            Order::Ascending => ordering == Ordering::Less,
            Order::Descending => ordering == Ordering::Greater,
        }
    }

    /// Opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }

    /// Name of the extreme element held at the head of a queue in this order
    pub fn extreme_name(self) -> &'static str {
        match self {
            Order::Ascending => "min",
            Order::Descending => "max",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending"),
        }
    }
}

/// Error returned when an order name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order '{0}': expected one of ascending, descending, min, max")]
pub struct UnknownOrder(pub String);

impl FromStr for Order {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" | "min" => Ok(Order::Ascending),
            "descending" | "desc" | "max" => Ok(Order::Descending),
            _ => Err(UnknownOrder(s.to_string())),
        }
    }
}

impl TryFrom<String> for Order {
    type Error = UnknownOrder;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
