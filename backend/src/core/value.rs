//! Comparable elements
//!
//! Sequences arrive from the CLI layer as whitespace-separated tokens plus an
//! element type (`str`, `int`, `float` or `mixed`). This module parses them
//! into [`Element`]s and defines the fallible comparison used by every
//! algorithm in the crate.
//!
//! # Comparison rules
//!
//! - Integers and floats compare numerically with each other
//! - Text compares lexicographically with text
//! - Text against a number, or anything against NaN, is [`Incomparable`]

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Two values that cannot be ordered relative to each other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot compare {left} with {right}")]
pub struct Incomparable {
    pub left: String,
    pub right: String,
}

/// Errors raised while turning raw tokens into elements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Invalid entry '{token}': expected {expected}")]
    InvalidEntry { token: String, expected: ElementType },

    #[error("Unknown element type '{0}': expected one of str, int, float, mixed")]
    UnknownElementType(String),
}

/// A total-or-fallible ordering
///
/// Types with a total order never fail; floats fail on NaN and [`Element`]
/// fails across text/number boundaries.
pub trait Comparable {
    fn try_compare(&self, other: &Self) -> Result<Ordering, Incomparable>;
}

macro_rules! impl_comparable_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Comparable for $ty {
                fn try_compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
                    Ok(self.cmp(other))
                }
            }
        )*
    };
}

impl_comparable_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String, &str);

macro_rules! impl_comparable_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Comparable for $ty {
                fn try_compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
                    self.partial_cmp(other).ok_or_else(|| Incomparable {
                        left: self.to_string(),
                        right: other.to_string(),
                    })
                }
            }
        )*
    };
}

impl_comparable_float!(f32, f64);

/// Checks that every element of `items` can be compared with the others
///
/// Comparability of [`Element`] is decided by kind (number vs text) plus NaN,
/// so comparing each element against the first one is sufficient.
pub fn ensure_comparable<T: Comparable>(items: &[T]) -> Result<(), Incomparable> {
    if let Some(first) = items.first() {
        for item in items {
            first.try_compare(item)?;
        }
    }
    Ok(())
}

// ============================================================================
// Element
// ============================================================================

/// A dynamically typed sequence element
///
/// # Example
/// ```
/// use sort_tracer_core_rs::{Comparable, Element};
/// use std::cmp::Ordering;
///
/// let a = Element::Int(3);
/// let b = Element::Float(2.5);
/// assert_eq!(a.try_compare(&b).unwrap(), Ordering::Greater);
///
/// let text = Element::Text("x".to_string());
/// assert!(a.try_compare(&text).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Element {
    /// Render the element as it appears inside an array snapshot
    ///
    /// Text is quoted so that `'10'` and `10` can be told apart.
    pub fn repr(&self) -> String {
        match self {
            Element::Text(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }

    fn incomparable(&self, other: &Self) -> Incomparable {
        Incomparable {
            left: self.repr(),
            right: other.repr(),
        }
    }
}

impl Comparable for Element {
    fn try_compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
        let ordering = match (self, other) {
            (Element::Int(a), Element::Int(b)) => Some(a.cmp(b)),
            (Element::Text(a), Element::Text(b)) => Some(a.cmp(b)),
            (Element::Float(x), Element::Float(y)) => x.partial_cmp(y),
            (Element::Int(a), Element::Float(x)) => compare_int_float(*a, *x),
            (Element::Float(x), Element::Int(a)) => compare_int_float(*a, *x).map(Ordering::reverse),
            _ => None,
        };
        ordering.ok_or_else(|| self.incomparable(other))
    }
}

/// 2^64, beyond the magnitude of any i64
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Exact ordering of an integer against a float; `None` for NaN
///
/// Whole parts compare as i128 so integers above 2^53 stay distinct.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    let whole = float.trunc();
    if whole.abs() >= TWO_POW_64 {
        return (int as f64).partial_cmp(&float);
    }

    let fraction = float - whole;
    let by_fraction = if fraction > 0.0 {
        Ordering::Less
    } else if fraction < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    };
    Some(i128::from(int).cmp(&(whole as i128)).then(by_fraction))
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(i) => write!(f, "{}", i),
            // Debug formatting keeps the fractional part: 5.0, not 5
            Element::Float(x) => write!(f, "{:?}", x),
            Element::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

// ============================================================================
// Element types and parsing
// ============================================================================

/// Declared type of the elements in an input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ElementType {
    #[default]
    Str,
    Int,
    Float,
    Mixed,
}

impl ElementType {
    /// Parse one token as this element type
    pub fn parse_token(self, token: &str) -> Result<Element, ValueError> {
        let invalid = || ValueError::InvalidEntry {
            token: token.to_string(),
            expected: self,
        };

        match self {
            ElementType::Str => Ok(Element::Text(token.to_string())),
            ElementType::Int => token.parse::<i64>().map(Element::Int).map_err(|_| invalid()),
            ElementType::Float => token.parse::<f64>().map(Element::Float).map_err(|_| invalid()),
            ElementType::Mixed => {
                if let Ok(i) = token.parse::<i64>() {
                    Ok(Element::Int(i))
                } else if let Ok(x) = token.parse::<f64>() {
                    Ok(Element::Float(x))
                } else {
                    Ok(Element::Text(token.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Str => "str",
            ElementType::Int => "int",
            ElementType::Float => "float",
            ElementType::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ElementType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "string" => Ok(ElementType::Str),
            "int" | "integer" => Ok(ElementType::Int),
            "float" | "floating_point" | "floating-point" => Ok(ElementType::Float),
            "mixed" => Ok(ElementType::Mixed),
            _ => Err(ValueError::UnknownElementType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ElementType {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Split raw user input into tokens
pub fn split_sequence(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Parse every token of a sequence as `element_type`
///
/// Fails on the first token that does not parse.
///
/// # Example
/// ```
/// use sort_tracer_core_rs::{parse_sequence, Element, ElementType};
///
/// let values = parse_sequence(&["5", "2.5", "x"], ElementType::Mixed).unwrap();
/// assert_eq!(values, vec![Element::Int(5), Element::Float(2.5), Element::from("x")]);
///
/// assert!(parse_sequence(&["5", "x"], ElementType::Int).is_err());
/// ```
pub fn parse_sequence<S: AsRef<str>>(
    tokens: &[S],
    element_type: ElementType,
) -> Result<Vec<Element>, ValueError> {
    tokens
        .iter()
        .map(|token| element_type.parse_token(token.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_float_compare_numerically() {
        let a = Element::Int(2);
        let b = Element::Float(2.0);
        assert_eq!(a.try_compare(&b).unwrap(), Ordering::Equal);
        assert_eq!(Element::Float(1.5).try_compare(&a).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_int_float_compare_exactly_above_2_pow_53() {
        let edge = 1i64 << 53;
        let float = Element::Float(edge as f64);

        assert_eq!(Element::Int(edge + 1).try_compare(&float).unwrap(), Ordering::Greater);
        assert_eq!(float.try_compare(&Element::Int(edge + 1)).unwrap(), Ordering::Less);
        assert_eq!(Element::Int(edge).try_compare(&float).unwrap(), Ordering::Equal);
        assert_eq!(
            Element::Int(i64::MAX).try_compare(&Element::Float(9.223372036854775807e18)).unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_int_float_fractions_and_infinities() {
        assert_eq!(Element::Int(3).try_compare(&Element::Float(2.5)).unwrap(), Ordering::Greater);
        assert_eq!(Element::Int(2).try_compare(&Element::Float(2.5)).unwrap(), Ordering::Less);
        assert_eq!(Element::Int(-3).try_compare(&Element::Float(-2.5)).unwrap(), Ordering::Less);
        assert_eq!(Element::Int(-2).try_compare(&Element::Float(-2.5)).unwrap(), Ordering::Greater);
        assert_eq!(Element::Int(0).try_compare(&Element::Float(-0.0)).unwrap(), Ordering::Equal);
        assert_eq!(
            Element::Int(i64::MAX).try_compare(&Element::Float(f64::INFINITY)).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            Element::Float(f64::NEG_INFINITY).try_compare(&Element::Int(i64::MIN)).unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_compares_lexicographically() {
        let a = Element::from("10");
        let b = Element::from("9");
        assert_eq!(a.try_compare(&b).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_nan_is_incomparable() {
        let nan = Element::Float(f64::NAN);
        assert!(nan.try_compare(&Element::Int(1)).is_err());
        assert!(nan.try_compare(&nan).is_err());
        assert!(f64::NAN.try_compare(&1.0).is_err());
    }

    #[test]
    fn test_ensure_comparable_catches_mixed_kinds() {
        let items = vec![Element::Int(1), Element::from("a"), Element::Int(3)];
        let err = ensure_comparable(&items).unwrap_err();
        assert_eq!(err.left, "1");
        assert_eq!(err.right, "'a'");

        assert!(ensure_comparable::<Element>(&[]).is_ok());
        assert!(ensure_comparable(&[Element::Float(f64::NAN)]).is_err());
    }

    #[test]
    fn test_display_and_repr() {
        assert_eq!(Element::Float(5.0).to_string(), "5.0");
        assert_eq!(Element::Float(0.25).to_string(), "0.25");
        assert_eq!(Element::Int(-3).repr(), "-3");
        assert_eq!(Element::from("b").repr(), "'b'");
        assert_eq!(Element::from("b").to_string(), "b");
    }

    #[test]
    fn test_parse_tokens_by_type() {
        assert_eq!(
            ElementType::Float.parse_token("3").unwrap(),
            Element::Float(3.0)
        );
        assert_eq!(
            ElementType::Str.parse_token("3").unwrap(),
            Element::from("3")
        );
        let err = ElementType::Int.parse_token("3.5").unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidEntry {
                token: "3.5".to_string(),
                expected: ElementType::Int
            }
        );
    }

    #[test]
    fn test_element_type_from_str() {
        assert_eq!("INT".parse::<ElementType>().unwrap(), ElementType::Int);
        assert_eq!("string".parse::<ElementType>().unwrap(), ElementType::Str);
        assert!("complex".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_element_type_deserializes_through_parser() {
        let ty: ElementType = serde_json::from_str("\"Integer\"").unwrap();
        assert_eq!(ty, ElementType::Int);
        let ty: ElementType = serde_json::from_str("\"floating-point\"").unwrap();
        assert_eq!(ty, ElementType::Float);

        let err = serde_json::from_str::<ElementType>("\"complex\"").unwrap_err();
        assert!(err.to_string().contains("Unknown element type 'complex'"));
    }

    #[test]
    fn test_split_sequence_ignores_extra_whitespace() {
        assert_eq!(split_sequence("  5 3\t8 "), vec!["5", "3", "8"]);
        assert!(split_sequence("   ").is_empty());
    }
}
