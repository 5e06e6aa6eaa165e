//! Container keys
//!
//! Keys are either integers or strings. Which of the two a container
//! accepts is dictated by its [`Kind`](crate::types::Kind):
//! - Map: non-numeric strings only
//! - Set / Tuple: non-negative integers, dense `0..n-1`
//! - Any: both

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::Value;

/// A container key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Integer key (positional for sequential containers)
    Int(i64),
    /// String key
    Str(String),
}

impl Key {
    /// Parse a key the way array keys are cast: canonical decimal integers
    /// (`"0"`, `"42"`, `"-7"`, but not `"07"` or `"+1"`) become `Key::Int`,
    /// everything else stays a string.
    pub fn parse(s: &str) -> Key {
        let canonical = match s.strip_prefix('-') {
            Some(rest) => !rest.is_empty() && !rest.starts_with('0') && all_digits(rest),
            None => s == "0" || (!s.starts_with('0') && all_digits(s)),
        };
        if canonical {
            if let Ok(i) = s.parse::<i64>() {
                return Key::Int(i);
            }
        }
        Key::Str(s.to_string())
    }

    /// Get as i64 if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Get as &str if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Check if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Check if this is a string key
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// `int` or `string`
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Int(_) => "int",
            Key::Str(_) => "string",
        }
    }

    /// True if the key looks like an integer index: any integer key, or a
    /// string made only of digits (optionally with a leading minus).
    ///
    /// Map keys must never satisfy this predicate.
    pub fn is_digit_like(&self) -> bool {
        match self {
            Key::Int(_) => true,
            Key::Str(s) => {
                let digits = s.strip_prefix('-').unwrap_or(s);
                all_digits(digits)
            }
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i as i64)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<Key> for Value {
    fn from(k: Key) -> Self {
        match k {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_integers() {
        assert_eq!(Key::parse("0"), Key::Int(0));
        assert_eq!(Key::parse("42"), Key::Int(42));
        assert_eq!(Key::parse("-7"), Key::Int(-7));
    }

    #[test]
    fn test_parse_non_canonical_stays_string() {
        assert_eq!(Key::parse("07"), Key::Str("07".into()));
        assert_eq!(Key::parse("+1"), Key::Str("+1".into()));
        assert_eq!(Key::parse("-0"), Key::Str("-0".into()));
        assert_eq!(Key::parse("1.5"), Key::Str("1.5".into()));
        assert_eq!(Key::parse(""), Key::Str(String::new()));
        assert_eq!(Key::parse("name"), Key::Str("name".into()));
    }

    #[test]
    fn test_digit_like() {
        assert!(Key::Int(3).is_digit_like());
        assert!(Key::from("12").is_digit_like());
        assert!(Key::from("007").is_digit_like());
        assert!(Key::from("-5").is_digit_like());
        assert!(!Key::from("a1").is_digit_like());
        assert!(!Key::from("").is_digit_like());
        assert!(!Key::from("-").is_digit_like());
    }

    #[test]
    fn test_ordering_ints_before_strings() {
        let mut keys = vec![Key::from("b"), Key::Int(2), Key::from("a"), Key::Int(1)];
        keys.sort();
        assert_eq!(
            keys,
            vec![Key::Int(1), Key::Int(2), Key::from("a"), Key::from("b")]
        );
    }

    #[test]
    fn test_serde_untagged() {
        let json = serde_json::to_string(&vec![Key::Int(1), Key::from("x")]).unwrap();
        assert_eq!(json, r#"[1,"x"]"#);
        let back: Vec<Key> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Key::Int(1), Key::from("x")]);
    }

    #[test]
    fn test_into_value() {
        assert_eq!(Value::from(Key::Int(3)), Value::Int(3));
        assert_eq!(Value::from(Key::from("k")), Value::from("k"));
    }
}
