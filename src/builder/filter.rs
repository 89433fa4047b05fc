//! The fixed table of PostgREST filter operators.
//!
//! Every operator formats the same way: `<column>=<operator>.<value>`, where
//! a list value is joined with commas. Adding an operator means adding a
//! variant here; the builder's named shortcuts all go through
//! [`FilterOperator::format`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A filter operator understood by PostgREST.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `eq`: equals.
    Eq,
    /// `gt`: greater than.
    Gt,
    /// `lt`: less than.
    Lt,
    /// `gte`: greater than or equal.
    Gte,
    /// `lte`: less than or equal.
    Lte,
    /// `like`: case-sensitive pattern match.
    Like,
    /// `ilike`: case-insensitive pattern match.
    Ilike,
    /// `is`: identity check (`null`, `true`, `false`).
    Is,
    /// `in`: membership in a list.
    In,
    /// `not`: negation prefix.
    Not,
}

impl FilterOperator {
    /// Every operator, in table order.
    pub const ALL: [Self; 10] = [
        Self::Eq,
        Self::Gt,
        Self::Lt,
        Self::Gte,
        Self::Lte,
        Self::Like,
        Self::Ilike,
        Self::Is,
        Self::In,
        Self::Not,
    ];

    /// Returns the operator token used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::Gte => "gte",
            Self::Lte => "lte",
            Self::Like => "like",
            Self::Ilike => "ilike",
            Self::Is => "is",
            Self::In => "in",
            Self::Not => "not",
        }
    }

    /// Formats the query fragment `<column>=<operator>.<value>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postgrest_builder::{FilterOperator, FilterValue};
    ///
    /// let fragment = FilterOperator::In.format("id", &FilterValue::from([1, 2, 3]));
    /// assert_eq!(fragment, "id=in.1,2,3");
    /// ```
    #[must_use]
    pub fn format(self, column: &str, value: &FilterValue) -> String {
        format!("{column}={}.{value}", self.as_str())
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown operator name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown filter operator '{name}'.")]
pub struct ParseFilterOperatorError {
    /// The name that did not match any operator.
    pub name: String,
}

impl FromStr for FilterOperator {
    type Err = ParseFilterOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseFilterOperatorError {
                name: s.to_string(),
            })
    }
}

/// The right-hand side of a filter.
///
/// Scalars render as their plain string form; lists render comma-joined
/// with no brackets or quoting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    /// A single value.
    Scalar(String),
    /// A sequence of values.
    List(Vec<String>),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.write_str(value),
            Self::List(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: ToString> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for FilterValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for FilterValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_formats_scalar() {
        for op in FilterOperator::ALL {
            assert_eq!(
                op.format("col", &FilterValue::from("v")),
                format!("col={}.v", op.as_str())
            );
        }
    }

    #[test]
    fn test_every_operator_formats_list() {
        for op in FilterOperator::ALL {
            assert_eq!(
                op.format("col", &FilterValue::from(vec!["a", "b"])),
                format!("col={}.a,b", op.as_str())
            );
        }
    }

    #[test]
    fn test_operator_tokens() {
        let tokens: Vec<&str> = FilterOperator::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(
            tokens,
            ["eq", "gt", "lt", "gte", "lte", "like", "ilike", "is", "in", "not"]
        );
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("ilike".parse::<FilterOperator>(), Ok(FilterOperator::Ilike));
        assert_eq!(
            "neq".parse::<FilterOperator>(),
            Err(ParseFilterOperatorError {
                name: "neq".to_string()
            })
        );
    }

    #[test]
    fn test_scalar_values_use_plain_string_form() {
        assert_eq!(FilterValue::from(42).to_string(), "42");
        assert_eq!(FilterValue::from(-1.5).to_string(), "-1.5");
        assert_eq!(FilterValue::from(true).to_string(), "true");
        assert_eq!(FilterValue::from("null").to_string(), "null");
    }

    #[test]
    fn test_list_values_are_comma_joined_without_quoting() {
        assert_eq!(FilterValue::from([1, 2, 3]).to_string(), "1,2,3");
        assert_eq!(FilterValue::from(&["a b", "c"][..]).to_string(), "a b,c");
        assert_eq!(FilterValue::from(Vec::<String>::new()).to_string(), "");
    }
}
