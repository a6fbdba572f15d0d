//! Comparison and logical operator types

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Comparison operator of a condition leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparisonOperator {
    /// Get the SQL symbol for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Ne => "!=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Gte => ">=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Lte => "<=",
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts SQL symbols and operator names
///
/// # Examples
/// ```
/// use tabula_core::ComparisonOperator;
///
/// let op: ComparisonOperator = ">=".parse().unwrap();
/// assert_eq!(op, ComparisonOperator::Gte);
///
/// let op: ComparisonOperator = "ne".parse().unwrap();
/// assert_eq!(op, ComparisonOperator::Ne);
/// ```
impl FromStr for ComparisonOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "=" | "eq" => Ok(ComparisonOperator::Eq),
            "!=" | "<>" | "ne" => Ok(ComparisonOperator::Ne),
            ">" | "gt" => Ok(ComparisonOperator::Gt),
            ">=" | "gte" => Ok(ComparisonOperator::Gte),
            "<" | "lt" => Ok(ComparisonOperator::Lt),
            "<=" | "lte" => Ok(ComparisonOperator::Lte),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

/// How two conditions are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

impl Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_symbols() {
        assert_eq!(ComparisonOperator::Eq.as_str(), "=");
        assert_eq!(ComparisonOperator::Ne.as_str(), "!=");
        assert_eq!(ComparisonOperator::Gt.as_str(), ">");
        assert_eq!(ComparisonOperator::Gte.as_str(), ">=");
        assert_eq!(ComparisonOperator::Lt.as_str(), "<");
        assert_eq!(ComparisonOperator::Lte.as_str(), "<=");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ComparisonOperator::Gte), ">=");
        assert_eq!(format!("{}", LogicalOperator::Or), "OR");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(
            ">".parse::<ComparisonOperator>().unwrap(),
            ComparisonOperator::Gt
        );
        assert_eq!(
            "<>".parse::<ComparisonOperator>().unwrap(),
            ComparisonOperator::Ne
        );
        assert_eq!(
            "LTE".parse::<ComparisonOperator>().unwrap(),
            ComparisonOperator::Lte
        );
    }

    #[test]
    fn test_invalid_string_conversion() {
        let err = "LIKE".parse::<ComparisonOperator>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid operator: 'LIKE'");
    }
}
