//! Threshold rules - the (operator, value, color) triples that drive
//! feature classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a threshold rule
///
/// Serialized as the operator symbol (`<`, `<=`, `>`, `>=`, `=`), matching
/// how rule-editing hosts present them to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleOperator {
    /// Strictly less than
    #[serde(rename = "<")]
    Lt,

    /// Less than or equal
    #[serde(rename = "<=")]
    Le,

    /// Strictly greater than
    #[serde(rename = ">")]
    Gt,

    /// Greater than or equal
    #[serde(rename = ">=")]
    Ge,

    /// Exact equality (no epsilon tolerance)
    #[serde(rename = "=")]
    Eq,
}

impl RuleOperator {
    /// Get the operator symbol as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOperator::Lt => "<",
            RuleOperator::Le => "<=",
            RuleOperator::Gt => ">",
            RuleOperator::Ge => ">=",
            RuleOperator::Eq => "=",
        }
    }

    /// Parse an operator from its symbol
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "<" => Some(RuleOperator::Lt),
            "<=" => Some(RuleOperator::Le),
            ">" => Some(RuleOperator::Gt),
            ">=" => Some(RuleOperator::Ge),
            "=" => Some(RuleOperator::Eq),
            _ => None,
        }
    }

    /// Evaluate `lhs <op> rhs` with standard numeric semantics
    ///
    /// Equality is exact floating-point equality.
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            RuleOperator::Lt => lhs < rhs,
            RuleOperator::Le => lhs <= rhs,
            RuleOperator::Gt => lhs > rhs,
            RuleOperator::Ge => lhs >= rhs,
            RuleOperator::Eq => lhs == rhs,
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RuleOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid operator: {}", s))
    }
}

/// A single classification rule
///
/// Rules live in an ordered list inside [`crate::DataSourceConfig`];
/// evaluation is first-match-wins in list order. The engine never reorders
/// or deduplicates rules - overlap resolution belongs entirely to the
/// ordering the user chose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Comparison operator
    pub operator: RuleOperator,

    /// Threshold to compare the field value against
    pub value: f64,

    /// Display color returned when this rule matches
    pub color: String,
}

impl ThresholdRule {
    /// Create a new rule
    pub fn new(operator: RuleOperator, value: f64, color: impl Into<String>) -> Self {
        Self {
            operator,
            value,
            color: color.into(),
        }
    }

    /// Whether this rule matches the given field value
    pub fn matches(&self, field_value: f64) -> bool {
        self.operator.evaluate(field_value, self.value)
    }
}
