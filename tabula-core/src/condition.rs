//! Condition expressions used in WHERE clauses
//!
//! A [`Condition`] is a small tree: comparisons are leaves and logical
//! AND/OR nodes combine two subtrees. Leaves are usually created through a
//! [`Column`], either obtained with [`col`] or from the [`ColumnProxy`] passed
//! to `where_` closures.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{ComparisonOperator, LogicalOperator, Value};

/// A WHERE condition tree
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Comparison {
        operator: ComparisonOperator,
        column: String,
        value: Value,
    },
    Logical {
        operator: LogicalOperator,
        left: Box<Condition>,
        right: Box<Condition>,
    },
}

impl Condition {
    /// Create a comparison leaf
    pub fn compare(
        column: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Self {
        Condition::Comparison {
            operator,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Combine two conditions into a logical node
    pub fn logical(operator: LogicalOperator, left: Condition, right: Condition) -> Self {
        Condition::Logical {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `(self) AND (other)`
    pub fn and(self, other: Condition) -> Self {
        Condition::logical(LogicalOperator::And, self, other)
    }

    /// `(self) OR (other)`
    pub fn or(self, other: Condition) -> Self {
        Condition::logical(LogicalOperator::Or, self, other)
    }

    /// Column names referenced by the leaves of this tree, left to right
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        self.collect_columns(&mut columns);
        columns
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Condition::Comparison { column, .. } => out.push(column),
            Condition::Logical { left, right, .. } => {
                left.collect_columns(out);
                right.collect_columns(out);
            }
        }
    }
}

/// Combine two conditions with AND
pub fn and(left: Condition, right: Condition) -> Condition {
    left.and(right)
}

/// Combine two conditions with OR
pub fn or(left: Condition, right: Condition) -> Condition {
    left.or(right)
}

/// A column reference exposing the comparison constructors
///
/// # Examples
/// ```
/// use tabula_core::col;
///
/// let adult = col("age").gte(18);
/// let named = col("name").eq("John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: Arc<str>,
}

impl Column {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a comparison with an operator chosen at runtime
    pub fn compare(&self, operator: ComparisonOperator, value: impl Into<Value>) -> Condition {
        Condition::compare(&*self.name, operator, value)
    }

    pub fn eq(&self, value: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Eq, value)
    }

    pub fn ne(&self, value: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Ne, value)
    }

    pub fn gt(&self, value: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Gt, value)
    }

    pub fn gte(&self, value: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Gte, value)
    }

    pub fn lt(&self, value: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Lt, value)
    }

    pub fn lte(&self, value: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Lte, value)
    }
}

/// Create a column reference by name
pub fn col(name: &str) -> Column {
    Column::new(name)
}

/// Name-keyed access to [`Column`]s, handed to `where_` closures
///
/// Lookups are memoized per proxy.
#[derive(Debug, Default)]
pub struct ColumnProxy {
    cache: RefCell<HashMap<String, Column>>,
}

impl ColumnProxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the column helpers for `name`
    pub fn col(&self, name: &str) -> Column {
        self.cache
            .borrow_mut()
            .entry(name.to_string())
            .or_insert_with(|| Column::new(name))
            .clone()
    }
}

/// Anything accepted by a `where_` step
pub trait IntoWhere {
    fn into_where(self) -> Condition;
}

impl IntoWhere for Condition {
    fn into_where(self) -> Condition {
        self
    }
}

// where_(|c: &ColumnProxy| c.col("id").eq(1))
impl<F> IntoWhere for F
where
    F: FnOnce(&ColumnProxy) -> Condition,
{
    fn into_where(self) -> Condition {
        let proxy = ColumnProxy::new();
        self(&proxy)
    }
}

/// Store `next`, combining it with `current` when one is already present
pub(crate) fn combine(
    current: Option<Condition>,
    operator: LogicalOperator,
    next: Condition,
) -> Condition {
    match current {
        Some(existing) => Condition::logical(operator, existing, next),
        None => next,
    }
}
