//! Common types and traits shared across all statement builders

use std::collections::BTreeMap;

use crate::{Result, Value};

/// Core trait for all statement builders
pub trait QueryBuilder {
    /// Render the statement as SQL text
    ///
    /// Rendering never mutates the builder, so a builder may be built any
    /// number of times.
    fn build(&self) -> Result<String>;
}

/// Trait to convert various types into columns
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

// For tuples
impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
        ]
    }
}

impl IntoColumns for (&str, &str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
            self.4.to_string(),
        ]
    }
}

/// Trait for the positional row passed to `values()`
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

impl IntoValues for Vec<Value> {
    fn into_values(self) -> Vec<Value> {
        self
    }
}

impl<V, const N: usize> IntoValues for [V; N]
where
    V: Into<Value>,
{
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! impl_into_values_for_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> IntoValues for ($($name,)+)
        where
            $($name: Into<Value>,)+
        {
            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

impl_into_values_for_tuple!(A);
impl_into_values_for_tuple!(A, B);
impl_into_values_for_tuple!(A, B, C);
impl_into_values_for_tuple!(A, B, C, D);
impl_into_values_for_tuple!(A, B, C, D, E);
impl_into_values_for_tuple!(A, B, C, D, E, F);
impl_into_values_for_tuple!(A, B, C, D, E, F, G);
impl_into_values_for_tuple!(A, B, C, D, E, F, G, H);

/// Trait for types that can be converted to UPDATE data
///
/// Pairs keep their order; `BTreeMap` yields its keys sorted.
pub trait IntoUpdateData {
    fn into_update_data(self) -> Vec<(String, Value)>;
}

impl<K, V> IntoUpdateData for Vec<(K, V)>
where
    K: Into<String>,
    V: Into<Value>,
{
    fn into_update_data(self) -> Vec<(String, Value)> {
        self.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
    }
}

impl<K, V, const N: usize> IntoUpdateData for [(K, V); N]
where
    K: Into<String>,
    V: Into<Value>,
{
    fn into_update_data(self) -> Vec<(String, Value)> {
        self.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
    }
}

impl<K, V> IntoUpdateData for BTreeMap<K, V>
where
    K: Into<String>,
    V: Into<Value>,
{
    fn into_update_data(self) -> Vec<(String, Value)> {
        self.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
    }
}

/// Sort direction for ORDER BY clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// An ORDER BY clause; without a direction the database default applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    pub column: String,
    pub direction: Option<SortDirection>,
}

/// Log the outcome of a `build()` call and pass it through
pub(crate) fn traced(
    statement: &'static str,
    table: &str,
    result: Result<String>,
) -> Result<String> {
    match &result {
        Ok(sql) => {
            tracing::debug!(statement = statement, table = table, sql = %sql, "built statement")
        }
        Err(err) => tracing::debug!(
            statement = statement,
            table = table,
            error = %err,
            "statement build failed"
        ),
    }
    result
}
