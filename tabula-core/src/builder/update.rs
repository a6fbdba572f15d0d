//! UPDATE statement builder module

use super::common::{traced, IntoUpdateData, QueryBuilder};
use crate::condition::{combine, ColumnProxy, Condition, IntoWhere};
use crate::render::render_update;
use crate::{Error, LogicalOperator, Result, TableHandle, Value};

/// UPDATE builder waiting for its SET payload
#[derive(Debug, Clone)]
pub struct UpdateSetBuilder {
    table: TableHandle,
}

/// UPDATE builder with a SET payload and an optional WHERE condition
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: TableHandle,
    set_clauses: Vec<(String, Value)>,
    condition: Option<Condition>,
}

impl UpdateSetBuilder {
    pub fn new(table: impl Into<TableHandle>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Set column values
    ///
    /// An empty payload is accepted here and rejected by `build()`.
    ///
    /// # Examples
    /// ```
    /// use tabula_core::{update, QueryBuilder, Value};
    ///
    /// let sql = update("users")
    ///     .set([("name", Value::from("Jane")), ("age", Value::from(25))])
    ///     .where_with(|c| c.col("id").eq(1))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(sql, "UPDATE users SET name = 'Jane', age = 25 WHERE id = 1");
    /// ```
    pub fn set<T>(self, data: T) -> UpdateBuilder
    where
        T: IntoUpdateData,
    {
        UpdateBuilder {
            table: self.table,
            set_clauses: data.into_update_data(),
            condition: None,
        }
    }
}

impl UpdateBuilder {
    /// Set the WHERE condition, replacing any previous one
    pub fn where_<W>(mut self, condition: W) -> Self
    where
        W: IntoWhere,
    {
        self.condition = Some(condition.into_where());
        self
    }

    /// Set the WHERE condition from a closure over the column proxy
    pub fn where_with<F>(self, build: F) -> Self
    where
        F: FnOnce(&ColumnProxy) -> Condition,
    {
        self.where_(build)
    }

    /// AND a condition onto the current one
    pub fn and_where<W>(mut self, condition: W) -> Self
    where
        W: IntoWhere,
    {
        let next = condition.into_where();
        self.condition = Some(combine(self.condition.take(), LogicalOperator::And, next));
        self
    }

    /// OR a condition onto the current one
    pub fn or_where<W>(mut self, condition: W) -> Self
    where
        W: IntoWhere,
    {
        let next = condition.into_where();
        self.condition = Some(combine(self.condition.take(), LogicalOperator::Or, next));
        self
    }

    fn render(&self) -> Result<String> {
        if self.set_clauses.is_empty() {
            return Err(Error::empty_set(self.table.name()));
        }

        self.table
            .check_columns(self.set_clauses.iter().map(|(column, _)| column.as_str()))?;
        if let Some(condition) = &self.condition {
            self.table.check_columns(condition.columns())?;
        }

        render_update(self.table.name(), &self.set_clauses, self.condition.as_ref())
    }
}

impl QueryBuilder for UpdateBuilder {
    fn build(&self) -> Result<String> {
        traced("update", self.table.name(), self.render())
    }
}
