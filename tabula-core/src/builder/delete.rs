//! DELETE statement builder module

use super::common::{traced, QueryBuilder};
use crate::condition::{combine, ColumnProxy, Condition, IntoWhere};
use crate::render::render_delete;
use crate::{LogicalOperator, Result, TableHandle};

/// DELETE builder with an optional WHERE condition
///
/// Without a condition the statement deletes every row.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: TableHandle,
    condition: Option<Condition>,
}

impl DeleteBuilder {
    pub fn new(table: impl Into<TableHandle>) -> Self {
        Self {
            table: table.into(),
            condition: None,
        }
    }

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
        if let Some(condition) = &self.condition {
            self.table.check_columns(condition.columns())?;
        }
        render_delete(self.table.name(), self.condition.as_ref())
    }
}

impl QueryBuilder for DeleteBuilder {
    fn build(&self) -> Result<String> {
        traced("delete", self.table.name(), self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{col, delete_from, table_ref, Error};

    #[test]
    fn test_delete_builder() {
        let sql = delete_from("users").where_(col("age").lt(18)).build().unwrap();
        assert_eq!(sql, "DELETE FROM users WHERE age < 18");
    }

    #[test]
    fn test_delete_without_where() {
        let sql = delete_from("users").build().unwrap();
        assert_eq!(sql, "DELETE FROM users");
    }

    #[test]
    fn test_delete_with_annotated_closure() {
        let sql = delete_from("posts")
            .where_(|c: &ColumnProxy| c.col("published").eq(false))
            .build()
            .unwrap();
        assert_eq!(sql, "DELETE FROM posts WHERE published = false");
    }

    #[test]
    fn test_delete_multiple_conditions() {
        let sql = delete_from("users")
            .where_(col("age").lt(18))
            .or_where(col("status").eq("inactive"))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM users WHERE (age < 18) OR (status = 'inactive')"
        );
    }

    #[test]
    fn test_delete_unknown_column_fails() {
        let posts = table_ref("posts").with_columns(["id", "published"]);
        assert!(delete_from(&posts)
            .where_with(|c| c.col("published").eq(false))
            .build()
            .is_ok());

        let err = delete_from(&posts)
            .where_with(|c| c.col("draft").eq(true))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { .. }));
    }
}
