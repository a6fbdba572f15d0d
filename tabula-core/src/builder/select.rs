//! SELECT statement builder implementation

use super::common::{traced, IntoColumns, OrderByClause, QueryBuilder, SortDirection};
use crate::condition::{combine, ColumnProxy, Condition, IntoWhere};
use crate::render::render_where;
use crate::{LogicalOperator, Result, TableHandle};

/// SELECT statement builder
///
/// Every step is optional and may be repeated; repeating a step replaces
/// its previous value. Clause order in the output is fixed regardless of
/// call order.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: TableHandle,
    columns: Vec<String>,
    condition: Option<Condition>,
    order_by: Option<OrderByClause>,
    limit_value: Option<u64>,
    offset_value: Option<u64>,
}

impl SelectBuilder {
    /// Create a new SELECT builder selecting every column
    pub fn new(table: impl Into<TableHandle>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            condition: None,
            order_by: None,
            limit_value: None,
            offset_value: None,
        }
    }

    /// Select specific columns
    ///
    /// # Examples
    /// ```
    /// use tabula_core::{select, QueryBuilder};
    ///
    /// let sql = select("users").columns(("id", "name")).build().unwrap();
    /// assert_eq!(sql, "SELECT id, name FROM users");
    /// ```
    pub fn columns<C>(mut self, columns: C) -> Self
    where
        C: IntoColumns,
    {
        self.columns = columns.into_columns();
        self
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
    ///
    /// # Examples
    /// ```
    /// use tabula_core::{select, QueryBuilder};
    ///
    /// let sql = select("users")
    ///     .where_with(|c| c.col("active").eq(true))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(sql, "SELECT * FROM users WHERE active = true");
    /// ```
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

    /// ORDER BY a column without an explicit direction
    pub fn order_by(self, column: &str) -> Self {
        self.ordered(column, None)
    }

    /// Add an ORDER BY ASC clause (convenience method)
    pub fn order_by_asc(self, column: &str) -> Self {
        self.ordered(column, Some(SortDirection::Asc))
    }

    /// Add an ORDER BY DESC clause (convenience method)
    pub fn order_by_desc(self, column: &str) -> Self {
        self.ordered(column, Some(SortDirection::Desc))
    }

    fn ordered(mut self, column: &str, direction: Option<SortDirection>) -> Self {
        self.order_by = Some(OrderByClause {
            column: column.to_string(),
            direction,
        });
        self
    }

    /// Set the LIMIT clause
    pub fn limit(mut self, count: u64) -> Self {
        self.limit_value = Some(count);
        self
    }

    /// Set the OFFSET clause
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset_value = Some(offset);
        self
    }

    fn check_columns(&self) -> Result<()> {
        self.table.check_columns(self.columns.iter().map(String::as_str))?;
        if let Some(condition) = &self.condition {
            self.table.check_columns(condition.columns())?;
        }
        if let Some(order_by) = &self.order_by {
            self.table.check_column(&order_by.column)?;
        }
        Ok(())
    }

    fn render(&self) -> Result<String> {
        self.check_columns()?;

        let mut sql = String::new();

        // SELECT clause
        sql.push_str("SELECT ");
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.columns.join(", "));
        }

        // FROM clause
        sql.push_str(" FROM ");
        sql.push_str(self.table.name());

        // WHERE clause
        sql.push_str(&render_where(self.condition.as_ref())?);

        // ORDER BY clause
        if let Some(order_by) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order_by.column);
            if let Some(direction) = order_by.direction {
                sql.push_str(&format!(" {}", direction));
            }
        }

        // LIMIT clause
        if let Some(limit) = self.limit_value {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        // OFFSET clause
        if let Some(offset) = self.offset_value {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        Ok(sql)
    }
}

impl QueryBuilder for SelectBuilder {
    fn build(&self) -> Result<String> {
        traced("select", self.table.name(), self.render())
    }
}
