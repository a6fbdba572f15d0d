//! INSERT statement builder implementations

use super::common::{traced, IntoColumns, IntoValues, QueryBuilder};
use crate::render::render_insert;
use crate::{Error, Result, TableHandle, Value};

/// INSERT builder waiting for its column list
#[derive(Debug, Clone)]
pub struct InsertColumnsBuilder {
    table: TableHandle,
}

/// INSERT builder holding columns, waiting for the row values
#[derive(Debug, Clone)]
pub struct InsertValuesBuilder {
    table: TableHandle,
    columns: Vec<String>,
}

/// INSERT builder ready to render
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: TableHandle,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl InsertColumnsBuilder {
    pub fn new(table: impl Into<TableHandle>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Declare the columns, in the order the values will be given
    pub fn columns<C>(self, columns: C) -> InsertValuesBuilder
    where
        C: IntoColumns,
    {
        InsertValuesBuilder {
            table: self.table,
            columns: columns.into_columns(),
        }
    }
}

impl InsertValuesBuilder {
    /// Bind one value per declared column, positionally
    ///
    /// # Examples
    /// ```
    /// use tabula_core::{insert, QueryBuilder};
    ///
    /// let sql = insert("users")
    ///     .columns(("name", "age"))
    ///     .values(("John", 30))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(sql, "INSERT INTO users (name, age) VALUES ('John', 30)");
    /// ```
    pub fn values<V>(&self, values: V) -> InsertBuilder
    where
        V: IntoValues,
    {
        InsertBuilder {
            table: self.table.clone(),
            columns: self.columns.clone(),
            values: values.into_values(),
        }
    }
}

impl InsertBuilder {
    fn render(&self) -> Result<String> {
        if self.columns.is_empty() {
            return Err(Error::invalid_query("INSERT requires at least one column"));
        }
        if self.columns.len() != self.values.len() {
            return Err(Error::ArityMismatch {
                table: self.table.name().to_string(),
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }
        self.table
            .check_columns(self.columns.iter().map(String::as_str))?;

        render_insert(self.table.name(), &self.columns, &self.values)
    }
}

impl QueryBuilder for InsertBuilder {
    fn build(&self) -> Result<String> {
        traced("insert", self.table.name(), self.render())
    }
}
