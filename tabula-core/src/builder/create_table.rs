//! CREATE TABLE statement builder

use super::common::{traced, QueryBuilder};
use crate::render::render_create_table;
use crate::schema::TableDefinition;
use crate::Result;

/// CREATE TABLE builder over a table definition
#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    definition: TableDefinition,
    if_not_exists: bool,
}

impl CreateTableBuilder {
    pub fn new(definition: &TableDefinition) -> Self {
        Self {
            definition: definition.clone(),
            if_not_exists: false,
        }
    }

    /// Add the `IF NOT EXISTS` guard
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn definition(&self) -> &TableDefinition {
        &self.definition
    }
}

impl QueryBuilder for CreateTableBuilder {
    fn build(&self) -> Result<String> {
        traced(
            "create_table",
            &self.definition.name,
            render_create_table(&self.definition, self.if_not_exists),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{column, ColumnOptions};
    use crate::{create_table, Error};

    fn users() -> TableDefinition {
        TableDefinition::new("users")
            .column(
                "id",
                column::integer(ColumnOptions::new().primary_key().auto_increment()),
            )
            .column("email", column::varchar(255, ColumnOptions::new().unique()))
    }

    #[test]
    fn test_create_table() {
        let sql = create_table(&users()).build().unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE users (\n  id INTEGER AUTOINCREMENT NOT NULL PRIMARY KEY,\n  email VARCHAR(255) NOT NULL UNIQUE\n)"
        );
    }

    #[test]
    fn test_create_table_if_not_exists() {
        let sql = create_table(&users()).if_not_exists().build().unwrap();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS users (\n"));
    }

    #[test]
    fn test_builder_owns_its_definition() {
        let definition = users();
        let builder = create_table(&definition);
        let definition = definition.column("bio", column::text(ColumnOptions::new().nullable()));

        assert_eq!(builder.definition().columns.len(), 2);
        assert_eq!(definition.columns.len(), 3);
    }

    #[test]
    fn test_create_table_without_columns_fails() {
        let err = create_table(&TableDefinition::new("empty"))
            .if_not_exists()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingColumns { ref table } if table == "empty"));
        assert_eq!(
            err.to_string(),
            "Table \"empty\" must define at least one column."
        );
    }
}
