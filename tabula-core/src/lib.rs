//! Tabula Core - a typed SQL statement builder
//!
//! This crate renders SELECT, INSERT, UPDATE, DELETE and CREATE TABLE
//! statements from fluent, immutable builders. It also plans which tables of a
//! schema still need to be created. Nothing here talks to a database; every
//! builder ends in `build()`, which returns the SQL text.
//!
//! ```
//! use tabula_core::{select, QueryBuilder};
//!
//! let sql = select("users")
//!     .columns(("id", "name"))
//!     .where_with(|c| c.col("active").eq(true))
//!     .order_by("name")
//!     .limit(10)
//!     .offset(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE active = true ORDER BY name LIMIT 10 OFFSET 5"
//! );
//! ```

pub mod builder;
pub mod condition;
pub mod error;
pub mod migrate;
pub mod operator;
pub mod render;
pub mod schema;
pub mod table;
pub mod value;

// Re-export main types
pub use builder::{
    CreateTableBuilder, DeleteBuilder, InsertBuilder, InsertColumnsBuilder, InsertValuesBuilder,
    QueryBuilder, SelectBuilder, SortDirection, UpdateBuilder, UpdateSetBuilder,
};
pub use condition::{and, col, or, Column, ColumnProxy, Condition, IntoWhere};
pub use error::{Error, Result};
pub use migrate::{
    define_database, plan_migrations, Database, MigrationPlan, MigrationPlannerOptions,
    PendingMigration,
};
pub use operator::{ComparisonOperator, LogicalOperator};
pub use render::{escape_string, render_condition, render_value};
pub use schema::{
    column, define_table_schema, ColumnDefault, ColumnDefinition, ColumnOptions, Reference,
    TableDefinition,
};
pub use table::{table_ref, TableHandle};
pub use value::Value;

/// Start a SELECT statement against the given table
pub fn select(table: impl Into<TableHandle>) -> SelectBuilder {
    SelectBuilder::new(table)
}

/// Start an INSERT statement into the given table
pub fn insert(table: impl Into<TableHandle>) -> InsertColumnsBuilder {
    InsertColumnsBuilder::new(table)
}

/// Start an UPDATE statement for the given table
pub fn update(table: impl Into<TableHandle>) -> UpdateSetBuilder {
    UpdateSetBuilder::new(table)
}

/// Start a DELETE statement for the given table
pub fn delete_from(table: impl Into<TableHandle>) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Start a CREATE TABLE statement for the given definition
pub fn create_table(definition: &TableDefinition) -> CreateTableBuilder {
    CreateTableBuilder::new(definition)
}
