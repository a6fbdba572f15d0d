//! Migration planning: which tables of a schema still need CREATE TABLE
//!
//! ```
//! use tabula_core::schema::{column, ColumnOptions};
//! use tabula_core::{define_database, MigrationPlannerOptions, TableDefinition};
//!
//! let users = TableDefinition::new("users")
//!     .column("id", column::integer(ColumnOptions::new().primary_key()));
//! let posts = TableDefinition::new("posts")
//!     .column("id", column::integer(ColumnOptions::new().primary_key()));
//!
//! let options = MigrationPlannerOptions::new().existing_tables(["Users"]);
//! let plan = define_database([users, posts]).plan(&options).unwrap();
//!
//! assert_eq!(plan.skipped, vec!["users"]);
//! assert_eq!(plan.pending[0].table, "posts");
//! ```

use serde::Deserialize;

use crate::builder::{CreateTableBuilder, QueryBuilder};
use crate::schema::TableDefinition;
use crate::Result;

fn default_if_not_exists() -> bool {
    true
}

/// Planner configuration
///
/// Loadable from JSON, e.g. `{"existingTables": ["users"], "ifNotExists": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPlannerOptions {
    /// Tables already present in the database, compared case-insensitively
    #[serde(default)]
    pub existing_tables: Vec<String>,
    /// Render pending statements with `IF NOT EXISTS`
    #[serde(default = "default_if_not_exists")]
    pub if_not_exists: bool,
}

impl Default for MigrationPlannerOptions {
    fn default() -> Self {
        Self {
            existing_tables: Vec::new(),
            if_not_exists: default_if_not_exists(),
        }
    }
}

impl MigrationPlannerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn existing_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_tables = tables.into_iter().map(Into::into).collect();
        self
    }

    pub fn if_not_exists(mut self, enabled: bool) -> Self {
        self.if_not_exists = enabled;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A CREATE TABLE statement that still needs to run
#[derive(Debug, Clone)]
pub struct PendingMigration {
    pub table: String,
    pub statement: String,
    pub builder: CreateTableBuilder,
}

/// Outcome of planning a schema against the existing tables
#[derive(Debug, Clone, Default)]
pub struct MigrationPlan {
    /// Statements to run, in definition order
    pub pending: Vec<PendingMigration>,
    /// Definitions that already exist, with their declared spelling
    pub skipped: Vec<String>,
    /// Lower-cased, de-duplicated existing table names
    pub existing: Vec<String>,
}

impl MigrationPlan {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The pending statements, in order
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(|m| m.statement.as_str())
    }
}

/// Determine which CREATE TABLE statements the definitions still need
///
/// Fails if a pending definition cannot be rendered.
pub fn plan_migrations(
    definitions: &[TableDefinition],
    options: &MigrationPlannerOptions,
) -> Result<MigrationPlan> {
    let mut existing: Vec<String> = Vec::new();
    for table in &options.existing_tables {
        let name = table.to_lowercase();
        if !existing.contains(&name) {
            existing.push(name);
        }
    }

    let mut plan = MigrationPlan::default();
    for definition in definitions {
        if existing.contains(&definition.name.to_lowercase()) {
            tracing::debug!(table = %definition.name, "table exists, skipping");
            plan.skipped.push(definition.name.clone());
            continue;
        }

        let mut builder = CreateTableBuilder::new(definition);
        if options.if_not_exists {
            builder = builder.if_not_exists();
        }
        plan.pending.push(PendingMigration {
            table: definition.name.clone(),
            statement: builder.build()?,
            builder,
        });
    }
    plan.existing = existing;

    tracing::info!(
        pending = plan.pending.len(),
        skipped = plan.skipped.len(),
        "planned migrations"
    );
    Ok(plan)
}

/// A set of table definitions that can be planned together
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: Vec<TableDefinition>,
}

impl Database {
    pub fn new<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = TableDefinition>,
    {
        Self {
            tables: tables.into_iter().collect(),
        }
    }

    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    pub fn plan(&self, options: &MigrationPlannerOptions) -> Result<MigrationPlan> {
        plan_migrations(&self.tables, options)
    }
}

/// Capture table definitions for planning
pub fn define_database<I>(tables: I) -> Database
where
    I: IntoIterator<Item = TableDefinition>,
{
    Database::new(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{column, ColumnOptions};
    use crate::Error;

    fn table(name: &str) -> TableDefinition {
        TableDefinition::new(name)
            .column("id", column::integer(ColumnOptions::new().primary_key()))
    }

    #[test]
    fn test_plan_skips_existing_tables() {
        let database = define_database([table("users"), table("posts")]);
        let options = MigrationPlannerOptions::new().existing_tables(["users"]);
        let plan = database.plan(&options).unwrap();

        assert_eq!(plan.skipped, vec!["users"]);
        assert_eq!(plan.pending.len(), 1);
        assert_eq!(plan.pending[0].table, "posts");
        assert!(plan.pending[0]
            .statement
            .contains("CREATE TABLE IF NOT EXISTS posts"));
    }

    #[test]
    fn test_existing_names_are_normalized() {
        let options =
            MigrationPlannerOptions::new().existing_tables(["USERS", "users", "Posts"]);
        let plan = plan_migrations(&[table("Users"), table("comments")], &options).unwrap();

        assert_eq!(plan.existing, vec!["users", "posts"]);
        assert_eq!(plan.skipped, vec!["Users"]);
        assert_eq!(plan.statements().collect::<Vec<_>>().len(), 1);
    }

    #[test]
    fn test_if_not_exists_can_be_disabled() {
        let options = MigrationPlannerOptions::new().if_not_exists(false);
        let plan = plan_migrations(&[table("users")], &options).unwrap();
        assert!(plan.pending[0].statement.starts_with("CREATE TABLE users ("));
        assert_eq!(
            plan.pending[0].builder.build().unwrap(),
            plan.pending[0].statement
        );
    }

    #[test]
    fn test_nothing_pending_when_all_exist() {
        let options = MigrationPlannerOptions::new().existing_tables(["users"]);
        let plan = plan_migrations(&[table("users")], &options).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_pending_table_without_columns_fails() {
        let result = plan_migrations(
            &[TableDefinition::new("empty")],
            &MigrationPlannerOptions::default(),
        );
        assert!(matches!(result, Err(Error::MissingColumns { .. })));
    }

    #[test]
    fn test_options_from_json() {
        let options =
            MigrationPlannerOptions::from_json(r#"{"existingTables": ["users"]}"#).unwrap();
        assert_eq!(options.existing_tables, vec!["users"]);
        assert!(options.if_not_exists);

        let options = MigrationPlannerOptions::from_json(r#"{"ifNotExists": false}"#).unwrap();
        assert!(options.existing_tables.is_empty());
        assert!(!options.if_not_exists);

        assert!(matches!(
            MigrationPlannerOptions::from_json("{"),
            Err(Error::Serialization(_))
        ));
    }
}
