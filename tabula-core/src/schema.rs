//! Table and column definitions for CREATE TABLE rendering
//!
//! Definitions can be declared in code with the [`column`] helpers or loaded
//! from JSON:
//!
//! ```
//! use tabula_core::TableDefinition;
//!
//! let users = TableDefinition::from_json(r#"{
//!     "name": "users",
//!     "columns": {
//!         "id": { "sqlType": "INTEGER", "primaryKey": true, "autoIncrement": true },
//!         "email": { "sqlType": "VARCHAR(255)", "unique": true }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(users.column_names(), vec!["id", "email"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Result, TableHandle, Value};

/// A raw SQL fragment used as a column default, emitted verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDefault {
    pub raw: String,
}

/// Default value of a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnDefault {
    /// Unescaped SQL, e.g. `CURRENT_TIMESTAMP`
    Raw(RawDefault),
    /// A literal rendered and escaped like any other value
    Value(Value),
}

impl ColumnDefault {
    pub fn raw(sql: impl Into<String>) -> Self {
        ColumnDefault::Raw(RawDefault { raw: sql.into() })
    }

    pub fn value(value: impl Into<Value>) -> Self {
        ColumnDefault::Value(value.into())
    }
}

/// Foreign-key target of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub table: String,
    pub column: String,
}

/// Options accepted by the [`column`] helpers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnOptions {
    pub nullable: bool,
    pub default: Option<ColumnDefault>,
    pub primary_key: bool,
    pub unique: bool,
    pub auto_increment: bool,
    pub references: Option<Reference>,
}

impl ColumnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Literal default, quoted and escaped when rendered
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(ColumnDefault::value(value));
        self
    }

    /// Raw SQL default, emitted as is
    pub fn default_raw(mut self, sql: impl Into<String>) -> Self {
        self.default = Some(ColumnDefault::raw(sql));
        self
    }

    pub fn references(mut self, table: &str, column: &str) -> Self {
        self.references = Some(Reference {
            table: table.to_string(),
            column: column.to_string(),
        });
        self
    }
}

/// A normalized column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub sql_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ColumnDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Reference>,
}

impl ColumnDefinition {
    pub fn new(sql_type: impl Into<String>, options: ColumnOptions) -> Self {
        Self {
            sql_type: sql_type.into(),
            nullable: options.nullable,
            primary_key: options.primary_key,
            unique: options.unique,
            auto_increment: options.auto_increment,
            default: options.default,
            references: options.references,
        }
    }
}

/// Column declaration helpers
///
/// # Examples
/// ```
/// use tabula_core::schema::{column, ColumnOptions};
///
/// let id = column::integer(ColumnOptions::new().primary_key().auto_increment());
/// let email = column::varchar(255, ColumnOptions::new().unique());
/// assert_eq!(email.sql_type, "VARCHAR(255)");
/// ```
pub mod column {
    use super::{ColumnDefinition, ColumnOptions};

    pub fn integer(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("INTEGER", options)
    }

    pub fn big_integer(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("BIGINT", options)
    }

    pub fn text(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("TEXT", options)
    }

    pub fn boolean(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("BOOLEAN", options)
    }

    pub fn timestamp(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("TIMESTAMP", options)
    }

    pub fn json(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("JSON", options)
    }

    pub fn uuid(options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new("UUID", options)
    }

    pub fn varchar(length: u32, options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new(format!("VARCHAR({})", length), options)
    }

    pub fn custom(sql_type: &str, options: ColumnOptions) -> ColumnDefinition {
        ColumnDefinition::new(sql_type, options)
    }
}

/// A table name plus its columns in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    #[serde(with = "ordered_columns")]
    pub columns: Vec<(String, ColumnDefinition)>,
}

impl TableDefinition {
    /// Create a definition without columns
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn column(mut self, name: &str, definition: ColumnDefinition) -> Self {
        self.columns.push((name.to_string(), definition));
        self
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Load a definition from JSON, keeping the column order of the document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Create a table definition bound to a handle's name
pub fn define_table_schema<T, I>(table: T, columns: I) -> TableDefinition
where
    T: Into<TableHandle>,
    I: IntoIterator<Item = (&'static str, ColumnDefinition)>,
{
    let handle = table.into();
    columns
        .into_iter()
        .fold(TableDefinition::new(handle.name()), |definition, (name, column)| {
            definition.column(name, column)
        })
}

// Columns are a JSON object on the wire; serde_json's default map would sort them
mod ordered_columns {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::ColumnDefinition;

    pub fn serialize<S>(
        columns: &[(String, ColumnDefinition)],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (name, definition) in columns {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, ColumnDefinition)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColumnsVisitor;

        impl<'de> Visitor<'de> for ColumnsVisitor {
            type Value = Vec<(String, ColumnDefinition)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to column definitions")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut columns: Self::Value = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, definition)) = access.next_entry()? {
                    columns.push((name, definition));
                }
                Ok(columns)
            }
        }

        deserializer.deserialize_map(ColumnsVisitor)
    }
}
