//! Table handles used to bind builders to a table

use crate::schema::TableDefinition;
use crate::{Error, Result};

/// Reference to a table by name, optionally carrying its known columns
///
/// When the columns are known, builders reject references to any other
/// column at `build()` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHandle {
    name: String,
    columns: Option<Vec<String>>,
}

impl TableHandle {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: None,
        }
    }

    /// Attach the set of columns this table is known to have
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// Check that `column` belongs to this table
    ///
    /// Always succeeds for handles without a known column list.
    pub fn check_column(&self, column: &str) -> Result<()> {
        match &self.columns {
            Some(known) if !known.iter().any(|c| c == column) => {
                Err(Error::column_not_found(&self.name, column))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn check_columns<'a, I>(&self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        columns
            .into_iter()
            .try_for_each(|column| self.check_column(column))
    }
}

/// Create a name-only table handle
pub fn table_ref(name: &str) -> TableHandle {
    TableHandle::new(name)
}

impl From<&str> for TableHandle {
    fn from(name: &str) -> Self {
        TableHandle::new(name)
    }
}

impl From<String> for TableHandle {
    fn from(name: String) -> Self {
        Self {
            name,
            columns: None,
        }
    }
}

impl From<&TableHandle> for TableHandle {
    fn from(handle: &TableHandle) -> Self {
        handle.clone()
    }
}

impl From<&TableDefinition> for TableHandle {
    fn from(definition: &TableDefinition) -> Self {
        TableHandle::new(&definition.name).with_columns(definition.column_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{column, ColumnOptions};

    #[test]
    fn test_name_only_handle_accepts_any_column() {
        let handle = table_ref("users");
        assert_eq!(handle.name(), "users");
        assert!(handle.columns().is_none());
        assert!(handle.check_column("anything").is_ok());
    }

    #[test]
    fn test_known_columns_are_checked() {
        let handle = table_ref("users").with_columns(["id", "name"]);
        assert!(handle.check_column("id").is_ok());

        let err = handle.check_column("email").unwrap_err();
        assert_eq!(err.to_string(), "Column 'email' not found in table 'users'");

        assert!(handle.check_columns(["id", "name"]).is_ok());
        assert!(handle.check_columns(["id", "nope"]).is_err());
    }

    #[test]
    fn test_handle_from_definition() {
        let definition = TableDefinition::new("posts")
            .column("id", column::integer(ColumnOptions::new()))
            .column("title", column::text(ColumnOptions::new()));
        let handle = TableHandle::from(&definition);
        assert_eq!(handle.name(), "posts");
        assert_eq!(
            handle.columns(),
            Some(&["id".to_string(), "title".to_string()][..])
        );
    }
}
