//! SQL text rendering
//!
//! Pure functions turning values, conditions and statement parts into SQL
//! text. The builders call into these from `build()`.

use crate::schema::{ColumnDefault, ColumnDefinition, TableDefinition};
use crate::{Condition, Error, Result, Value};

/// Double every single quote so the text can sit inside a SQL string literal
pub fn escape_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render a value as a SQL literal
///
/// # Examples
/// ```
/// use tabula_core::{render_value, Value};
///
/// assert_eq!(render_value(&Value::from("O'Brien")).unwrap(), "'O''Brien'");
/// assert_eq!(render_value(&Value::from(false)).unwrap(), "false");
/// assert_eq!(render_value(&Value::Null).unwrap(), "NULL");
/// ```
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(format!("'{}'", escape_string(s))),
        Value::I32(n) => Ok(n.to_string()),
        Value::I64(n) => Ok(n.to_string()),
        Value::F32(n) if n.is_finite() => Ok(n.to_string()),
        Value::F64(n) if n.is_finite() => Ok(n.to_string()),
        Value::F32(_) | Value::F64(_) => Err(Error::unsupported_value("non-finite float")),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::Null => Ok("NULL".to_string()),
        Value::Bytes(_) | Value::Array(_) | Value::Json(_) => {
            Err(Error::unsupported_value(value.type_name()))
        }
    }
}

/// Render a condition tree
///
/// Both sides of a logical node are always parenthesized; the tree shape is
/// never flattened.
pub fn render_condition(condition: &Condition) -> Result<String> {
    match condition {
        Condition::Comparison {
            operator,
            column,
            value,
        } => Ok(format!("{} {} {}", column, operator, render_value(value)?)),
        Condition::Logical {
            operator,
            left,
            right,
        } => Ok(format!(
            "({}) {} ({})",
            render_condition(left)?,
            operator,
            render_condition(right)?
        )),
    }
}

/// Render a leading-space WHERE clause, or nothing for an absent condition
pub fn render_where(condition: Option<&Condition>) -> Result<String> {
    match condition {
        Some(condition) => Ok(format!(" WHERE {}", render_condition(condition)?)),
        None => Ok(String::new()),
    }
}

/// Render `INSERT INTO <table> (<columns>) VALUES (<values>)`
pub fn render_insert(table: &str, columns: &[String], values: &[Value]) -> Result<String> {
    let value_list = values
        .iter()
        .map(render_value)
        .collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        value_list.join(", ")
    ))
}

/// Render `UPDATE <table> SET <col> = <val>, ...[ WHERE <cond>]`
pub fn render_update(
    table: &str,
    set_pairs: &[(String, Value)],
    condition: Option<&Condition>,
) -> Result<String> {
    let set_parts = set_pairs
        .iter()
        .map(|(column, value)| Ok(format!("{} = {}", column, render_value(value)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "UPDATE {} SET {}{}",
        table,
        set_parts.join(", "),
        render_where(condition)?
    ))
}

/// Render `DELETE FROM <table>[ WHERE <cond>]`
pub fn render_delete(table: &str, condition: Option<&Condition>) -> Result<String> {
    Ok(format!("DELETE FROM {}{}", table, render_where(condition)?))
}

fn render_default(default: &ColumnDefault) -> Result<String> {
    match default {
        ColumnDefault::Raw(raw) => Ok(raw.raw.clone()),
        ColumnDefault::Value(value) => render_value(value),
    }
}

fn render_column_definition(name: &str, definition: &ColumnDefinition) -> Result<String> {
    let mut parts = vec![name.to_string(), definition.sql_type.clone()];

    // Clause order is part of the output format
    if definition.auto_increment {
        parts.push("AUTOINCREMENT".to_string());
    }
    if !definition.nullable {
        parts.push("NOT NULL".to_string());
    }
    if definition.unique {
        parts.push("UNIQUE".to_string());
    }
    if let Some(default) = &definition.default {
        parts.push(format!("DEFAULT {}", render_default(default)?));
    }
    if let Some(reference) = &definition.references {
        parts.push(format!(
            "REFERENCES {}({})",
            reference.table, reference.column
        ));
    }
    if definition.primary_key {
        parts.push("PRIMARY KEY".to_string());
    }

    Ok(parts.join(" "))
}

/// Render a CREATE TABLE statement, one column per line
pub fn render_create_table(definition: &TableDefinition, if_not_exists: bool) -> Result<String> {
    if definition.columns.is_empty() {
        return Err(Error::missing_columns(&definition.name));
    }

    let body = definition
        .columns
        .iter()
        .map(|(name, column)| Ok(format!("  {}", render_column_definition(name, column)?)))
        .collect::<Result<Vec<_>>>()?;

    let guard = if if_not_exists { " IF NOT EXISTS" } else { "" };
    Ok(format!(
        "CREATE TABLE{} {} (\n{}\n)",
        guard,
        definition.name,
        body.join(",\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{column, ColumnOptions};
    use crate::{and, col, or};

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("it's"), "it''s");
        assert_eq!(escape_string("''"), "''''");
        assert_eq!(escape_string(r#"back\slash "quoted""#), r#"back\slash "quoted""#);
    }

    #[test]
    fn test_render_scalar_values() {
        assert_eq!(render_value(&"John".into()).unwrap(), "'John'");
        assert_eq!(render_value(&42.into()).unwrap(), "42");
        assert_eq!(render_value(&(-7i64).into()).unwrap(), "-7");
        assert_eq!(render_value(&1.5f64.into()).unwrap(), "1.5");
        assert_eq!(render_value(&true.into()).unwrap(), "true");
        assert_eq!(render_value(&Value::Null).unwrap(), "NULL");
    }

    #[test]
    fn test_render_unsupported_values() {
        let err = render_value(&Value::Bytes(vec![0xde, 0xad])).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported value in SQL builder (BYTEA)");

        let err = render_value(&Value::Array(vec![Value::I32(1)])).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue { type_name: "ARRAY" }));

        assert!(render_value(&Value::F64(f64::NAN)).is_err());
        assert!(render_value(&Value::F32(f32::INFINITY)).is_err());
    }

    #[test]
    fn test_render_comparisons() {
        assert_eq!(render_condition(&col("id").eq(1)).unwrap(), "id = 1");
        assert_eq!(render_condition(&col("id").ne(1)).unwrap(), "id != 1");
        assert_eq!(render_condition(&col("age").gt(18)).unwrap(), "age > 18");
        assert_eq!(render_condition(&col("age").gte(18)).unwrap(), "age >= 18");
        assert_eq!(render_condition(&col("age").lt(18)).unwrap(), "age < 18");
        assert_eq!(render_condition(&col("age").lte(18)).unwrap(), "age <= 18");
        assert_eq!(
            render_condition(&col("name").eq("O'Hara")).unwrap(),
            "name = 'O''Hara'"
        );
    }

    #[test]
    fn test_render_logical_always_parenthesized() {
        let a = col("a").eq(1);
        let b = col("b").eq(2);
        let c = col("c").eq(3);

        assert_eq!(
            render_condition(&and(a.clone(), b.clone())).unwrap(),
            "(a = 1) AND (b = 2)"
        );
        assert_eq!(
            render_condition(&and(and(a.clone(), b.clone()), c.clone())).unwrap(),
            "((a = 1) AND (b = 2)) AND (c = 3)"
        );
        assert_eq!(
            render_condition(&or(a, and(b, c))).unwrap(),
            "(a = 1) OR ((b = 2) AND (c = 3))"
        );
    }

    #[test]
    fn test_render_logical_matches_composed_sides() {
        let left = or(col("x").lt(0), col("x").gt(10));
        let right = col("flag").eq(true);
        let expected = format!(
            "({}) AND ({})",
            render_condition(&left).unwrap(),
            render_condition(&right).unwrap()
        );
        assert_eq!(render_condition(&and(left, right)).unwrap(), expected);
    }

    #[test]
    fn test_render_where_absent() {
        assert_eq!(render_where(None).unwrap(), "");
        assert_eq!(
            render_where(Some(&col("id").eq(1))).unwrap(),
            " WHERE id = 1"
        );
    }

    #[test]
    fn test_render_insert() {
        let sql = render_insert(
            "users",
            &["name".to_string(), "age".to_string()],
            &["Ann".into(), 30.into()],
        )
        .unwrap();
        assert_eq!(sql, "INSERT INTO users (name, age) VALUES ('Ann', 30)");
    }

    #[test]
    fn test_render_update_and_delete() {
        let sql = render_update(
            "users",
            &[("active".to_string(), false.into())],
            Some(&col("id").eq(1)),
        )
        .unwrap();
        assert_eq!(sql, "UPDATE users SET active = false WHERE id = 1");

        assert_eq!(render_delete("posts", None).unwrap(), "DELETE FROM posts");
    }

    #[test]
    fn test_render_create_table_clause_order() {
        let definition = TableDefinition::new("accounts")
            .column(
                "owner_id",
                column::integer(
                    ColumnOptions::new()
                        .auto_increment()
                        .unique()
                        .default_value(0)
                        .references("users", "id")
                        .primary_key(),
                ),
            )
            .column(
                "created_at",
                column::timestamp(ColumnOptions::new().nullable().default_raw("CURRENT_TIMESTAMP")),
            );

        let sql = render_create_table(&definition, false).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE accounts (\n  owner_id INTEGER AUTOINCREMENT NOT NULL UNIQUE DEFAULT 0 REFERENCES users(id) PRIMARY KEY,\n  created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP\n)"
        );
    }

    #[test]
    fn test_render_create_table_escapes_literal_default() {
        let definition = TableDefinition::new("notes")
            .column("body", column::text(ColumnOptions::new().default_value("it's")));
        let sql = render_create_table(&definition, true).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS notes (\n  body TEXT NOT NULL DEFAULT 'it''s'\n)"
        );
    }

    #[test]
    fn test_render_create_table_without_columns() {
        let err = render_create_table(&TableDefinition::new("empty"), true).unwrap_err();
        assert!(matches!(err, Error::MissingColumns { ref table } if table == "empty"));
    }
}
