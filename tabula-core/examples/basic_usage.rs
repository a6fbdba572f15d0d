use tabula_core::schema::{column, ColumnOptions};
use tabula_core::{
    col, create_table, define_database, delete_from, insert, select, update,
    MigrationPlannerOptions, QueryBuilder, TableDefinition, Value,
};

fn main() -> tabula_core::Result<()> {
    // Schema
    let users = TableDefinition::new("users")
        .column(
            "id",
            column::integer(ColumnOptions::new().primary_key().auto_increment()),
        )
        .column("name", column::text(ColumnOptions::new()))
        .column("email", column::varchar(255, ColumnOptions::new().unique()))
        .column("active", column::boolean(ColumnOptions::new().default_value(true)))
        .column(
            "created_at",
            column::timestamp(ColumnOptions::new().default_raw("CURRENT_TIMESTAMP")),
        );
    let posts = TableDefinition::new("posts")
        .column("id", column::integer(ColumnOptions::new().primary_key()))
        .column(
            "user_id",
            column::integer(ColumnOptions::new().references("users", "id")),
        )
        .column("published", column::boolean(ColumnOptions::new()));

    let create_users = create_table(&users).if_not_exists();
    println!(
        "CREATE SQL for {} ({} columns):\n{}",
        create_users.definition().name,
        create_users.definition().columns.len(),
        create_users.build()?
    );

    // SELECT, checked against the users columns
    let select_query = select(&users)
        .columns(("id", "name"))
        .where_with(|c| c.col("active").eq(true))
        .or_where(col("name").eq("O'Brien"))
        .order_by_desc("created_at")
        .limit(10)
        .offset(5);
    println!("SELECT SQL: {}", select_query.build()?);

    // Unknown columns are caught at build time
    if let Err(err) = select(&users).columns("nickname").build() {
        println!("Rejected: {}", err);
    }

    // INSERT
    let insert_query = insert(&users)
        .columns(("name", "email"))
        .values(("John Doe", "john.doe@example.com"));
    println!("INSERT SQL: {}", insert_query.build()?);

    // UPDATE
    let update_query = update("users")
        .set([("active", Value::from(false)), ("name", Value::Null)])
        .where_with(|c| c.col("id").eq(1));
    println!("UPDATE SQL: {}", update_query.build()?);

    // DELETE
    let delete_query = delete_from(&posts).where_with(|c| c.col("published").eq(false));
    println!("DELETE SQL: {}", delete_query.build()?);

    // Migration plan
    let options = MigrationPlannerOptions::from_json(r#"{"existingTables": ["USERS"]}"#)?;
    let database = define_database([users, posts]);
    let names: Vec<&str> = database.tables().iter().map(|t| t.name.as_str()).collect();
    println!("Schema tables: {:?}", names);
    let plan = database.plan(&options)?;
    println!("Skipped: {:?}", plan.skipped);
    for statement in plan.statements() {
        println!("Pending:\n{}", statement);
    }

    Ok(())
}
