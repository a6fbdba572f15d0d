//! Statement builder module

pub mod common;
pub mod create_table;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

// Re-export types from submodules
pub use common::{
    IntoColumns, IntoUpdateData, IntoValues, OrderByClause, QueryBuilder, SortDirection,
};
pub use create_table::CreateTableBuilder;
pub use delete::DeleteBuilder;
pub use insert::{InsertBuilder, InsertColumnsBuilder, InsertValuesBuilder};
pub use select::SelectBuilder;
pub use update::{UpdateBuilder, UpdateSetBuilder};
