pub mod migration;
pub use migration::{Batch, Created, Direction, Migration, Plan, Runner};

pub use shale_core::{
    async_trait,
    driver::{self, Connection, Dialect, Response},
    schema::{self, Column, ColumnType, DefaultValue, ForeignKey, Index, PrimaryKey, Table},
    Error, Result,
};

pub use shale_sql::QueryBuilder;
