mod query_builder;
pub use query_builder::QueryBuilder;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
