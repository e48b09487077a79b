pub mod database;
pub mod query_builder;
