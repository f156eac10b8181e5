//! Provides database interaction functionalities.
//!
//! The menus talk to the database only through the [`Repository`] trait. The MySQL
//! implementation lives in the `mysql` submodule; `statements`, `rows` and `schema`
//! hold the SQL builders, result decoding and DDL it relies on.

mod mysql;
mod rows;
pub mod schema;
mod statements;

pub use mysql::*;

use crate::error::Result;
use crate::models::{Entity, PreparedQuery, QueryResult, Value};

/// Storage operations behind every menu action.
#[allow(async_fn_in_trait)]
pub trait Repository {
    /// Creates any missing tables.
    async fn init_schema(&self) -> Result<()>;

    /// Catalogue tables not present in the connected database.
    async fn missing_tables(&self) -> Result<Vec<&'static str>>;

    /// `SELECT COUNT(*) FROM <table> WHERE <column> = ?` > 0.
    async fn record_exists(&self, entity: Entity, column: &str, value: &Value) -> Result<bool>;

    /// Inserts one row and returns its generated key.
    async fn insert(&self, entity: Entity, values: &[(&'static str, Value)]) -> Result<u64>;

    async fn fetch_all(&self, entity: Entity) -> Result<QueryResult>;

    async fn fetch_by_key(&self, entity: Entity, id: i64) -> Result<QueryResult>;

    /// Updates one column of one row, returning the number of rows affected.
    async fn update(&self, entity: Entity, id: i64, column: &str, value: &Value) -> Result<u64>;

    /// Deletes one row by key, returning the number of rows affected.
    async fn delete(&self, entity: Entity, id: i64) -> Result<u64>;

    /// Runs an analytical query.
    async fn run_query(&self, query: &PreparedQuery) -> Result<QueryResult>;
}
