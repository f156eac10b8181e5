//! SQL text for the generic CRUD engine.
//!
//! Table and column names come from the static catalogue only; every value is a `?`
//! placeholder bound later.

use crate::models::EntitySpec;

pub fn insert(spec: &EntitySpec, columns: &[&str]) -> String {
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        spec.table,
        columns.join(", "),
        placeholders
    )
}

pub fn select_all(spec: &EntitySpec) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        spec.columns().join(", "),
        spec.table,
        spec.key
    )
}

pub fn select_by_key(spec: &EntitySpec) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        spec.columns().join(", "),
        spec.table,
        spec.key
    )
}

pub fn update(spec: &EntitySpec, column: &str) -> String {
    format!("UPDATE {} SET {} = ? WHERE {} = ?", spec.table, column, spec.key)
}

pub fn delete(spec: &EntitySpec) -> String {
    format!("DELETE FROM {} WHERE {} = ?", spec.table, spec.key)
}

/// The generic existence check: `SELECT COUNT(*) ... WHERE <column> = ?`.
pub fn count_where(spec: &EntitySpec, column: &str) -> String {
    format!("SELECT COUNT(*) FROM {} WHERE {} = ?", spec.table, column)
}
