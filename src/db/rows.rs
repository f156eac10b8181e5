//! Turns arbitrary MySQL result rows into display strings.
//!
//! Reads and reports return whatever columns their SQL selects, so cells are decoded
//! by the column type MySQL reports rather than through a fixed `FromRow` struct.

use crate::error::Result;
use crate::models::QueryResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::types::Decimal;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Builds a [`QueryResult`] from fetched rows.
///
/// `fallback_columns` names the columns when no row came back (nothing to inspect).
pub fn to_query_result(rows: &[MySqlRow], fallback_columns: &[&str]) -> Result<QueryResult> {
    let columns = match rows.first() {
        Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
        None => fallback_columns.iter().map(|c| c.to_string()).collect(),
    };

    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        let mut values = Vec::with_capacity(row.len());
        for index in 0..row.len() {
            values.push(decode_cell(row, index)?);
        }
        cells.push(values);
    }

    Ok(QueryResult::new(columns, cells))
}

/// Decodes one cell to text, `None` for SQL NULL.
fn decode_cell(row: &MySqlRow, index: usize) -> Result<Option<String>> {
    let type_name = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(None);
        }
        raw.type_info().name().to_string()
    };

    // Unchecked gets: the type was just read off the column, and integer widths vary
    // (COUNT(*) is BIGINT, YEAR() is INT, keys are INT).
    let text = match type_name.as_str() {
        name if name.ends_with("UNSIGNED") => row.try_get_unchecked::<u64, _>(index)?.to_string(),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            row.try_get_unchecked::<i64, _>(index)?.to_string()
        },
        "BOOLEAN" => row.try_get_unchecked::<bool, _>(index)?.to_string(),
        "DECIMAL" => row.try_get_unchecked::<Decimal, _>(index)?.to_string(),
        "FLOAT" => row.try_get_unchecked::<f32, _>(index)?.to_string(),
        "DOUBLE" => row.try_get_unchecked::<f64, _>(index)?.to_string(),
        "DATE" => row
            .try_get_unchecked::<NaiveDate, _>(index)?
            .format("%Y-%m-%d")
            .to_string(),
        "DATETIME" => row
            .try_get_unchecked::<NaiveDateTime, _>(index)?
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        "TIMESTAMP" => row
            .try_get_unchecked::<DateTime<Utc>, _>(index)?
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        "TIME" => row.try_get_unchecked::<NaiveTime, _>(index)?.to_string(),
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
            String::from_utf8_lossy(&bytes).into_owned()
        },
        _ => row.try_get_unchecked::<String, _>(index)?,
    };

    Ok(Some(text))
}
