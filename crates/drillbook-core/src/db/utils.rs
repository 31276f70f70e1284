//! Row decoding helpers shared by the query files.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};
use serde::de::DeserializeOwned;

/// Reads an RFC 3339 timestamp column.
pub(crate) fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads a JSON text column into `T`.
pub(crate) fn json_column<T: DeserializeOwned>(row: &Row, index: usize) -> rusqlite::Result<T> {
    let text: String = row.get(index)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads an INTEGER id column.
pub(crate) fn id_column(row: &Row, index: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(index)? as u64)
}
