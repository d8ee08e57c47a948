pub mod account;
pub mod profile;
pub mod report;
pub mod space;

use noya_types::{Timestamp, parse_timestamp};
use rusqlite::Row;
use rusqlite::types::Type;

/// LIKE pattern matching ids that start with `prefix` literally.
///
/// Use with `ESCAPE '\'`.
pub(crate) fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Read a required RFC 3339 timestamp column.
pub(crate) fn ts_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

/// Read a nullable RFC 3339 timestamp column.
pub(crate) fn opt_ts_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Timestamp>> {
    match row.get::<_, Option<String>>(idx)? {
        Some(raw) => parse_timestamp(&raw).map(Some).map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
        }),
        None => Ok(None),
    }
}
