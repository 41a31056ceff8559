//! Column decoding shared by the repositories.

use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, Timestamp};

pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

pub(super) fn percentage(row: &PgRow, name: &str) -> Result<Percentage, DomainError> {
    let raw: i16 = column(row, name)?;
    Percentage::try_new(i64::from(raw)).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Stored {} out of range: {}", name, e),
        )
    })
}

pub(super) fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let raw: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(raw))
}

/// Postgres `LIMIT NULL` means unlimited.
pub(super) fn limit(limit: Option<usize>) -> Option<i64> {
    limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX))
}
