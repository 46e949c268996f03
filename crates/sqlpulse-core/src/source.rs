//! The query seam between scrape units and a live database.
//!
//! A binding crate implements [`MetricSource`] for its connection type
//! and hands rows back through a [`RowCursor`]. The cursor is a scoped
//! resource: dropping it releases the underlying query result, so a unit
//! that returns early on a decode error still leaves the connection
//! clean. Units borrow the source for one call and never retain it.

use async_trait::async_trait;

use crate::error::ScrapeError;

/// One decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Double(f64),
    Null,
}

impl RowValue {
    fn type_name(&self) -> &'static str {
        match self {
            RowValue::Text(_) => "text",
            RowValue::Unsigned(_) => "unsigned integer",
            RowValue::Signed(_) => "signed integer",
            RowValue::Double(_) => "double",
            RowValue::Null => "null",
        }
    }
}

/// A transient result row. Owned only for the duration of one loop
/// iteration; discarded after emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<RowValue>,
}

impl Row {
    pub fn new(values: Vec<RowValue>) -> Self {
        Self { values }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode column `column` as text.
    pub fn text(&self, column: usize) -> Result<&str, ScrapeError> {
        match self.get(column)? {
            RowValue::Text(s) => Ok(s),
            other => Err(Self::mismatch(column, "text", other)),
        }
    }

    /// Decode column `column` as an unsigned integer.
    ///
    /// Non-negative signed values are accepted too: `COUNT(*)` comes back
    /// as a signed BIGINT from most drivers.
    pub fn unsigned(&self, column: usize) -> Result<u64, ScrapeError> {
        match self.get(column)? {
            RowValue::Unsigned(v) => Ok(*v),
            RowValue::Signed(v) if *v >= 0 => Ok(*v as u64),
            other => Err(Self::mismatch(column, "unsigned integer", other)),
        }
    }

    fn get(&self, column: usize) -> Result<&RowValue, ScrapeError> {
        self.values.get(column).ok_or_else(|| ScrapeError::Decode {
            column,
            reason: format!("row has only {} columns", self.values.len()),
        })
    }

    fn mismatch(column: usize, expected: &str, found: &RowValue) -> ScrapeError {
        ScrapeError::Decode {
            column,
            reason: format!("expected {expected}, found {}", found.type_name()),
        }
    }
}

/// A live, already-authenticated connection able to run one read-only
/// statement per call.
#[async_trait]
pub trait MetricSource: Send {
    /// Issue `sql` and return a cursor over its result rows.
    async fn query<'a>(
        &'a mut self,
        sql: &str,
    ) -> Result<Box<dyn RowCursor + Send + 'a>, ScrapeError>;
}

/// Streaming access to the rows of one query result, in arrival order.
///
/// Implementations release the underlying result when dropped, on every
/// exit path.
#[async_trait]
pub trait RowCursor: Send {
    /// Fetch the next row, or `None` once the result is exhausted.
    async fn next_row(&mut self) -> Result<Option<Row>, ScrapeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        Row::new(vec![
            RowValue::Text("alice".to_owned()),
            RowValue::Unsigned(3),
            RowValue::Signed(-2),
            RowValue::Null,
        ])
    }

    #[test]
    fn text_decodes_text_column() {
        assert_eq!(row().text(0).unwrap(), "alice");
    }

    #[test]
    fn unsigned_decodes_unsigned_column() {
        assert_eq!(row().unsigned(1).unwrap(), 3);
    }

    #[test]
    fn unsigned_accepts_non_negative_signed() {
        let row = Row::new(vec![RowValue::Signed(7)]);
        assert_eq!(row.unsigned(0).unwrap(), 7);
    }

    #[test]
    fn unsigned_rejects_negative_signed() {
        let err = row().unsigned(2).unwrap_err();
        match err {
            ScrapeError::Decode { column, reason } => {
                assert_eq!(column, 2);
                assert!(reason.contains("signed integer"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_where_text_expected_names_the_column() {
        let err = row().text(3).unwrap_err();
        match err {
            ScrapeError::Decode { column, reason } => {
                assert_eq!(column, 3);
                assert!(reason.contains("null"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_bounds_column_is_a_decode_error() {
        let err = row().text(9).unwrap_err();
        assert!(matches!(err, ScrapeError::Decode { column: 9, .. }));
    }

    #[test]
    fn mismatched_type_reports_expected_and_found() {
        let err = row().text(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "row decode failed at column 1: expected text, found unsigned integer"
        );
    }
}
