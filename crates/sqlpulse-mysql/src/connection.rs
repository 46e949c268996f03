//! [`MetricSource`] over a borrowed `mysql_async` connection.
//!
//! Queries run as prepared statements (binary protocol), so integer
//! aggregates like `COUNT(*)` arrive typed instead of as text. The
//! cursor wraps the driver's `QueryResult`; dropping it mid-result is
//! safe — `mysql_async` drains the remainder before the connection is
//! reused.

use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use tracing::debug;

use sqlpulse_core::{MetricSource, Row, RowCursor, RowValue, ScrapeError};

/// A one-cycle borrow of a live, already-authenticated connection.
///
/// The source never closes, retains, or re-authenticates the connection;
/// pooling and deadlines belong to the driver that owns it.
pub struct MysqlSource<'a> {
    conn: &'a mut mysql_async::Conn,
}

impl<'a> MysqlSource<'a> {
    pub fn new(conn: &'a mut mysql_async::Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl MetricSource for MysqlSource<'_> {
    async fn query<'a>(
        &'a mut self,
        sql: &str,
    ) -> Result<Box<dyn RowCursor + Send + 'a>, ScrapeError> {
        debug!(sql, "issuing introspection query");
        let result = self
            .conn
            .exec_iter(sql.to_owned(), ())
            .await
            .map_err(|e| ScrapeError::Query(e.to_string()))?;
        Ok(Box::new(MysqlCursor { result }))
    }
}

struct MysqlCursor<'a> {
    result: mysql_async::QueryResult<'a, 'static, mysql_async::BinaryProtocol>,
}

#[async_trait]
impl RowCursor for MysqlCursor<'_> {
    async fn next_row(&mut self) -> Result<Option<Row>, ScrapeError> {
        let row = self
            .result
            .next()
            .await
            .map_err(|e| ScrapeError::Query(e.to_string()))?;
        row.map(convert_row).transpose()
    }
}

fn convert_row(mut row: mysql_async::Row) -> Result<Row, ScrapeError> {
    let mut values = Vec::with_capacity(row.len());
    for column in 0..row.len() {
        let value = row
            .take::<mysql_async::Value, _>(column)
            .ok_or_else(|| ScrapeError::Decode {
                column,
                reason: "missing column value".to_owned(),
            })?;
        values.push(convert_value(value, column)?);
    }
    Ok(Row::new(values))
}

fn convert_value(value: mysql_async::Value, column: usize) -> Result<RowValue, ScrapeError> {
    use mysql_async::Value;

    match value {
        Value::NULL => Ok(RowValue::Null),
        Value::Bytes(bytes) => String::from_utf8(bytes).map(RowValue::Text).map_err(|_| {
            ScrapeError::Decode {
                column,
                reason: "text column holds non-utf8 bytes".to_owned(),
            }
        }),
        Value::Int(v) => Ok(RowValue::Signed(v)),
        Value::UInt(v) => Ok(RowValue::Unsigned(v)),
        Value::Float(v) => Ok(RowValue::Double(v.into())),
        Value::Double(v) => Ok(RowValue::Double(v)),
        Value::Date(..) | Value::Time(..) => Err(ScrapeError::Decode {
            column,
            reason: "unsupported temporal column".to_owned(),
        }),
    }
}
