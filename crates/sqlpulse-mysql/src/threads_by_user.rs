//! Scrape `performance_schema.threads` grouped by user.

use async_trait::async_trait;

use sqlpulse_core::{MetricDescriptor, MetricSink, MetricSource, ScrapeError, Scraper};

use crate::{NAMESPACE, PERFORMANCE_SCHEMA};

const THREADS_BY_USER_QUERY: &str = r"
    SELECT processlist_user, COUNT(*)
        FROM performance_schema.threads
        WHERE processlist_user IS NOT NULL GROUP BY processlist_user";

/// Counts live server threads per owning user.
///
/// Emits one `mysql_perf_schema_thread_by_user{user=...}` counter per
/// distinct `processlist_user`. Label values are unique within a cycle —
/// the query groups by the label column.
pub struct ThreadsByUser {
    descriptor: MetricDescriptor,
}

impl ThreadsByUser {
    pub fn new() -> Self {
        Self {
            descriptor: MetricDescriptor::new(
                NAMESPACE,
                PERFORMANCE_SCHEMA,
                "thread_by_user",
                "The number of threads by user.",
                &["user"],
            ),
        }
    }
}

impl Default for ThreadsByUser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scraper for ThreadsByUser {
    fn name(&self) -> &'static str {
        "perf_schema.thread_by_user"
    }

    fn help(&self) -> &'static str {
        "Collect metrics from performance_schema.threads by user"
    }

    async fn scrape(
        &self,
        source: &mut dyn MetricSource,
        sink: &MetricSink,
    ) -> Result<(), ScrapeError> {
        let mut rows = source.query(THREADS_BY_USER_QUERY).await?;
        while let Some(row) = rows.next_row().await? {
            let user = row.text(0)?;
            let count = row.unsigned(1)?;
            sink.emit(self.descriptor.counter(count as f64, vec![user.to_owned()]));
        }
        Ok(())
    }
}
