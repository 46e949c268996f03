//! Metric observations and the delivery sink.

use tokio::sync::mpsc;

use crate::descriptor::MetricDescriptor;

/// How a metric value behaves over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Monotonically increasing value.
    Counter,
    /// Value that can go up or down.
    Gauge,
}

/// One emitted data point: descriptor, kind, value, and ordered label
/// values matching the descriptor's label schema.
///
/// Values are `f64`; integer counts above 2^53 lose precision. The
/// collection protocol inherits this from its metric model.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub descriptor: MetricDescriptor,
    pub kind: MetricKind,
    pub value: f64,
    pub label_values: Vec<String>,
}

/// Write-only delivery channel for observations.
///
/// Backed by an unbounded channel, so [`MetricSink::emit`] never blocks
/// and is safe for concurrent writers. If the driver has dropped the
/// receiving end mid-cycle, emissions are silently discarded — the cycle's
/// results are abandoned anyway, and the scrape itself still succeeds.
#[derive(Debug, Clone)]
pub struct MetricSink {
    tx: mpsc::UnboundedSender<Observation>,
}

impl MetricSink {
    /// Create a sink and the receiver the driver drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Observation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Deliver one observation. Never blocks, never fails.
    pub fn emit(&self, observation: Observation) {
        let _ = self.tx.send(observation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_descriptor() -> MetricDescriptor {
        MetricDescriptor::new("ns", "sub", "m", "h", &["user"])
    }

    #[tokio::test]
    async fn emissions_arrive_in_order() {
        let desc = test_descriptor();
        let (sink, mut rx) = MetricSink::channel();

        sink.emit(desc.counter(1.0, vec!["alice".to_owned()]));
        sink.emit(desc.counter(2.0, vec!["bob".to_owned()]));

        assert_eq!(rx.recv().await.unwrap().label_values, ["alice"]);
        assert_eq!(rx.recv().await.unwrap().label_values, ["bob"]);
    }

    #[tokio::test]
    async fn emit_after_receiver_dropped_is_a_no_op() {
        let desc = test_descriptor();
        let (sink, rx) = MetricSink::channel();
        drop(rx);

        // Must neither panic nor block.
        sink.emit(desc.counter(1.0, vec!["alice".to_owned()]));
    }

    #[tokio::test]
    async fn cloned_sinks_share_one_receiver() {
        let desc = test_descriptor();
        let (sink, mut rx) = MetricSink::channel();
        let other = sink.clone();

        sink.emit(desc.counter(1.0, vec!["a".to_owned()]));
        other.emit(desc.counter(2.0, vec!["b".to_owned()]));

        assert_eq!(rx.recv().await.unwrap().value, 1.0);
        assert_eq!(rx.recv().await.unwrap().value, 2.0);
    }
}
