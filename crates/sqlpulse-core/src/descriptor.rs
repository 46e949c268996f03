//! Metric descriptors — the immutable identity of a metric.
//!
//! A descriptor fixes a metric's fully-qualified name, help text, and
//! ordered label schema once, at unit construction. It is never mutated
//! afterwards and is shared read-only by every scrape invocation.

use std::sync::Arc;

use crate::observe::{MetricKind, Observation};

#[derive(Debug, PartialEq, Eq)]
struct DescriptorInner {
    fq_name: String,
    help: String,
    labels: Vec<String>,
}

/// Immutable identity and shape of one metric.
///
/// Cloning is cheap (shared inner); two descriptors compare equal when
/// their name, help, and label schema are identical, so repeated scrapes
/// of the same unit always emit against an equal descriptor.
#[derive(Debug, Clone)]
pub struct MetricDescriptor {
    inner: Arc<DescriptorInner>,
}

impl PartialEq for MetricDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for MetricDescriptor {}

impl MetricDescriptor {
    /// Create a descriptor.
    ///
    /// The fully-qualified name is `namespace_subsystem_name` with empty
    /// parts skipped. Construction never fails for non-empty ASCII-safe
    /// name inputs; passing garbage here is a programmer error, not a
    /// runtime condition.
    pub fn new(
        namespace: &str,
        subsystem: &str,
        name: &str,
        help: &str,
        labels: &[&str],
    ) -> Self {
        Self {
            inner: Arc::new(DescriptorInner {
                fq_name: build_fq_name(namespace, subsystem, name),
                help: help.to_owned(),
                labels: labels.iter().map(|l| (*l).to_owned()).collect(),
            }),
        }
    }

    /// The fully-qualified metric name.
    pub fn fq_name(&self) -> &str {
        &self.inner.fq_name
    }

    /// One-line help text.
    pub fn help(&self) -> &str {
        &self.inner.help
    }

    /// Ordered label names.
    pub fn labels(&self) -> &[String] {
        &self.inner.labels
    }

    /// Build a monotonic counter observation against this descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `label_values` does not match the descriptor's label
    /// count — cardinality and order are fixed for the descriptor's
    /// lifetime, so a mismatch is a bug in the scrape unit.
    pub fn counter(&self, value: f64, label_values: Vec<String>) -> Observation {
        self.observation(MetricKind::Counter, value, label_values)
    }

    /// Build a gauge observation against this descriptor.
    ///
    /// # Panics
    ///
    /// Panics on label cardinality mismatch, same as [`Self::counter`].
    pub fn gauge(&self, value: f64, label_values: Vec<String>) -> Observation {
        self.observation(MetricKind::Gauge, value, label_values)
    }

    fn observation(
        &self,
        kind: MetricKind,
        value: f64,
        label_values: Vec<String>,
    ) -> Observation {
        assert_eq!(
            label_values.len(),
            self.inner.labels.len(),
            "label value count must match descriptor {}",
            self.inner.fq_name,
        );
        Observation {
            descriptor: self.clone(),
            kind,
            value,
            label_values,
        }
    }
}

/// Join non-empty name parts with underscores.
fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}
