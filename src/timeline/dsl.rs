use crate::foundation::error::TracelaneResult;
use crate::timeline::model::{Interval, Snapshot, Timeline};

/// Builder for assembling [`Timeline`] documents in code.
///
/// Append intervals in pre-order (a parent before its children) to get the
/// same row layout a flattened tree would produce.
pub struct TimelineBuilder {
    total_duration_ms: f64,
    intervals: Vec<Interval>,
    snapshots: Vec<Snapshot>,
}

impl TimelineBuilder {
    /// Start a document covering `total_duration_ms` of trace time.
    pub fn new(total_duration_ms: f64) -> Self {
        Self {
            total_duration_ms,
            intervals: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// Append a root interval.
    pub fn interval(mut self, id: impl Into<String>, start_offset_ms: f64, duration_ms: f64) -> Self {
        self.intervals.push(Interval {
            id: id.into(),
            start_offset_ms,
            duration_ms,
            parent_id: None,
        });
        self
    }

    /// Append an interval nested under `parent`.
    pub fn child_interval(
        mut self,
        id: impl Into<String>,
        start_offset_ms: f64,
        duration_ms: f64,
        parent: impl Into<String>,
    ) -> Self {
        self.intervals.push(Interval {
            id: id.into(),
            start_offset_ms,
            duration_ms,
            parent_id: Some(parent.into()),
        });
        self
    }

    /// Append a snapshot with no payload.
    pub fn snapshot(self, timestamp_ms: f64) -> Self {
        self.snapshot_with_data(timestamp_ms, serde_json::Value::Null)
    }

    /// Append a snapshot carrying an opaque payload.
    pub fn snapshot_with_data(mut self, timestamp_ms: f64, data: serde_json::Value) -> Self {
        self.snapshots.push(Snapshot { timestamp_ms, data });
        self
    }

    /// Validate and produce the document.
    pub fn build(self) -> TracelaneResult<Timeline> {
        let timeline = Timeline {
            total_duration_ms: self.total_duration_ms,
            intervals: self.intervals,
            snapshots: self.snapshots,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
