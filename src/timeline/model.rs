use std::collections::HashSet;

use crate::foundation::error::{TracelaneError, TracelaneResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A time-bounded interval on the timeline, optionally nested under a parent.
///
/// Intervals occupy the half-open span `[start_offset_ms, start_offset_ms +
/// duration_ms)`: two intervals whose endpoints merely touch do not overlap,
/// which is what lets adjacent spans share a display row.
pub struct Interval {
    /// Interval identifier (unique within a dataset).
    pub id: String,
    /// Start offset from the timeline epoch in milliseconds.
    pub start_offset_ms: f64,
    /// Interval length in milliseconds.
    #[serde(default)]
    pub duration_ms: f64,
    /// Id of the enclosing interval, when this one is nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Interval {
    /// Exclusive end of the interval in milliseconds.
    pub fn end_ms(&self) -> f64 {
        self.start_offset_ms + self.duration_ms
    }

    /// Half-open overlap test; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end_ms() <= other.start_offset_ms || other.end_ms() <= self.start_offset_ms)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A timestamped snapshot with an opaque payload carried through unchanged.
pub struct Snapshot {
    /// Sample time in milliseconds, on the same basis as interval offsets.
    pub timestamp_ms: f64,
    /// Opaque payload (image reference, page url, ...), never inspected.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete timeline document.
///
/// The document is a pure data model handed over by the upstream event
/// source. It can be built programmatically (see [`crate::TimelineBuilder`])
/// or serialized/deserialized via Serde (JSON).
///
/// Consuming a document is performed by the engine operations:
/// [`crate::pack`], [`crate::Viewport`], [`crate::sample_filmstrip`].
pub struct Timeline {
    /// Full timeline length in milliseconds.
    pub total_duration_ms: f64,
    /// Intervals in pre-order (a parent before its descendants).
    pub intervals: Vec<Interval>,
    /// Periodic snapshots, not necessarily sorted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapshots: Vec<Snapshot>,
}

impl Timeline {
    /// Validate document invariants.
    ///
    /// Rejects non-finite numbers, negative durations, empty or duplicate
    /// interval ids, and self-parenting. A `parent_id` naming an absent
    /// interval is allowed; the packer treats such intervals as roots.
    #[tracing::instrument(skip(self), fields(intervals = self.intervals.len()))]
    pub fn validate(&self) -> TracelaneResult<()> {
        if !self.total_duration_ms.is_finite() || self.total_duration_ms < 0.0 {
            return Err(TracelaneError::validation(
                "total_duration_ms must be finite and >= 0",
            ));
        }

        let mut seen = HashSet::with_capacity(self.intervals.len());
        for interval in &self.intervals {
            if interval.id.trim().is_empty() {
                return Err(TracelaneError::validation("interval id must be non-empty"));
            }
            if !seen.insert(interval.id.as_str()) {
                return Err(TracelaneError::validation(format!(
                    "duplicate interval id '{}'",
                    interval.id
                )));
            }
            if !interval.start_offset_ms.is_finite() {
                return Err(TracelaneError::validation(format!(
                    "interval '{}' start_offset_ms must be finite",
                    interval.id
                )));
            }
            if !interval.duration_ms.is_finite() || interval.duration_ms < 0.0 {
                return Err(TracelaneError::validation(format!(
                    "interval '{}' duration_ms must be finite and >= 0",
                    interval.id
                )));
            }
            if interval.parent_id.as_deref() == Some(interval.id.as_str()) {
                return Err(TracelaneError::validation(format!(
                    "interval '{}' must not be its own parent",
                    interval.id
                )));
            }
        }

        for snapshot in &self.snapshots {
            if !snapshot.timestamp_ms.is_finite() {
                return Err(TracelaneError::validation(
                    "snapshot timestamp_ms must be finite",
                ));
            }
        }

        Ok(())
    }

    /// Parse a timeline document from JSON and validate it.
    pub fn from_json(s: &str) -> TracelaneResult<Self> {
        let timeline: Self =
            serde_json::from_str(s).map_err(|e| TracelaneError::serde(e.to_string()))?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> TracelaneResult<String> {
        serde_json::to_string(self).map_err(|e| TracelaneError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
