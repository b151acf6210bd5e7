use crate::viewport::view::Viewport;

/// Inclusive-start, exclusive-end time range in milliseconds.
///
/// `TimeRange` is the raw range currency shared by the viewport and the
/// filmstrip sampler. A degenerate range (`end_ms <= start_ms`) is a valid
/// value with no positive extent; callers that need an error instead go
/// through [`crate::Timeline::validate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    /// Range start in milliseconds.
    pub start_ms: f64,
    /// Range end in milliseconds.
    pub end_ms: f64,
}

impl TimeRange {
    /// Build a range without normalization.
    pub fn new(start_ms: f64, end_ms: f64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Range length in milliseconds (negative when inverted).
    pub fn duration_ms(self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// True when the range has no positive extent.
    pub fn is_degenerate(self) -> bool {
        self.end_ms <= self.start_ms
    }

    /// Half-open containment test: `start_ms` is in, `end_ms` is out.
    pub fn contains(self, t_ms: f64) -> bool {
        self.start_ms <= t_ms && t_ms < self.end_ms
    }
}

impl From<Viewport> for TimeRange {
    fn from(viewport: Viewport) -> Self {
        viewport.visible_range()
    }
}
