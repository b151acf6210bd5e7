use crate::foundation::core::TimeRange;

/// Minimum zoom level (fully zoomed out).
pub const MIN_ZOOM: f64 = 1.0;
/// Maximum zoom level.
pub const MAX_ZOOM: f64 = 100.0;
/// Smallest visible window a zoom-in can reach, in milliseconds.
pub const MIN_VISIBLE_DURATION_MS: f64 = 10.0;
/// Fraction of a target range added on each side by zoom-to-range gestures.
pub const DEFAULT_RANGE_PADDING: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The currently visible sub-range of a fixed-length timeline.
///
/// A `Viewport` is an immutable value: every transform returns a new one,
/// and the invariant `0 <= visible_start_ms <= visible_end_ms <=
/// total_duration_ms` is restored by clamping at the end of every transform.
/// Callers thread one authoritative value through their gesture handlers,
/// treating the last transform's output as the current view.
pub struct Viewport {
    /// Visible window start in milliseconds.
    pub visible_start_ms: f64,
    /// Visible window end in milliseconds.
    pub visible_end_ms: f64,
    /// Full timeline length in milliseconds.
    pub total_duration_ms: f64,
}

impl Viewport {
    /// Fully zoomed-out viewport over `total_duration_ms`.
    ///
    /// Non-finite or negative totals sanitize to zero. Recreate the viewport
    /// whenever the total duration changes.
    pub fn new(total_duration_ms: f64) -> Self {
        let total = if total_duration_ms.is_finite() && total_duration_ms > 0.0 {
            total_duration_ms
        } else {
            0.0
        };
        Self {
            visible_start_ms: 0.0,
            visible_end_ms: total,
            total_duration_ms: total,
        }
    }

    /// Visible window length in milliseconds.
    pub fn visible_duration_ms(self) -> f64 {
        self.visible_end_ms - self.visible_start_ms
    }

    /// The visible window as a [`TimeRange`].
    pub fn visible_range(self) -> TimeRange {
        TimeRange::new(self.visible_start_ms, self.visible_end_ms)
    }

    /// Current zoom level: total duration over visible duration, or `1` when
    /// the visible window is degenerate.
    pub fn zoom_level(self) -> f64 {
        let visible = self.visible_duration_ms();
        if visible <= 0.0 {
            1.0
        } else {
            self.total_duration_ms / visible
        }
    }

    /// True when the whole timeline is visible.
    pub fn is_fully_zoomed_out(self) -> bool {
        self.visible_start_ms <= 0.0 && self.visible_end_ms >= self.total_duration_ms
    }

    /// Zoom while keeping the time under `focal_position` fixed on screen.
    ///
    /// `focal_position` is a view-relative position (0 at the window start,
    /// 1 at the end, clamped into that range). `zoom_delta` scales the
    /// current zoom level by `1 + zoom_delta`, clamped to
    /// `[MIN_ZOOM, MAX_ZOOM]`; the visible window never shrinks below
    /// [`MIN_VISIBLE_DURATION_MS`].
    pub fn zoom(self, focal_position: f64, zoom_delta: f64) -> Self {
        let focal = if focal_position.is_finite() {
            focal_position.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let level = self.zoom_level();
        let scaled = level * (1.0 + zoom_delta);
        let next = if scaled.is_finite() {
            scaled.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            level
        };

        let new_duration = (self.total_duration_ms / next).max(MIN_VISIBLE_DURATION_MS);
        let focal_time_ms = self.visible_start_ms + focal * self.visible_duration_ms();
        let start = focal_time_ms - focal * new_duration;
        Self {
            visible_start_ms: start,
            visible_end_ms: start + new_duration,
            ..self
        }
        .clamped()
    }

    /// Shift the visible window by `delta_ms`, clamped to the timeline.
    pub fn pan(self, delta_ms: f64) -> Self {
        let delta = if delta_ms.is_finite() { delta_ms } else { 0.0 };
        Self {
            visible_start_ms: self.visible_start_ms + delta,
            visible_end_ms: self.visible_end_ms + delta,
            ..self
        }
        .clamped()
    }

    /// Back to fully zoomed out.
    pub fn reset(self) -> Self {
        Self::new(self.total_duration_ms)
    }

    /// Zoom so `[start_ms, end_ms]` fills the window, padded on each side by
    /// `(end_ms - start_ms) * padding` ([`DEFAULT_RANGE_PADDING`] suits
    /// drag-to-zoom and zoom-to-phase gestures). Inverted selections are
    /// normalized before padding.
    pub fn zoom_to_range(self, start_ms: f64, end_ms: f64, padding: f64) -> Self {
        let (lo, hi) = if start_ms <= end_ms {
            (start_ms, end_ms)
        } else {
            (end_ms, start_ms)
        };
        let pad = (hi - lo) * padding;
        Self {
            visible_start_ms: lo - pad,
            visible_end_ms: hi + pad,
            ..self
        }
        .clamped()
    }

    /// View-relative position of `t_ms`: 0 at the window start, 1 at the
    /// end. Returns 0 when the visible duration is non-positive.
    pub fn time_to_viewport_position(self, t_ms: f64) -> f64 {
        let visible = self.visible_duration_ms();
        if visible <= 0.0 {
            0.0
        } else {
            (t_ms - self.visible_start_ms) / visible
        }
    }

    /// Inverse of [`Self::time_to_viewport_position`]. Not clamped:
    /// positions outside `[0, 1]` resolve to times outside the visible
    /// window, which lets callers query slightly past the edges.
    pub fn viewport_position_to_time(self, position: f64) -> f64 {
        self.visible_start_ms + position * self.visible_duration_ms()
    }

    /// Position of `t_ms` relative to the whole timeline: 0 at time 0, 1 at
    /// the total duration. Returns 0 when the total duration is non-positive.
    pub fn time_to_total_position(self, t_ms: f64) -> f64 {
        if self.total_duration_ms <= 0.0 {
            0.0
        } else {
            t_ms / self.total_duration_ms
        }
    }

    /// Strict overlap test between `[start_ms, end_ms]` and the visible
    /// window: open on both sides, so a range that merely touches a window
    /// edge is not visible. This differs from the packer's touching-allowed
    /// convention.
    pub fn is_time_range_visible(self, start_ms: f64, end_ms: f64) -> bool {
        end_ms > self.visible_start_ms && start_ms < self.visible_end_ms
    }

    // Restores the bounds invariant. Order matters: the duration is capped
    // at the total first, then the window is shifted back in range.
    fn clamped(self) -> Self {
        let total = self.total_duration_ms;
        let mut start = if self.visible_start_ms.is_finite() {
            self.visible_start_ms
        } else {
            0.0
        };
        let mut end = if self.visible_end_ms.is_finite() {
            self.visible_end_ms
        } else {
            total
        };

        if end < start {
            end = start;
        }
        if end - start > total {
            end = start + total;
        }
        if start < 0.0 {
            end -= start;
            start = 0.0;
        }
        if end > total {
            start -= end - total;
            end = total;
        }

        Self {
            visible_start_ms: start,
            visible_end_ms: end,
            total_duration_ms: total,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/view.rs"]
mod tests;
