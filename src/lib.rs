//! Tracelane is a timeline layout and viewport engine for trace viewers.
//!
//! Tracelane turns a trace timeline (`Timeline`) into render-ready numbers:
//! display rows for hierarchical intervals, a zoomable/pannable view window
//! over a fixed total duration, and a bounded filmstrip of representative
//! snapshots for the visible range.
//!
//! # Pipeline overview
//!
//! 1. **Model**: parse or build a [`Timeline`] document (intervals + snapshots)
//! 2. **Pack**: `&[Interval] -> RowLayout` (which row each interval renders on)
//! 3. **View**: thread one [`Viewport`] value through user gestures (zoom, pan,
//!    zoom-to-range), treating the last transform's output as the current view
//! 4. **Sample**: [`Viewport::visible_range`] + a slot count ->
//!    [`sample_filmstrip`] (one snapshot reference or none per slot)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: packing and sampling are pure and stable for
//!   a given input, so repeated calls at gesture frequency are safe and
//!   accumulate no state.
//! - **No IO**: the engine receives already-parsed domain values and returns
//!   plain numeric/structural results; rendering and transport live elsewhere.
//! - **Total operations**: degenerate inputs (empty windows, zero-width ranges,
//!   zero slot counts) clamp or produce empty results, never panic.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod sampler;
mod timeline;
mod viewport;

pub use foundation::core::TimeRange;
pub use foundation::error::{TracelaneError, TracelaneResult};
pub use layout::packer::{PackedInterval, RowLayout, pack};
pub use sampler::filmstrip::{Timestamped, find_at_or_before, sample_filmstrip};
pub use timeline::dsl::TimelineBuilder;
pub use timeline::model::{Interval, Snapshot, Timeline};
pub use timeline::tree::{IntervalNode, flatten_tree};
pub use viewport::view::{
    DEFAULT_RANGE_PADDING, MAX_ZOOM, MIN_VISIBLE_DURATION_MS, MIN_ZOOM, Viewport,
};
