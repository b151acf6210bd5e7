use crate::foundation::core::TimeRange;
use crate::timeline::model::Snapshot;

/// Seam trait for anything carrying a sample timestamp.
///
/// The sampler is generic over this trait so callers with their own snapshot
/// payloads can be sampled without conversion copies.
pub trait Timestamped {
    /// Sample time in milliseconds, on the same basis as the query range.
    fn timestamp_ms(&self) -> f64;
}

impl Timestamped for Snapshot {
    fn timestamp_ms(&self) -> f64 {
        self.timestamp_ms
    }
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn timestamp_ms(&self) -> f64 {
        (**self).timestamp_ms()
    }
}

/// Most recent item with `timestamp_ms <= t_ms`, if any.
///
/// `snapshots` must be sorted ascending by timestamp. This is the inclusive
/// causal lookup [`sample_filmstrip`] uses for degenerate ranges; callers can
/// also use it directly for playhead queries.
pub fn find_at_or_before<T: Timestamped>(snapshots: &[T], t_ms: f64) -> Option<&T> {
    let idx = snapshots.partition_point(|s| s.timestamp_ms() <= t_ms);
    if idx == 0 { None } else { Some(&snapshots[idx - 1]) }
}

/// Select one snapshot (or none) per display slot over `range`.
///
/// `range` defaults to the full span of the input; the input need not be
/// pre-sorted. The range is partitioned into `slot_count` equal-width
/// half-open slots, except the last slot which includes `range.end_ms`. Each
/// slot prefers the in-slot snapshot nearest its midpoint (the earlier one
/// wins ties), falls back to the most recent snapshot strictly before the
/// slot start, and stays empty only when nothing precedes it. A slot never
/// resolves to a snapshot from its own future, so zooming into a region with
/// no snapshots repeats the last one taken before it in every slot.
///
/// A degenerate range (`end_ms <= start_ms`) resolves every slot to the
/// inclusive lookup [`find_at_or_before`] at `range.start_ms`; with no slot
/// width there is no boundary to hold a strict inequality against.
///
/// The result has exactly `slot_count` elements and slots share read-only
/// references: the same snapshot may appear in several slots.
#[tracing::instrument(skip(snapshots), fields(count = snapshots.len(), slots = slot_count))]
pub fn sample_filmstrip<'a, T: Timestamped>(
    snapshots: &'a [T],
    slot_count: usize,
    range: Option<TimeRange>,
) -> Vec<Option<&'a T>> {
    if slot_count == 0 {
        return Vec::new();
    }
    if snapshots.is_empty() {
        return vec![None; slot_count];
    }

    let mut sorted: Vec<&T> = snapshots.iter().collect();
    sorted.sort_by(|a, b| a.timestamp_ms().total_cmp(&b.timestamp_ms()));

    let range = range.unwrap_or_else(|| {
        TimeRange::new(
            sorted[0].timestamp_ms(),
            sorted[sorted.len() - 1].timestamp_ms(),
        )
    });

    if range.is_degenerate() {
        let at = find_at_or_before(&sorted, range.start_ms).copied();
        return vec![at; slot_count];
    }

    let slot_width = range.duration_ms() / slot_count as f64;
    (0..slot_count)
        .map(|slot| {
            let slot_start = range.start_ms + slot as f64 * slot_width;
            let last = slot + 1 == slot_count;
            let slot_end = if last { range.end_ms } else { slot_start + slot_width };
            select_for_slot(&sorted, slot_start, slot_end, last)
        })
        .collect()
}

fn select_for_slot<'a, T: Timestamped>(
    sorted: &[&'a T],
    slot_start: f64,
    slot_end: f64,
    end_inclusive: bool,
) -> Option<&'a T> {
    let midpoint = slot_start + (slot_end - slot_start) / 2.0;
    let first_in_slot = sorted.partition_point(|s| s.timestamp_ms() < slot_start);

    let mut best: Option<&'a T> = None;
    let mut best_distance = f64::INFINITY;
    for &snapshot in &sorted[first_in_slot..] {
        let ts = snapshot.timestamp_ms();
        let in_slot = if end_inclusive { ts <= slot_end } else { ts < slot_end };
        if !in_slot {
            break;
        }
        let distance = (ts - midpoint).abs();
        if distance < best_distance {
            best = Some(snapshot);
            best_distance = distance;
        }
    }
    if best.is_some() {
        return best;
    }

    // Causal fallback: strictly before the slot, never at-or-after.
    if first_in_slot == 0 {
        None
    } else {
        Some(sorted[first_in_slot - 1])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampler/filmstrip.rs"]
mod tests;
