use std::collections::HashMap;

use crate::timeline::model::Interval;

#[derive(Clone, Debug, serde::Serialize)]
/// An input interval plus its assigned display row.
pub struct PackedInterval {
    /// The interval as supplied to [`pack`].
    #[serde(flatten)]
    pub interval: Interval,
    /// Zero-based display row.
    ///
    /// Row assignment depends on the whole input collection and its order,
    /// so this is recomputed state: never cache it across dataset changes.
    pub row: usize,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
/// Output of [`pack`]: one [`PackedInterval`] per input, in input order.
pub struct RowLayout {
    /// Packed intervals, same order and length as the input.
    pub packed: Vec<PackedInterval>,
    /// Number of rows used (0 for empty input).
    pub total_rows: usize,
}

/// Assign non-overlapping display rows to `intervals`.
///
/// Single deterministic pass in input order; the order is part of the
/// contract. Each interval lands on the first row, scanning upward from
/// `min_row`, whose members it does not overlap (touching endpoints do not
/// overlap). `min_row` is 0 for roots and `parent row + 1` when the parent
/// was already assigned. A `parent_id` that is missing, not yet processed,
/// or part of a reference cycle degrades the interval to a root instead of
/// failing the call, so the operation is total.
///
/// First-fit keeps row assignments visually stable when intervals arrive in
/// parent-before-children order, at the cost of not minimizing the row count
/// on adversarial inputs. That tradeoff is intentional.
#[tracing::instrument(skip(intervals), fields(count = intervals.len()))]
pub fn pack(intervals: &[Interval]) -> RowLayout {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut assigned_row: HashMap<&str, usize> = HashMap::with_capacity(intervals.len());
    let mut packed = Vec::with_capacity(intervals.len());

    for (index, interval) in intervals.iter().enumerate() {
        let min_row = interval
            .parent_id
            .as_deref()
            .and_then(|parent| assigned_row.get(parent))
            .map_or(0, |parent_row| parent_row + 1);

        let mut row = min_row;
        while row < rows.len() {
            let fits = rows[row]
                .iter()
                .all(|&occupant| !intervals[occupant].overlaps(interval));
            if fits {
                break;
            }
            row += 1;
        }
        if row == rows.len() {
            rows.push(Vec::new());
        }

        rows[row].push(index);
        assigned_row.insert(interval.id.as_str(), row);
        packed.push(PackedInterval {
            interval: interval.clone(),
            row,
        });
    }

    RowLayout {
        packed,
        total_rows: rows.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/packer.rs"]
mod tests;
