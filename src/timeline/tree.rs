use crate::timeline::model::Interval;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A node in an explicit interval tree, as produced by hierarchical trace
/// sources before flattening.
pub struct IntervalNode {
    /// Interval identifier (unique within a tree).
    pub id: String,
    /// Start offset from the timeline epoch in milliseconds.
    pub start_offset_ms: f64,
    /// Interval length in milliseconds.
    #[serde(default)]
    pub duration_ms: f64,
    /// Nested intervals, rendered below this node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IntervalNode>,
}

/// Flatten an interval tree into the ordered list consumed by [`crate::pack`].
///
/// Pre-order traversal: a node is emitted before its descendants and each
/// child carries its parent's id, so a subsequent packing pass always sees a
/// parent before (and therefore places it above) its children.
pub fn flatten_tree(roots: &[IntervalNode]) -> Vec<Interval> {
    let mut out = Vec::new();
    for root in roots {
        flatten_into(root, None, &mut out);
    }
    out
}

fn flatten_into(node: &IntervalNode, parent_id: Option<&str>, out: &mut Vec<Interval>) {
    out.push(Interval {
        id: node.id.clone(),
        start_offset_ms: node.start_offset_ms,
        duration_ms: node.duration_ms,
        parent_id: parent_id.map(str::to_owned),
    });
    for child in &node.children {
        flatten_into(child, Some(&node.id), out);
    }
}
