use super::*;

fn interval(id: &str, start: f64, dur: f64, parent: Option<&str>) -> Interval {
    Interval {
        id: id.to_string(),
        start_offset_ms: start,
        duration_ms: dur,
        parent_id: parent.map(str::to_owned),
    }
}

fn doc(intervals: Vec<Interval>, snapshots: Vec<Snapshot>) -> Timeline {
    Timeline {
        total_duration_ms: 10_000.0,
        intervals,
        snapshots,
    }
}

#[test]
fn interval_overlap_is_half_open() {
    let a = interval("a", 0.0, 100.0, None);
    let b = interval("b", 100.0, 50.0, None);
    let c = interval("c", 99.0, 50.0, None);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
    assert_eq!(a.end_ms(), 100.0);
}

#[test]
fn zero_duration_interval_does_not_overlap_itself() {
    let point = interval("p", 50.0, 0.0, None);
    let around = interval("a", 0.0, 100.0, None);
    assert!(!point.overlaps(&point.clone()));
    // A covering interval still overlaps the point, in both directions.
    assert!(point.overlaps(&around));
    assert!(around.overlaps(&point));
}

#[test]
fn validate_accepts_well_formed_document() {
    let t = doc(
        vec![
            interval("root", 0.0, 9_000.0, None),
            interval("child", 100.0, 500.0, Some("root")),
        ],
        vec![Snapshot {
            timestamp_ms: 300.0,
            data: serde_json::Value::Null,
        }],
    );
    t.validate().unwrap();
}

#[test]
fn validate_allows_dangling_parent_reference() {
    // The packer treats these as roots; the document is still well-formed.
    doc(vec![interval("orphan", 0.0, 10.0, Some("missing"))], vec![])
        .validate()
        .unwrap();
}

#[test]
fn validate_rejects_duplicate_ids() {
    let err = doc(
        vec![
            interval("x", 0.0, 10.0, None),
            interval("x", 20.0, 10.0, None),
        ],
        vec![],
    )
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("duplicate interval id 'x'"));
}

#[test]
fn validate_rejects_self_parenting() {
    let err = doc(vec![interval("loop", 0.0, 10.0, Some("loop"))], vec![])
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("own parent"));
}

#[test]
fn validate_rejects_degenerate_numbers() {
    assert!(
        doc(vec![interval("neg", 0.0, -1.0, None)], vec![])
            .validate()
            .is_err()
    );
    assert!(
        doc(vec![interval("nan", f64::NAN, 1.0, None)], vec![])
            .validate()
            .is_err()
    );
    assert!(
        doc(
            vec![],
            vec![Snapshot {
                timestamp_ms: f64::INFINITY,
                data: serde_json::Value::Null,
            }]
        )
        .validate()
        .is_err()
    );

    let mut t = doc(vec![], vec![]);
    t.total_duration_ms = -5.0;
    assert!(t.validate().is_err());
}

#[test]
fn serde_defaults_fill_optional_fields() {
    let t: Timeline = serde_json::from_str(
        r#"{
            "total_duration_ms": 100.0,
            "intervals": [{ "id": "a", "start_offset_ms": 5.0 }]
        }"#,
    )
    .unwrap();
    assert_eq!(t.intervals[0].duration_ms, 0.0);
    assert_eq!(t.intervals[0].parent_id, None);
    assert!(t.snapshots.is_empty());
}

#[test]
fn to_json_skips_absent_fields() {
    let t = doc(vec![interval("a", 0.0, 10.0, None)], vec![]);
    let json = t.to_json().unwrap();
    assert!(!json.contains("parent_id"));
    assert!(!json.contains("snapshots"));
}

#[test]
fn from_json_round_trips_and_validates() {
    let t = doc(
        vec![
            interval("a", 0.0, 10.0, None),
            interval("b", 0.0, 5.0, Some("a")),
        ],
        vec![Snapshot {
            timestamp_ms: 2.0,
            data: serde_json::json!({ "sheet": "page@1.jpeg" }),
        }],
    );
    let back = Timeline::from_json(&t.to_json().unwrap()).unwrap();
    assert_eq!(back, t);

    let invalid = r#"{
        "total_duration_ms": 100.0,
        "intervals": [
            { "id": "x", "start_offset_ms": 0.0 },
            { "id": "x", "start_offset_ms": 1.0 }
        ]
    }"#;
    assert!(Timeline::from_json(invalid).is_err());
}
