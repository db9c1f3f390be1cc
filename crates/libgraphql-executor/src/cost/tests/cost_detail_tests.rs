use crate::cost::CostDetail;

#[test]
fn add_accumulates_per_path() {
    let mut detail = CostDetail::default();
    detail.add("example.a", 1);
    detail.add("example.deep", 25);
    detail.add("example.a", 2);

    assert_eq!(detail.len(), 2);
    assert_eq!(detail.get("example.a"), Some(3));
    assert_eq!(detail.get("example.deep"), Some(25));
    assert_eq!(detail.get("example.b"), None);
    assert_eq!(detail.sum(), 28);
}

#[test]
fn iteration_follows_first_insertion_order() {
    let mut detail = CostDetail::default();
    detail.add("z", 1);
    detail.add("a", 1);
    detail.add("z", 1);

    assert_eq!(detail.iter().collect::<Vec<_>>(), vec![("z", 2), ("a", 1)]);
}

#[test]
fn merge_adds_into_existing_paths() {
    let mut detail = CostDetail::default();
    detail.add("example.iface", 50);
    detail.add("example.iface.b", 1);

    let mut other = CostDetail::default();
    other.add("example.iface.b", 1);
    other.add("example.iface.pic", 10);
    detail.merge(other);

    assert_eq!(detail.get("example.iface.b"), Some(2));
    assert_eq!(detail.get("example.iface.pic"), Some(10));
    assert_eq!(detail.sum(), 62);
}

#[test]
fn serializes_as_a_flat_map() {
    let mut detail = CostDetail::default();
    detail.add("example.a", 1);
    detail.add("example.x=c", 1);

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json, serde_json::json!({
        "example.a": 1,
        "example.x=c": 1,
    }));

    let round_tripped: CostDetail = serde_json::from_value(json).unwrap();
    assert_eq!(round_tripped, detail);
}

#[test]
fn add_and_sum_saturate() {
    let mut detail = CostDetail::default();
    detail.add("a", u64::MAX - 1);
    detail.add("a", 5);
    detail.add("b", 7);

    assert_eq!(detail.get("a"), Some(u64::MAX));
    assert_eq!(detail.sum(), u64::MAX);
}
