#![forbid(unsafe_code)]
use chrono::{DateTime, FixedOffset};
use releve::{io, Schedule, Shift, ShiftList, SHIFT_LIST_ENDER};

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn decode_infers_bounds_from_neighbours() {
    let input = "\
2025-01-01T00:00:00Z: a
2025-01-08T00:00:00Z: b
2025-01-15T00:00:00Z: TBD
";
    let shifts: ShiftList = serde_yaml::from_str(input).unwrap();
    assert_eq!(
        shifts,
        ShiftList::new(vec![
            Shift::new("a", ts("2025-01-01T00:00:00Z"), ts("2025-01-08T00:00:00Z")),
            Shift::new("b", ts("2025-01-08T00:00:00Z"), ts("2025-01-15T00:00:00Z")),
        ])
    );
}

#[test]
fn decode_accepts_empty_forms() {
    for input in ["{}", "[]"] {
        let shifts: ShiftList = serde_yaml::from_str(input).unwrap();
        assert!(shifts.is_empty(), "expected {input:?} to decode to no shifts");
    }

    // Une unique entrée sentinelle ferme une rotation sans créneau.
    let shifts: ShiftList = serde_yaml::from_str("2025-01-01T00:00:00Z: TBD").unwrap();
    assert!(shifts.is_empty());
}

#[test]
fn decode_requires_the_ender() {
    let input = "\
2025-01-01T00:00:00Z: a
2025-01-08T00:00:00Z: b
";
    let err = serde_yaml::from_str::<ShiftList>(input).unwrap_err();
    assert!(
        err.to_string()
            .contains(&format!("last shift must have user {SHIFT_LIST_ENDER:?}")),
        "unexpected error: {err}"
    );

    // Une entrée unique qui n'est pas la sentinelle est invalide aussi.
    let err = serde_yaml::from_str::<ShiftList>("2025-01-01T00:00:00Z: a").unwrap_err();
    assert!(err.to_string().contains("last shift must have user"));
}

#[test]
fn decode_rejects_malformed_entries() {
    let err = serde_yaml::from_str::<ShiftList>("1: a").unwrap_err();
    assert!(err.to_string().contains("shift time is not a string"));

    let err = serde_yaml::from_str::<ShiftList>("_: 1").unwrap_err();
    assert!(err.to_string().contains("shift email is not a string"));

    let err = serde_yaml::from_str::<ShiftList>("_: _").unwrap_err();
    assert!(err.to_string().contains("invalid shift timestamp"));

    let err = serde_yaml::from_str::<ShiftList>("- a\n- b").unwrap_err();
    assert!(err.to_string().contains("must be a mapping"));
}

#[test]
fn encode_rejects_an_empty_rotation() {
    let schedule = Schedule {
        id: "xxx".into(),
        ..Schedule::default()
    };
    let err = io::to_string(&schedule).unwrap_err();
    assert!(err.to_string().contains("cannot represent an empty rotation"));
}

#[test]
fn encode_emits_starts_in_order_then_the_ender() {
    let schedule = Schedule {
        id: "xxx".into(),
        extend: None,
        shifts: ShiftList::new(vec![
            Shift::new("foo", ts("1970-01-01T00:00:00-07:00"), ts("1970-01-02T00:00:00-07:00")),
            Shift::new("bar", ts("1970-01-02T00:00:00-07:00"), ts("1970-01-03T00:00:00-07:00")),
        ]),
    };
    let out = io::to_string(&schedule).unwrap();

    let foo = out.find("1970-01-01T00:00:00-07:00").unwrap();
    let bar = out.find("1970-01-02T00:00:00-07:00").unwrap();
    let end = out.find("1970-01-03T00:00:00-07:00").unwrap();
    assert!(foo < bar && bar < end, "entries out of order in {out:?}");
    assert!(out.contains(SHIFT_LIST_ENDER));
}

#[test]
fn end_to_end_document_round_trip() {
    let input = "\
id: x
shifts:
  2025-01-01T00:00:00Z: a
  2025-01-08T00:00:00Z: b
  2025-01-15T00:00:00Z: TBD
";
    let s = io::from_str(input).unwrap();
    assert_eq!(s.id, "x");
    assert_eq!(
        s.shifts[..],
        [
            Shift::new("a", ts("2025-01-01T00:00:00Z"), ts("2025-01-08T00:00:00Z")),
            Shift::new("b", ts("2025-01-08T00:00:00Z"), ts("2025-01-15T00:00:00Z")),
        ][..]
    );

    let out = io::to_string(&s).unwrap();
    assert_eq!(io::from_str(&out).unwrap(), s);
}

// decode(encode(L)) == L pour toute liste non vide, contiguë et triée.
#[test]
fn round_trip_preserves_the_shift_list() {
    let schedule = Schedule {
        id: "prod".into(),
        extend: None,
        shifts: ShiftList::new(vec![
            Shift::new("a@example.com", ts("2025-06-01T08:00:00+02:00"), ts("2025-06-08T08:00:00+02:00")),
            Shift::new("b@example.com", ts("2025-06-08T08:00:00+02:00"), ts("2025-06-15T08:00:00+02:00")),
            Shift::new("c@example.com", ts("2025-06-15T08:00:00+02:00"), ts("2025-06-22T08:00:00+02:00")),
        ]),
    };

    let out = io::to_string(&schedule).unwrap();
    let back = io::from_str(&out).unwrap();
    assert_eq!(back, schedule);
}
