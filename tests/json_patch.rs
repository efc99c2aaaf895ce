use serde::{Deserialize, Serialize};
use serde_json::json;
use tristate::{Tristate, TristateError};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct PersonPatch {
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    name: Tristate<String>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    age: Tristate<u8>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    tags: Tristate<Vec<String>>,
}

#[test]
fn encode_json_by_state() {
    assert_eq!(Tristate::<i32>::Unset.encode_json().unwrap(), b"");
    assert_eq!(Tristate::<i32>::absent().encode_json().unwrap(), b"null");
    assert_eq!(Tristate::present(1).encode_json().unwrap(), b"1");
    assert_eq!(Tristate::present("foo").encode_json().unwrap(), b"\"foo\"");
}

#[test]
fn decode_json_by_input() {
    let mut o: Tristate<i32> = Tristate::default();
    o.decode_json(b"").unwrap();
    assert!(o.is_unset());

    o.decode_json(b"null").unwrap();
    assert!(o.is_absent());

    o.decode_json(b"1").unwrap();
    assert_eq!(o, Tristate::present(1));

    // empty input leaves an assigned container untouched
    o.decode_json(b"").unwrap();
    assert_eq!(o, Tristate::present(1));

    o.decode_json(b"null").unwrap();
    assert!(o.is_absent());
}

#[test]
fn decode_json_failure_keeps_state() {
    let mut o = Tristate::present(5u8);
    let err = o.decode_json(b"\"five\"").unwrap_err();
    assert!(matches!(err, TristateError::Json(_)));
    assert!(err.is_conversion());
    assert_eq!(o, Tristate::present(5));

    // the parser's message is surfaced unchanged
    let parser = serde_json::from_slice::<u8>(b"300").unwrap_err().to_string();
    let err = o.decode_json(b"300").unwrap_err();
    assert_eq!(err.to_string(), parser);
}

#[test]
fn json_round_trip_present_and_absent() {
    for original in [Tristate::present(42i64), Tristate::absent()] {
        let bytes = original.encode_json().unwrap();
        let mut decoded = Tristate::<i64>::default();
        decoded.decode_json(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}

#[test]
fn patch_distinguishes_omitted_from_null() {
    let patch: PersonPatch = serde_json::from_str(r#"{"name": null, "age": 30}"#).unwrap();
    assert!(patch.name.is_absent());
    assert_eq!(patch.age, Tristate::present(30));
    assert!(patch.tags.is_unset());

    let patch: PersonPatch = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
    assert!(patch.name.is_unset());
    assert_eq!(*patch.tags.value(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn patch_serializes_only_touched_fields() {
    let patch = PersonPatch {
        name: Tristate::absent(),
        age: Tristate::present(7),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": null, "age": 7}));
    assert_eq!(serde_json::to_string(&PersonPatch::default()).unwrap(), "{}");

    let round_trip: PersonPatch = serde_json::from_value(serde_json::to_value(&patch).unwrap()).unwrap();
    assert_eq!(round_trip, patch);
}

#[test]
fn bare_unset_refuses_to_serialize() {
    let err = serde_json::to_string(&Tristate::<i32>::Unset).unwrap_err();
    assert!(err.to_string().contains("unset value must be skipped"));
    assert_eq!(serde_json::to_string(&Tristate::<i32>::absent()).unwrap(), "null");
    assert_eq!(serde_json::to_string(&vec![Tristate::present(1), Tristate::absent()]).unwrap(), "[1,null]");
}

#[test]
fn bad_payload_surfaces_parser_error() {
    let err = serde_json::from_str::<PersonPatch>(r#"{"age": "old"}"#).unwrap_err();
    assert!(err.is_data());
}
