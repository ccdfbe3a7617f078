use asn1oid::{NameAndNumberForm, ObjectIdentifier};

#[test]
fn test_serialize_as_name_form() {
    let oid = ObjectIdentifier::parse("{ iso(1) identified-organization(3) dod(6) }").unwrap();
    assert_eq!(
        "\"{ iso(1) identified-organization(3) dod(6) }\"",
        serde_json::to_string(&oid).unwrap()
    );
}

#[test]
fn test_deserialize_from_text() {
    let oid: ObjectIdentifier = serde_json::from_str("\"1.3.6.1\"").unwrap();
    assert_eq!("1.3.6.1", oid.to_dotted());

    let oid: ObjectIdentifier = serde_json::from_str("\"{ iso(1) org(3) }\"").unwrap();
    assert_eq!("{ iso(1) org(3) }", oid.to_name_form());
}

#[test]
fn test_deserialize_from_sequences() {
    let oid: ObjectIdentifier = serde_json::from_str("[2, 5, 4, 3]").unwrap();
    assert_eq!("2.5.4.3", oid.to_dotted());

    let oid: ObjectIdentifier = serde_json::from_str("[\"iso(1)\", \"3\", \"dod(6)\"]").unwrap();
    assert_eq!("{ iso(1) 3 dod(6) }", oid.to_name_form());
}

#[test]
fn test_deserialize_rejects_invalid_values() {
    let error = serde_json::from_str::<ObjectIdentifier>("[1, -3]").unwrap_err();
    assert!(error.to_string().starts_with("validation error"), "{}", error);

    let error = serde_json::from_str::<ObjectIdentifier>("\"{ 1Foo(1) }\"").unwrap_err();
    assert!(error.to_string().starts_with("parse error"), "{}", error);

    let error = serde_json::from_str::<ObjectIdentifier>("[]").unwrap_err();
    assert!(error.to_string().starts_with("validation error"), "{}", error);
}

#[test]
fn test_deserialize_rejects_unsupported_shapes() {
    for json in &["true", "{\"oid\": \"1.3\"}", "[1, \"dod(6)\"]", "1.5", "null"] {
        let error = serde_json::from_str::<ObjectIdentifier>(json).unwrap_err();
        assert!(error.to_string().starts_with("type error"), "{}", error);
    }
}

#[test]
fn test_name_and_number_form() {
    let arc: NameAndNumberForm = serde_json::from_str("\"dod(6)\"").unwrap();
    assert_eq!(Some("dod"), arc.identifier());
    assert_eq!("\"dod(6)\"", serde_json::to_string(&arc).unwrap());
    assert!(serde_json::from_str::<NameAndNumberForm>("\"Dod(6)\"").is_err());
}
