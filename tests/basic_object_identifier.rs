use asn1oid::{Category, ErrorKind, NameAndNumberForm, ObjectIdentifier};

const INTERNET: &str = "{ iso(1) identified-organization(3) dod(6) internet(1) }";

#[test]
fn test_name_form_to_dotted() {
    let oid = ObjectIdentifier::parse(INTERNET).unwrap();
    assert_eq!("1.3.6.1", oid.to_dotted());
    assert_eq!(INTERNET, oid.to_name_form());
    assert_eq!(vec![1_u64, 3, 6, 1], oid.to_integers());
    assert!(oid.is_valid());
}

#[test]
fn test_dotted_round_trip() {
    for dotted in &["0", "0.0", "1.3.6.1.5.5.7.3.1", "2.5.4.3", "2.999.18446744073709551615"] {
        let oid = ObjectIdentifier::parse(*dotted).unwrap();
        assert_eq!(*dotted, oid.to_dotted());
    }
}

#[test]
fn test_dotted_has_number_only_arcs() {
    let oid = ObjectIdentifier::parse("1.3.6").unwrap();
    assert_eq!("{ 1 3 6 }", oid.to_name_form());
    assert!(oid.arcs().iter().all(NameAndNumberForm::is_number_only));
}

#[test]
fn test_dotted_with_non_numeric_field_fails() {
    let error = ObjectIdentifier::parse("1.3.six.1").unwrap_err();
    assert!(error.is_parse_error());

    let error = ObjectIdentifier::parse("1.3.-6.1").unwrap_err();
    assert!(error.is_parse_error());

    let error = ObjectIdentifier::parse("1.3.").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::EmptyField(_)));
}

#[test]
fn test_unbraced_fields() {
    let oid = ObjectIdentifier::parse("iso(1) org(3) 6").unwrap();
    assert_eq!("1.3.6", oid.to_dotted());
    assert_eq!("{ iso(1) org(3) 6 }", oid.to_name_form());
}

#[test]
fn test_space_delimited_numbers_and_alt_names() {
    let mut oid = ObjectIdentifier::parse("1 3 6 1 5 5 7 3 1").unwrap();
    assert_eq!("1.3.6.1.5.5.7.3.1", oid.to_dotted());

    oid.add_alt_names(vec!["serverAuth"]);
    assert_eq!(&["serverAuth".to_string()], oid.alt_names());
    assert!(oid.equal("serverAuth"));
    assert!(oid.equal("SERVERAUTH"));
    assert!(!oid.equal("clientAuth"));
}

#[test]
fn test_alt_names_are_unique_ignoring_case() {
    let mut oid = ObjectIdentifier::parse("1.3.6.1.5.5.7.3.1").unwrap();
    oid.add_alt_names(vec!["x"]);
    oid.add_alt_names(vec!["x"]);
    assert_eq!(&["x".to_string()], oid.alt_names());

    oid.add_alt_names(vec!["serverAuth", "X", "id-kp-serverAuth", "SERVERAUTH"]);
    assert_eq!(
        &[
            "x".to_string(),
            "serverAuth".to_string(),
            "id-kp-serverAuth".to_string()
        ],
        oid.alt_names()
    );
}

#[test]
fn test_invalid_root_arc() {
    let error = ObjectIdentifier::parse("{ foo(3) bar(6) }").unwrap_err();
    assert_eq!(Category::Validation, error.category());
    assert_eq!(&ErrorKind::InvalidRootArc(3), error.kind());

    assert!(ObjectIdentifier::parse("3.1").unwrap_err().is_validation_error());
    assert!(ObjectIdentifier::from_integers(&[7, 1]).unwrap_err().is_validation_error());
}

#[test]
fn test_malformed_identifier() {
    let error = ObjectIdentifier::parse("{ 1Foo(1) }").unwrap_err();
    assert_eq!(Category::Parse, error.category());
    assert_eq!(Some(3), error.location().map(|l| l.column()));
}

#[test]
fn test_negative_numbers_rejected() {
    let error = ObjectIdentifier::parse(&[-1_i64][..]).unwrap_err();
    assert!(error.is_validation_error());
    assert_eq!(
        &ErrorKind::NegativeArc {
            position: 1,
            value: -1
        },
        error.kind()
    );

    let error = ObjectIdentifier::parse(&[1_i64, 3, -6][..]).unwrap_err();
    assert_eq!(
        &ErrorKind::NegativeArc {
            position: 3,
            value: -6
        },
        error.kind()
    );
}

#[test]
fn test_empty_input_is_invalid() {
    for empty in &["", "   ", "{ }", "{}"] {
        let error = ObjectIdentifier::parse(*empty).unwrap_err();
        assert_eq!(&ErrorKind::EmptyObjectIdentifier, error.kind(), "{:?}", empty);
    }
    assert!(ObjectIdentifier::from_integers(&[])
        .unwrap_err()
        .is_validation_error());
}

#[test]
fn test_parse_integer_sequences() {
    let oid = ObjectIdentifier::parse(&[1_u64, 3, 6, 1][..]).unwrap();
    assert_eq!("1.3.6.1", oid.to_dotted());

    let oid = ObjectIdentifier::parse(&vec![2_i64, 5, 4, 3]).unwrap();
    assert_eq!("2.5.4.3", oid.to_dotted());
}

#[test]
fn test_parse_name_form_sequences() {
    let forms = vec!["iso(1)".to_string(), "3".to_string(), " dod(6) ".to_string()];
    let oid = ObjectIdentifier::parse(&forms).unwrap();
    assert_eq!("{ iso(1) 3 dod(6) }", oid.to_name_form());

    let error = ObjectIdentifier::parse(&["iso(1)", "Org(3)"][..]).unwrap_err();
    assert!(error.is_parse_error());
}

#[test]
fn test_last_arc() {
    let oid = ObjectIdentifier::parse("{ iso(1) identified-organization(3) dod(6) }").unwrap();
    let arc = oid.last_arc().unwrap();
    assert_eq!(Some("dod"), arc.identifier());
    assert_eq!(6, arc.number());

    let oid = ObjectIdentifier::parse("1.3.6").unwrap();
    let arc = oid.last_arc().unwrap();
    assert_eq!(None, arc.identifier());
    assert_eq!(6, arc.number());
}

#[test]
fn test_is_valid() {
    assert!(!ObjectIdentifier::is_valid_opt(None));
    for valid in &["0.9", "1.2.840.113549", INTERNET, "joint-iso-itu-t(2) ds(5)"] {
        let oid = ObjectIdentifier::parse(*valid).unwrap();
        assert!(oid.is_valid());
        assert!(ObjectIdentifier::is_valid_opt(Some(&oid)));
    }
}

#[test]
fn test_equal_integer_sequences() {
    let oid = ObjectIdentifier::parse(INTERNET).unwrap();
    assert!(oid.equal(&[1_u64, 3, 6, 1][..]));
    assert!(oid.equal(&vec![1_i64, 3, 6, 1]));
    assert!(!oid.equal(&[1_u64, 3, 6][..]));
    assert!(!oid.equal(&[1_i64, 3, 6, -1][..]));
    assert!(!oid.equal(&Vec::<u64>::new()));
}

#[test]
fn test_equal_text() {
    let oid = ObjectIdentifier::parse(INTERNET)
        .unwrap()
        .with_alt_names(vec!["internet"]);
    assert!(oid.equal("1.3.6.1"));
    assert!(oid.equal(INTERNET));
    assert!(oid.equal("INTERNET"));
    // text is compared against the renderings as they are
    assert!(!oid.equal(" 1.3.6.1"));
    assert!(!oid.equal("{ 1 3 6 1 }"));
    assert!(!oid.equal(""));
}

#[test]
fn test_equal_name_form_sequences() {
    let oid = ObjectIdentifier::parse(INTERNET).unwrap();
    assert!(oid.equal(&["iso(1)", "identified-organization(3)", "dod(6)", "internet(1)"][..]));
    assert!(!oid.equal(&["iso(1)", "identified-organization(3)", "dod(6)", "1"][..]));
    assert!(!oid.equal(&["iso(1)", "identified-organization(3)", "dod(6)"][..]));
    assert!(!oid.equal(&Vec::<String>::new()));
}

#[test]
fn test_equal_other_object_identifier() {
    let named = ObjectIdentifier::parse(INTERNET).unwrap();
    let dotted = ObjectIdentifier::parse("1.3.6.1").unwrap();
    assert!(named.equal(&dotted));
    assert!(dotted.equal(&named));
    // arcs with and without names are not the same arcs
    assert_ne!(named, dotted);
}

#[test]
fn test_error_messages() {
    let error = ObjectIdentifier::parse("{ iso(1) dod- }").unwrap_err();
    assert_eq!(
        "parse error: At line 1, column 13 the identifier of \"dod-\" ends with a hyphen",
        error.to_string()
    );

    let error = ObjectIdentifier::parse("5.1").unwrap_err();
    assert_eq!(
        "validation error: The root arc must be 0, 1 or 2, but instead got: 5",
        error.to_string()
    );
}
