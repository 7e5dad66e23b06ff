use guard_rail::{Business, BusinessError, CodeCatalog, MultiBusiness, Outcome, ResponseCode};

#[test]
fn catalog_round_trips_through_json() {
    let catalog = CodeCatalog {
        required: ResponseCode::from_static(1001, "required"),
        ..CodeCatalog::default()
    };

    let json = serde_json::to_string(&catalog).unwrap();
    let restored: CodeCatalog = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, catalog);
}

#[test]
fn partial_catalog_falls_back_to_defaults() {
    let json = r#"{ "range": { "code": 2003, "message": "bad range", "description": null } }"#;
    let catalog: CodeCatalog = serde_json::from_str(json).unwrap();

    assert_eq!(catalog.range.code(), 2003);
    assert_eq!(catalog.required.code(), 40001);
}

#[test]
fn business_errors_serialize_with_their_fields() {
    let err = BusinessError::from_errors([
        Business::with_detail(ResponseCode::new(40001), "name"),
        Business::of(ResponseCode::new(40003)).with_method("register"),
    ])
    .unwrap();

    let value = serde_json::to_value(&err).unwrap();
    let restored: BusinessError = serde_json::from_value(value).unwrap();

    assert_eq!(restored, err);
}

#[test]
fn outcome_round_trips() {
    let outcome = Outcome::success(vec![1, 2, 3]);
    let json = serde_json::to_string(&outcome).unwrap();

    assert_eq!(serde_json::from_str::<Outcome<Vec<i32>>>(&json).unwrap(), outcome);
}

#[test]
fn empty_aggregates_are_rejected() {
    assert!(serde_json::from_str::<MultiBusiness>(r#"{"errors":[]}"#).is_err());
    assert!(serde_json::from_str::<BusinessError>(r#"{"Aggregate":{"errors":[]}}"#).is_err());
}

#[test]
fn aggregate_decodes_through_its_constructor() {
    let json = r#"{"errors":[{"response_code":{"code":40001,"message":null,"description":null},"detail":"name","method":null}]}"#;
    let multi: MultiBusiness = serde_json::from_str(json).unwrap();

    assert_eq!(multi.len(), 1);
    assert_eq!(multi.first().code(), 40001);
}
