use guard_rail::constraint::{ConstraintKind, ConstraintViolation};
use guard_rail::{CodeCatalog, ResponseCode};

#[test]
fn annotation_table_maps_to_fixed_codes() {
    let catalog = CodeCatalog::default();
    let table = [
        ("NotNull", 40001),
        ("NotEmpty", 40001),
        ("NotBlank", 40001),
        ("Size", 40002),
        ("Length", 40002),
        ("Min", 40003),
        ("Max", 40003),
        ("DecimalMin", 40003),
        ("DecimalMax", 40003),
        ("Email", 40004),
        ("Pattern", 40005),
        ("Positive", 40006),
        ("PositiveOrZero", 40006),
        ("Negative", 40007),
        ("NegativeOrZero", 40007),
        ("Future", 40008),
        ("FutureOrPresent", 40008),
        ("Past", 40009),
        ("PastOrPresent", 40009),
        ("AssertTrue", 40010),
        ("AssertFalse", 40010),
        ("Digits", 40000),
        ("", 40000),
    ];

    for (annotation, expected) in table {
        let code = ConstraintKind::from_annotation(annotation).response_code(&catalog).code();
        assert_eq!(code, expected, "annotation {:?}", annotation);
    }
}

#[test]
fn qualified_names_are_reduced_to_their_simple_name() {
    assert_eq!(
        ConstraintKind::from_annotation("jakarta.validation.constraints.NotBlank"),
        ConstraintKind::Required
    );
    assert_eq!(ConstraintKind::from_annotation("validator::rules::Email"), ConstraintKind::Email);
    assert_eq!(ConstraintKind::from_annotation("Outer$Past"), ConstraintKind::Past);
    assert_eq!(ConstraintKind::from_annotation("NotBlankish"), ConstraintKind::Other);
}

#[test]
fn not_blank_on_username_reports_required_with_field_detail() {
    let violation = ConstraintViolation::new("NotBlank", "must not be blank", "username");
    let error = violation.to_business(&CodeCatalog::default());

    assert_eq!(error.code(), 40001);
    assert_eq!(error.message(), Some("must not be blank"));
    assert!(error.detail().unwrap_or_default().contains("username"));
    assert_eq!(error.detail(), Some("当前:username->null"));
}

#[test]
fn invalid_value_is_rendered_into_the_detail() {
    let violation = ConstraintViolation::new("Size", "size must be between 2 and 8", "order.items")
        .with_invalid_value("[]");

    assert_eq!(violation.invalid_value(), Some("[]"));
    assert_eq!(violation.detail(), "当前:order.items->[]");
    assert_eq!(violation.kind(), ConstraintKind::Size);
}

#[test]
fn catalog_overrides_change_the_mapped_code_only() {
    let catalog = CodeCatalog {
        email: ResponseCode::from_static(7004, "bad email"),
        ..CodeCatalog::default()
    };
    let error = ConstraintViolation::new("Email", "not a well-formed email", "contact")
        .with_invalid_value("bob")
        .to_business(&catalog);

    assert_eq!(error.code(), 7004);
    assert_eq!(error.message(), Some("not a well-formed email"));
    assert_eq!(error.detail(), Some("当前:contact->bob"));
}

#[test]
fn display_names_path_and_constraint() {
    let violation = ConstraintViolation::new("Min", "must be at least 1", "quantity");

    assert_eq!(violation.to_string(), "quantity Min: must be at least 1");
}
