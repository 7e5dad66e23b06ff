use guard_rail::{Business, ResponseCode, ValidationContext, ViolationSpec};

#[test]
fn build_uses_detail_when_present() {
    let with_detail = ViolationSpec::new(ResponseCode::new(1)).detail("name").build();
    let without = ViolationSpec::new(ResponseCode::new(1)).build();

    assert_eq!(with_detail.detail(), Some("name"));
    assert_eq!(without.detail(), None);
}

#[test]
fn later_overrides_win() {
    let spec = ViolationSpec::new(ResponseCode::new(1))
        .code(ResponseCode::new(2))
        .detail("first")
        .detail("second");

    assert_eq!(spec.response_code().code(), 2);
    assert_eq!(spec.current_detail(), Some("second"));
}

#[test]
fn fabricator_receives_final_code_and_detail() {
    let business = ViolationSpec::new(ResponseCode::new(1))
        .fabricate(|code, detail| {
            Business::with_detail(code, format!("wrapped {}", detail.unwrap_or_default()))
        })
        .code(ResponseCode::new(5))
        .detail("x")
        .build();

    assert_eq!(business.code(), 5);
    assert_eq!(business.detail(), Some("wrapped x"));
}

#[test]
fn closure_config_sees_the_prefilled_defaults() {
    let mut seen = None;
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().length_between_with("toolong", 1, 3, |spec: ViolationSpec| {
        seen = Some((spec.response_code().code(), spec.current_detail().map(str::to_owned)));
        spec
    });

    let (code, detail) = seen.unwrap();
    assert_eq!(code, 40002);
    assert_eq!(detail.as_deref(), Some("length 7 not within [1, 3]"));
}

#[test]
fn closure_config_is_not_called_for_passing_checks() {
    let mut called = false;
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().not_blank_with("ok", |spec: ViolationSpec| {
        called = true;
        spec
    });

    assert!(!called);
    assert!(ctx.is_valid());
}
