use std::collections::HashMap;

use guard_rail::{Business, ResponseCode, ValidationContext};
use regex::Regex;

fn codes(ctx: &ValidationContext) -> Vec<u32> {
    ctx.errors().iter().map(Business::code).collect()
}

#[test]
fn passing_checks_report_nothing() {
    let mut ctx = ValidationContext::collect_all();
    let tags = vec!["a"];
    ctx.verify()
        .that(true)
        .is_true(true)
        .is_false(false)
        .not_null(&Some(1))
        .is_null(&None::<u8>)
        .not_empty("x")
        .not_empty(&tags)
        .not_blank(" x ")
        .length_between("名字", 2, 2)
        .in_range(5, 5, 10)
        .in_range(10, 5, 10)
        .min(3.5, 3.5)
        .max(-1, 0)
        .positive(1)
        .positive_or_zero(0)
        .negative(-0.5)
        .negative_or_zero(0)
        .equals("a", "a")
        .not_equals(&1, &2)
        .equals_ignore_case("Straße", "STRAßE")
        .upper_case("ABC-1")
        .lower_case("abc-1")
        .matches("ab12", &Regex::new(r"^[a-z]+\d+$").unwrap())
        .email("bob@example.com")
        .one_of(&"b", &["a", "b"]);

    assert!(ctx.is_valid(), "unexpected errors: {:?}", ctx.errors());
}

#[test]
fn each_failing_check_reports_its_family_code() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify()
        .that(false)
        .is_true(false)
        .not_null(&None::<u8>)
        .not_empty(&Vec::<u8>::new())
        .not_blank(" \t")
        .length_between("abcd", 1, 3)
        .in_range(11, 5, 10)
        .email("bob")
        .matches("abc", &Regex::new(r"^\d+$").unwrap())
        .positive(0)
        .negative(0);

    assert_eq!(
        codes(&ctx),
        vec![40000, 40010, 40001, 40001, 40001, 40002, 40003, 40004, 40005, 40006, 40007]
    );
}

#[test]
fn email_rejects_malformed_domains() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify()
        .email("ann@mail-server.example.org")
        .email("ann@example..org")
        .email("ann@-example.org")
        .email("ann@localhost")
        .email("ann smith@example.org");

    assert_eq!(codes(&ctx), vec![40004; 4]);
}

#[test]
fn range_bounds_are_inclusive() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().in_range(4, 5, 10).in_range(5, 5, 10).in_range(10, 5, 10).in_range(11, 5, 10);

    assert_eq!(ctx.errors().len(), 2);
}

#[test]
fn not_empty_covers_collections_and_options() {
    let mut ctx = ValidationContext::collect_all();
    let empty_map: HashMap<String, u8> = HashMap::new();
    ctx.verify().not_empty(&empty_map).not_empty(&None::<String>).not_empty(&Some(String::new()));

    assert_eq!(ctx.errors().len(), 3);
}

#[test]
fn case_checks_ignore_caseless_characters() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().upper_case("Abc").lower_case("aBc").upper_case("123").lower_case("_");

    assert_eq!(ctx.errors().len(), 2);
}

#[test]
fn equality_failures_describe_both_values() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().equals(&1, &2).equals_ignore_case("abc", "abd").not_equals("x", "x");

    assert_eq!(ctx.errors()[0].detail(), Some("expected 2, got 1"));
    assert_eq!(ctx.errors().len(), 3);
}

#[test]
fn one_of_rejects_unknown_values() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().one_of(&"purple", &["red", "green"]);

    assert_eq!(codes(&ctx), vec![40000]);
}

#[test]
fn three_failures_collect_into_an_aggregate() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().not_blank("").in_range(200, 0, 150).email("nope");

    assert_eq!(codes(&ctx), vec![40001, 40003, 40004]);
    let err = ctx.into_result().unwrap_err();
    assert!(err.is_aggregate());
    assert_eq!(err.len(), 3);
}

#[test]
fn three_failures_under_fail_fast_yield_a_single_error() {
    let mut ctx = ValidationContext::fail_fast();
    ctx.verify().not_blank("").in_range(200, 0, 150).email("nope");

    assert_eq!(codes(&ctx), vec![40001]);
    assert!(ctx.is_stopped());
    let err = ctx.into_result().unwrap_err();
    assert!(!err.is_aggregate());
}

#[test]
fn checks_skip_evaluation_once_stopped() {
    let mut ctx = ValidationContext::collect_all();
    ctx.stop();
    ctx.verify().that(false).not_blank("");

    assert!(ctx.is_valid());
}

#[test]
fn verifier_exposes_its_context() {
    let mut ctx = ValidationContext::collect_all();
    let mut chain = ctx.verify().that(false);
    chain.context().stop();
    let _ = chain.that(false);

    assert_eq!(ctx.errors().len(), 1);
}

#[test]
fn with_variants_accept_every_config_shape() {
    let custom = ResponseCode::from_static(3000, "custom");
    let mut ctx = ValidationContext::collect_all();
    ctx.verify()
        .positive_with(-1, ())
        .positive_with(-1, custom.clone())
        .positive_with(-1, (custom.clone(), "quantity"))
        .positive_with(-1, (custom, String::from("amount")))
        .positive_with(-1, |spec: guard_rail::ViolationSpec| spec.without_detail());

    let errors = ctx.errors();
    assert_eq!(errors[0].code(), 40006);
    assert_eq!(errors[0].detail(), Some("-1 is not positive"));
    assert_eq!(errors[1].code(), 3000);
    assert_eq!(errors[1].detail(), Some("-1 is not positive"));
    assert_eq!(errors[2].detail(), Some("quantity"));
    assert_eq!(errors[3].detail(), Some("amount"));
    assert_eq!(errors[4].detail(), None);
}
