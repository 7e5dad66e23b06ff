use guard_rail::convert::{
    collect_errors, context_to_outcome, context_to_result, optional_result_to_outcome,
    result_to_outcome, split_errors,
};
use guard_rail::{Business, BusinessError, MultiBusiness, Outcome, ResponseCode, ValidationContext};

fn business(code: u32) -> Business {
    Business::of(ResponseCode::new(code))
}

#[test]
fn result_and_outcome_convert_both_ways() {
    let ok: Outcome<i32> = Ok::<_, Business>(3).into();
    assert_eq!(ok, Outcome::success(3));

    let err: Outcome<i32> = result_to_outcome(Err(business(40001)));
    let back: Result<Option<i32>, Business> = err.into();
    assert_eq!(back, Err(business(40001)));
}

#[test]
fn optional_results_keep_absence() {
    assert_eq!(optional_result_to_outcome::<u8>(Ok(None)), Outcome::empty());
    assert_eq!(optional_result_to_outcome(Ok(Some(1))), Outcome::success(1));
}

#[test]
fn business_converts_into_failures() {
    let outcome: Outcome<()> = business(40004).into();
    assert!(outcome.is_failure());

    let single: BusinessError = business(40004).into();
    assert!(!single.is_aggregate());
}

#[test]
fn multi_business_stays_aggregate() {
    let multi = MultiBusiness::new([business(1)]).unwrap();
    let err: BusinessError = multi.into();

    assert!(err.is_aggregate());
    assert_eq!(err.len(), 1);
}

#[test]
fn collect_errors_picks_the_variant_by_count() {
    assert_eq!(collect_errors(Vec::new()), Ok(()));
    assert!(!collect_errors(vec![business(1)]).unwrap_err().is_aggregate());
    assert!(collect_errors(vec![business(1), business(2)]).unwrap_err().is_aggregate());
}

#[test]
fn context_converts_to_result_and_outcome() {
    let mut ctx = ValidationContext::collect_all();
    ctx.verify().positive(0).negative(1);
    assert_eq!(context_to_result(ctx).unwrap_err().len(), 2);

    let clean = ValidationContext::fail_fast();
    assert_eq!(context_to_outcome(clean, "payload"), Outcome::success("payload"));

    let mut stopped = ValidationContext::collect_all();
    stopped.stop();
    assert!(context_to_outcome(stopped, 1).is_success());
}

#[test]
fn split_errors_yields_every_failure_in_order() {
    let err = BusinessError::from_errors([business(1), business(2), business(3)]).unwrap();
    let codes: Vec<u32> = split_errors(err).map(|e| e.code()).collect();

    assert_eq!(codes, vec![1, 2, 3]);
}
