use guard_rail::{Business, Outcome, ResponseCode};

fn failed<T>() -> Outcome<T> {
    Outcome::failure_code(ResponseCode::new(40000))
}

#[test]
fn success_and_failure_are_exclusive() {
    let ok = Outcome::success(1);
    let empty: Outcome<i32> = Outcome::empty();
    let err: Outcome<i32> = failed();

    assert!(ok.is_success() && !ok.is_failure());
    assert!(empty.is_success() && !empty.is_failure());
    assert!(err.is_failure() && !err.is_success());
}

#[test]
fn optional_view_is_present_only_for_data() {
    assert_eq!(Outcome::success(5).into_optional(), Some(5));
    assert_eq!(Outcome::<i32>::empty().into_optional(), None);
    assert_eq!(failed::<i32>().into_optional(), None);

    assert!(Outcome::success(5).exists());
    assert!(!Outcome::<i32>::empty().exists());
}

#[test]
fn map_skips_absent_data_and_failures() {
    let mut calls = 0;
    let empty = Outcome::<i32>::empty().map(|x| {
        calls += 1;
        x + 1
    });
    let err = failed::<i32>().map(|x| x + 1);

    assert_eq!(calls, 0);
    assert_eq!(empty, Outcome::empty());
    assert_eq!(err.error().map(Business::code), Some(40000));
}

#[test]
fn and_then_chains_present_data() {
    let halve = |x: i32| {
        if x % 2 == 0 {
            Outcome::success(x / 2)
        } else {
            Outcome::failure_code(ResponseCode::new(40003))
        }
    };

    assert_eq!(Outcome::success(8).and_then(halve), Outcome::success(4));
    assert_eq!(Outcome::success(3).and_then(halve).error().map(Business::code), Some(40003));
    assert_eq!(Outcome::empty().and_then(halve), Outcome::empty());
}

#[test]
fn get_or_else_keeps_an_absent_success_absent() {
    assert_eq!(Outcome::success(1).get_or_else(9), Some(1));
    assert_eq!(Outcome::<i32>::empty().get_or_else(9), None);
    assert_eq!(failed::<i32>().get_or_else(9), Some(9));
}

#[test]
fn get_or_else_get_receives_the_error() {
    let recovered = failed::<u32>().get_or_else_get(|err| err.code());
    assert_eq!(recovered, Some(40000));

    assert_eq!(Outcome::success(2).get_or_else_get(|_| 0), Some(2));
}

#[test]
fn fold_always_yields_success() {
    let from_success = Outcome::success(2).fold(|x| x.unwrap_or(0) * 10, |_| -1);
    let from_empty = Outcome::<i32>::empty().fold(|x| x.is_none(), |_| false);
    let from_failure = failed::<i32>().fold(|_| 0, |err| err.code());

    assert_eq!(from_success, Outcome::success(20));
    assert_eq!(from_empty, Outcome::success(true));
    assert_eq!(from_failure, Outcome::success(40000));
}

#[test]
fn swap_exchanges_the_variants() {
    let swapped = Outcome::success("x").swap(ResponseCode::new(40900));
    assert_eq!(swapped.error().map(Business::code), Some(40900));

    let restored = failed::<&str>().swap(ResponseCode::new(40900));
    assert_eq!(restored, Outcome::empty());
}

#[test]
fn contains_compares_present_data() {
    assert!(Outcome::success("a").contains(&"a"));
    assert!(!Outcome::success("a").contains(&"b"));
    assert!(!Outcome::<&str>::empty().contains(&"a"));
    assert!(!failed::<&str>().contains(&"a"));
}

#[test]
fn iteration_yields_at_most_one_item() {
    let collected: Vec<i32> = Outcome::success(3).into_iter().collect();
    assert_eq!(collected, vec![3]);

    assert_eq!(Outcome::<i32>::empty().iter().count(), 0);
    assert_eq!(failed::<i32>().iter().count(), 0);
}

#[test]
fn inspect_failure_only_runs_for_failures() {
    let mut seen = Vec::new();
    let _ = Outcome::success(1).inspect_failure(|err| seen.push(err.code()));
    let _ = failed::<i32>().inspect_failure(|err| seen.push(err.code()));

    assert_eq!(seen, vec![40000]);
}

#[test]
fn into_result_keeps_absence() {
    assert_eq!(Outcome::success(1).into_result(), Ok(Some(1)));
    assert_eq!(Outcome::<i32>::empty().into_result(), Ok(None));
    assert!(failed::<i32>().into_result().is_err());
}
