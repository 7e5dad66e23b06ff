//! Pre-built checks reporting into a [`ValidationContext`].
//!
//! Every check comes in two methods: `check(inputs)` with the default code and
//! detail, and `check_with(inputs, config)` where `config` is any
//! [`ViolationConfig`]. A passing check reports nothing; a failing one reports
//! exactly one error. Range bounds are inclusive. Once the context is stopped
//! the checks are skipped.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{ResponseCode, ValidationContext};
//!
//! let mut ctx = ValidationContext::fail_fast();
//! ctx.verify()
//!     .not_blank("alice")
//!     .length_between("alice", 3, 16)
//!     .positive_with(0, ResponseCode::from_static(2001, "quantity must be positive"))
//!     .email("not-an-email");
//!
//! assert_eq!(ctx.errors().len(), 1);
//! assert_eq!(ctx.errors()[0].code(), 2001);
//! ```

use core::fmt::{Debug, Display};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::OnceLock;

use regex::Regex;

use crate::context::ValidationContext;
use crate::types::{CodeCatalog, ResponseCode};
use crate::validation::spec::{ViolationConfig, ViolationSpec};

/// Values that can be empty.
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().map_or(true, Emptiness::is_empty_value)
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Default code and detail of a failed check, before caller configuration.
struct Violation {
    code: ResponseCode,
    detail: Option<String>,
}

impl Violation {
    fn new(code: &ResponseCode, detail: String) -> Option<Self> {
        Some(Self { code: code.clone(), detail: Some(detail) })
    }

    fn bare(code: &ResponseCode) -> Option<Self> {
        Some(Self { code: code.clone(), detail: None })
    }
}

/// Fluent check chain bound to one context, created by [`ValidationContext::verify`].
pub struct Verifier<'c> {
    ctx: &'c mut ValidationContext,
}

impl<'c> Verifier<'c> {
    #[inline]
    pub fn new(ctx: &'c mut ValidationContext) -> Self {
        Self { ctx }
    }

    /// The context this chain reports into.
    #[inline]
    pub fn context(&mut self) -> &mut ValidationContext {
        &mut *self.ctx
    }

    fn check<C, F>(self, config: C, evaluate: F) -> Self
    where
        C: ViolationConfig,
        F: FnOnce(&CodeCatalog) -> Option<Violation>,
    {
        if self.ctx.is_stopped() {
            return self;
        }

        if let Some(violation) = evaluate(self.ctx.catalog()) {
            let spec = ViolationSpec::prefilled(violation.code, violation.detail);
            self.ctx.report_error(config.configure(spec).build());
        }
        self
    }

    /// Fails when `condition` is false, with the generic invalid-parameter code.
    #[inline]
    pub fn that(self, condition: bool) -> Self {
        self.that_with(condition, ())
    }

    pub fn that_with<C: ViolationConfig>(self, condition: bool, config: C) -> Self {
        self.check(config, |codes| if condition { None } else { Violation::bare(&codes.invalid) })
    }

    #[inline]
    pub fn is_true(self, value: bool) -> Self {
        self.is_true_with(value, ())
    }

    pub fn is_true_with<C: ViolationConfig>(self, value: bool, config: C) -> Self {
        self.check(config, |codes| {
            if value {
                None
            } else {
                Violation::new(&codes.assertion, "expected true".into())
            }
        })
    }

    #[inline]
    pub fn is_false(self, value: bool) -> Self {
        self.is_false_with(value, ())
    }

    pub fn is_false_with<C: ViolationConfig>(self, value: bool, config: C) -> Self {
        self.check(config, |codes| {
            if value {
                Violation::new(&codes.assertion, "expected false".into())
            } else {
                None
            }
        })
    }

    #[inline]
    pub fn not_null<T>(self, value: &Option<T>) -> Self {
        self.not_null_with(value, ())
    }

    pub fn not_null_with<T, C: ViolationConfig>(self, value: &Option<T>, config: C) -> Self {
        self.check(config, |codes| match value {
            Some(_) => None,
            None => Violation::new(&codes.required, "must not be null".into()),
        })
    }

    #[inline]
    pub fn is_null<T>(self, value: &Option<T>) -> Self {
        self.is_null_with(value, ())
    }

    pub fn is_null_with<T, C: ViolationConfig>(self, value: &Option<T>, config: C) -> Self {
        self.check(config, |codes| match value {
            Some(_) => Violation::new(&codes.invalid, "must be null".into()),
            None => None,
        })
    }

    /// Fails for empty strings, collections and `None`.
    #[inline]
    pub fn not_empty<V: Emptiness + ?Sized>(self, value: &V) -> Self {
        self.not_empty_with(value, ())
    }

    pub fn not_empty_with<V, C>(self, value: &V, config: C) -> Self
    where
        V: Emptiness + ?Sized,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value.is_empty_value() {
                Violation::new(&codes.required, "must not be empty".into())
            } else {
                None
            }
        })
    }

    /// Fails for empty or whitespace-only strings.
    #[inline]
    pub fn not_blank(self, value: &str) -> Self {
        self.not_blank_with(value, ())
    }

    pub fn not_blank_with<C: ViolationConfig>(self, value: &str, config: C) -> Self {
        self.check(config, |codes| {
            if value.trim().is_empty() {
                Violation::new(&codes.required, "must not be blank".into())
            } else {
                None
            }
        })
    }

    /// Character count within `[min, max]`.
    #[inline]
    pub fn length_between(self, value: &str, min: usize, max: usize) -> Self {
        self.length_between_with(value, min, max, ())
    }

    pub fn length_between_with<C: ViolationConfig>(
        self,
        value: &str,
        min: usize,
        max: usize,
        config: C,
    ) -> Self {
        self.check(config, |codes| {
            let len = value.chars().count();
            if (min..=max).contains(&len) {
                None
            } else {
                Violation::new(&codes.size, format!("length {} not within [{}, {}]", len, min, max))
            }
        })
    }

    /// Value within `[min, max]`.
    #[inline]
    pub fn in_range<T: PartialOrd + Display>(self, value: T, min: T, max: T) -> Self {
        self.in_range_with(value, min, max, ())
    }

    pub fn in_range_with<T, C>(self, value: T, min: T, max: T, config: C) -> Self
    where
        T: PartialOrd + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if min <= value && value <= max {
                None
            } else {
                Violation::new(&codes.range, format!("{} not within [{}, {}]", value, min, max))
            }
        })
    }

    #[inline]
    pub fn min<T: PartialOrd + Display>(self, value: T, min: T) -> Self {
        self.min_with(value, min, ())
    }

    pub fn min_with<T, C>(self, value: T, min: T, config: C) -> Self
    where
        T: PartialOrd + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value >= min {
                None
            } else {
                Violation::new(&codes.range, format!("{} is less than {}", value, min))
            }
        })
    }

    #[inline]
    pub fn max<T: PartialOrd + Display>(self, value: T, max: T) -> Self {
        self.max_with(value, max, ())
    }

    pub fn max_with<T, C>(self, value: T, max: T, config: C) -> Self
    where
        T: PartialOrd + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value <= max {
                None
            } else {
                Violation::new(&codes.range, format!("{} is greater than {}", value, max))
            }
        })
    }

    #[inline]
    pub fn positive<T: PartialOrd + Default + Display>(self, value: T) -> Self {
        self.positive_with(value, ())
    }

    pub fn positive_with<T, C>(self, value: T, config: C) -> Self
    where
        T: PartialOrd + Default + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value > T::default() {
                None
            } else {
                Violation::new(&codes.positive, format!("{} is not positive", value))
            }
        })
    }

    #[inline]
    pub fn positive_or_zero<T: PartialOrd + Default + Display>(self, value: T) -> Self {
        self.positive_or_zero_with(value, ())
    }

    pub fn positive_or_zero_with<T, C>(self, value: T, config: C) -> Self
    where
        T: PartialOrd + Default + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value >= T::default() {
                None
            } else {
                Violation::new(&codes.positive, format!("{} is negative", value))
            }
        })
    }

    #[inline]
    pub fn negative<T: PartialOrd + Default + Display>(self, value: T) -> Self {
        self.negative_with(value, ())
    }

    pub fn negative_with<T, C>(self, value: T, config: C) -> Self
    where
        T: PartialOrd + Default + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value < T::default() {
                None
            } else {
                Violation::new(&codes.negative, format!("{} is not negative", value))
            }
        })
    }

    #[inline]
    pub fn negative_or_zero<T: PartialOrd + Default + Display>(self, value: T) -> Self {
        self.negative_or_zero_with(value, ())
    }

    pub fn negative_or_zero_with<T, C>(self, value: T, config: C) -> Self
    where
        T: PartialOrd + Default + Display,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if value <= T::default() {
                None
            } else {
                Violation::new(&codes.negative, format!("{} is positive", value))
            }
        })
    }

    #[inline]
    pub fn equals<T: PartialEq + Debug + ?Sized>(self, actual: &T, expected: &T) -> Self {
        self.equals_with(actual, expected, ())
    }

    pub fn equals_with<T, C>(self, actual: &T, expected: &T, config: C) -> Self
    where
        T: PartialEq + Debug + ?Sized,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if actual == expected {
                None
            } else {
                Violation::new(&codes.invalid, format!("expected {:?}, got {:?}", expected, actual))
            }
        })
    }

    #[inline]
    pub fn not_equals<T: PartialEq + Debug + ?Sized>(self, actual: &T, unexpected: &T) -> Self {
        self.not_equals_with(actual, unexpected, ())
    }

    pub fn not_equals_with<T, C>(self, actual: &T, unexpected: &T, config: C) -> Self
    where
        T: PartialEq + Debug + ?Sized,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if actual != unexpected {
                None
            } else {
                Violation::new(&codes.invalid, format!("must not equal {:?}", unexpected))
            }
        })
    }

    /// Unicode case-insensitive string equality.
    #[inline]
    pub fn equals_ignore_case(self, actual: &str, expected: &str) -> Self {
        self.equals_ignore_case_with(actual, expected, ())
    }

    pub fn equals_ignore_case_with<C: ViolationConfig>(
        self,
        actual: &str,
        expected: &str,
        config: C,
    ) -> Self {
        self.check(config, |codes| {
            let lower = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
            if lower(actual) == lower(expected) {
                None
            } else {
                Violation::new(
                    &codes.invalid,
                    format!("expected {:?} ignoring case, got {:?}", expected, actual),
                )
            }
        })
    }

    /// Fails when `value` contains a lowercase character.
    #[inline]
    pub fn upper_case(self, value: &str) -> Self {
        self.upper_case_with(value, ())
    }

    pub fn upper_case_with<C: ViolationConfig>(self, value: &str, config: C) -> Self {
        self.check(config, |codes| {
            if value.chars().any(char::is_lowercase) {
                Violation::new(&codes.invalid, format!("{:?} is not upper case", value))
            } else {
                None
            }
        })
    }

    /// Fails when `value` contains an uppercase character.
    #[inline]
    pub fn lower_case(self, value: &str) -> Self {
        self.lower_case_with(value, ())
    }

    pub fn lower_case_with<C: ViolationConfig>(self, value: &str, config: C) -> Self {
        self.check(config, |codes| {
            if value.chars().any(char::is_uppercase) {
                Violation::new(&codes.invalid, format!("{:?} is not lower case", value))
            } else {
                None
            }
        })
    }

    /// Fails unless `pattern` matches `value`; anchor the pattern with `^...$`
    /// to require a whole-string match.
    #[inline]
    pub fn matches(self, value: &str, pattern: &Regex) -> Self {
        self.matches_with(value, pattern, ())
    }

    pub fn matches_with<C: ViolationConfig>(self, value: &str, pattern: &Regex, config: C) -> Self {
        self.check(config, |codes| {
            if pattern.is_match(value) {
                None
            } else {
                Violation::new(&codes.pattern, format!("{:?} does not match {}", value, pattern))
            }
        })
    }

    #[inline]
    pub fn email(self, value: &str) -> Self {
        self.email_with(value, ())
    }

    pub fn email_with<C: ViolationConfig>(self, value: &str, config: C) -> Self {
        self.check(config, |codes| {
            if is_email(value) {
                None
            } else {
                Violation::new(&codes.email, format!("{:?} is not an email address", value))
            }
        })
    }

    /// Fails unless `value` is one of `allowed`.
    #[inline]
    pub fn one_of<T: PartialEq + Debug>(self, value: &T, allowed: &[T]) -> Self {
        self.one_of_with(value, allowed, ())
    }

    pub fn one_of_with<T, C>(self, value: &T, allowed: &[T], config: C) -> Self
    where
        T: PartialEq + Debug,
        C: ViolationConfig,
    {
        self.check(config, |codes| {
            if allowed.contains(value) {
                None
            } else {
                Violation::new(&codes.invalid, format!("{:?} is not one of {:?}", value, allowed))
            }
        })
    }
}

/// Local part, then a dotted domain whose labels neither start nor end with `-`.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s.-](?:[^@\s.]*[^@\s.-])?(?:\.[^@\s.-](?:[^@\s.]*[^@\s.-])?)+$";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

#[inline]
fn is_email(value: &str) -> bool {
    email_pattern().is_match(value)
}
