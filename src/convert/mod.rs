//! Conversions between `Result`, [`Outcome`], [`Business`] and [`BusinessError`].
//!
//! These adapters let a validation pass hand its result to code written
//! against plain `Result`s, and wrap such results back into an [`Outcome`]
//! at an API boundary.
//!
//! # Examples
//!
//! ```
//! use guard_rail::convert::*;
//! use guard_rail::{Business, Outcome, ResponseCode, ValidationContext};
//!
//! let result: Result<u32, Business> = Ok(42);
//! let outcome: Outcome<u32> = result.into();
//! assert_eq!(outcome.get(), Some(&42));
//!
//! let mut ctx = ValidationContext::collect_all();
//! ctx.verify().positive(-1).positive(-2);
//! assert_eq!(context_to_result(ctx).unwrap_err().len(), 2);
//! ```

use crate::context::ValidationContext;
use crate::types::{Business, BusinessError, MultiBusiness, Outcome};

impl<T> From<Result<T, Business>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Business>) -> Self {
        result_to_outcome(result)
    }
}

impl<T> From<Outcome<T>> for Result<Option<T>, Business> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Business> for Outcome<T> {
    #[inline]
    fn from(error: Business) -> Self {
        Outcome::failure(error)
    }
}

impl From<Business> for BusinessError {
    #[inline]
    fn from(error: Business) -> Self {
        BusinessError::Single(error)
    }
}

impl From<MultiBusiness> for BusinessError {
    /// A one-element aggregate stays an aggregate.
    #[inline]
    fn from(errors: MultiBusiness) -> Self {
        BusinessError::Aggregate(errors)
    }
}

/// Converts a `Result` into an [`Outcome`] carrying the `Ok` value.
///
/// # Examples
///
/// ```
/// use guard_rail::convert::result_to_outcome;
/// use guard_rail::{Business, ResponseCode};
///
/// let failed: Result<u8, Business> = Err(Business::of(ResponseCode::new(40003)));
/// assert_eq!(result_to_outcome(failed).error().map(|e| e.code()), Some(40003));
/// ```
#[inline]
pub fn result_to_outcome<T>(result: Result<T, Business>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::failure(error),
    }
}

/// Converts an `Option`-returning result, keeping an absent value absent.
#[inline]
pub fn optional_result_to_outcome<T>(result: Result<Option<T>, Business>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::failure(error),
    }
}

/// Collects failures into a boundary error.
///
/// # Returns
///
/// * `Ok(())` if no errors
/// * `Err(BusinessError::Single)` for exactly one
/// * `Err(BusinessError::Aggregate)` for two or more
///
/// # Examples
///
/// ```
/// use guard_rail::convert::collect_errors;
/// use guard_rail::{Business, ResponseCode};
///
/// assert!(collect_errors(Vec::<Business>::new()).is_ok());
///
/// let errors = vec![Business::of(ResponseCode::new(1)), Business::of(ResponseCode::new(2))];
/// assert!(collect_errors(errors).unwrap_err().is_aggregate());
/// ```
#[inline]
pub fn collect_errors<I>(errors: I) -> Result<(), BusinessError>
where
    I: IntoIterator<Item = Business>,
{
    match BusinessError::from_errors(errors) {
        None => Ok(()),
        Some(error) => Err(error),
    }
}

/// The final state of a pass as a `Result`; see [`ValidationContext::into_result`].
#[inline]
pub fn context_to_result(ctx: ValidationContext) -> Result<(), BusinessError> {
    ctx.into_result()
}

/// Wraps `value` in a success when the pass collected no errors, otherwise
/// fails with the first collected error.
///
/// A context stopped without any error still yields the value.
///
/// # Examples
///
/// ```
/// use guard_rail::convert::context_to_outcome;
/// use guard_rail::ValidationContext;
///
/// let mut ctx = ValidationContext::collect_all();
/// ctx.verify().not_blank("").email("nope");
/// let outcome = context_to_outcome(ctx, "payload");
/// assert_eq!(outcome.error().map(|e| e.code()), Some(40001));
/// ```
pub fn context_to_outcome<T>(ctx: ValidationContext, value: T) -> Outcome<T> {
    match ctx.into_errors().into_iter().next() {
        None => Outcome::success(value),
        Some(first) => Outcome::failure(first),
    }
}

/// Flattens a boundary error back into its individual failures.
///
/// # Examples
///
/// ```
/// use guard_rail::convert::split_errors;
/// use guard_rail::{Business, BusinessError, ResponseCode};
///
/// let err = BusinessError::from(Business::of(ResponseCode::new(7)));
/// let codes: Vec<u32> = split_errors(err).map(|e| e.code()).collect();
/// assert_eq!(codes, vec![7]);
/// ```
#[inline]
pub fn split_errors(error: BusinessError) -> impl ExactSizeIterator<Item = Business> {
    error.into_errors().into_iter()
}
