//! Validation passes that collect structured business failures.
//!
//! Checks report [`Business`] failures into a [`ValidationContext`], which
//! either stops at the first failure (fail-fast) or gathers every failure
//! (collect-all). The final state converts into a [`BusinessError`]: a single
//! failure or an aggregate, chosen only by the number of failures.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `guard_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Fail-fast vs collect-all
//!
//! ```
//! use guard_rail::ValidationContext;
//!
//! let run = |mut ctx: ValidationContext| {
//!     ctx.verify().not_blank("").positive(0).email("not-an-email");
//!     ctx.into_result()
//! };
//!
//! assert_eq!(run(ValidationContext::collect_all()).unwrap_err().len(), 3);
//! assert!(!run(ValidationContext::fail_fast()).unwrap_err().is_aggregate());
//! ```
//!
//! ## Overriding the reported code
//!
//! ```
//! use guard_rail::{ResponseCode, ValidationContext, ViolationSpec};
//!
//! let mut ctx = ValidationContext::collect_all();
//! ctx.verify()
//!     .not_blank_with("", ResponseCode::with_message(10001, "name required"))
//!     .min_with(3, 5, |spec: ViolationSpec| spec.detail("quantity below 5"));
//!
//! assert_eq!(ctx.errors()[0].code(), 10001);
//! assert_eq!(ctx.errors()[1].detail(), Some("quantity below 5"));
//! ```
//!
//! ## Outcome
//!
//! ```
//! use guard_rail::{Outcome, ResponseCode};
//!
//! let price = Outcome::success(120u32).map(|cents| cents * 2);
//! assert_eq!(price.get(), Some(&240));
//!
//! let missing: Outcome<u32> = Outcome::failure_code(ResponseCode::new(40400));
//! assert_eq!(missing.get_or_else(0), Some(0));
//! ```

/// Failure accumulation for one validation pass
pub mod context;
/// Declarative constraint violations and their response codes
pub mod constraint;
/// Conversions between Result, Outcome and boundary errors
pub mod convert;
/// Argument validation around an operation
pub mod guard;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Response codes, business failures and the Outcome container
pub mod types;
/// Checks, validators and dispatch
pub mod validation;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use context::*;
pub use convert::*;
pub use guard::{Argument, Guard, Invocation, ValidatorRef};
pub use types::*;
pub use validation::*;
