//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn register(username: &str, age: u32) -> Result<(), BusinessError> {
//!     let mut ctx = ValidationContext::collect_all();
//!     ctx.verify()
//!         .not_blank(username)
//!         .in_range_with(age, 18, 130, ResponseCode::with_message(42201, "too young"));
//!     ctx.into_result()
//! }
//!
//! assert!(register("alice", 30).is_ok());
//! assert!(register(" ", 12).unwrap_err().is_aggregate());
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`ResponseCode`], [`Business`], [`BusinessError`], [`Outcome`], [`CodeCatalog`]
//! - **Validation**: [`ValidationContext`], [`Group`], [`ViolationSpec`], [`Validator`],
//!   [`TypedValidator`], [`Typed`]
//! - **Guard**: [`Guard`], [`Invocation`], [`Argument`], [`ValidatorRef`]

pub use crate::context::{Group, ValidationContext};
pub use crate::guard::{Argument, Guard, Invocation, ValidatorRef};
pub use crate::types::{Business, BusinessError, CodeCatalog, MultiBusiness, Outcome, ResponseCode};
pub use crate::validation::{
    Typed, TypedValidator, ValidationTarget, Validator, ViolationConfig, ViolationSpec,
};

/// Result of an operation guarded by a validation pass.
pub type GuardResult<T> = Result<T, BusinessError>;
