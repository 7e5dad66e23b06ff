//! Checks, validators and dispatch.
//!
//! - [`Verifier`]: the fluent check library, reached through
//!   [`ValidationContext::verify`](crate::ValidationContext::verify).
//! - [`ViolationSpec`] / [`ViolationConfig`]: per-check overrides of the
//!   reported code and detail.
//! - [`Validator`], [`TypedValidator`], [`MultiTypeValidator`]: validators
//!   over dynamically typed arguments.
//! - [`ValidatorRegistry`]: shared validator instances.
//!
//! # Examples
//!
//! ```
//! use guard_rail::validation::{Validator, ValidatorRegistry};
//! use guard_rail::ValidationContext;
//!
//! #[derive(Default)]
//! struct Usernames;
//!
//! impl Validator for Usernames {
//!     fn validate(
//!         &self,
//!         target: Option<&dyn guard_rail::ValidationTarget>,
//!         ctx: &mut ValidationContext,
//!     ) {
//!         let name = target.and_then(|t| t.as_any().downcast_ref::<String>());
//!         ctx.verify().not_null(&name);
//!     }
//! }
//!
//! let registry = ValidatorRegistry::new();
//! let validator = registry.get_or_init::<Usernames>();
//!
//! let mut ctx = ValidationContext::collect_all();
//! validator.validate(None, &mut ctx);
//! assert_eq!(ctx.errors().len(), 1);
//! ```
pub mod checks;
pub mod multiplex;
pub mod registry;
pub mod spec;
pub mod validator;

pub use self::checks::{Emptiness, Verifier};
pub use self::multiplex::MultiTypeValidator;
pub use self::registry::ValidatorRegistry;
pub use self::spec::{ViolationConfig, ViolationSpec};
pub use self::validator::{
    SupportedType, TypeKey, Typed, TypedValidator, ValidationTarget, Validator,
};
