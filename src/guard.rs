//! Explicit call wrapper that validates arguments before an operation runs.
//!
//! An [`Invocation`] describes one call: the operation label, the validation
//! mode, the active groups and every [`Argument`] with the validators bound to
//! it. [`Guard::proceed`] runs the validation pass and only invokes the
//! continuation when no failure was collected.
//!
//! Pass order:
//!
//! 1. constrained arguments are handed to the [`ConstraintEngine`], each
//!    violation becomes one [`Business`];
//! 2. bound validators run in argument order, then declaration order.
//!
//! The pass ends as soon as the context is stopped. An absent value goes to
//! the validator as `None` before any type filtering; a present value whose
//! type the validator does not support is skipped with a warning, as is a
//! validator that cannot be constructed.
//!
//! # Examples
//!
//! ```
//! use guard_rail::guard::{Argument, Guard, Invocation, ValidatorRef};
//! use guard_rail::{TypedValidator, ValidationContext};
//!
//! #[derive(Default)]
//! struct Username;
//!
//! impl TypedValidator for Username {
//!     type Target = String;
//!
//!     fn validate(&self, target: Option<&String>, ctx: &mut ValidationContext) {
//!         ctx.verify().not_null(&target);
//!         if let Some(name) = target {
//!             ctx.verify().not_blank(name).length_between(name, 3, 16);
//!         }
//!     }
//! }
//!
//! let guard = Guard::new();
//! let name = String::from("al");
//! let invocation = Invocation::new("UserService::register")
//!     .argument(Argument::of("username", &name).validated_by(ValidatorRef::typed::<Username>()));
//!
//! let err = guard.proceed(&invocation, || "registered").unwrap_err();
//! assert_eq!(err.first().code(), 40002);
//! assert_eq!(err.first().method(), Some("UserService::register"));
//! ```

use core::any::Any;
use core::fmt;
use std::borrow::Cow;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::constraint::ConstraintEngine;
use crate::context::{Group, ValidationContext};
use crate::types::{Business, BusinessError, CodeCatalog, ConfigurationError};
use crate::validation::{
    TypeKey, Typed, TypedValidator, ValidationTarget, Validator, ValidatorRegistry,
};

type Initializer = Arc<dyn Fn() -> Result<Arc<dyn Validator>, ConfigurationError> + Send + Sync>;

/// A validator bound to an argument.
#[derive(Clone)]
pub enum ValidatorRef {
    /// An instance owned by the caller.
    Shared(Arc<dyn Validator>),
    /// An instance taken from the guard's [`ValidatorRegistry`], constructed on
    /// first use.
    Cached { key: TypeKey, init: Initializer },
}

impl ValidatorRef {
    #[inline]
    pub fn shared(validator: Arc<dyn Validator>) -> Self {
        Self::Shared(validator)
    }

    #[inline]
    pub fn instance<V>(validator: V) -> Self
    where
        V: Validator + 'static,
    {
        Self::Shared(Arc::new(validator))
    }

    /// Registry-cached `V`, built with `Default`.
    pub fn cached<V>() -> Self
    where
        V: Validator + Default + 'static,
    {
        let init: Initializer = Arc::new(|| {
            let validator: Arc<dyn Validator> = Arc::new(V::default());
            Ok::<_, ConfigurationError>(validator)
        });
        Self::Cached { key: TypeKey::of::<V>(), init }
    }

    /// Registry-cached [`TypedValidator`], built with `Default`.
    pub fn typed<V>() -> Self
    where
        V: TypedValidator + Default + 'static,
    {
        Self::cached::<Typed<V>>()
    }

    /// Registry-cached `V`, built by a fallible constructor.
    ///
    /// A failed construction is retried on the next call.
    pub fn cached_with<V, F>(init: F) -> Self
    where
        V: Validator + 'static,
        F: Fn() -> Result<V, ConfigurationError> + Send + Sync + 'static,
    {
        let init: Initializer =
            Arc::new(move || init().map(|validator| Arc::new(validator) as Arc<dyn Validator>));
        Self::Cached { key: TypeKey::of::<V>(), init }
    }

    /// Type name of the referenced validator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shared(validator) => validator.name(),
            Self::Cached { key, .. } => key.name(),
        }
    }

    fn resolve(&self, registry: &ValidatorRegistry) -> Result<Arc<dyn Validator>, ConfigurationError> {
        match self {
            Self::Shared(validator) => Ok(Arc::clone(validator)),
            Self::Cached { key, init } => registry.resolve(*key, || init()),
        }
    }
}

impl fmt::Debug for ValidatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared(_) => f.debug_tuple("Shared").field(&self.name()).finish(),
            Self::Cached { key, .. } => f.debug_tuple("Cached").field(&key.name()).finish(),
        }
    }
}

/// One declared argument of an [`Invocation`].
pub struct Argument<'a> {
    name: Cow<'static, str>,
    value: Option<&'a dyn ValidationTarget>,
    validators: SmallVec<[ValidatorRef; 2]>,
    constrained: bool,
}

impl<'a> Argument<'a> {
    pub fn new<N>(name: N, value: Option<&'a dyn ValidationTarget>) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self { name: name.into(), value, validators: SmallVec::new(), constrained: false }
    }

    /// A present argument value.
    #[inline]
    pub fn of<N, T>(name: N, value: &'a T) -> Self
    where
        N: Into<Cow<'static, str>>,
        T: Any,
    {
        Self::new(name, Some(value as &dyn ValidationTarget))
    }

    /// An argument passed as null.
    #[inline]
    pub fn absent<N>(name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::new(name, None)
    }

    /// Binds a validator; validators run in binding order.
    pub fn validated_by(mut self, validator: ValidatorRef) -> Self {
        self.validators.push(validator);
        self
    }

    /// Marks the argument for the guard's [`ConstraintEngine`].
    pub fn constrained(mut self) -> Self {
        self.constrained = true;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&'a dyn ValidationTarget> {
        self.value
    }

    #[inline]
    pub fn validators(&self) -> &[ValidatorRef] {
        &self.validators
    }

    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.constrained
    }
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("value", &self.value.map(|value| value.type_name()))
            .field("validators", &self.validators)
            .field("constrained", &self.constrained)
            .finish()
    }
}

/// A call about to be guarded.
///
/// Defaults to collect-all mode with no group restriction.
#[derive(Debug)]
pub struct Invocation<'a> {
    method: Cow<'static, str>,
    fail_fast: bool,
    groups: SmallVec<[Group; 2]>,
    arguments: Vec<Argument<'a>>,
}

impl<'a> Invocation<'a> {
    pub fn new<M>(method: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { method: method.into(), fail_fast: false, groups: SmallVec::new(), arguments: Vec::new() }
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = Group>,
    {
        self.groups.extend(groups);
        self
    }

    pub fn argument(mut self, argument: Argument<'a>) -> Self {
        self.arguments.push(argument);
        self
    }

    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[inline]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[inline]
    pub fn arguments(&self) -> &[Argument<'a>] {
        &self.arguments
    }
}

/// Runs validation passes for invocations.
///
/// A guard is cheap to clone and can be shared between threads; all per-call
/// state lives in the [`ValidationContext`] of each pass.
#[derive(Clone, Default)]
pub struct Guard {
    registry: Arc<ValidatorRegistry>,
    catalog: Arc<CodeCatalog>,
    constraints: Option<Arc<dyn ConstraintEngine>>,
}

impl Guard {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares a validator cache with other guards.
    pub fn with_registry(mut self, registry: Arc<ValidatorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<CodeCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Enables declarative constraint checks for constrained arguments.
    pub fn with_constraints<E>(mut self, engine: E) -> Self
    where
        E: ConstraintEngine + 'static,
    {
        self.constraints = Some(Arc::new(engine));
        self
    }

    #[inline]
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    #[inline]
    pub fn catalog(&self) -> &CodeCatalog {
        &self.catalog
    }

    /// Runs the validation pass and returns the final context.
    pub fn check(&self, invocation: &Invocation<'_>) -> ValidationContext {
        let mut ctx = ValidationContext::new(invocation.fail_fast)
            .with_groups(invocation.groups.iter().copied())
            .with_catalog(Arc::clone(&self.catalog));

        if let Some(engine) = &self.constraints {
            self.run_constraints(engine.as_ref(), invocation, &mut ctx);
        }
        self.run_validators(invocation, &mut ctx);

        tracing::debug!(
            method = invocation.method(),
            errors = ctx.errors().len(),
            stopped = ctx.is_stopped(),
            "validation pass finished"
        );
        ctx
    }

    /// Runs the validation pass; failures are labelled with the method.
    pub fn validate(&self, invocation: &Invocation<'_>) -> Result<(), BusinessError> {
        let ctx = self.check(invocation);
        match label_errors(ctx.into_errors(), invocation.method()) {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }

    /// Validates, then runs `continuation` only when nothing failed.
    pub fn proceed<T, F>(&self, invocation: &Invocation<'_>, continuation: F) -> Result<T, BusinessError>
    where
        F: FnOnce() -> T,
    {
        self.validate(invocation)?;
        Ok(continuation())
    }

    fn run_constraints(
        &self,
        engine: &dyn ConstraintEngine,
        invocation: &Invocation<'_>,
        ctx: &mut ValidationContext,
    ) {
        for argument in invocation.arguments.iter().filter(|argument| argument.constrained) {
            let Some(value) = argument.value else { continue };
            for violation in engine.violations(value, &invocation.groups) {
                if ctx.is_stopped() {
                    return;
                }
                ctx.report_error(violation.to_business(&self.catalog));
            }
        }
    }

    fn run_validators(&self, invocation: &Invocation<'_>, ctx: &mut ValidationContext) {
        for argument in &invocation.arguments {
            for reference in &argument.validators {
                if ctx.is_stopped() {
                    return;
                }

                let validator = match reference.resolve(&self.registry) {
                    Ok(validator) => validator,
                    Err(error) => {
                        tracing::warn!(argument = argument.name(), %error, "validator skipped");
                        continue;
                    },
                };

                match argument.value {
                    None => validator.validate(None, ctx),
                    Some(value) if validator.supported_type().accepts(value) => {
                        validator.validate(Some(value), ctx)
                    },
                    Some(value) => {
                        let error = ConfigurationError::TypeMismatch {
                            validator: validator.name(),
                            expected: validator.supported_type().name(),
                            actual: value.type_name(),
                        };
                        tracing::warn!(argument = argument.name(), %error, "validator skipped");
                    },
                }
            }
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("registry", &self.registry)
            .field("catalog", &self.catalog)
            .field("constraints", &self.constraints.is_some())
            .finish()
    }
}

/// Labels each error with `method`, as [`Guard::validate`] does.
pub fn label_errors<I>(errors: I, method: &str) -> Option<BusinessError>
where
    I: IntoIterator<Item = Business>,
{
    BusinessError::from_errors(errors.into_iter().map(|error| error.with_method(method)))
}
