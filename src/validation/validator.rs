//! Validator contracts and runtime type keys.
//!
//! Values reach validators as `Option<&dyn ValidationTarget>`: `None` stands
//! for an absent argument. A validator declares the [`SupportedType`] it
//! accepts; matching is by exact type, never by subtyping.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{
//!     ResponseCode, SupportedType, Typed, TypedValidator, ValidationContext, Validator,
//! };
//!
//! struct Order {
//!     quantity: u32,
//! }
//!
//! struct OrderValidator;
//!
//! impl TypedValidator for OrderValidator {
//!     type Target = Order;
//!
//!     fn validate(&self, target: Option<&Order>, ctx: &mut ValidationContext) {
//!         match target {
//!             Some(order) => {
//!                 ctx.verify().positive(order.quantity);
//!             },
//!             None => ctx.report_code(ResponseCode::new(40001)),
//!         }
//!     }
//! }
//!
//! let validator = Typed::new(OrderValidator);
//! assert_eq!(validator.supported_type(), SupportedType::of::<Order>());
//!
//! let mut ctx = ValidationContext::collect_all();
//! validator.validate(Some(&Order { quantity: 0 }), &mut ctx);
//! assert_eq!(ctx.errors()[0].code(), 40006);
//! ```

use core::any::{type_name, Any, TypeId};
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use crate::context::ValidationContext;
use crate::types::ConfigurationError;

/// Any `'static` value, viewed for validation.
pub trait ValidationTarget: Any {
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> ValidationTarget for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Stable identifier of a concrete type, resolved at registration time.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    /// Key of the concrete type behind `target`.
    #[inline]
    pub fn of_target(target: &dyn ValidationTarget) -> Self {
        Self { id: target.as_any().type_id(), name: target.type_name() }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The runtime type a validator is willing to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportedType {
    /// Unrestricted.
    #[default]
    Any,
    Exact(TypeKey),
}

impl SupportedType {
    #[inline]
    pub fn of<T: Any>() -> Self {
        Self::Exact(TypeKey::of::<T>())
    }

    /// `true` for `Any`, or when `target` has exactly the declared type.
    pub fn accepts(&self, target: &dyn ValidationTarget) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(key) => target.as_any().type_id() == key.id(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Exact(key) => key.name(),
        }
    }
}

impl Display for SupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validates one argument into a context.
///
/// Implementations are shared between concurrent passes and must keep all
/// per-pass state in the [`ValidationContext`].
pub trait Validator: Send + Sync {
    fn validate(&self, target: Option<&dyn ValidationTarget>, ctx: &mut ValidationContext);

    fn supported_type(&self) -> SupportedType {
        SupportedType::Any
    }

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Validator for a single concrete type; wrap it in [`Typed`] to use it as a
/// [`Validator`].
pub trait TypedValidator: Send + Sync {
    type Target: Any;

    fn validate(&self, target: Option<&Self::Target>, ctx: &mut ValidationContext);
}

/// Adapts a [`TypedValidator`] to the dynamic [`Validator`] contract.
///
/// A target of another type is skipped with a warning.
#[derive(Debug, Clone, Default)]
pub struct Typed<V>(V);

impl<V> Typed<V> {
    #[inline]
    pub const fn new(validator: V) -> Self {
        Self(validator)
    }

    #[inline]
    pub fn inner(&self) -> &V {
        &self.0
    }
}

impl<V: TypedValidator> Validator for Typed<V> {
    fn validate(&self, target: Option<&dyn ValidationTarget>, ctx: &mut ValidationContext) {
        let Some(target) = target else {
            self.0.validate(None, ctx);
            return;
        };

        match target.as_any().downcast_ref::<V::Target>() {
            Some(value) => self.0.validate(Some(value), ctx),
            None => {
                let error = ConfigurationError::TypeMismatch {
                    validator: self.name(),
                    expected: type_name::<V::Target>(),
                    actual: target.type_name(),
                };
                tracing::warn!(%error, "validator skipped");
            },
        }
    }

    fn supported_type(&self) -> SupportedType {
        SupportedType::of::<V::Target>()
    }

    fn name(&self) -> &'static str {
        type_name::<V>()
    }
}
