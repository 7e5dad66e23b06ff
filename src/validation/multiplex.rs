//! Closed-world dispatch of one validator over several concrete types.
//!
//! A [`MultiTypeValidator`] holds one handler per registered type and routes
//! each value by its exact runtime type. An absent value is reported with the
//! catalog's `null_target` code before any lookup; an unregistered type is
//! reported with `unsupported_type`. There is no fallback matching.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{MultiTypeValidator, ValidationContext, Validator};
//!
//! struct Email(String);
//! struct Phone(String);
//!
//! let validator = MultiTypeValidator::new()
//!     .register(|email: &Email, ctx: &mut ValidationContext| {
//!         ctx.verify().email(&email.0);
//!     })
//!     .register(|phone: &Phone, ctx: &mut ValidationContext| {
//!         ctx.verify().length_between(&phone.0, 7, 15);
//!     });
//!
//! let mut ctx = ValidationContext::collect_all();
//! validator.validate(Some(&Email("bob@example.com".into())), &mut ctx);
//! validator.validate(Some(&Phone("12".into())), &mut ctx);
//! validator.validate(Some(&42u8), &mut ctx);
//! validator.validate(None, &mut ctx);
//!
//! let codes: Vec<u32> = ctx.errors().iter().map(|e| e.code()).collect();
//! assert_eq!(codes, vec![40002, 40000, 40000]);
//! assert_eq!(ctx.errors()[1].message(), Some("unsupported validation type: u8"));
//! ```

use core::any::{Any, TypeId};
use core::fmt;
use std::collections::HashMap;

use crate::context::ValidationContext;
use crate::validation::validator::{SupportedType, TypeKey, ValidationTarget, Validator};

type Handler = Box<dyn Fn(&dyn ValidationTarget, &mut ValidationContext) + Send + Sync>;

/// Routes values to per-type handlers.
#[derive(Default)]
pub struct MultiTypeValidator {
    handlers: HashMap<TypeId, (TypeKey, Handler)>,
}

impl MultiTypeValidator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for values of type `T`, replacing any earlier one.
    pub fn register<T, F>(mut self, handler: F) -> Self
    where
        T: Any,
        F: Fn(&T, &mut ValidationContext) + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let erased: Handler = Box::new(move |target, ctx| {
            if let Some(value) = target.as_any().downcast_ref::<T>() {
                handler(value, ctx);
            }
        });
        self.handlers.insert(key.id(), (key, erased));
        self
    }

    pub fn registered_types(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.handlers.values().map(|(key, _)| *key)
    }

    #[inline]
    pub fn supports(&self, key: &TypeKey) -> bool {
        self.handlers.contains_key(&key.id())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Validator for MultiTypeValidator {
    fn validate(&self, target: Option<&dyn ValidationTarget>, ctx: &mut ValidationContext) {
        let Some(target) = target else {
            let code = ctx.catalog().null_target.clone();
            ctx.report_code(code);
            return;
        };

        let key = TypeKey::of_target(target);
        match self.handlers.get(&key.id()) {
            Some((_, handler)) => handler(target, ctx),
            None => {
                let code = ctx.catalog().unsupported_type.formatted(&[&key.name()]);
                ctx.report_code(code);
            },
        }
    }

    /// The only registered type, or `Any` when zero or several are registered.
    fn supported_type(&self) -> SupportedType {
        let mut keys = self.registered_types();
        match (keys.next(), keys.next()) {
            (Some(key), None) => SupportedType::Exact(key),
            _ => SupportedType::Any,
        }
    }
}

impl fmt::Debug for MultiTypeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiTypeValidator")
            .field("types", &self.registered_types().map(|k| k.name()).collect::<Vec<_>>())
            .finish()
    }
}
