//! Memoizing cache of shared validator instances.
//!
//! Validators are keyed by their concrete type. The first request for a key
//! constructs the instance under the write lock, so concurrent first use
//! constructs each validator at most once; later requests only take the read
//! lock. A failed construction is not cached.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::ConfigurationError;
use crate::validation::validator::{TypeKey, Validator};

/// Shared, thread-safe validator cache.
///
/// ```
/// use std::sync::Arc;
/// use guard_rail::{MultiTypeValidator, ValidatorRegistry};
///
/// let registry = ValidatorRegistry::new();
/// let first = registry.get_or_init::<MultiTypeValidator>();
/// let second = registry.get_or_init::<MultiTypeValidator>();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct ValidatorRegistry {
    cache: RwLock<HashMap<TypeKey, Arc<dyn Validator>>>,
}

impl ValidatorRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached `V`, constructing it with `init` on first use.
    pub fn get_or_try_init<V, F>(&self, init: F) -> Result<Arc<dyn Validator>, ConfigurationError>
    where
        V: Validator + 'static,
        F: FnOnce() -> Result<V, ConfigurationError>,
    {
        self.resolve(TypeKey::of::<V>(), || init().map(|v| Arc::new(v) as Arc<dyn Validator>))
    }

    /// Returns the cached `V`, constructing it with `Default` on first use.
    pub fn get_or_init<V>(&self) -> Arc<dyn Validator>
    where
        V: Validator + Default + 'static,
    {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let entry = cache.entry(TypeKey::of::<V>());
        Arc::clone(entry.or_insert_with(|| Arc::new(V::default()) as Arc<dyn Validator>))
    }

    /// The cached `V`, if it has been constructed.
    pub fn get<V: Validator + 'static>(&self) -> Option<Arc<dyn Validator>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&TypeKey::of::<V>()).cloned()
    }

    /// Type-erased lookup used by the guard.
    pub(crate) fn resolve<F>(
        &self,
        key: TypeKey,
        init: F,
    ) -> Result<Arc<dyn Validator>, ConfigurationError>
    where
        F: FnOnce() -> Result<Arc<dyn Validator>, ConfigurationError>,
    {
        if let Some(found) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
            return Ok(Arc::clone(found));
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = cache.get(&key) {
            return Ok(Arc::clone(found));
        }

        let validator = init()?;
        tracing::debug!(validator = key.name(), "validator constructed");
        cache.insert(key, Arc::clone(&validator));
        Ok(validator)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ValidatorRegistry").field("validators", &cache.len()).finish()
    }
}
