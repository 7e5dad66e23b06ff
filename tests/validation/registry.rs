use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use guard_rail::{
    ConfigurationError, MultiTypeValidator, ValidationContext, ValidationTarget, Validator,
    ValidatorRegistry,
};

static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

struct SlowValidator;

impl Default for SlowValidator {
    fn default() -> Self {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        SlowValidator
    }
}

impl Validator for SlowValidator {
    fn validate(&self, _: Option<&dyn ValidationTarget>, _: &mut ValidationContext) {}
}

struct Flaky;

impl Validator for Flaky {
    fn validate(&self, _: Option<&dyn ValidationTarget>, _: &mut ValidationContext) {}
}

#[test]
fn concurrent_first_use_constructs_once() {
    let registry = Arc::new(ValidatorRegistry::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_init::<SlowValidator>()
            })
        })
        .collect();

    let instances: Vec<Arc<dyn Validator>> =
        handles.into_iter().map(|handle| handle.join().unwrap()).collect();

    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
    assert!(instances.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert_eq!(registry.len(), 1);
}

#[test]
fn failed_construction_is_not_cached() {
    let registry = ValidatorRegistry::new();

    let failed = registry.get_or_try_init::<Flaky, _>(|| {
        Err(ConfigurationError::instantiation("Flaky", "missing dictionary"))
    });
    assert!(matches!(failed, Err(ConfigurationError::Instantiation { .. })));
    assert!(registry.get::<Flaky>().is_none());

    let recovered = registry.get_or_try_init::<Flaky, _>(|| Ok(Flaky));
    assert!(recovered.is_ok());
    assert!(registry.get::<Flaky>().is_some());
}

#[test]
fn distinct_types_get_distinct_entries() {
    let registry = ValidatorRegistry::new();
    let multi = registry.get_or_init::<MultiTypeValidator>();
    let again = registry.get_or_init::<MultiTypeValidator>();
    let _ = registry.get_or_try_init::<Flaky, _>(|| Ok(Flaky));

    assert!(Arc::ptr_eq(&multi, &again));
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn configuration_errors_name_the_validator() {
    let err = ConfigurationError::instantiation("Flaky", "missing dictionary");

    assert_eq!(err.validator(), "Flaky");
    assert_eq!(err.to_string(), "failed to instantiate validator Flaky: missing dictionary");
}
