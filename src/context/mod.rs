//! The per-call accumulator of validation failures.
//!
//! A [`ValidationContext`] is created for one validation pass, mutated only
//! through its report/stop operations while checks run, and read once by the
//! driving layer at the end. Fail-fast and collect-all are the same
//! accumulator: in fail-fast mode the first report also stops the context,
//! so at most one error is ever collected.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{ResponseCode, ValidationContext};
//!
//! let mut ctx = ValidationContext::fail_fast();
//! ctx.report_code(ResponseCode::new(40001));
//! ctx.report_code(ResponseCode::new(40003));
//!
//! assert!(ctx.is_stopped());
//! assert_eq!(ctx.errors().len(), 1);
//! assert_eq!(ctx.first_error().map(|e| e.code()), Some(40001));
//! ```

use std::sync::Arc;

use smallvec::SmallVec;

use crate::types::{Business, BusinessError, CodeCatalog, ErrorVec, ResponseCode};
use crate::validation::Verifier;

mod group;

pub use group::Group;

/// Accumulates the failures of one validation pass.
#[derive(Debug)]
pub struct ValidationContext {
    fail_fast: bool,
    groups: SmallVec<[Group; 2]>,
    errors: ErrorVec<Business>,
    stopped: bool,
    catalog: Arc<CodeCatalog>,
}

impl ValidationContext {
    /// Creates an unrestricted context with the default code catalog.
    pub fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            groups: SmallVec::new(),
            errors: ErrorVec::new(),
            stopped: false,
            catalog: Arc::new(CodeCatalog::default()),
        }
    }

    #[inline]
    pub fn fail_fast() -> Self {
        Self::new(true)
    }

    #[inline]
    pub fn collect_all() -> Self {
        Self::new(false)
    }

    /// Restricts the context to the given active groups.
    pub fn with_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = Group>,
    {
        self.groups.extend(groups);
        self
    }

    /// Replaces the code catalog used by checks and dispatching validators.
    #[inline]
    pub fn with_catalog(mut self, catalog: Arc<CodeCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Records a failure unless the context is stopped.
    ///
    /// In fail-fast mode the context stops with the first recorded failure.
    pub fn report_error<B>(&mut self, error: B)
    where
        B: Into<Business>,
    {
        if self.stopped {
            return;
        }

        self.errors.push(error.into());
        if self.fail_fast {
            self.stopped = true;
            tracing::debug!("fail-fast context stopped at first violation");
        }
    }

    #[inline]
    pub fn report_code(&mut self, code: ResponseCode) {
        self.report_error(Business::of(code));
    }

    #[inline]
    pub fn report_detail<D>(&mut self, code: ResponseCode, detail: D)
    where
        D: Into<String>,
    {
        self.report_error(Business::with_detail(code, detail));
    }

    /// Ends the pass: every later report is dropped. Idempotent.
    #[inline]
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// `true` when no groups are configured or any configured group is
    /// compatible with `required`.
    pub fn matches_group(&self, required: &Group) -> bool {
        self.groups.is_empty() || self.groups.iter().any(|group| group.is_compatible_with(required))
    }

    /// Starts a fluent chain of checks reporting into this context.
    ///
    /// ```
    /// use guard_rail::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::collect_all();
    /// ctx.verify().not_blank("  ").in_range(200, 0, 150).email("alice@example.com");
    ///
    /// let codes: Vec<u32> = ctx.errors().iter().map(|e| e.code()).collect();
    /// assert_eq!(codes, vec![40001, 40003]);
    /// ```
    #[inline]
    pub fn verify(&mut self) -> Verifier<'_> {
        Verifier::new(self)
    }

    #[inline]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `true` when errors were reported or the pass was stopped.
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_valid() || self.stopped
    }

    #[inline]
    pub fn has_causes(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors in report order.
    #[inline]
    pub fn errors(&self) -> &[Business] {
        &self.errors
    }

    #[inline]
    pub fn first_error(&self) -> Option<&Business> {
        self.errors.first()
    }

    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[inline]
    pub fn catalog(&self) -> &CodeCatalog {
        &self.catalog
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<Business> {
        self.errors
    }

    /// Converts the final state: `Ok` without errors, otherwise a single or
    /// aggregate [`BusinessError`] depending on the error count.
    pub fn into_result(self) -> Result<(), BusinessError> {
        match BusinessError::from_errors(self.errors) {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::collect_all()
    }
}
