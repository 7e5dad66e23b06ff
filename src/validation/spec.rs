//! Chain builder attaching a response code and detail to a failing check.
//!
//! Every check prefills a [`ViolationSpec`] with its default code and detail,
//! then hands it to the caller's [`ViolationConfig`] before turning it into a
//! [`Business`]. The config value selects one of four shapes:
//!
//! | argument | effect |
//! |---|---|
//! | `()` | keep the defaults |
//! | `ResponseCode` | override the code |
//! | `(ResponseCode, detail)` | override code and detail |
//! | `\|spec: ViolationSpec\| ...` | arbitrary edits, including a fabricator |
//!
//! # Examples
//!
//! ```
//! use guard_rail::{Business, ResponseCode, ValidationContext, ViolationSpec};
//!
//! const AGE: ResponseCode = ResponseCode::from_static(1003, "age out of range");
//!
//! let mut ctx = ValidationContext::collect_all();
//! ctx.verify()
//!     .in_range_with(200, 0, 150, AGE)
//!     .in_range_with(-1, 0, 150, (AGE, "age must not be negative"))
//!     .in_range_with(300, 0, 150, |spec: ViolationSpec| {
//!         spec.fabricate(|code, _| Business::with_detail(code, "custom").with_method("import"))
//!     });
//!
//! let errors = ctx.errors();
//! assert_eq!(errors[0].code(), 1003);
//! assert_eq!(errors[1].detail(), Some("age must not be negative"));
//! assert_eq!(errors[2].method(), Some("import"));
//! ```

use crate::types::{Business, ResponseCode};

type Fabricator = Box<dyn FnOnce(ResponseCode, Option<String>) -> Business>;

/// Transient description of one violation, consumed once by [`ViolationSpec::build`].
#[must_use]
pub struct ViolationSpec {
    code: ResponseCode,
    detail: Option<String>,
    fabricator: Option<Fabricator>,
}

impl ViolationSpec {
    #[inline]
    pub fn new(code: ResponseCode) -> Self {
        Self { code, detail: None, fabricator: None }
    }

    #[inline]
    pub(crate) fn prefilled(code: ResponseCode, detail: Option<String>) -> Self {
        Self { code, detail, fabricator: None }
    }

    /// Overrides the response code.
    #[inline]
    pub fn code(mut self, code: ResponseCode) -> Self {
        self.code = code;
        self
    }

    /// Overrides the detail.
    #[inline]
    pub fn detail<D>(mut self, detail: D) -> Self
    where
        D: Into<String>,
    {
        self.detail = Some(detail.into());
        self
    }

    /// Drops the detail so the code's own description is shown.
    #[inline]
    pub fn without_detail(mut self) -> Self {
        self.detail = None;
        self
    }

    /// Builds the final error with `fabricator` instead of [`Business::with_detail`].
    #[inline]
    pub fn fabricate<F>(mut self, fabricator: F) -> Self
    where
        F: FnOnce(ResponseCode, Option<String>) -> Business + 'static,
    {
        self.fabricator = Some(Box::new(fabricator));
        self
    }

    #[inline]
    pub fn response_code(&self) -> &ResponseCode {
        &self.code
    }

    #[inline]
    pub fn current_detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn build(self) -> Business {
        match (self.fabricator, self.detail) {
            (Some(fabricate), detail) => fabricate(self.code, detail),
            (None, Some(detail)) => Business::with_detail(self.code, detail),
            (None, None) => Business::of(self.code),
        }
    }
}

impl core::fmt::Debug for ViolationSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViolationSpec")
            .field("code", &self.code)
            .field("detail", &self.detail)
            .field("fabricator", &self.fabricator.is_some())
            .finish()
    }
}

/// Caller-side configuration applied to a prefilled [`ViolationSpec`].
pub trait ViolationConfig {
    fn configure(self, spec: ViolationSpec) -> ViolationSpec;
}

impl ViolationConfig for () {
    #[inline]
    fn configure(self, spec: ViolationSpec) -> ViolationSpec {
        spec
    }
}

impl ViolationConfig for ResponseCode {
    #[inline]
    fn configure(self, spec: ViolationSpec) -> ViolationSpec {
        spec.code(self)
    }
}

impl ViolationConfig for (ResponseCode, &str) {
    #[inline]
    fn configure(self, spec: ViolationSpec) -> ViolationSpec {
        spec.code(self.0).detail(self.1)
    }
}

impl ViolationConfig for (ResponseCode, String) {
    #[inline]
    fn configure(self, spec: ViolationSpec) -> ViolationSpec {
        spec.code(self.0).detail(self.1)
    }
}

impl<F> ViolationConfig for F
where
    F: FnOnce(ViolationSpec) -> ViolationSpec,
{
    #[inline]
    fn configure(self, spec: ViolationSpec) -> ViolationSpec {
        self(spec)
    }
}
