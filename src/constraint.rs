//! Conversion of declarative constraint violations into [`Business`] errors.
//!
//! A [`ConstraintEngine`] is an opaque checker (annotation/derive based
//! validation, a schema validator, ...) that yields raw
//! [`ConstraintViolation`] records. Each record becomes exactly one
//! [`Business`]: the code is looked up by constraint kind in the
//! [`CodeCatalog`], the message is the violation's message, and the detail is
//! `当前:<field>-><value>` with `null` for a missing value.
//!
//! # Examples
//!
//! ```
//! use guard_rail::constraint::ConstraintViolation;
//! use guard_rail::CodeCatalog;
//!
//! let violation = ConstraintViolation::new("NotBlank", "must not be blank", "username");
//! let error = violation.to_business(&CodeCatalog::default());
//!
//! assert_eq!(error.code(), 40001);
//! assert_eq!(error.message(), Some("must not be blank"));
//! assert_eq!(error.detail(), Some("当前:username->null"));
//! ```

use core::fmt::{self, Display};

use crate::context::Group;
use crate::types::{Business, CodeCatalog, ResponseCode};
use crate::validation::ValidationTarget;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Family of a declarative constraint, deciding its response code.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `NotNull`, `NotEmpty`, `NotBlank`
    Required,
    /// `Size`, `Length`
    Size,
    /// `Min`, `Max`, `DecimalMin`, `DecimalMax`
    Range,
    Email,
    Pattern,
    /// `Positive`, `PositiveOrZero`
    Positive,
    /// `Negative`, `NegativeOrZero`
    Negative,
    /// `Future`, `FutureOrPresent`
    Future,
    /// `Past`, `PastOrPresent`
    Past,
    /// `AssertTrue`, `AssertFalse`
    Assertion,
    Other,
}

impl ConstraintKind {
    /// Classifies a constraint by its simple or qualified name, e.g.
    /// `NotBlank` or `jakarta.validation.constraints.NotBlank`.
    ///
    /// ```
    /// use guard_rail::constraint::ConstraintKind;
    ///
    /// assert_eq!(ConstraintKind::from_annotation("validator::Length"), ConstraintKind::Size);
    /// assert_eq!(ConstraintKind::from_annotation("Custom"), ConstraintKind::Other);
    /// ```
    pub fn from_annotation(name: &str) -> Self {
        let simple = name.rsplit(|c: char| c == '.' || c == ':' || c == '$').next().unwrap_or(name);
        match simple {
            "NotNull" | "NotEmpty" | "NotBlank" => Self::Required,
            "Size" | "Length" => Self::Size,
            "Min" | "Max" | "DecimalMin" | "DecimalMax" => Self::Range,
            "Email" => Self::Email,
            "Pattern" => Self::Pattern,
            "Positive" | "PositiveOrZero" => Self::Positive,
            "Negative" | "NegativeOrZero" => Self::Negative,
            "Future" | "FutureOrPresent" => Self::Future,
            "Past" | "PastOrPresent" => Self::Past,
            "AssertTrue" | "AssertFalse" => Self::Assertion,
            _ => Self::Other,
        }
    }

    /// The catalog entry for this family.
    pub fn response_code<'c>(&self, catalog: &'c CodeCatalog) -> &'c ResponseCode {
        match self {
            Self::Required => &catalog.required,
            Self::Size => &catalog.size,
            Self::Range => &catalog.range,
            Self::Email => &catalog.email,
            Self::Pattern => &catalog.pattern,
            Self::Positive => &catalog.positive,
            Self::Negative => &catalog.negative,
            Self::Future => &catalog.future,
            Self::Past => &catalog.past,
            Self::Assertion => &catalog.assertion,
            Self::Other => &catalog.invalid,
        }
    }
}

/// One raw violation produced by a [`ConstraintEngine`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    constraint: String,
    message: String,
    property_path: String,
    invalid_value: Option<String>,
}

impl ConstraintViolation {
    pub fn new<C, M, P>(constraint: C, message: M, property_path: P) -> Self
    where
        C: Into<String>,
        M: Into<String>,
        P: Into<String>,
    {
        Self {
            constraint: constraint.into(),
            message: message.into(),
            property_path: property_path.into(),
            invalid_value: None,
        }
    }

    /// Records the rejected value, rendered for display.
    pub fn with_invalid_value<V: Display>(mut self, value: V) -> Self {
        self.invalid_value = Some(value.to_string());
        self
    }

    #[inline]
    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    #[inline]
    pub fn invalid_value(&self) -> Option<&str> {
        self.invalid_value.as_deref()
    }

    #[inline]
    pub fn kind(&self) -> ConstraintKind {
        ConstraintKind::from_annotation(&self.constraint)
    }

    /// `当前:<field>-><value>`, with `null` for a missing value.
    pub fn detail(&self) -> String {
        format!("当前:{}->{}", self.property_path, self.invalid_value.as_deref().unwrap_or("null"))
    }

    pub fn to_business(&self, catalog: &CodeCatalog) -> Business {
        let code = self.kind().response_code(catalog).code();
        Business::with_detail(ResponseCode::with_message(code, self.message.clone()), self.detail())
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.property_path, self.constraint, self.message)
    }
}

/// Opaque declarative checker consulted by the guard for constrained arguments.
pub trait ConstraintEngine: Send + Sync {
    /// Violations of `target` under the active `groups`, in engine order.
    fn violations(&self, target: &dyn ValidationTarget, groups: &[Group])
        -> Vec<ConstraintViolation>;
}
