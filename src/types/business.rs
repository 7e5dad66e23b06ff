//! Structured business failures and their aggregate forms.
//!
//! - [`Business`]: one violation, a [`ResponseCode`] plus optional detail and
//!   the label of the operation that raised it.
//! - [`MultiBusiness`]: an ordered, never-empty list of violations raised together.
//! - [`BusinessError`]: the boundary value produced from a finished validation pass,
//!   `Single` for exactly one violation and `Aggregate` for two or more.

use core::fmt::{self, Display};

use crate::types::{ErrorVec, ResponseCode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single structured failure.
///
/// # Examples
///
/// ```
/// use guard_rail::{Business, ResponseCode};
///
/// let err = Business::with_detail(
///     ResponseCode::from_static(40001, "parameter must not be empty"),
///     "username is blank",
/// )
/// .with_method("UserService::register");
///
/// assert_eq!(err.code(), 40001);
/// assert_eq!(err.description(), Some("username is blank"));
/// assert_eq!(err.method(), Some("UserService::register"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Business {
    response_code: ResponseCode,
    detail: Option<String>,
    method: Option<String>,
}

impl Business {
    /// Creates a failure carrying only a response code.
    #[inline]
    pub fn of(code: ResponseCode) -> Self {
        Self { response_code: code, detail: None, method: None }
    }

    /// Creates a failure with a user-facing detail.
    #[inline]
    pub fn with_detail<D>(code: ResponseCode, detail: D) -> Self
    where
        D: Into<String>,
    {
        Self { response_code: code, detail: Some(detail.into()), method: None }
    }

    /// Labels the failure with the operation that raised it.
    #[inline]
    pub fn with_method<M>(mut self, method: M) -> Self
    where
        M: Into<String>,
    {
        self.method = Some(method.into());
        self
    }

    #[inline]
    pub fn response_code(&self) -> &ResponseCode {
        &self.response_code
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.response_code.code()
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.response_code.message()
    }

    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[inline]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// User-facing description: the detail, else the code's description,
    /// else the code's message.
    pub fn description(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or_else(|| self.response_code.description())
            .or_else(|| self.response_code.message())
    }
}

impl From<ResponseCode> for Business {
    #[inline]
    fn from(code: ResponseCode) -> Self {
        Self::of(code)
    }
}

impl Display for Business {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.response_code, f)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        if let Some(method) = &self.method {
            write!(f, " (in {})", method)?;
        }
        Ok(())
    }
}

impl std::error::Error for Business {}

/// Several failures raised together, in report order.
///
/// Cannot be empty: [`MultiBusiness::new`] refuses an empty input.
///
/// ```
/// use guard_rail::{Business, MultiBusiness, ResponseCode};
///
/// assert!(MultiBusiness::new(Vec::<Business>::new()).is_none());
///
/// let multi = MultiBusiness::new([
///     Business::of(ResponseCode::new(40001)),
///     Business::of(ResponseCode::new(40003)),
/// ])
/// .unwrap();
/// assert_eq!(multi.len(), 2);
/// assert_eq!(multi.first().code(), 40001);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMultiBusiness"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiBusiness {
    errors: ErrorVec<Business>,
}

/// Wire form of [`MultiBusiness`]; decoding goes through [`MultiBusiness::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMultiBusiness {
    errors: ErrorVec<Business>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMultiBusiness> for MultiBusiness {
    type Error = &'static str;

    fn try_from(raw: RawMultiBusiness) -> Result<Self, Self::Error> {
        MultiBusiness::new(raw.errors).ok_or("aggregate business error must not be empty")
    }
}

impl MultiBusiness {
    /// Collects `errors`, returning `None` when there are none.
    pub fn new<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Business>,
    {
        let errors: ErrorVec<Business> = errors.into_iter().collect();
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    #[inline]
    pub fn errors(&self) -> &[Business] {
        &self.errors
    }

    #[inline]
    pub fn first(&self) -> &Business {
        &self.errors[0]
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Business> {
        self.errors.iter()
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<Business> {
        self.errors
    }
}

impl IntoIterator for MultiBusiness {
    type Item = Business;
    type IntoIter = smallvec::IntoIter<[Business; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiBusiness {
    type Item = &'a Business;
    type IntoIter = core::slice::Iter<'a, Business>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Display for MultiBusiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} business errors", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiBusiness {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.first())
    }
}

/// Outcome of a failed validation pass as seen by the calling layer.
///
/// The variant is chosen only by the number of collected errors.
///
/// ```
/// use guard_rail::{Business, BusinessError, ResponseCode};
///
/// let one = BusinessError::from_errors([Business::of(ResponseCode::new(1))]).unwrap();
/// assert!(!one.is_aggregate());
///
/// let two = BusinessError::from_errors([
///     Business::of(ResponseCode::new(1)),
///     Business::of(ResponseCode::new(2)),
/// ])
/// .unwrap();
/// assert!(two.is_aggregate());
/// assert_eq!(two.len(), 2);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BusinessError {
    Single(Business),
    Aggregate(MultiBusiness),
}

impl BusinessError {
    /// `None` for no errors, `Single` for one, `Aggregate` for several.
    pub fn from_errors<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Business>,
    {
        let mut errors: ErrorVec<Business> = errors.into_iter().collect();
        match errors.len() {
            0 => None,
            1 => errors.pop().map(Self::Single),
            _ => MultiBusiness::new(errors).map(Self::Aggregate),
        }
    }

    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    #[inline]
    pub fn errors(&self) -> &[Business] {
        match self {
            Self::Single(error) => core::slice::from_ref(error),
            Self::Aggregate(multi) => multi.errors(),
        }
    }

    #[inline]
    pub fn first(&self) -> &Business {
        match self {
            Self::Single(error) => error,
            Self::Aggregate(multi) => multi.first(),
        }
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors().len()
    }

    pub fn into_errors(self) -> ErrorVec<Business> {
        match self {
            Self::Single(error) => smallvec::smallvec![error],
            Self::Aggregate(multi) => multi.into_errors(),
        }
    }
}

impl Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(error) => Display::fmt(error, f),
            Self::Aggregate(multi) => Display::fmt(multi, f),
        }
    }
}

impl std::error::Error for BusinessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Single(error) => Some(error),
            Self::Aggregate(multi) => Some(multi),
        }
    }
}
