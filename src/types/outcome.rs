//! Success/failure container for business operations.
//!
//! [`Outcome<T>`] is either a success, whose data may be absent, or a failure
//! carrying one [`Business`] error. Absent data is a success, not a failure.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{Business, Outcome, ResponseCode};
//!
//! let ok = Outcome::success(21).map(|x| x * 2);
//! assert_eq!(ok.get(), Some(&42));
//!
//! let failed: Outcome<i32> = Outcome::failure_code(ResponseCode::new(40001));
//! assert_eq!(failed.get_or_else(7), Some(7));
//! ```

use crate::types::{Business, ResponseCode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    Success(Option<T>),
    Failure(Business),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn success(data: T) -> Self {
        Self::Success(Some(data))
    }

    /// A success without data.
    #[inline]
    pub fn empty() -> Self {
        Self::Success(None)
    }

    #[inline]
    pub fn failure(error: Business) -> Self {
        Self::Failure(error)
    }

    #[inline]
    pub fn failure_code(code: ResponseCode) -> Self {
        Self::Failure(Business::of(code))
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The data of a success, if present.
    #[must_use]
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Success(data) => data.as_ref(),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&Business> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// `true` for a success that carries data.
    #[must_use]
    #[inline]
    pub fn exists(&self) -> bool {
        self.get().is_some()
    }

    /// `true` for a success whose data equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.get().is_some_and(|data| data == value)
    }

    /// Present iff this is a success with data.
    #[must_use]
    #[inline]
    pub fn to_optional(&self) -> Option<&T> {
        self.get()
    }

    #[must_use]
    #[inline]
    pub fn into_optional(self) -> Option<T> {
        match self {
            Self::Success(data) => data,
            Self::Failure(_) => None,
        }
    }

    /// Iterates over the data: one item for a success with data, none otherwise.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.get().into_iter()
    }

    /// Maps present data; absent data and failures pass through.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(data) => Outcome::Success(data.map(f)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains another operation on present data.
    ///
    /// A success without data stays an empty success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(Some(data)) => f(data),
            Self::Success(None) => Outcome::Success(None),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The data of a success (possibly absent), or `default` for a failure.
    #[must_use]
    #[inline]
    pub fn get_or_else(self, default: T) -> Option<T> {
        match self {
            Self::Success(data) => data,
            Self::Failure(_) => Some(default),
        }
    }

    /// The data of a success (possibly absent), or the handler's value for a failure.
    #[must_use]
    #[inline]
    pub fn get_or_else_get<F>(self, handler: F) -> Option<T>
    where
        F: FnOnce(Business) -> T,
    {
        match self {
            Self::Success(data) => data,
            Self::Failure(error) => Some(handler(error)),
        }
    }

    /// Runs whichever branch applies and wraps its value in a success.
    ///
    /// ```
    /// use guard_rail::{Outcome, ResponseCode};
    ///
    /// let failed: Outcome<u32> = Outcome::failure_code(ResponseCode::new(40003));
    /// let folded = failed.fold(|_| "ok", |_| "recovered");
    /// assert_eq!(folded, Outcome::success("recovered"));
    /// ```
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> Outcome<U>
    where
        S: FnOnce(Option<T>) -> U,
        F: FnOnce(Business) -> U,
    {
        match self {
            Self::Success(data) => Outcome::success(on_success(data)),
            Self::Failure(error) => Outcome::success(on_failure(error)),
        }
    }

    /// Turns a success into a failure carrying `code`, and a failure into an
    /// empty success.
    pub fn swap(self, code: ResponseCode) -> Self {
        match self {
            Self::Success(_) => Self::Failure(Business::of(code)),
            Self::Failure(_) => Self::Success(None),
        }
    }

    /// Runs `f` on the error of a failure, returning `self` unchanged.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Business),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    #[inline]
    pub fn into_result(self) -> Result<Option<T>, Business> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_optional().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
