//! Immutable `(code, message, description)` triples identifying an error kind.
//!
//! # Examples
//!
//! ```
//! use guard_rail::ResponseCode;
//!
//! let code = ResponseCode::with_message(40003, "{} must be between {} and {}");
//! assert_eq!(
//!     code.format_message(&[&"age", &18, &65]).as_deref(),
//!     Some("age must be between 18 and 65")
//! );
//! ```

use core::fmt::{self, Display, Write};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one kind of business failure.
///
/// Missing fields stay `None`; nothing is defaulted at construction time.
/// Equality is by value.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResponseCode {
    code: u32,
    message: Option<Cow<'static, str>>,
    description: Option<Cow<'static, str>>,
}

impl ResponseCode {
    /// Creates a code without message or description.
    #[inline]
    pub const fn new(code: u32) -> Self {
        Self { code, message: None, description: None }
    }

    /// Creates a code with a message template.
    #[inline]
    pub fn with_message<M>(code: u32, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { code, message: Some(message.into()), description: None }
    }

    /// Creates a code with message template and description.
    #[inline]
    pub fn full<M, D>(code: u32, message: M, description: D) -> Self
    where
        M: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self { code, message: Some(message.into()), description: Some(description.into()) }
    }

    /// Creates a code from static text, usable in `const` tables.
    #[inline]
    pub const fn from_static(code: u32, message: &'static str) -> Self {
        Self { code, message: Some(Cow::Borrowed(message)), description: None }
    }

    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Substitutes positional arguments into the message template.
    ///
    /// `{}` consumes the next argument, `{N}` picks argument `N`, `{{` and `}}`
    /// produce literal braces. Placeholders without a matching argument are
    /// kept verbatim. Returns `None` when there is no template.
    ///
    /// ```
    /// use guard_rail::ResponseCode;
    ///
    /// let code = ResponseCode::with_message(40000, "{1} then {0}, {2} is missing");
    /// assert_eq!(
    ///     code.format_message(&[&"a", &"b"]).as_deref(),
    ///     Some("b then a, {2} is missing")
    /// );
    /// assert_eq!(ResponseCode::new(40000).format_message(&[&1]), None);
    /// ```
    #[must_use]
    pub fn format_message(&self, args: &[&dyn Display]) -> Option<String> {
        self.message.as_deref().map(|template| substitute(template, args))
    }

    /// Returns a copy whose message template has been formatted with `args`.
    ///
    /// A code without a template is returned unchanged.
    pub fn formatted(&self, args: &[&dyn Display]) -> Self {
        Self {
            code: self.code,
            message: self.format_message(args).map(Cow::Owned).or_else(|| self.message.clone()),
            description: self.description.clone(),
        }
    }
}

impl Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "[{}] {}", self.code, message),
            None => write!(f, "[{}]", self.code),
        }
    }
}

fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            },
            '{' => {
                let rest = &template[start + 1..];
                let Some(len) = rest.find('}') else {
                    out.push('{');
                    continue;
                };
                let key = &rest[..len];
                let index = if key.is_empty() {
                    next += 1;
                    Some(next - 1)
                } else {
                    key.parse::<usize>().ok()
                };

                match index.and_then(|i| args.get(i)) {
                    Some(arg) => {
                        let _ = write!(out, "{}", arg);
                    },
                    None => out.push_str(&template[start..start + len + 2]),
                }

                let close = start + 1 + len;
                while matches!(chars.peek(), Some((i, _)) if *i <= close) {
                    chars.next();
                }
            },
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            },
            _ => out.push(c),
        }
    }

    out
}
