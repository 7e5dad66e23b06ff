//! Response codes emitted by the validation core itself.
//!
//! The catalog is plain configuration data handed to the components that
//! need it (contexts, the guard, the constraint bridge). The [`Default`]
//! table uses the `400xx` family:
//!
//! | code  | family |
//! |-------|--------|
//! | 40000 | invalid parameter (fallback) |
//! | 40001 | required / not empty / not blank |
//! | 40002 | size / length |
//! | 40003 | numeric range |
//! | 40004 | email format |
//! | 40005 | pattern |
//! | 40006 | positive |
//! | 40007 | negative |
//! | 40008 | future date |
//! | 40009 | past date |
//! | 40010 | boolean assertion |

use crate::types::ResponseCode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Response code table shared by a validation pass.
///
/// With the `serde` feature the catalog can be loaded from configuration;
/// missing entries fall back to the defaults.
///
/// ```
/// use guard_rail::{CodeCatalog, ResponseCode};
///
/// let catalog = CodeCatalog {
///     required: ResponseCode::from_static(1001, "required"),
///     ..CodeCatalog::default()
/// };
/// assert_eq!(catalog.required.code(), 1001);
/// assert_eq!(catalog.range.code(), 40003);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCatalog {
    pub invalid: ResponseCode,
    pub required: ResponseCode,
    pub size: ResponseCode,
    pub range: ResponseCode,
    pub email: ResponseCode,
    pub pattern: ResponseCode,
    pub positive: ResponseCode,
    pub negative: ResponseCode,
    pub future: ResponseCode,
    pub past: ResponseCode,
    pub assertion: ResponseCode,
    /// Reported when a dispatching validator receives no value.
    pub null_target: ResponseCode,
    /// Reported when no handler is registered for the runtime type; `{}` is
    /// replaced with the type name.
    pub unsupported_type: ResponseCode,
}

impl Default for CodeCatalog {
    fn default() -> Self {
        Self {
            invalid: ResponseCode::from_static(40000, "invalid parameter"),
            required: ResponseCode::from_static(40001, "parameter must not be empty"),
            size: ResponseCode::from_static(40002, "parameter length out of bounds"),
            range: ResponseCode::from_static(40003, "parameter value out of range"),
            email: ResponseCode::from_static(40004, "invalid email format"),
            pattern: ResponseCode::from_static(40005, "parameter does not match pattern"),
            positive: ResponseCode::from_static(40006, "parameter must be positive"),
            negative: ResponseCode::from_static(40007, "parameter must be negative"),
            future: ResponseCode::from_static(40008, "date must be in the future"),
            past: ResponseCode::from_static(40009, "date must be in the past"),
            assertion: ResponseCode::from_static(40010, "assertion failed"),
            null_target: ResponseCode::from_static(40000, "validation target must not be null"),
            unsupported_type: ResponseCode::from_static(40000, "unsupported validation type: {}"),
        }
    }
}
