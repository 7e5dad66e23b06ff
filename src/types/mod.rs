//! Value types shared by the whole crate.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{Business, BusinessError, ResponseCode};
//!
//! let code = ResponseCode::with_message(40002, "length must be at most {}");
//! let err = Business::with_detail(code.formatted(&[&32]), "nickname");
//!
//! assert_eq!(err.message(), Some("length must be at most 32"));
//! assert!(!BusinessError::from_errors([err]).unwrap().is_aggregate());
//! ```
use smallvec::SmallVec;

pub mod business;
pub mod catalog;
pub mod config_error;
pub mod outcome;
pub mod response_code;

pub use business::*;
pub use catalog::*;
pub use config_error::*;
pub use outcome::*;
pub use response_code::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, which covers every fail-fast pass
/// without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
