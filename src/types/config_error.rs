use core::fmt::{self, Display};

/// A validator could not be used for a call.
///
/// These are configuration faults, not validation failures: the guard logs
/// them and skips the affected validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The validator could not be constructed.
    Instantiation { validator: &'static str, reason: String },
    /// The validator declares a type the argument does not have.
    TypeMismatch { validator: &'static str, expected: &'static str, actual: &'static str },
}

impl ConfigurationError {
    #[inline]
    pub fn instantiation<R>(validator: &'static str, reason: R) -> Self
    where
        R: Into<String>,
    {
        Self::Instantiation { validator, reason: reason.into() }
    }

    #[inline]
    pub fn validator(&self) -> &'static str {
        match self {
            Self::Instantiation { validator, .. } | Self::TypeMismatch { validator, .. } => {
                validator
            },
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instantiation { validator, reason } => {
                write!(f, "failed to instantiate validator {}: {}", validator, reason)
            },
            Self::TypeMismatch { validator, expected, actual } => write!(
                f,
                "validator {} supports {} but the argument is {}",
                validator, expected, actual
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}
