use thiserror::Error;

/// Errors raised by CPF operations when an argument fails its preconditions.
///
/// A well-formed argument that simply does not hold a valid CPF is not an
/// error: [`validate`](super::validate) answers `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CpfError {
    /// A required argument was absent.
    #[error("argument '{argument}' must not be null")]
    NullArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// A required argument was present but unusable.
    #[error("argument '{argument}' is invalid: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Human-readable description of what is wrong.
        reason: String,
    },
}

impl CpfError {
    /// Shorthand for [`CpfError::NullArgument`].
    pub fn null(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    /// Shorthand for [`CpfError::InvalidArgument`].
    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Name of the argument this error refers to.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::NullArgument { argument } | Self::InvalidArgument { argument, .. } => argument,
        }
    }
}
