use std::error::Error;
use std::fmt::{self, Display};

use teracada_linear::LinearError;

pub type Result<T> = std::result::Result<T, HostError>;

/// Exception class a host raises for a [`HostError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostErrorKind {
    TypeError,
    IndexError,
    ValueError,
    RuntimeError,
}

/// The core error behind a [`HostError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    TypeMismatch,
    IndexOutOfRange,
    LengthMismatch,
    InsufficientSamples,
    DegenerateInput,
    NotFitted,
    InvalidParameter,
    Other,
}

impl Cause {
    pub fn kind(self) -> HostErrorKind {
        match self {
            Cause::TypeMismatch => HostErrorKind::TypeError,
            Cause::IndexOutOfRange => HostErrorKind::IndexError,
            Cause::LengthMismatch
            | Cause::InsufficientSamples
            | Cause::DegenerateInput
            | Cause::InvalidParameter => HostErrorKind::ValueError,
            Cause::NotFitted | Cause::Other => HostErrorKind::RuntimeError,
        }
    }
}

/// An error as presented to the host: an exception kind and its message
#[derive(Clone, Debug, PartialEq)]
pub struct HostError {
    cause: Cause,
    message: String,
}

impl HostError {
    pub fn new(cause: Cause, message: impl Into<String>) -> Self {
        HostError {
            cause,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> HostErrorKind {
        self.cause.kind()
    }

    pub fn cause(&self) -> Cause {
        self.cause
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind(), self.message)
    }
}

impl Error for HostError {}

impl From<teracada::Error> for HostError {
    fn from(error: teracada::Error) -> HostError {
        let cause = match error {
            teracada::Error::TypeMismatch { .. } => Cause::TypeMismatch,
            teracada::Error::IndexOutOfRange { .. } => Cause::IndexOutOfRange,
            teracada::Error::MismatchedShapes(..) => Cause::LengthMismatch,
            teracada::Error::NotEnoughSamples => Cause::InsufficientSamples,
            teracada::Error::Parameters(_) => Cause::InvalidParameter,
        };
        HostError::new(cause, error.to_string())
    }
}

impl From<LinearError> for HostError {
    fn from(error: LinearError) -> HostError {
        let cause = match error {
            LinearError::LengthMismatch { .. } => Cause::LengthMismatch,
            LinearError::InsufficientSamples(_) => Cause::InsufficientSamples,
            LinearError::DegenerateInput => Cause::DegenerateInput,
            LinearError::NotFitted => Cause::NotFitted,
            LinearError::InvalidVarianceThreshold(_) => Cause::InvalidParameter,
            LinearError::BaseCrate(base) => return base.into(),
        };
        HostError::new(cause, error.to_string())
    }
}
