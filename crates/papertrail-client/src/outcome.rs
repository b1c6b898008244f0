//! Result of one PaperTrail request
//!
//! [`Outcome`] is what the engine hands back for every request that was
//! actually attempted: either the decoded success payload or the service's
//! [`ErrorEntity`]. Exactly one of the two is present.

use papertrail_core::domain::ErrorEntity;

/// Success payload or remote failure of one request
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// 2xx response decoded into the expected shape
    Success(T),
    /// Non-2xx response, or no response at all
    Failure(ErrorEntity),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Converts into the success payload, discarding a failure
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts into the failure payload, discarding a success
    pub fn failure(self) -> Option<ErrorEntity> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrows the failure payload, if any
    pub fn as_failure(&self) -> Option<&ErrorEntity> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Maps the success payload, leaving a failure untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `f` with the failure payload, if any, and returns `self`
    pub fn inspect_failure<F: FnOnce(&ErrorEntity)>(self, f: F) -> Self {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }

    pub fn into_result(self) -> Result<T, ErrorEntity> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorEntity> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, ErrorEntity>> for Outcome<T> {
    fn from(result: Result<T, ErrorEntity>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}
