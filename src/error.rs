//! The error returned by [`validate`](crate::validate).

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use crate::report::Failure;

/// A value was rejected by a predicate.
///
/// Carries the rendered diagnostic and the location of the call that
/// asserted the predicate, so the error points at the caller rather than at
/// the predicate's internals.
///
/// # Examples
///
/// ```
/// use weir::{string, validate};
/// use serde_json::json;
///
/// let err = validate(&json!(123), &string()).unwrap_err();
/// assert_eq!(err.message(), "Expected value to be string, got `123`");
/// assert_eq!(err.location().file(), file!());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentError {
    failure: Failure,
    message: String,
    location: &'static Location<'static>,
}

impl ArgumentError {
    /// Create an error anchored at the caller's location.
    #[track_caller]
    pub fn new(failure: Failure) -> Self {
        Self::at(failure, Location::caller())
    }

    /// Create an error anchored at an explicit location.
    pub fn at(failure: Failure, location: &'static Location<'static>) -> Self {
        ArgumentError {
            message: failure.to_string(),
            failure,
            location,
        }
    }

    /// The rendered diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The structured failure behind the message.
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// Where the failing assertion was made.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Consume the error, keeping the structured failure.
    pub fn into_failure(self) -> Failure {
        self.failure
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ArgumentError {}

/// Returns true if `error` is an [`ArgumentError`].
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use weir::{is_argument_error, number, validate};
/// use serde_json::json;
///
/// let err: Box<dyn Error> = Box::new(validate(&json!("1"), &number()).unwrap_err());
/// assert!(is_argument_error(err.as_ref()));
///
/// let other: Box<dyn Error> = "plain".into();
/// assert!(!is_argument_error(other.as_ref()));
/// ```
pub fn is_argument_error(error: &(dyn StdError + 'static)) -> bool {
    error.downcast_ref::<ArgumentError>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_is_message() {
        let err = ArgumentError::new(Failure::new("to be string, got `1`").within("name"));
        assert_eq!(
            format!("{}", err),
            "Expected property, `name`, to be string, got `1`"
        );
        assert_eq!(err.message(), err.failure().to_string());
    }

    #[test]
    fn test_new_records_caller() {
        let line = line!() + 1;
        let err = ArgumentError::new(Failure::new("to be positive, got 0"));
        assert_eq!(err.location().file(), file!());
        assert_eq!(err.location().line(), line);
    }

    #[test]
    fn test_is_argument_error() {
        let err = ArgumentError::new(Failure::new("to be empty, got `x`"));
        assert!(is_argument_error(&err));

        let other = io::Error::other("boom");
        assert!(!is_argument_error(&other));
    }

    #[test]
    fn test_into_failure() {
        let failure = Failure::new("to be empty, got `x`");
        let err = ArgumentError::new(failure.clone());
        assert_eq!(err.into_failure(), failure);
    }
}
