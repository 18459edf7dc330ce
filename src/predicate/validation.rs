//! Evaluating predicates
//!
//! Every entry point runs the same walk over the validator chain and differs
//! only in what it hands back on failure.

use std::panic::Location;

use serde_json::Value;

use super::Predicate;
use crate::context::Context;
use crate::error::ArgumentError;
use crate::report::Failure;

impl Predicate {
    /// Evaluate the chain against `value`.
    ///
    /// Validators run in order with a fresh [`Context`]; the first one whose
    /// test fails produces the [`Failure`] and no later validator runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::{string, Predicate};
    /// use serde_json::json;
    ///
    /// let p = Predicate::from(string().equals("b"));
    /// assert_eq!(p.check(&json!("b")), Ok(&json!("b")));
    ///
    /// let failure = p.check(&json!("c")).unwrap_err();
    /// assert_eq!(failure.to_string(), "Expected value to be equal to `b`, got `c`");
    /// ```
    pub fn check<'v>(&self, value: &'v Value) -> Result<&'v Value, Failure> {
        match self.first_rejection(value) {
            Some((_, failure)) => Err(failure),
            None => Ok(value),
        }
    }

    fn first_rejection(&self, value: &Value) -> Option<(usize, Failure)> {
        let mut cx = Context::new();
        self.validators()
            .enumerate()
            .find(|(_, validator)| !validator.test(value, &mut cx))
            .map(|(position, validator)| (position, validator.report(value, &cx)))
    }

    /// Top-level evaluation. Child predicates go through [`Predicate::check`]
    /// and are never traced on their own.
    fn evaluate(&self, value: &Value) -> Result<(), Failure> {
        match self.first_rejection(value) {
            Some((position, failure)) => {
                trace_rejection(position, &failure);
                Err(failure)
            }
            None => Ok(()),
        }
    }
}

#[cfg(feature = "tracing")]
fn trace_rejection(position: usize, failure: &Failure) {
    tracing::trace!(position, failure = %failure, "predicate rejected value");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_rejection(_position: usize, _failure: &Failure) {}

/// Returns true if `value` satisfies `predicate`.
///
/// # Example
///
/// ```rust
/// use weir::{is_valid, number, string};
/// use serde_json::json;
///
/// assert!(is_valid(&json!("Hello, World!"), &string()));
/// assert!(!is_valid(&json!("Hello, World!"), &number()));
/// ```
pub fn is_valid<P>(value: &Value, predicate: &P) -> bool
where
    P: AsRef<Predicate> + ?Sized,
{
    predicate.as_ref().evaluate(value).is_ok()
}

/// Assert that `value` satisfies `predicate`.
///
/// The returned [`ArgumentError`] records the location of this call.
///
/// # Example
///
/// ```rust
/// use weir::{object, validate};
/// use serde_json::json;
///
/// assert!(validate(&json!({}), &object()).is_ok());
///
/// let err = validate(&json!("Hello, World!"), &object()).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "Expected value to be of type `Object` but received `string`"
/// );
/// ```
#[track_caller]
pub fn validate<P>(value: &Value, predicate: &P) -> Result<(), ArgumentError>
where
    P: AsRef<Predicate> + ?Sized,
{
    let location = Location::caller();
    match predicate.as_ref().evaluate(value) {
        Ok(()) => Ok(()),
        Err(failure) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                file = location.file(),
                line = location.line(),
                failure = %failure,
                "argument validation failed"
            );
            Err(ArgumentError::at(failure, location))
        }
    }
}

/// Return the failure message, or `None` if `value` satisfies `predicate`.
///
/// # Example
///
/// ```rust
/// use weir::{report_validation, string};
/// use serde_json::json;
///
/// assert_eq!(report_validation(&json!("hi"), &string()), None);
/// assert_eq!(
///     report_validation(&json!(123), &string()).as_deref(),
///     Some("Expected value to be string, got `123`")
/// );
/// ```
pub fn report_validation<P>(value: &Value, predicate: &P) -> Option<String>
where
    P: AsRef<Predicate> + ?Sized,
{
    predicate
        .as_ref()
        .evaluate(value)
        .err()
        .map(|failure| failure.to_string())
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::predicate::{number, object, string, Shape};
    use serde_json::json;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_rejection_is_traced() {
        let _ = report_validation(&json!(1), &string());
        assert!(logs_contain("predicate rejected value"));
        assert!(logs_contain("Expected value to be string, got `1`"));
    }

    #[traced_test]
    #[test]
    fn test_validate_failure_is_logged() {
        let _ = validate(&json!(1), &string());
        assert!(logs_contain("argument validation failed"));
    }

    #[traced_test]
    #[test]
    fn test_success_is_silent() {
        let _ = validate(&json!("ok"), &string());
        assert!(!logs_contain("predicate rejected value"));
    }

    #[traced_test]
    #[test]
    fn test_rejected_alternative_is_not_traced() {
        let p = crate::any!(string(), number());
        assert!(validate(&json!(1), &p).is_ok());
        assert!(!logs_contain("predicate rejected value"));
    }

    #[traced_test]
    #[test]
    fn test_nested_rejection_is_traced_once() {
        let p = object().shape(Shape::new().field("name", string()));
        assert!(!is_valid(&json!({ "name": 1 }), &p));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("predicate rejected value"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one rejection event, got {}", n)),
            }
        });
    }
}
