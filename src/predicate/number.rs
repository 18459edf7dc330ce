//! Number predicates
//!
//! Bounds are `f64`; integers convert with `into()`. JSON numbers are always
//! finite, so there are no finiteness checks.

use serde_json::Value;

use super::{validator_fn, Validator};
use crate::report::{format_list, kind_name, render_number, render_value, Failure};

kind_predicate! {
    /// Predicate over number values. Created by [`number`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{number, report_validation};
    /// use serde_json::json;
    ///
    /// let port = number().integer().in_range(1, 65535);
    /// assert_eq!(report_validation(&json!(8080), &port), None);
    /// assert_eq!(
    ///     report_validation(&json!(70000), &port).as_deref(),
    ///     Some("Expected value to be in range [1...65535], got 70000")
    /// );
    /// ```
    NumberPredicate
}

fn kind_failure(value: &Value) -> Failure {
    Failure::new(format!(
        "to be of type `number` but received `{}`",
        kind_name(value)
    ))
}

/// Create a predicate that accepts any number.
pub fn number() -> NumberPredicate {
    NumberPredicate::seeded(validator_fn(Value::is_number, kind_failure))
}

/// Validator over the number inside a value; non-numbers fail the test.
fn number_check<T, R>(test: T, report: R) -> impl Validator
where
    T: Fn(f64) -> bool + Send + Sync + 'static,
    R: Fn(&Value) -> String + Send + Sync + 'static,
{
    validator_fn(
        move |value: &Value| value.as_f64().is_some_and(&test),
        move |value: &Value| Failure::new(report(value)),
    )
}

impl NumberPredicate {
    /// Refine `value` to the number it holds.
    pub fn check(&self, value: &Value) -> Result<f64, Failure> {
        self.inner
            .check(value)
            .and_then(|value| value.as_f64().ok_or_else(|| kind_failure(value)))
    }

    /// Require `start <= n <= end`.
    #[must_use]
    pub fn in_range(&self, start: impl Into<f64>, end: impl Into<f64>) -> Self {
        let (start, end) = (start.into(), end.into());
        self.add_validator(number_check(
            move |n| start <= n && n <= end,
            move |value| {
                format!(
                    "to be in range [{}...{}], got {}",
                    render_number(start),
                    render_number(end),
                    render_value(value)
                )
            },
        ))
    }

    /// Require `n > target`.
    #[must_use]
    pub fn greater_than(&self, target: impl Into<f64>) -> Self {
        let target = target.into();
        self.add_validator(number_check(
            move |n| n > target,
            move |value| {
                format!(
                    "to be greater than {}, got {}",
                    render_number(target),
                    render_value(value)
                )
            },
        ))
    }

    /// Require `n >= target`.
    #[must_use]
    pub fn greater_than_or_equal(&self, target: impl Into<f64>) -> Self {
        let target = target.into();
        self.add_validator(number_check(
            move |n| n >= target,
            move |value| {
                format!(
                    "to be greater than or equal to {}, got {}",
                    render_number(target),
                    render_value(value)
                )
            },
        ))
    }

    /// Require `n < target`.
    #[must_use]
    pub fn less_than(&self, target: impl Into<f64>) -> Self {
        let target = target.into();
        self.add_validator(number_check(
            move |n| n < target,
            move |value| {
                format!(
                    "to be less than {}, got {}",
                    render_number(target),
                    render_value(value)
                )
            },
        ))
    }

    /// Require `n <= target`.
    #[must_use]
    pub fn less_than_or_equal(&self, target: impl Into<f64>) -> Self {
        let target = target.into();
        self.add_validator(number_check(
            move |n| n <= target,
            move |value| {
                format!(
                    "to be less than or equal to {}, got {}",
                    render_number(target),
                    render_value(value)
                )
            },
        ))
    }

    /// Require `n == target`.
    #[must_use]
    pub fn equal(&self, target: impl Into<f64>) -> Self {
        let target = target.into();
        self.add_validator(number_check(
            move |n| n == target,
            move |value| {
                format!(
                    "to be equal to {}, got {}",
                    render_number(target),
                    render_value(value)
                )
            },
        ))
    }

    /// Require the number to be one of `allowed`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{number, report_validation};
    /// use serde_json::json;
    ///
    /// let p = number().one_of(0..11);
    /// assert_eq!(
    ///     report_validation(&json!(11), &p).as_deref(),
    ///     Some("Expected value to be one of `[0,1,2,3,4,5,6,7,8,9,…+1 more]`, got 11")
    /// );
    /// ```
    #[must_use]
    pub fn one_of<I, N>(&self, allowed: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        let allowed: Vec<f64> = allowed.into_iter().map(Into::into).collect();
        let shown = format_list(&allowed, |n| render_number(*n));
        self.add_validator(number_check(
            move |n| allowed.contains(&n),
            move |value| format!("to be one of `{}`, got {}", shown, render_value(value)),
        ))
    }

    /// Require a whole number.
    #[must_use]
    pub fn integer(&self) -> Self {
        self.add_validator(number_check(
            |n| n.fract() == 0.0,
            |value| format!("to be an integer, got {}", render_value(value)),
        ))
    }

    /// Require `n > 0`.
    #[must_use]
    pub fn positive(&self) -> Self {
        self.add_validator(number_check(
            |n| n > 0.0,
            |value| format!("to be positive, got {}", render_value(value)),
        ))
    }

    /// Require `n < 0`.
    #[must_use]
    pub fn negative(&self) -> Self {
        self.add_validator(number_check(
            |n| n < 0.0,
            |value| format!("to be negative, got {}", render_value(value)),
        ))
    }

    /// Require an integer in `0..=255`.
    #[must_use]
    pub fn uint8(&self) -> Self {
        self.integer().in_range(u8::MIN, u8::MAX)
    }

    /// Require an integer in `0..=65535`.
    #[must_use]
    pub fn uint16(&self) -> Self {
        self.integer().in_range(u16::MIN, u16::MAX)
    }

    /// Require an integer in `0..=4294967295`.
    #[must_use]
    pub fn uint32(&self) -> Self {
        self.integer().in_range(u32::MIN, u32::MAX)
    }

    /// Require an integer in `-128..=127`.
    #[must_use]
    pub fn int8(&self) -> Self {
        self.integer().in_range(i8::MIN, i8::MAX)
    }

    /// Require an integer in `-32768..=32767`.
    #[must_use]
    pub fn int16(&self) -> Self {
        self.integer().in_range(i16::MIN, i16::MAX)
    }

    /// Require an integer in `-2147483648..=2147483647`.
    #[must_use]
    pub fn int32(&self) -> Self {
        self.integer().in_range(i32::MIN, i32::MAX)
    }
}
