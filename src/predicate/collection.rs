//! Array predicates
//!
//! [`ArrayPredicate::of`] delegates every element to a child predicate and
//! qualifies the first failure with the element's index.

use serde_json::Value;

use super::{validator_fn, Predicate, Validator};
use crate::context::{Context, Slot};
use crate::report::{format_list, render_value, Failure};

kind_predicate! {
    /// Predicate over array values. Created by [`array`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{array, report_validation, string};
    /// use serde_json::json;
    ///
    /// let tags = array().non_empty().of(string().one_of(["a", "b"]));
    /// assert_eq!(report_validation(&json!(["a", "b"]), &tags), None);
    /// assert_eq!(
    ///     report_validation(&json!(["a", "b", "c"]), &tags).as_deref(),
    ///     Some("Expected property, `2`, to be one of `[\"a\",\"b\"]`, got `c`")
    /// );
    /// ```
    ArrayPredicate
}

/// Create a predicate that accepts any array.
pub fn array() -> ArrayPredicate {
    ArrayPredicate::seeded(validator_fn(Value::is_array, |value| {
        Failure::new(format!("to be an array, got `{}`", render_value(value)))
    }))
}

/// Validator over the elements inside a value; non-arrays fail the test.
fn array_check<T, R>(test: T, report: R) -> impl Validator
where
    T: Fn(&[Value]) -> bool + Send + Sync + 'static,
    R: Fn(&Value) -> String + Send + Sync + 'static,
{
    validator_fn(
        move |value: &Value| value.as_array().is_some_and(|items| test(items)),
        move |value: &Value| Failure::new(report(value)),
    )
}

fn len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

/// Checks each element against a child predicate.
struct Elements {
    slot: Slot,
    predicate: Predicate,
}

impl Elements {
    fn first_failure(&self, value: &Value) -> Option<Failure> {
        value.as_array()?.iter().enumerate().find_map(|(index, item)| {
            self.predicate
                .check(item)
                .err()
                .map(|failure| failure.within(index))
        })
    }
}

impl Validator for Elements {
    fn test(&self, value: &Value, cx: &mut Context) -> bool {
        match self.first_failure(value) {
            Some(failure) => {
                cx.stash(self.slot, failure);
                false
            }
            None => true,
        }
    }

    fn report(&self, value: &Value, cx: &Context) -> Failure {
        cx.get::<Failure>(self.slot)
            .cloned()
            .or_else(|| self.first_failure(value))
            .unwrap_or_else(|| Failure::new(format!("to be an array, got `{}`", render_value(value))))
    }
}

impl ArrayPredicate {
    /// Refine `value` to the elements it holds.
    pub fn check<'v>(&self, value: &'v Value) -> Result<&'v [Value], Failure> {
        self.inner.check(value).and_then(|value| {
            value.as_array().map(Vec::as_slice).ok_or_else(|| {
                Failure::new(format!("to be an array, got `{}`", render_value(value)))
            })
        })
    }

    /// Require no elements.
    #[must_use]
    pub fn empty(&self) -> Self {
        self.add_validator(array_check(
            |items| items.is_empty(),
            |value| format!("to be empty, got `{}`", render_value(value)),
        ))
    }

    /// Require at least one element.
    #[must_use]
    pub fn non_empty(&self) -> Self {
        self.add_validator(array_check(
            |items| !items.is_empty(),
            |_| "to not be empty".to_string(),
        ))
    }

    /// Require exactly `length` elements.
    #[must_use]
    pub fn length(&self, length: usize) -> Self {
        self.add_validator(array_check(
            move |items| items.len() == length,
            move |value| format!("to have length `{}`, got `{}`", length, len(value)),
        ))
    }

    /// Require at least `length` elements.
    #[must_use]
    pub fn min_length(&self, length: usize) -> Self {
        self.add_validator(array_check(
            move |items| items.len() >= length,
            move |value| {
                format!(
                    "to have a minimum length `{}`, got `{}`",
                    length,
                    len(value)
                )
            },
        ))
    }

    /// Require at most `length` elements.
    #[must_use]
    pub fn max_length(&self, length: usize) -> Self {
        self.add_validator(array_check(
            move |items| items.len() <= length,
            move |value| {
                format!(
                    "to have a maximum length `{}`, got `{}`",
                    length,
                    len(value)
                )
            },
        ))
    }

    /// Require every element to satisfy `predicate`.
    ///
    /// The first failing element is reported, qualified with its index.
    #[must_use]
    pub fn of(&self, predicate: impl Into<Predicate>) -> Self {
        self.add_validator(Elements {
            slot: Slot::new(),
            predicate: predicate.into(),
        })
    }

    /// Require every one of `items` to be present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{array, report_validation};
    /// use serde_json::json;
    ///
    /// let p = array().includes([json!("a"), json!(1)]);
    /// assert_eq!(report_validation(&json!([1, "a", true]), &p), None);
    /// assert_eq!(
    ///     report_validation(&json!(["a"]), &p).as_deref(),
    ///     Some("Expected value to include all of `[\"a\",1]`, got `[\"a\"]`")
    /// );
    /// ```
    #[must_use]
    pub fn includes<I, V>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let wanted: Vec<Value> = items.into_iter().map(Into::into).collect();
        let shown = format_list(&wanted, Value::to_string);
        self.add_validator(array_check(
            move |items| wanted.iter().all(|w| items.contains(w)),
            move |value| format!("to include all of `{}`, got `{}`", shown, render_value(value)),
        ))
    }

    /// Require at least one of `items` to be present.
    #[must_use]
    pub fn includes_any<I, V>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let wanted: Vec<Value> = items.into_iter().map(Into::into).collect();
        let shown = format_list(&wanted, Value::to_string);
        self.add_validator(array_check(
            move |items| wanted.iter().any(|w| items.contains(w)),
            move |value| format!("to include any of `{}`, got `{}`", shown, render_value(value)),
        ))
    }
}
