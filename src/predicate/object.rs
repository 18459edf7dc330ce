//! Object predicates

use serde_json::{Map, Value};

use super::shape::ShapeValidator;
use super::{validator_fn, Predicate, Shape, ShapeMode, Validator};
use crate::context::{Context, Slot};
use crate::report::{kind_name, render_value, Failure};

kind_predicate! {
    /// Predicate over object values. Created by [`object`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::*;
    /// use serde_json::json;
    ///
    /// let headers = object().non_empty().values_of(string());
    /// assert!(is_valid(&json!({ "accept": "text/html" }), &headers));
    /// assert_eq!(
    ///     report_validation(&json!({ "accept": 1 }), &headers).as_deref(),
    ///     Some("Expected property, `accept`, to be string, got `1`")
    /// );
    /// ```
    ObjectPredicate
}

fn kind_failure(value: &Value) -> Failure {
    Failure::new(format!(
        "to be of type `Object` but received `{}`",
        kind_name(value)
    ))
}

/// Create a predicate that accepts any object.
pub fn object() -> ObjectPredicate {
    ObjectPredicate::seeded(validator_fn(Value::is_object, kind_failure))
}

/// Checks every value of an object against a child predicate.
struct Values {
    slot: Slot,
    predicate: Predicate,
}

impl Values {
    fn first_failure(&self, value: &Value) -> Option<Failure> {
        value.as_object()?.iter().find_map(|(key, item)| {
            self.predicate
                .check(item)
                .err()
                .map(|failure| failure.within(key.as_str()))
        })
    }
}

impl Validator for Values {
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
            .unwrap_or_else(|| kind_failure(value))
    }
}

impl ObjectPredicate {
    /// Refine `value` to the map it holds.
    pub fn check<'v>(&self, value: &'v Value) -> Result<&'v Map<String, Value>, Failure> {
        self.inner
            .check(value)
            .and_then(|value| value.as_object().ok_or_else(|| kind_failure(value)))
    }

    /// Check the declared fields of `shape`, ignoring other keys.
    #[must_use]
    pub fn shape(&self, shape: Shape) -> Self {
        self.shape_with(shape, ShapeMode::Partial)
    }

    /// Check the declared fields of `shape` and reject any other key.
    #[must_use]
    pub fn exact_shape(&self, shape: Shape) -> Self {
        self.shape_with(shape, ShapeMode::Exact)
    }

    /// Check `shape` in the given mode.
    #[must_use]
    pub fn shape_with(&self, shape: Shape, mode: ShapeMode) -> Self {
        self.add_validator(ShapeValidator::new(shape, mode))
    }

    /// Check `shape`, exactly if `exact` is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::*;
    /// use serde_json::json;
    ///
    /// let fields = Shape::new().field("id", number());
    /// let value = json!({ "id": 1, "name": "x" });
    ///
    /// assert!(is_valid(&value, &object().with_shape(fields.clone(), false)));
    /// assert!(!is_valid(&value, &object().with_shape(fields, true)));
    /// ```
    #[must_use]
    pub fn with_shape(&self, shape: Shape, exact: bool) -> Self {
        self.shape_with(shape, ShapeMode::from_exact(exact))
    }

    /// Require every value in the object to satisfy `predicate`.
    ///
    /// Values are checked in key order; the first failure is reported,
    /// qualified with its key.
    #[must_use]
    pub fn values_of(&self, predicate: impl Into<Predicate>) -> Self {
        self.add_validator(Values {
            slot: Slot::new(),
            predicate: predicate.into(),
        })
    }

    /// Require no keys.
    #[must_use]
    pub fn empty(&self) -> Self {
        self.add_validator(validator_fn(
            |value| value.as_object().is_some_and(Map::is_empty),
            |value| Failure::new(format!("to be empty, got `{}`", render_value(value))),
        ))
    }

    /// Require at least one key.
    #[must_use]
    pub fn non_empty(&self) -> Self {
        self.add_validator(validator_fn(
            |value| value.as_object().is_some_and(|map| !map.is_empty()),
            |_| Failure::new("to not be empty"),
        ))
    }
}
