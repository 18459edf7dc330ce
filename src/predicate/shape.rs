//! Object shapes
//!
//! A [`Shape`] maps field names to child predicates. Fields are checked in
//! declaration order and the first failing field is reported, qualified with
//! its name. In [`ShapeMode::Exact`] the object may not carry any key the
//! shape does not declare.
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::*;
//! use serde_json::json;
//!
//! let message = Shape::new().field("message", string());
//!
//! let partial = shape(message.clone());
//! let exact = exact_shape(message);
//!
//! let value = json!({ "message": "hi", "extra": 456 });
//! assert!(is_valid(&value, &partial));
//! assert_eq!(
//!     report_validation(&value, &exact).as_deref(),
//!     Some("Expected property, `extra`, not to exist, got `456`")
//! );
//! ```

use std::collections::HashSet;

use serde_json::Value;

use super::{object, ObjectPredicate, Predicate, Validator};
use crate::context::{Context, Slot};
use crate::report::{kind_name, render_value, Failure};

/// How a shape treats keys it does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Undeclared keys are ignored.
    #[default]
    Partial,
    /// Undeclared keys are rejected.
    Exact,
}

impl ShapeMode {
    /// `Exact` if `exact` is true, `Partial` otherwise.
    pub fn from_exact(exact: bool) -> Self {
        if exact {
            ShapeMode::Exact
        } else {
            ShapeMode::Partial
        }
    }
}

/// Ordered mapping from field name to the predicate its value must satisfy.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    fields: Vec<(String, Predicate)>,
}

impl Shape {
    /// Create a shape with no fields.
    pub fn new() -> Self {
        Shape { fields: Vec::new() }
    }

    /// Declare `name`, checked after every field declared before it.
    ///
    /// Declaring a name twice replaces its predicate but keeps its position.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, predicate: impl Into<Predicate>) -> Self {
        let name = name.into();
        let predicate = predicate.into();
        match self.fields.iter_mut().find(|(declared, _)| *declared == name) {
            Some(entry) => entry.1 = predicate,
            None => self.fields.push((name, predicate)),
        }
        self
    }

    /// Declared fields in check order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.fields.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, P> FromIterator<(K, P)> for Shape
where
    K: Into<String>,
    P: Into<Predicate>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Shape::new(), |shape, (name, predicate)| shape.field(name, predicate))
    }
}

/// Checks an object's fields against a [`Shape`].
pub(crate) struct ShapeValidator {
    slot: Slot,
    shape: Shape,
    declared: HashSet<String>,
    mode: ShapeMode,
}

impl ShapeValidator {
    pub(crate) fn new(shape: Shape, mode: ShapeMode) -> Self {
        let declared = shape.fields.iter().map(|(name, _)| name.clone()).collect();
        ShapeValidator {
            slot: Slot::new(),
            shape,
            declared,
            mode,
        }
    }

    fn first_failure(&self, value: &Value) -> Option<Failure> {
        let Some(map) = value.as_object() else {
            return Some(Failure::new(format!(
                "to be of type `Object` but received `{}`",
                kind_name(value)
            )));
        };

        for (name, predicate) in &self.shape.fields {
            let field = map.get(name).unwrap_or(&Value::Null);
            if let Err(failure) = predicate.check(field) {
                return Some(failure.within(name.as_str()));
            }
        }

        if self.mode == ShapeMode::Exact {
            if let Some((key, extra)) = map.iter().find(|(key, _)| !self.declared.contains(*key)) {
                let failure =
                    Failure::new(format!("not to exist, got `{}`", render_value(extra)));
                return Some(failure.within(key.as_str()));
            }
        }

        None
    }
}

impl Validator for ShapeValidator {
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
            .unwrap_or_else(|| Failure::new(format!("to match shape, got `{}`", render_value(value))))
    }
}

/// Create an object predicate that checks `shape` and ignores other keys.
pub fn shape(shape: Shape) -> ObjectPredicate {
    object().shape(shape)
}

/// Create an object predicate that checks `shape` and rejects other keys.
pub fn exact_shape(shape: Shape) -> ObjectPredicate {
    object().exact_shape(shape)
}
