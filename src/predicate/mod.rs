//! Composable predicates over loosely typed values
//!
//! A [`Predicate`] is an immutable, ordered chain of [`Validator`]s. Each
//! value kind has a zero-argument constructor ([`string`], [`number`],
//! [`array`], [`object`]) that seeds the chain with a kind check, and a
//! fluent builder that appends one more validator per call. Building a new
//! predicate never changes the one it was built from.
//!
//! Evaluation walks the chain in order and stops at the first validator
//! whose test fails; only that validator is asked for a report.
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::*;
//! use serde_json::json;
//!
//! let username = string().min_length(3).max_length(20);
//! let user = object().shape(Shape::new().field("name", username.clone()));
//!
//! assert!(is_valid(&json!("alice"), &username));
//! assert_eq!(
//!     report_validation(&json!({ "name": "al" }), &user).as_deref(),
//!     Some("Expected property, `name`, to have a minimum length of `3`, got `al`")
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::Context;
use crate::report::Failure;

/// Generates the builder boilerplate shared by every value kind.
macro_rules! kind_predicate {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            inner: $crate::predicate::Predicate,
        }

        impl $name {
            pub(crate) fn seeded(base: impl $crate::predicate::Validator + 'static) -> Self {
                $name {
                    inner: $crate::predicate::Predicate::new().add_validator(base),
                }
            }

            /// Append a validator, returning a new predicate of the same kind.
            #[must_use]
            pub fn add_validator(&self, validator: impl $crate::predicate::Validator + 'static) -> Self {
                $name {
                    inner: self.inner.add_validator(validator),
                }
            }

            /// The underlying validator chain.
            pub fn predicate(&self) -> &$crate::predicate::Predicate {
                &self.inner
            }
        }

        impl AsRef<$crate::predicate::Predicate> for $name {
            fn as_ref(&self) -> &$crate::predicate::Predicate {
                &self.inner
            }
        }

        impl From<$name> for $crate::predicate::Predicate {
            fn from(kind: $name) -> Self {
                kind.inner
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("validators", &self.inner.len())
                    .finish()
            }
        }
    };
}

mod collection;
mod combinators;
mod number;
mod object;
mod shape;
mod string;
mod validation;

pub mod prelude;

pub use collection::{array, ArrayPredicate};
pub use combinators::{any_of, AnyPredicate};
pub use number::{number, NumberPredicate};
pub use object::{object, ObjectPredicate};
pub use shape::{exact_shape, shape, Shape, ShapeMode};
pub use string::{string, StringPredicate};
pub use validation::{is_valid, report_validation, validate};

/// An atomic check: a test and the report explaining a failed test.
///
/// `test` may stash detail in the [`Context`] under a slot the validator
/// owns; `report` is only ever called right after `test` returned `false`
/// on the same context, and may read that detail back.
///
/// # Example
///
/// ```rust
/// use weir::context::Context;
/// use weir::predicate::{string, Validator};
/// use weir::report::Failure;
/// use serde_json::{json, Value};
///
/// struct NoSpaces;
///
/// impl Validator for NoSpaces {
///     fn test(&self, value: &Value, _cx: &mut Context) -> bool {
///         value.as_str().is_some_and(|s| !s.contains(' '))
///     }
///
///     fn report(&self, value: &Value, _cx: &Context) -> Failure {
///         Failure::new(format!("to have no spaces, got `{}`", value))
///     }
/// }
///
/// let p = string().add_validator(NoSpaces);
/// assert!(weir::is_valid(&json!("a_b"), &p));
/// assert!(!weir::is_valid(&json!("a b"), &p));
/// ```
pub trait Validator: Send + Sync {
    /// Check the value.
    fn test(&self, value: &Value, cx: &mut Context) -> bool;

    /// Explain why `test` rejected the value.
    fn report(&self, value: &Value, cx: &Context) -> Failure;
}

/// A validator built from a pair of closures. See [`validator_fn`].
pub struct FnValidator<T, R> {
    test: T,
    report: R,
}

impl<T, R> Validator for FnValidator<T, R>
where
    T: Fn(&Value) -> bool + Send + Sync,
    R: Fn(&Value) -> Failure + Send + Sync,
{
    #[inline]
    fn test(&self, value: &Value, _cx: &mut Context) -> bool {
        (self.test)(value)
    }

    fn report(&self, value: &Value, _cx: &Context) -> Failure {
        (self.report)(value)
    }
}

impl<T, R> fmt::Debug for FnValidator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Create a context-free validator from a test and a report closure.
///
/// # Example
///
/// ```rust
/// use weir::predicate::{number, validator_fn};
/// use weir::report::Failure;
/// use serde_json::json;
///
/// let even = validator_fn(
///     |v| v.as_i64().is_some_and(|n| n % 2 == 0),
///     |v| Failure::new(format!("to be even, got {}", v)),
/// );
/// let p = number().add_validator(even);
///
/// assert_eq!(
///     weir::report_validation(&json!(3), &p).as_deref(),
///     Some("Expected value to be even, got 3")
/// );
/// ```
pub fn validator_fn<T, R>(test: T, report: R) -> FnValidator<T, R>
where
    T: Fn(&Value) -> bool + Send + Sync,
    R: Fn(&Value) -> Failure + Send + Sync,
{
    FnValidator { test, report }
}

/// An immutable, ordered chain of validators.
///
/// An empty predicate accepts every value. Kind constructors such as
/// [`string`] seed the chain with a kind check.
#[derive(Clone, Default)]
pub struct Predicate {
    validators: Vec<Arc<dyn Validator>>,
}

impl Predicate {
    /// Create a predicate with no validators.
    pub fn new() -> Self {
        Predicate {
            validators: Vec::new(),
        }
    }

    /// Return a new predicate with `validator` appended to this chain.
    ///
    /// Validators already in the chain are shared, not copied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::{string, validator_fn, Predicate};
    /// use weir::report::Failure;
    ///
    /// let base = Predicate::from(string());
    /// let extended = base.add_validator(validator_fn(
    ///     |v| v.as_str() == Some("ok"),
    ///     |_| Failure::new("to be ok"),
    /// ));
    ///
    /// assert_eq!(base.len(), 1);
    /// assert_eq!(extended.len(), 2);
    /// ```
    #[must_use]
    pub fn add_validator(&self, validator: impl Validator + 'static) -> Self {
        let mut validators = Vec::with_capacity(self.validators.len() + 1);
        validators.extend(self.validators.iter().cloned());
        validators.push(Arc::new(validator) as Arc<dyn Validator>);
        Predicate { validators }
    }

    /// Number of validators in the chain.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the chain has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Iterate the chain in evaluation order.
    pub fn validators(&self) -> impl Iterator<Item = &dyn Validator> {
        self.validators.iter().map(|v| &**v)
    }
}

impl AsRef<Predicate> for Predicate {
    fn as_ref(&self) -> &Predicate {
        self
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("validators", &self.validators.len())
            .finish()
    }
}
