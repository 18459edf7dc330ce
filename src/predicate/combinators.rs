//! OR composition of predicates
//!
//! [`any_of`] (or the [`any!`](crate::any) macro) accepts a value when at
//! least one child predicate does. When none does, the report lists every
//! child's message in declaration order, one bullet each, re-indenting
//! nested lines by two spaces so nested combinators read as a tree.

use serde_json::Value;

use super::{Predicate, Validator};
use crate::context::{Context, Slot};
use crate::report::{render_value, Failure};

kind_predicate! {
    /// Predicate satisfied by any of its children. Created by [`any_of`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{any, report_validation, string};
    /// use serde_json::json;
    ///
    /// let p = any!(string().equals("a"), string().equals("b"));
    /// assert_eq!(report_validation(&json!("b"), &p), None);
    /// assert_eq!(
    ///     report_validation(&json!("c"), &p).as_deref(),
    ///     Some(
    ///         "Expected value to match any of following conditions\n\
    ///          - Expected value to be equal to `a`, got `c`\n\
    ///          - Expected value to be equal to `b`, got `c`"
    ///     )
    /// );
    /// ```
    AnyPredicate
}

const HEADING: &str = "to match any of following conditions";

/// Passes if any child predicate passes.
struct AnyOf {
    slot: Slot,
    children: Vec<Predicate>,
}

impl AnyOf {
    fn failures(&self, value: &Value) -> Option<Vec<Failure>> {
        let mut failures = Vec::with_capacity(self.children.len());
        for child in &self.children {
            match child.check(value) {
                Ok(_) => return None,
                Err(failure) => failures.push(failure),
            }
        }
        Some(failures)
    }
}

fn render(failures: &[Failure]) -> Failure {
    let mut expectation = String::from(HEADING);
    for failure in failures {
        expectation.push_str("\n- ");
        expectation.push_str(&failure.to_string().replace('\n', "\n  "));
    }
    Failure::new(expectation)
}

impl Validator for AnyOf {
    fn test(&self, value: &Value, cx: &mut Context) -> bool {
        match self.failures(value) {
            Some(failures) => {
                cx.stash(self.slot, failures);
                false
            }
            None => true,
        }
    }

    fn report(&self, value: &Value, cx: &Context) -> Failure {
        match cx.get::<Vec<Failure>>(self.slot) {
            Some(failures) => render(failures),
            None => match self.failures(value) {
                Some(failures) => render(&failures),
                None => Failure::new(format!("{}, got `{}`", HEADING, render_value(value))),
            },
        }
    }
}

/// Create a predicate satisfied by any of `predicates`.
///
/// # Panics
///
/// Panics if `predicates` is empty.
///
/// # Example
///
/// ```rust
/// use weir::predicate::{any_of, is_valid, number, string, Predicate};
/// use serde_json::json;
///
/// let id = any_of([Predicate::from(string().non_empty()), number().integer().into()]);
/// assert!(is_valid(&json!("abc"), &id));
/// assert!(is_valid(&json!(7), &id));
/// assert!(!is_valid(&json!(null), &id));
/// ```
pub fn any_of<I, P>(predicates: I) -> AnyPredicate
where
    I: IntoIterator<Item = P>,
    P: Into<Predicate>,
{
    let children: Vec<Predicate> = predicates.into_iter().map(Into::into).collect();
    assert!(
        !children.is_empty(),
        "any_of requires at least one predicate"
    );
    AnyPredicate::seeded(AnyOf {
        slot: Slot::new(),
        children,
    })
}

/// Create a predicate satisfied by any of the given predicates.
///
/// Each argument may be any predicate kind.
///
/// # Example
///
/// ```rust
/// use weir::{any, array, is_valid, string};
/// use serde_json::json;
///
/// let p = any!(string(), array().of(string()));
/// assert!(is_valid(&json!("a"), &p));
/// assert!(is_valid(&json!(["a", "b"]), &p));
/// assert!(!is_valid(&json!(1), &p));
/// ```
#[macro_export]
macro_rules! any {
    ($($predicate:expr),+ $(,)?) => {
        $crate::predicate::any_of([$($crate::predicate::Predicate::from($predicate)),+])
    };
}
