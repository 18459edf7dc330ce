//! Testing utilities for code that asserts predicates
//!
//! This module provides assertion macros that print the failure report when
//! they trip, and (behind the `proptest` feature) strategies that generate
//! arbitrary JSON values.
//!
//! # Examples
//!
//! ```rust
//! use weir::{assert_invalid, assert_valid, number, string};
//! use serde_json::json;
//!
//! assert_valid!(json!("hi"), string().non_empty());
//! assert_invalid!(json!(""), string().non_empty());
//! assert_invalid!(json!(-1), number().positive(), "Expected value to be positive, got -1");
//! ```

/// Assert that a value satisfies a predicate.
///
/// Panics with the failure report if it does not.
///
/// # Example
///
/// ```rust
/// use weir::{assert_valid, object};
/// use serde_json::json;
///
/// assert_valid!(json!({}), object());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($value:expr, $predicate:expr) => {
        if let Some(report) = $crate::report_validation(&$value, &$predicate) {
            panic!("Expected valid value, got failure: {}", report);
        }
    };
}

/// Assert that a value fails a predicate, optionally with a specific report.
///
/// # Example
///
/// ```rust
/// use weir::{assert_invalid, string};
/// use serde_json::json;
///
/// assert_invalid!(json!(1), string());
/// assert_invalid!(json!(1), string(), "Expected value to be string, got `1`");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($value:expr, $predicate:expr) => {
        if $crate::report_validation(&$value, &$predicate).is_none() {
            panic!("Expected failure, got valid value: {:?}", $value);
        }
    };
    ($value:expr, $predicate:expr, $expected:expr) => {
        match $crate::report_validation(&$value, &$predicate) {
            Some(report) => assert_eq!(report, $expected),
            None => panic!(
                "Expected failure {:?}, got valid value: {:?}",
                $expected, $value
            ),
        }
    };
}

/// Proptest strategies for JSON values.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;
    use serde_json::{Map, Number, Value};

    /// Any non-container JSON value.
    pub fn arb_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            (-1.0e9..1.0e9f64).prop_map(|n| Number::from_f64(n).map_or(Value::Null, Value::Number)),
            "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        ]
    }

    /// Any JSON value up to a few levels deep.
    pub fn arb_value() -> impl Strategy<Value = Value> {
        arb_scalar().prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{number, object, string, Shape};
    use serde_json::json;

    #[test]
    fn assert_valid_macro() {
        assert_valid!(json!("hi"), string());
        let p = object().shape(Shape::new().field("n", number()));
        assert_valid!(json!({ "n": 1 }), &p);
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(json!(1), string());
        assert_invalid!(
            json!({ "n": "x" }),
            object().shape(Shape::new().field("n", number())),
            "Expected property, `n`, to be of type `number` but received `string`"
        );
    }

    #[test]
    #[should_panic(expected = "Expected valid value, got failure")]
    fn assert_valid_panics_on_failure() {
        assert_valid!(json!(1), string());
    }

    #[test]
    #[should_panic(expected = "Expected failure, got valid value")]
    fn assert_invalid_panics_on_success() {
        assert_invalid!(json!("ok"), string());
    }

    #[test]
    #[should_panic]
    fn assert_invalid_panics_on_wrong_report() {
        assert_invalid!(json!(1), string(), "Expected something else");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::strategies::*;
        use crate::{is_valid, object, string};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arb_scalar_is_never_a_container(value in arb_scalar()) {
                prop_assert!(!value.is_array() && !value.is_object());
            }

            #[test]
            fn arb_value_strings_match_string(value in arb_value()) {
                prop_assert_eq!(is_valid(&value, &string()), value.is_string());
                prop_assert_eq!(is_valid(&value, &object()), value.is_object());
            }
        }
    }
}
