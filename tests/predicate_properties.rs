//! Property-based tests for predicate evaluation

use proptest::prelude::*;
use serde_json::{Map, Value};
use weir::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        (-1000.0..1000.0f64).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn sample_predicates() -> Vec<Predicate> {
    vec![
        string().into(),
        string().min_length(2).into(),
        number().integer().into(),
        number().in_range(-10, 10).into(),
        array().of(number()).into(),
        object().values_of(string()).into(),
        object().shape(Shape::new().field("a", number())).into(),
        any!(string(), array().non_empty()).into(),
    ]
}

proptest! {
    #[test]
    fn entry_points_agree(value in arb_value()) {
        for p in sample_predicates() {
            let valid = is_valid(&value, &p);
            let report = report_validation(&value, &p);
            let result = validate(&value, &p);
            prop_assert_eq!(valid, report.is_none());
            prop_assert_eq!(valid, result.is_ok());
        }
    }

    #[test]
    fn evaluation_is_deterministic(value in arb_value()) {
        for p in sample_predicates() {
            prop_assert_eq!(report_validation(&value, &p), report_validation(&value, &p));
        }
    }

    #[test]
    fn partial_shape_ignores_extra_keys(
        message in "[a-z]{0,8}",
        extras in prop::collection::vec(("[b-z]{2,5}", arb_scalar()), 0..4),
    ) {
        let p = shape(Shape::new().field("message", string()));
        let mut map = Map::new();
        map.insert("message".to_string(), Value::String(message));
        for (key, extra) in extras {
            map.insert(key, extra);
        }
        prop_assert!(is_valid(&Value::Object(map), &p));
    }

    #[test]
    fn exact_shape_names_the_extra_key(key in "[b-z]{2,5}", extra in arb_scalar()) {
        let p = exact_shape(Shape::new().field("message", string()));
        let mut map = Map::new();
        map.insert("message".to_string(), Value::from("hi"));
        map.insert(key.clone(), extra);
        let err = validate(&Value::Object(map), &p).unwrap_err();
        prop_assert_eq!(err.failure().path().to_string(), key);
        prop_assert!(err.failure().expectation().starts_with("not to exist"));
    }

    #[test]
    fn any_passes_iff_some_child_passes(value in arb_value()) {
        let children: Vec<Predicate> = vec![
            string().into(),
            number().positive().into(),
            array().of(string()).into(),
        ];
        let expected = children.iter().any(|child| is_valid(&value, child));
        let p = any_of(children);
        prop_assert_eq!(is_valid(&value, &p), expected);
    }

    #[test]
    fn array_failure_names_first_bad_index(items in prop::collection::vec(arb_scalar(), 1..8)) {
        let p = array().of(string());
        match items.iter().position(|item| !item.is_string()) {
            Some(index) => {
                let err = validate(&Value::Array(items), &p).unwrap_err();
                prop_assert_eq!(err.failure().path().to_string(), index.to_string());
            }
            None => prop_assert!(is_valid(&Value::Array(items), &p)),
        }
    }
}
