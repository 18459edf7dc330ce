//! Predicate prelude for convenient imports
//!
//! This module re-exports the builders and entry points used at most call
//! sites.
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::prelude::*;
//! use serde_json::json;
//!
//! let p = object().shape(Shape::new().field("age", number().integer().positive()));
//! assert!(is_valid(&json!({ "age": 30 }), &p));
//! ```

// Core types
pub use super::{validator_fn, Predicate, Validator};

// Kind builders
pub use super::{any_of, array, number, object, string};
pub use super::{AnyPredicate, ArrayPredicate, NumberPredicate, ObjectPredicate, StringPredicate};

// Shapes
pub use super::{exact_shape, shape, Shape, ShapeMode};

// Evaluation
pub use super::{is_valid, report_validation, validate};

pub use crate::any;
