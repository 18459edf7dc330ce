//! # Weir
//!
//! > *A weir checks the flow without stopping it.*
//!
//! Composable runtime predicates for loosely typed values.
//!
//! Build a predicate once with a fluent builder, then assert it wherever
//! untrusted input crosses into your code: function arguments, decoded JSON,
//! configuration. There is no schema compilation step; a predicate is just
//! an immutable chain of checks.
//!
//! ## Quick Example
//!
//! ```rust
//! use weir::prelude::*;
//! use serde_json::json;
//!
//! let payload = object().shape(
//!     Shape::new().field(
//!         "data",
//!         object().shape(Shape::new().field("message", string())),
//!     ),
//! );
//!
//! // Three ways to ask the same question
//! let bad = json!({ "data": { "message": 123 } });
//! assert!(!is_valid(&bad, &payload));
//! assert_eq!(
//!     report_validation(&bad, &payload).as_deref(),
//!     Some("Expected property, `data.message`, to be string, got `123`")
//! );
//!
//! match validate(&bad, &payload) {
//!     Ok(()) => unreachable!(),
//!     Err(err) => println!("{} (asserted at {})", err, err.location()),
//! }
//! ```
//!
//! ## Alternatives
//!
//! ```rust
//! use weir::prelude::*;
//! use serde_json::json;
//!
//! let id = any!(string().non_empty(), number().integer().positive());
//! assert!(is_valid(&json!("abc"), &id));
//! assert!(is_valid(&json!(42), &id));
//! assert!(!is_valid(&json!(-1), &id));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod error;
pub mod predicate;
pub mod report;
pub mod testing;

// Re-exports
pub use error::{is_argument_error, ArgumentError};
pub use predicate::{
    any_of, array, exact_shape, is_valid, number, object, report_validation, shape, string,
    validate, validator_fn, Predicate, Shape, ShapeMode, Validator,
};
pub use report::Failure;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::any;
    pub use crate::error::{is_argument_error, ArgumentError};
    pub use crate::predicate::prelude::*;
    pub use crate::report::Failure;
}
