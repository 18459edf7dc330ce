//! Failure reports and message rendering
//!
//! A [`Failure`] is kept as a `(path, expectation)` pair until it is
//! rendered. Delegating validators qualify a child's failure with
//! [`Failure::within`], which prepends one path segment, so nested failures
//! accumulate paths such as `data.items.2.message` without ever re-parsing
//! rendered text.
//!
//! # Examples
//!
//! ```
//! use weir::report::Failure;
//!
//! let leaf = Failure::new("to be string, got `123`");
//! assert_eq!(leaf.to_string(), "Expected value to be string, got `123`");
//!
//! let nested = leaf.within("message").within("data");
//! assert_eq!(
//!     nested.to_string(),
//!     "Expected property, `data.message`, to be string, got `123`"
//! );
//! ```

use std::fmt;

use serde_json::Value;

/// Lists longer than this are truncated by [`format_list`].
pub const LIST_LIMIT: usize = 10;

/// One step of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PathSegment {
    /// Object field name.
    Key(String),
    /// Array element index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Path from the evaluated value down to the offending property.
///
/// Segments are joined with `.`; keys containing `.` are not escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PropertyPath(Vec<PathSegment>);

impl PropertyPath {
    /// Segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the path of the evaluated value itself.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// The diagnostic produced by the first validator that rejects a value.
///
/// `expectation` is everything after the subject of the sentence, e.g.
/// ``to be string, got `123` ``. The subject is `Expected value` for the
/// evaluated value itself and ``Expected property, `<path>`,`` once the
/// failure has been qualified with a path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    path: PropertyPath,
    expectation: String,
}

impl Failure {
    /// Create a value-level failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use weir::report::Failure;
    ///
    /// let failure = Failure::new("to be positive, got 0");
    /// assert!(failure.path().is_empty());
    /// assert_eq!(failure.to_string(), "Expected value to be positive, got 0");
    /// ```
    pub fn new(expectation: impl Into<String>) -> Self {
        Failure {
            path: PropertyPath::default(),
            expectation: expectation.into(),
        }
    }

    /// Qualify this failure with the key it was found under.
    ///
    /// A value-level failure becomes property-level; a property-level
    /// failure gains `segment` as its new outermost path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use weir::report::Failure;
    ///
    /// let failure = Failure::new("to be string, got `1`").within("name").within(2usize);
    /// assert_eq!(failure.to_string(), "Expected property, `2.name`, to be string, got `1`");
    /// ```
    pub fn within(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.0.insert(0, segment.into());
        self
    }

    /// Path to the offending property, empty for the value itself.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// The part of the message following the subject.
    pub fn expectation(&self) -> &str {
        &self.expectation
    }

    /// Render the full message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "Expected value {}", self.expectation)
        } else {
            write!(f, "Expected property, `{}`, {}", self.path, self.expectation)
        }
    }
}

/// Render a value the way messages quote it: strings raw, numbers like
/// [`render_number`], anything else as compact JSON.
///
/// Integers keep their exact text, so values past 2^53 are not rounded.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n.as_f64().map_or_else(|| n.to_string(), render_number),
        other => other.to_string(),
    }
}

/// Render a number without a trailing `.0` for integral values.
pub fn render_number(n: f64) -> String {
    format!("{}", n)
}

/// Render a string as a JSON literal, quotes included.
pub fn render_literal(s: &str) -> String {
    Value::from(s).to_string()
}

/// Type name used by kind-mismatch messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Render `items` as a bracketed, comma-separated list.
///
/// Past [`LIST_LIMIT`] items only the first ten are shown, followed by a
/// `…+N more` marker.
///
/// # Examples
///
/// ```
/// use weir::report::{format_list, render_number};
///
/// let short = [1.0, 2.0];
/// assert_eq!(format_list(&short, |n| render_number(*n)), "[1,2]");
///
/// let long: Vec<f64> = (0..11).map(f64::from).collect();
/// assert_eq!(
///     format_list(&long, |n| render_number(*n)),
///     "[0,1,2,3,4,5,6,7,8,9,…+1 more]"
/// );
/// ```
pub fn format_list<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    let shown: Vec<String> = items.iter().take(LIST_LIMIT).map(render).collect();
    let mut out = format!("[{}", shown.join(","));
    if items.len() > LIST_LIMIT {
        out.push_str(&format!(",…+{} more", items.len() - LIST_LIMIT));
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_level_message() {
        let failure = Failure::new("to be string, got `123`");
        assert_eq!(failure.message(), "Expected value to be string, got `123`");
    }

    #[test]
    fn test_within_prepends() {
        let failure = Failure::new("to be string, got `123`")
            .within("message")
            .within("data");
        assert_eq!(failure.path().len(), 2);
        assert_eq!(
            failure.path().segments(),
            &[PathSegment::from("data"), PathSegment::from("message")]
        );
        assert_eq!(
            failure.to_string(),
            "Expected property, `data.message`, to be string, got `123`"
        );
    }

    #[test]
    fn test_index_segments_render_decimal() {
        let failure = Failure::new("to be one of `[\"a\",\"b\"]`, got `c`").within(2usize);
        assert_eq!(
            failure.to_string(),
            "Expected property, `2`, to be one of `[\"a\",\"b\"]`, got `c`"
        );
    }

    #[test]
    fn test_keys_are_not_escaped() {
        let failure = Failure::new("to be string, got `1`").within("a.b");
        assert_eq!(failure.path().len(), 1);
        assert_eq!(failure.path().to_string(), "a.b");
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("c")), "c");
        assert_eq!(render_value(&json!(456)), "456");
        assert_eq!(render_value(&json!([1])), "[1]");
        assert_eq!(render_value(&json!({"a": true})), "{\"a\":true}");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn test_render_value_drops_float_zero_fraction() {
        let parsed: Value = serde_json::from_str("[3.0, -1.0, 2.5, 1e2]").unwrap();
        let rendered: Vec<String> = parsed.as_array().unwrap().iter().map(render_value).collect();
        assert_eq!(rendered, vec!["3", "-1", "2.5", "100"]);
    }

    #[test]
    fn test_render_value_keeps_large_integers_exact() {
        assert_eq!(render_value(&json!(u64::MAX)), "18446744073709551615");
        assert_eq!(render_value(&json!(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn test_render_number() {
        assert_eq!(render_number(3.0), "3");
        assert_eq!(render_number(2.2), "2.2");
        assert_eq!(render_number(-2147483648.0), "-2147483648");
        assert_eq!(render_number(4294967295.0), "4294967295");
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&json!("x")), "string");
        assert_eq!(kind_name(&json!({})), "Object");
        assert_eq!(kind_name(&json!([])), "Array");
        assert_eq!(kind_name(&json!(false)), "boolean");
    }

    #[test]
    fn test_format_list_under_limit() {
        let items = ["a", "b"];
        assert_eq!(format_list(&items, |s| render_literal(s)), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_format_list_exactly_limit() {
        let items: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(
            format_list(&items, |n| render_number(*n)),
            "[0,1,2,3,4,5,6,7,8,9]"
        );
    }

    #[test]
    fn test_format_list_truncates() {
        let items: Vec<f64> = (0..14).map(f64::from).collect();
        assert_eq!(
            format_list(&items, |n| render_number(*n)),
            "[0,1,2,3,4,5,6,7,8,9,…+4 more]"
        );
    }

    #[test]
    fn test_format_list_empty() {
        let items: [&str; 0] = [];
        assert_eq!(format_list(&items, |s| render_literal(s)), "[]");
    }
}
