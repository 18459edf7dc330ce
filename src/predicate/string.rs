//! String predicates
//!
//! Lengths are counted in Unicode scalar values.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

use super::{validator_fn, Validator};
use crate::report::{format_list, render_literal, render_value, Failure};

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("numeric pattern is valid")
});

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

kind_predicate! {
    /// Predicate over string values. Created by [`string`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{report_validation, string};
    /// use serde_json::json;
    ///
    /// let greeting = string().starts_with("Hello").max_length(20);
    /// assert_eq!(report_validation(&json!("Hello, World!"), &greeting), None);
    /// assert_eq!(
    ///     report_validation(&json!("Hola, Mundo!"), &greeting).as_deref(),
    ///     Some("Expected value to start with `Hello`, got `Hola, Mundo!`")
    /// );
    /// ```
    StringPredicate
}

/// Create a predicate that accepts any string.
pub fn string() -> StringPredicate {
    StringPredicate::seeded(validator_fn(Value::is_string, |value| {
        Failure::new(format!("to be string, got `{}`", render_value(value)))
    }))
}

/// Validator over the string inside a value; non-strings fail the test.
fn string_check<T, R>(test: T, report: R) -> impl Validator
where
    T: Fn(&str) -> bool + Send + Sync + 'static,
    R: Fn(&Value) -> String + Send + Sync + 'static,
{
    validator_fn(
        move |value: &Value| value.as_str().is_some_and(&test),
        move |value: &Value| Failure::new(report(value)),
    )
}

fn char_len(value: &Value) -> usize {
    value.as_str().map_or(0, |s| s.chars().count())
}

fn is_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || DATE_TIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
}

impl StringPredicate {
    /// Refine `value` to the string it holds.
    pub fn check<'v>(&self, value: &'v Value) -> Result<&'v str, Failure> {
        self.inner.check(value).and_then(|value| {
            value.as_str().ok_or_else(|| {
                Failure::new(format!("to be string, got `{}`", render_value(value)))
            })
        })
    }

    /// Require exactly `length` characters.
    #[must_use]
    pub fn length(&self, length: usize) -> Self {
        self.add_validator(string_check(
            move |s| s.chars().count() == length,
            move |value| format!("to have length `{}`, got `{}`", length, char_len(value)),
        ))
    }

    /// Require at least `length` characters.
    #[must_use]
    pub fn min_length(&self, length: usize) -> Self {
        self.add_validator(string_check(
            move |s| s.chars().count() >= length,
            move |value| {
                format!(
                    "to have a minimum length of `{}`, got `{}`",
                    length,
                    render_value(value)
                )
            },
        ))
    }

    /// Require at most `length` characters.
    #[must_use]
    pub fn max_length(&self, length: usize) -> Self {
        self.add_validator(string_check(
            move |s| s.chars().count() <= length,
            move |value| {
                format!(
                    "to have a maximum length of `{}`, got `{}`",
                    length,
                    render_value(value)
                )
            },
        ))
    }

    /// Require a match for `regex`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use regex::Regex;
    /// use weir::{report_validation, string};
    /// use serde_json::json;
    ///
    /// let p = string().matches(Regex::new("^Hello").unwrap());
    /// assert_eq!(
    ///     report_validation(&json!("Hola, World!"), &p).as_deref(),
    ///     Some("Expected value to match `/^Hello/`, got `Hola, World!`")
    /// );
    /// ```
    #[must_use]
    pub fn matches(&self, regex: Regex) -> Self {
        let pattern = regex.as_str().to_string();
        self.add_validator(string_check(
            move |s| regex.is_match(s),
            move |value| format!("to match `/{}/`, got `{}`", pattern, render_value(value)),
        ))
    }

    /// Compile `pattern` and require a match for it.
    pub fn try_matches(&self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.matches(Regex::new(pattern)?))
    }

    /// Require the string to start with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let shown = prefix.clone();
        self.add_validator(string_check(
            move |s| s.starts_with(prefix.as_str()),
            move |value| format!("to start with `{}`, got `{}`", shown, render_value(value)),
        ))
    }

    /// Require the string to end with `suffix`.
    #[must_use]
    pub fn ends_with(&self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let shown = suffix.clone();
        self.add_validator(string_check(
            move |s| s.ends_with(suffix.as_str()),
            move |value| format!("to end with `{}`, got `{}`", shown, render_value(value)),
        ))
    }

    /// Require the string to contain `needle`.
    #[must_use]
    pub fn includes(&self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let shown = needle.clone();
        self.add_validator(string_check(
            move |s| s.contains(needle.as_str()),
            move |value| format!("to include `{}`, got `{}`", shown, render_value(value)),
        ))
    }

    /// Require the string to be one of `allowed`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::{report_validation, string};
    /// use serde_json::json;
    ///
    /// let p = string().one_of(["a", "b"]);
    /// assert_eq!(
    ///     report_validation(&json!("c"), &p).as_deref(),
    ///     Some("Expected value to be one of `[\"a\",\"b\"]`, got `c`")
    /// );
    /// ```
    #[must_use]
    pub fn one_of<I, S>(&self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let shown = format_list(&allowed, |s| render_literal(s));
        self.add_validator(string_check(
            move |s| allowed.iter().any(|candidate| candidate == s),
            move |value| format!("to be one of `{}`, got `{}`", shown, render_value(value)),
        ))
    }

    /// Require the empty string.
    #[must_use]
    pub fn empty(&self) -> Self {
        self.add_validator(string_check(str::is_empty, |value| {
            format!("to be empty, got `{}`", render_value(value))
        }))
    }

    /// Require a non-empty string.
    #[must_use]
    pub fn non_empty(&self) -> Self {
        self.add_validator(string_check(
            |s| !s.is_empty(),
            |_| "to not be empty".to_string(),
        ))
    }

    /// Require the string to equal `expected`.
    #[must_use]
    pub fn equals(&self, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        let shown = expected.clone();
        self.add_validator(string_check(
            move |s| s == expected,
            move |value| format!("to be equal to `{}`, got `{}`", shown, render_value(value)),
        ))
    }

    /// Require ASCII letters and digits only.
    #[must_use]
    pub fn alphanumeric(&self) -> Self {
        self.add_validator(string_check(
            |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()),
            |value| format!("to be alphanumeric, got `{}`", render_value(value)),
        ))
    }

    /// Require ASCII letters only.
    #[must_use]
    pub fn alphabetical(&self) -> Self {
        self.add_validator(string_check(
            |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()),
            |value| format!("to be alphabetical, got `{}`", render_value(value)),
        ))
    }

    /// Require a decimal number literal, optionally signed.
    #[must_use]
    pub fn numeric(&self) -> Self {
        self.add_validator(string_check(
            |s| NUMERIC.is_match(s),
            |value| format!("to be numeric, got `{}`", render_value(value)),
        ))
    }

    /// Require a parseable date or date-time.
    ///
    /// Accepts RFC 3339, RFC 2822, ISO `YYYY-MM-DD[ HH:MM:SS]` and long
    /// forms such as `December 17, 1995 03:24:00`.
    #[must_use]
    pub fn date(&self) -> Self {
        self.add_validator(string_check(is_date, |value| {
            format!("to be a date, got `{}`", render_value(value))
        }))
    }

    /// Require no uppercase characters.
    #[must_use]
    pub fn lowercase(&self) -> Self {
        self.add_validator(string_check(
            |s| s == s.to_lowercase(),
            |value| format!("to be lowercase, got `{}`", render_value(value)),
        ))
    }

    /// Require no lowercase characters.
    #[must_use]
    pub fn uppercase(&self) -> Self {
        self.add_validator(string_check(
            |s| s == s.to_uppercase(),
            |value| format!("to be uppercase, got `{}`", render_value(value)),
        ))
    }

    /// Require an absolute URL.
    #[must_use]
    pub fn url(&self) -> Self {
        self.add_validator(string_check(
            |s| url::Url::parse(s).is_ok(),
            |value| format!("to be a URL, got `{}`", render_value(value)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::report_validation;
    use serde_json::json;

    fn report(value: Value, p: &StringPredicate) -> Option<String> {
        report_validation(&value, p)
    }

    #[test]
    fn test_base() {
        assert_eq!(report(json!("Hello, World!"), &string()), None);
        assert_eq!(
            report(json!(123), &string()).as_deref(),
            Some("Expected value to be string, got `123`")
        );
    }

    #[test]
    fn test_check_refines() {
        assert_eq!(string().check(&json!("hi")), Ok("hi"));
        assert!(string().check(&json!(1)).is_err());
    }

    #[test]
    fn test_length() {
        let p = string().length(13);
        assert_eq!(report(json!("Hello, World!"), &p), None);
        assert_eq!(
            report(json!("Hello!"), &p).as_deref(),
            Some("Expected value to have length `13`, got `6`")
        );
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(report(json!("안녕"), &string().length(2)), None);
    }

    #[test]
    fn test_min_and_max() {
        assert_eq!(
            report(json!("1234"), &string().min_length(5)).as_deref(),
            Some("Expected value to have a minimum length of `5`, got `1234`")
        );
        assert_eq!(
            report(json!("123456"), &string().max_length(5)).as_deref(),
            Some("Expected value to have a maximum length of `5`, got `123456`")
        );
        assert_eq!(report(json!("12345"), &string().min_length(5).max_length(5)), None);
    }

    #[test]
    fn test_matches() {
        let p = string().try_matches("^Hello").unwrap();
        assert_eq!(report(json!("Hello, World!"), &p), None);
        assert_eq!(
            report(json!("Hola, World!"), &p).as_deref(),
            Some("Expected value to match `/^Hello/`, got `Hola, World!`")
        );
    }

    #[test]
    fn test_try_matches_rejects_bad_pattern() {
        assert!(string().try_matches("(unclosed").is_err());
    }

    #[test]
    fn test_affixes_and_includes() {
        assert_eq!(
            report(json!("Hola, World!"), &string().starts_with("Hello")).as_deref(),
            Some("Expected value to start with `Hello`, got `Hola, World!`")
        );
        assert_eq!(
            report(json!("Hello, Mundo!"), &string().ends_with("World!")).as_deref(),
            Some("Expected value to end with `World!`, got `Hello, Mundo!`")
        );
        assert_eq!(
            report(json!("Hello, Mundo!"), &string().includes("World")).as_deref(),
            Some("Expected value to include `World`, got `Hello, Mundo!`")
        );
        assert_eq!(report(json!("Hello, World!"), &string().includes("World")), None);
    }

    #[test]
    fn test_one_of() {
        let p = string().one_of(["Hello, World!", "Hola, Mundo!"]);
        assert_eq!(report(json!("Hola, Mundo!"), &p), None);
        assert_eq!(
            report(json!("안녕, 세상아!"), &p).as_deref(),
            Some("Expected value to be one of `[\"Hello, World!\",\"Hola, Mundo!\"]`, got `안녕, 세상아!`")
        );
    }

    #[test]
    fn test_one_of_truncates() {
        let p = string().one_of([
            "Hello, World!",
            "Hola, Mundo!",
            "1",
            "2",
            "3",
            "4",
            "5",
            "6",
            "7",
            "8",
            "overflow",
        ]);
        assert_eq!(
            report(json!("안녕, 세상아!"), &p).as_deref(),
            Some(
                "Expected value to be one of `[\"Hello, World!\",\"Hola, Mundo!\",\"1\",\"2\",\"3\",\"4\",\"5\",\"6\",\"7\",\"8\",…+1 more]`, got `안녕, 세상아!`"
            )
        );
        assert_eq!(report(json!("overflow"), &p), None);
    }

    #[test]
    fn test_empty_and_non_empty() {
        assert_eq!(report(json!(""), &string().empty()), None);
        assert_eq!(
            report(json!("Hello, World!"), &string().empty()).as_deref(),
            Some("Expected value to be empty, got `Hello, World!`")
        );
        assert_eq!(
            report(json!(""), &string().non_empty()).as_deref(),
            Some("Expected value to not be empty")
        );
    }

    #[test]
    fn test_equals() {
        assert_eq!(
            report(json!(""), &string().equals("Hello, World!")).as_deref(),
            Some("Expected value to be equal to `Hello, World!`, got ``")
        );
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(report(json!("owx123"), &string().alphanumeric()), None);
        assert_eq!(
            report(json!("owx123/"), &string().alphanumeric()).as_deref(),
            Some("Expected value to be alphanumeric, got `owx123/`")
        );
        assert_eq!(report(json!("owx"), &string().alphabetical()), None);
        assert_eq!(
            report(json!("owx123"), &string().alphabetical()).as_deref(),
            Some("Expected value to be alphabetical, got `owx123`")
        );
        assert_eq!(report(json!("+123"), &string().numeric()), None);
        assert_eq!(report(json!("-1.5e3"), &string().numeric()), None);
        assert_eq!(
            report(json!("+123o"), &string().numeric()).as_deref(),
            Some("Expected value to be numeric, got `+123o`")
        );
    }

    #[test]
    fn test_date() {
        for ok in [
            "December 17, 1995 03:24:00",
            "1995-12-17",
            "1995-12-17T03:24:00Z",
            "1995-12-17 03:24:00",
        ] {
            assert_eq!(report(json!(ok), &string().date()), None, "{}", ok);
        }
        assert_eq!(
            report(json!("Hello, World!"), &string().date()).as_deref(),
            Some("Expected value to be a date, got `Hello, World!`")
        );
    }

    #[test]
    fn test_case() {
        assert_eq!(report(json!("hello, world!"), &string().lowercase()), None);
        assert_eq!(
            report(json!("Hello, World!"), &string().lowercase()).as_deref(),
            Some("Expected value to be lowercase, got `Hello, World!`")
        );
        assert_eq!(report(json!("HELLO, WORLD!"), &string().uppercase()), None);
        assert_eq!(
            report(json!("Hello, World!"), &string().uppercase()).as_deref(),
            Some("Expected value to be uppercase, got `Hello, World!`")
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(report(json!("https://rokt33r.github.io/"), &string().url()), None);
        assert_eq!(
            report(json!("Hello, World!"), &string().url()).as_deref(),
            Some("Expected value to be a URL, got `Hello, World!`")
        );
    }

    #[test]
    fn test_base_check_runs_first() {
        assert_eq!(
            report(json!(5), &string().min_length(10)).as_deref(),
            Some("Expected value to be string, got `5`")
        );
    }
}
