//! Adapters between JSON records and the transform operations.
//!
//! A record is any `serde_json::Value`, usually an object. Fields are
//! addressed with dotted paths (`"school.address.city"`), and the adapters
//! here turn a path into the shapes the transform pipeline expects:
//!
//! - [`FieldPath::stage`] - transform stage (`&Value -> Option<Value>`)
//! - [`FieldPath::key`] - map key function (`&Value -> String`)
//! - [`FieldPath::distinct_key`] - dedup key keeping JSON identity
//! - [`FieldFilter::test`] - predicate (`&Value -> bool`)
//! - [`as_array`] - flatten extractor (`&Value -> Option<Vec<Value>>`)
//! - [`HashedValue`] - `Eq + Hash` wrapper for deduplicating values
//!
//! A missing field and a `null` field are both absent.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use streamkit::records::FieldPath;
//! use streamkit::transform::map_to_list;
//!
//! let cats = vec![
//!     json!({ "name": "tom", "home": { "city": "Paris" } }),
//!     json!({ "name": "felix" }),
//! ];
//! let city = FieldPath::parse("home.city").unwrap();
//! assert_eq!(map_to_list(&cats, city.stage()), vec![json!("Paris")]);
//! ```

use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{RecordError, RecordResult};

/// Separator between path segments.
const PATH_SEPARATOR: char = '.';

/// Key used when a key path is absent on a record.
pub const ABSENT_KEY: &str = "null";

// =============================================================================
// Field Paths
// =============================================================================

/// Dotted path into nested JSON objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(path: &str) -> RecordResult<Self> {
        let segments: Vec<String> = path.split(PATH_SEPARATOR).map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(RecordError::InvalidPath(path.to_string()));
        }
        log::trace!("parsed field path '{}' into {} segment(s)", path, segments.len());
        Ok(Self { segments })
    }

    /// Path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path on `record`.
    ///
    /// Returns `None` when a segment is missing, an intermediate value is not
    /// an object, or the leaf is `null`.
    pub fn get<'v>(&self, record: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(record, |value, segment| value.get(segment))
            .filter(|leaf| !leaf.is_null())
    }

    /// Transform stage: the cloned leaf, absent when [`get`](Self::get) is.
    pub fn stage(&self) -> impl FnMut(&Value) -> Option<Value> + '_ {
        move |record: &Value| self.get(record).cloned()
    }

    /// Map key function: the leaf rendered with [`key_string`], or
    /// [`ABSENT_KEY`] when absent.
    ///
    /// Keys are strings, so distinct values can share one: `1` and `"1"` both
    /// render as `1`, and an absent leaf collides with the string `"null"`.
    /// Use [`distinct_key`](Self::distinct_key) when the key need not be a
    /// string.
    pub fn key(&self) -> impl FnMut(&Value) -> String + '_ {
        move |record: &Value| {
            self.get(record)
                .map(key_string)
                .unwrap_or_else(|| ABSENT_KEY.to_string())
        }
    }

    /// Key function keeping the leaf's JSON identity: `None` when absent,
    /// otherwise the leaf itself, so `1` and `"1"` stay apart.
    pub fn distinct_key(&self) -> impl FnMut(&Value) -> Option<HashedValue> + '_ {
        move |record: &Value| self.get(record).cloned().map(HashedValue)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Render a JSON value as a map key.
///
/// Strings are used verbatim; every other value is rendered as compact JSON.
pub fn key_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON value usable with the deduplicating operations and as a map key.
///
/// Hashes the value's structure, so values equal under `Value` equality
/// (`0.0` and `-0.0`, objects in any key order) hash alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedValue(pub Value);

impl Hash for HashedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        // Number's own Hash folds -0.0 into 0.0
        Value::Number(n) => n.hash(state),
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            entries.len().hash(state);
            for (key, item) in entries {
                key.hash(state);
                hash_value(item, state);
            }
        }
    }
}

impl From<Value> for HashedValue {
    fn from(value: Value) -> Self {
        HashedValue(value)
    }
}

/// Flatten extractor: arrays yield their elements, any other present value
/// yields itself, `null` yields nothing.
pub fn as_array(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(items.clone()),
        other => Some(vec![other.clone()]),
    }
}

// =============================================================================
// Matchers
// =============================================================================

/// Test applied to a single field value.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Value equals a JSON value.
    Equals(Value),
    /// Value matches a regular expression (string values only).
    Matches(Regex),
    /// Value is present and not `null`.
    Present,
}

impl Matcher {
    /// Equality against a JSON literal, e.g. `42`, `true`, `"tom"`.
    pub fn equals_json(literal: &str) -> RecordResult<Self> {
        serde_json::from_str(literal)
            .map(Matcher::Equals)
            .map_err(|source| RecordError::InvalidLiteral {
                literal: literal.to_string(),
                source,
            })
    }

    /// Equality against a string value.
    pub fn equals_str(text: &str) -> Self {
        Matcher::Equals(Value::String(text.to_string()))
    }

    /// Regular expression match on string values.
    pub fn matches(pattern: &str) -> RecordResult<Self> {
        let regex = Regex::new(pattern)?;
        log::debug!("compiled pattern /{}/", pattern);
        Ok(Matcher::Matches(regex))
    }

    /// Apply the matcher to a resolved field value (`None` when absent).
    pub fn test(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (_, None) => false,
            (Matcher::Equals(expected), Some(actual)) => expected == actual,
            (Matcher::Matches(regex), Some(Value::String(s))) => regex.is_match(s),
            (Matcher::Matches(_), Some(_)) => false,
            (Matcher::Present, Some(_)) => true,
        }
    }
}

/// Predicate over records: a field path plus a matcher.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    path: FieldPath,
    matcher: Matcher,
}

impl FieldFilter {
    pub fn new(path: FieldPath, matcher: Matcher) -> Self {
        Self { path, matcher }
    }

    /// Whether `record` passes the filter.
    pub fn test(&self, record: &Value) -> bool {
        self.matcher.test(self.path.get(record))
    }
}
