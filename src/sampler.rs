//! Query sampler for synthesizing example queries from sample documents.
//!
//! This module walks an arbitrary JSON document, picks one field at random,
//! and renders a query fragment with type-appropriate syntax, recursing into
//! nested objects and arrays.
//!
//! # Fragment Grammar
//!
//! ```text
//! scalar field     -> field:value
//! string field     -> field:sanitize(value)
//! nested object    -> field.<fragment of nested object>
//! array of strings -> field:first_element
//! array of objects -> field.<fragment of first element>
//! ```
//!
//! A field whose value cannot be rendered (empty array, null, array of
//! nulls or arrays) yields [`Candidate::Unusable`] instead of a partial
//! fragment. The reserved bookkeeping fields `_id` and `_score` are never
//! picked.
//!
//! # Example
//!
//! ```
//! use api_sandbox::sampler::{sample, Candidate};
//! use rand::{rngs::StdRng, SeedableRng};
//! use serde_json::json;
//!
//! let doc = json!({"_id": "1", "gene": {"symbol": "BRCA1"}});
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let candidate = sample(doc.as_object().unwrap(), &mut rng).unwrap();
//! assert_eq!(candidate, Candidate::Fragment("gene.symbol:BRCA1".to_string()));
//! ```

use crate::error::{SandboxError, SandboxResult};
use rand::Rng;
use serde_json::{Map, Value};

/// Bookkeeping fields that are never picked for sampling.
pub const RESERVED_FIELDS: &[&str] = &["_id", "_score"];

/// Outcome of sampling one document.
///
/// A fragment is always fully built; when any step of the recursion cannot
/// render its value, the whole candidate collapses to [`Candidate::Unusable`]
/// and the caller discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A syntactically valid query fragment, e.g. `gene.symbol:BRCA1`.
    Fragment(String),
    /// No valid fragment could be derived from the picked field.
    Unusable,
}

impl Candidate {
    /// Returns the fragment, or `None` for an unusable candidate.
    #[must_use]
    pub fn into_fragment(self) -> Option<String> {
        match self {
            Self::Fragment(fragment) => Some(fragment),
            Self::Unusable => None,
        }
    }

    /// Whether this candidate carries a usable fragment.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        matches!(self, Self::Fragment(_))
    }
}

/// Sample one query fragment from a document.
///
/// Picks a field uniformly at random from the document's non-reserved keys
/// and renders its value. Randomness comes from the injected `rng`, so tests
/// can seed a [`rand::rngs::StdRng`] for deterministic output.
///
/// # Errors
///
/// Returns an error if the document has no non-reserved keys. Callers must
/// guard against empty input; nested empty objects encountered during
/// recursion yield [`Candidate::Unusable`] instead.
pub fn sample<R: Rng + ?Sized>(
    doc: &Map<String, Value>,
    rng: &mut R,
) -> SandboxResult<Candidate> {
    let keys: Vec<&str> = eligible_keys(doc);
    if keys.is_empty() {
        return Err(SandboxError::sampler(
            "document has no sampleable fields",
            None,
        ));
    }

    let field = keys[rng.gen_range(0..keys.len())];
    let value = doc.get(field).ok_or_else(|| {
        SandboxError::sampler(format!("field {field} vanished during sampling"), None)
    })?;

    Ok(render(field, value, rng))
}

/// Sanitize a string value for the query grammar.
///
/// Values containing a space, the substring `http`, a backslash, or a colon
/// would be ambiguous in a `field:value` fragment, so they are wrapped in a
/// quoted, parenthesized form. Plain values pass through unchanged.
///
/// # Examples
///
/// ```
/// use api_sandbox::sampler::sanitize;
///
/// assert_eq!(sanitize("plain"), "plain");
/// assert_eq!(sanitize("a b"), "(\"a b\")");
/// assert_eq!(sanitize("has:colon"), "(\"has:colon\")");
/// ```
#[must_use]
pub fn sanitize(value: &str) -> String {
    let ambiguous = value.contains(' ')
        || value.contains("http")
        || value.contains('\\')
        || value.contains(':');

    if ambiguous {
        format!("(\"{value}\")")
    } else {
        value.to_string()
    }
}

/// Non-reserved keys of a document, in map order.
fn eligible_keys(doc: &Map<String, Value>) -> Vec<&str> {
    doc.keys()
        .map(String::as_str)
        .filter(|key| !RESERVED_FIELDS.contains(key))
        .collect()
}

/// Render the picked field's value with type-appropriate syntax.
fn render<R: Rng + ?Sized>(field: &str, value: &Value, rng: &mut R) -> Candidate {
    match value {
        Value::Object(nested) => descend(field, nested, rng),
        Value::Array(items) => match items.first() {
            // Empty arrays carry nothing to render
            None => Candidate::Unusable,
            Some(Value::String(first)) => {
                Candidate::Fragment(format!("{field}:{}", sanitize(first)))
            }
            Some(Value::Object(nested)) => descend(field, nested, rng),
            // Scalar arrays sample their first element like a scalar field
            Some(Value::Number(first)) => Candidate::Fragment(format!("{field}:{first}")),
            Some(Value::Bool(first)) => Candidate::Fragment(format!("{field}:{first}")),
            // Arrays of nulls or nested arrays have no query rendering
            Some(_) => Candidate::Unusable,
        },
        Value::Bool(flag) => Candidate::Fragment(format!("{field}:{flag}")),
        Value::Number(number) => Candidate::Fragment(format!("{field}:{number}")),
        Value::String(text) => Candidate::Fragment(format!("{field}:{}", sanitize(text))),
        Value::Null => Candidate::Unusable,
    }
}

/// Recurse into a nested object, prefixing with the parent field name.
///
/// A nested object with no eligible keys is unusable rather than an error,
/// keeping the never-partial guarantee for the whole fragment.
fn descend<R: Rng + ?Sized>(
    field: &str,
    nested: &Map<String, Value>,
    rng: &mut R,
) -> Candidate {
    let keys = eligible_keys(nested);
    if keys.is_empty() {
        return Candidate::Unusable;
    }

    let inner = keys[rng.gen_range(0..keys.len())];
    let Some(value) = nested.get(inner) else {
        return Candidate::Unusable;
    };

    match render(inner, value, rng) {
        Candidate::Fragment(fragment) => Candidate::Fragment(format!("{field}.{fragment}")),
        Candidate::Unusable => Candidate::Unusable,
    }
}
