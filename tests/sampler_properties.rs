//! Integration tests for query-sampler guarantees.
//!
//! These tests exercise the sampler across many seeds to verify the
//! grammar-level guarantees: fragments are always fully built, reserved
//! fields are never picked, and sanitization wraps every ambiguous value.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use api_sandbox::sampler::{sample, sanitize, Candidate};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Map, Value};

fn as_object(value: &Value) -> &Map<String, Value> {
    value.as_object().expect("test document must be an object")
}

/// A realistic gene-style sample document with a bit of everything.
fn gene_document() -> Value {
    json!({
        "_id": "1017",
        "_score": 1.0,
        "symbol": "CDK2",
        "taxid": 9606,
        "reviewed": true,
        "summary": "Cyclin dependent kinase 2 is involved in cell cycle control",
        "aliases": ["p33", "CDKN2"],
        "homepage": "http://example.org/cdk2",
        "gene": {"symbol": "CDK2", "entrezgene": 1017},
        "refs": [{"pmid": 12345}],
        "deprecated_ids": [],
        "positions": [101, 204]
    })
}

#[test]
fn test_fragments_never_contain_undefined() {
    let doc = gene_document();

    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");

        if let Candidate::Fragment(fragment) = candidate {
            assert!(
                !fragment.contains("undefined"),
                "seed {}: fragment {} contains undefined",
                seed,
                fragment
            );
        }
    }
}

#[test]
fn test_fragments_never_end_in_separator() {
    let doc = gene_document();

    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");

        if let Candidate::Fragment(fragment) = candidate {
            assert!(!fragment.ends_with('.'), "trailing dot: {}", fragment);
            assert!(!fragment.ends_with(':'), "trailing colon: {}", fragment);
            assert!(!fragment.is_empty());
        }
    }
}

#[test]
fn test_reserved_fields_never_sampled() {
    let doc = gene_document();

    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");

        if let Candidate::Fragment(fragment) = candidate {
            assert!(!fragment.starts_with("_id"), "reserved _id in {}", fragment);
            assert!(
                !fragment.starts_with("_score"),
                "reserved _score in {}",
                fragment
            );
        }
    }
}

#[test]
fn test_nested_object_path_reachable() {
    // With a single eligible key at each level the outcome is forced
    let doc = json!({"_id": "1", "gene": {"symbol": "BRCA1"}});
    let mut rng = StdRng::seed_from_u64(0);

    let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");
    assert_eq!(candidate, Candidate::Fragment("gene.symbol:BRCA1".to_string()));
}

#[test]
fn test_array_of_strings_uses_first_element() {
    let doc = json!({"_id": "1", "aliases": ["A1", "A2"]});
    let mut rng = StdRng::seed_from_u64(0);

    let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");
    assert_eq!(candidate, Candidate::Fragment("aliases:A1".to_string()));
}

#[test]
fn test_empty_array_always_unusable() {
    // The empty array is the only eligible field, so every seed picks it
    let doc = json!({"_id": "1", "tags": []});

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");
        assert_eq!(candidate, Candidate::Unusable);
    }
}

#[test]
fn test_ambiguous_string_values_are_wrapped() {
    let doc = json!({"_id": "1", "summary": "cell cycle control"});
    let mut rng = StdRng::seed_from_u64(0);

    let candidate = sample(as_object(&doc), &mut rng).expect("document has eligible keys");
    assert_eq!(
        candidate,
        Candidate::Fragment("summary:(\"cell cycle control\")".to_string())
    );
}

#[test]
fn test_sanitize_contract() {
    assert_eq!(sanitize("a b"), "(\"a b\")");
    assert_eq!(sanitize("plain"), "plain");
    assert_eq!(sanitize("has:colon"), "(\"has:colon\")");
    assert_eq!(sanitize("http://x"), "(\"http://x\")");
    assert_eq!(sanitize("back\\slash"), "(\"back\\slash\")");
}

#[test]
fn test_document_with_only_reserved_fields_errors() {
    let doc = json!({"_id": "1", "_score": 0.4});
    let mut rng = StdRng::seed_from_u64(0);

    assert!(sample(as_object(&doc), &mut rng).is_err());
}
