//! Integration tests for example-query generation.
//!
//! These tests run the whole generation pipeline over fixed sample
//! documents with seeded randomness, without touching the network.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use api_sandbox::metadata::Metadata;
use api_sandbox::suggest::{self, DEFAULT_PICKS, FULL_SCAN_THRESHOLD};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use std::collections::HashSet;

fn sample_hits() -> Vec<Value> {
    vec![
        json!({"_id": "1017", "symbol": "CDK2", "taxid": 9606}),
        json!({"_id": "1956", "symbol": "EGFR", "aliases": ["ERBB1"]}),
        json!({"_id": "672", "symbol": "BRCA1", "gene": {"location": "17q21.31"}}),
    ]
}

#[test]
fn test_generated_examples_are_unique() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let examples = suggest::generate(&sample_hits(), "gene", DEFAULT_PICKS, &mut rng);

        let unique: HashSet<&String> = examples.iter().collect();
        assert_eq!(
            unique.len(),
            examples.len(),
            "seed {}: duplicates in {:?}",
            seed,
            examples
        );
    }
}

#[test]
fn test_generated_examples_are_well_formed() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let examples = suggest::generate(&sample_hits(), "gene", DEFAULT_PICKS, &mut rng);

        for example in &examples {
            assert!(
                example.starts_with("/query?q=") || example.starts_with("/gene/"),
                "seed {}: unexpected example {}",
                seed,
                example
            );
            assert!(!example.contains("undefined"));
        }
    }
}

#[test]
fn test_direct_lookup_example_is_last() {
    let mut rng = StdRng::seed_from_u64(3);
    let examples = suggest::generate(&sample_hits(), "gene", DEFAULT_PICKS, &mut rng);

    assert_eq!(examples.last().map(String::as_str), Some("/gene/1017"));
}

#[test]
fn test_same_seed_same_examples() {
    let mut rng_a = StdRng::seed_from_u64(1234);
    let mut rng_b = StdRng::seed_from_u64(1234);

    assert_eq!(
        suggest::generate(&sample_hits(), "gene", DEFAULT_PICKS, &mut rng_a),
        suggest::generate(&sample_hits(), "gene", DEFAULT_PICKS, &mut rng_b),
    );
}

#[test]
fn test_unusable_only_documents_yield_direct_lookup_only() {
    let hits = vec![json!({"_id": "x1", "pending": null, "tags": []})];

    let mut rng = StdRng::seed_from_u64(0);
    let examples = suggest::generate(&hits, "doc", DEFAULT_PICKS, &mut rng);
    assert_eq!(examples, vec!["/doc/x1".to_string()]);
}

#[test]
fn test_static_fallback_threshold_from_metadata() {
    // Metadata with a declared corpus just over the scan threshold
    let metadata: Metadata = serde_json::from_value(json!({
        "biothing_type": "variant",
        "src": {
            "dbsnp": {"stats": {"dbsnp": FULL_SCAN_THRESHOLD}},
            "clinvar": {"stats": {"clinvar": 1u64}}
        },
        "example_queries": ["/query?q=dbsnp.rsid:rs58991260"]
    }))
    .expect("valid metadata");

    assert!(suggest::should_use_static_examples(metadata.total_documents()));
    assert_eq!(metadata.static_examples().len(), 1);

    // And one document fewer keeps live sampling in play
    let metadata_small: Metadata = serde_json::from_value(json!({
        "src": {"dbsnp": {"stats": {"dbsnp": FULL_SCAN_THRESHOLD}}}
    }))
    .expect("valid metadata");
    assert!(!suggest::should_use_static_examples(
        metadata_small.total_documents()
    ));
}
