//! Example-query generation over fetched sample documents.
//!
//! Given one batch of sample documents, this module draws random picks with
//! replacement, runs the [`sampler`](crate::sampler) on each, drops unusable
//! and duplicate candidates, and appends one direct-lookup example built from
//! a document `_id`.
//!
//! APIs that declare a very large corpus are not scanned for samples at all;
//! [`should_use_static_examples`] tells the caller to fall back to the
//! metadata-provided static examples instead.

use crate::sampler::{self, Candidate};
use rand::Rng;
use serde_json::Value;
use tracing::debug;

/// Default number of random document picks per generation run.
pub const DEFAULT_PICKS: u32 = 8;

/// Document count above which sample scanning is skipped in favor of
/// metadata-provided static examples.
pub const FULL_SCAN_THRESHOLD: u64 = 250_000_000;

/// Whether the declared corpus is too large to scan for sample documents.
#[must_use]
pub const fn should_use_static_examples(total_documents: u64) -> bool {
    total_documents > FULL_SCAN_THRESHOLD
}

/// Generate example queries from a batch of sample documents.
///
/// Draws `picks` random documents with replacement and samples one query
/// fragment from each. Unusable candidates and duplicates are dropped
/// silently (logged at debug level); surviving fragments become
/// `/query?q=<fragment>` entries. One direct-lookup example
/// `/<entity_type>/<id>` is appended from the first document carrying a
/// string `_id`.
///
/// Returns an empty list when `hits` is empty. The injected `rng` makes
/// generation deterministic under a seeded [`rand::rngs::StdRng`].
#[must_use]
pub fn generate<R: Rng + ?Sized>(
    hits: &[Value],
    entity_type: &str,
    picks: u32,
    rng: &mut R,
) -> Vec<String> {
    let mut examples = Vec::new();

    if hits.is_empty() {
        debug!("no sample documents available, skipping example generation");
        return examples;
    }

    for _ in 0..picks {
        let doc = &hits[rng.gen_range(0..hits.len())];
        let Some(object) = doc.as_object() else {
            debug!("sample hit is not a JSON object, skipping");
            continue;
        };

        match sampler::sample(object, rng) {
            Ok(Candidate::Fragment(fragment)) => {
                let example = format!("/query?q={fragment}");
                if examples.contains(&example) {
                    debug!(%example, "duplicate example dropped");
                } else {
                    examples.push(example);
                }
            }
            Ok(Candidate::Unusable) => {
                debug!("unusable candidate dropped");
            }
            Err(e) => {
                debug!(error = %e, "candidate sampling failed");
            }
        }
    }

    if let Some(example) = direct_lookup_example(hits, entity_type) {
        examples.push(example);
    }

    examples
}

/// Build the direct-lookup example `/<entity_type>/<id>` from the first
/// document carrying a string `_id`.
fn direct_lookup_example(hits: &[Value], entity_type: &str) -> Option<String> {
    hits.iter()
        .find_map(|doc| doc.get("_id").and_then(Value::as_str))
        .map(|id| format!("/{entity_type}/{id}"))
}
