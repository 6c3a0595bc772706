//! Local keyword scorer — the free, deterministic, offline tier.

use voxvault_core::LocalResolution;

use crate::normalize::normalize;
use crate::tables::{ACTION_LEXICON, DOCUMENT_LEXICON};

/// Minimum combined keyword hits for a local resolution to be accepted.
pub const CONFIDENCE_THRESHOLD: u32 = 2;

/// Score a transcript against the static keyword tables.
///
/// Tokens match by substring containment on the normalized text, not by word
/// boundary: the vocabulary is small and hand-curated, the user confirms
/// every command afterwards, and a silent fall-through to the remote tier
/// costs quota, so over-matching is the cheaper failure.
pub fn score_local(text: &str) -> LocalResolution {
    let normalized = normalize(text);

    let (action, action_score) = best_category(&normalized, ACTION_LEXICON);
    let (doc_type, doc_score) = best_category(&normalized, DOCUMENT_LEXICON);

    let confidence = action_score + doc_score;
    let understood = action.is_some() && doc_type.is_some() && confidence >= CONFIDENCE_THRESHOLD;

    LocalResolution {
        action,
        doc_type,
        confidence,
        understood,
    }
}

/// Count token hits per category, keeping the best-scoring one. Only a
/// strictly greater score replaces the running best, so a tie keeps the
/// earlier-declared category.
fn best_category<T: Copy>(text: &str, lexicon: &[(T, &[&str])]) -> (Option<T>, u32) {
    let mut best = None;
    let mut best_score = 0u32;
    for &(category, tokens) in lexicon {
        let hits = tokens.iter().filter(|token| text.contains(*token)).count() as u32;
        if hits > best_score {
            best = Some(category);
            best_score = hits;
        }
    }
    (best, best_score)
}
