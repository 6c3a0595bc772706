//! Transcript normalization for keyword matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a transcript for matching: lowercase, canonical
/// decomposition with combining marks stripped, apostrophe variants softened
/// to spaces. No stemming.
///
/// Pure and idempotent. Empty or whitespace-only input yields empty output,
/// which downstream scorers treat as zero matches everywhere.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            '\'' | '\u{2019}' | '\u{2018}' => ' ',
            c => c,
        })
        .collect();
    folded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("café"), normalize("cafe"));
        assert_eq!(normalize("Télécharger"), "telecharger");
        assert_eq!(normalize("currículo"), "curriculo");
    }

    #[test]
    fn is_idempotent() {
        for input in ["café", "Télécharger ma lettre", "l'attestation", "já vi"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn softens_apostrophe_variants() {
        assert_eq!(normalize("l'attestation"), "l attestation");
        assert_eq!(normalize("l\u{2019}attestation"), "l attestation");
    }

    #[test]
    fn whitespace_only_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(" \t\n"), "");
    }
}
