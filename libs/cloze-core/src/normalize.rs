//! Word canonicalization for answer comparison.

use crate::types::MatchConfig;
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks stripped by diacritic folding.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Canonicalize a word for comparison under the given strictness flags.
///
/// Steps run in a fixed order:
/// 1. `!exact_punctuation`: drop every character that is not a letter,
///    digit, underscore, or whitespace.
/// 2. `!case_sensitive`: lowercase.
/// 3. `!diacritic_sensitive`: NFD-decompose and drop combining marks in
///    U+0300–U+036F. Ligatures like `æ` and `œ` have no canonical
///    decomposition and pass through untouched.
/// 4. Trim surrounding whitespace.
///
/// Punctuation is stripped before the folds so removal cannot shift
/// boundary whitespace into the folded string. Idempotent for any flag set.
pub fn normalize(word: &str, config: &MatchConfig) -> String {
    let mut normalized = if config.exact_punctuation {
        word.to_string()
    } else {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect()
    };

    if !config.case_sensitive {
        normalized = normalized.to_lowercase();
    }

    if !config.diacritic_sensitive {
        normalized = normalized
            .nfd()
            .filter(|c| !COMBINING_MARKS.contains(c))
            .collect();
    }

    normalized.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(case_sensitive: bool, exact_punctuation: bool, diacritic_sensitive: bool) -> MatchConfig {
        MatchConfig {
            case_sensitive,
            exact_punctuation,
            diacritic_sensitive,
        }
    }

    #[test]
    fn strips_punctuation_when_lenient() {
        assert_eq!(normalize("hello!", &config(true, false, true)), "hello");
        assert_eq!(normalize("it's", &config(true, false, true)), "its");
        assert_eq!(normalize("well-known", &config(true, false, true)), "wellknown");
    }

    #[test]
    fn keeps_punctuation_when_exact() {
        assert_eq!(normalize("hello!", &config(true, true, true)), "hello!");
        assert_eq!(normalize("it's", &config(true, true, true)), "it's");
    }

    #[test]
    fn underscores_and_digits_survive_stripping() {
        assert_eq!(normalize("route_66!", &config(true, false, true)), "route_66");
    }

    #[test]
    fn lowercases_when_case_insensitive() {
        assert_eq!(normalize("Hello", &config(false, true, true)), "hello");
        assert_eq!(normalize("HELLO", &config(false, true, true)), "hello");
        assert_eq!(normalize("Hello", &config(true, true, true)), "Hello");
    }

    #[test]
    fn axes_are_independent() {
        // Punctuation and case stripped, diacritic kept.
        assert_eq!(normalize("Café!", &config(false, false, true)), "café");
        // All three folded.
        assert_eq!(normalize("Café!", &config(false, false, false)), "cafe");
        // Only the diacritic folded.
        assert_eq!(normalize("Café!", &config(true, true, false)), "Cafe!");
    }

    #[test]
    fn diacritic_folding_strips_combining_marks() {
        assert_eq!(normalize("café", &config(true, true, false)), "cafe");
        assert_eq!(normalize("naïve", &config(true, true, false)), "naive");
        // ñ decomposes to n + combining tilde.
        assert_eq!(normalize("niño", &config(true, true, false)), "nino");
    }

    #[test]
    fn ligatures_survive_diacritic_folding() {
        assert_eq!(normalize("œuvre", &config(false, true, false)), "œuvre");
        assert_eq!(normalize("ærø", &config(true, true, false)), "ærø");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  hello  ", &config(true, true, true)), "hello");
        assert_eq!(normalize("", &config(false, false, false)), "");
        assert_eq!(normalize("   ", &config(false, false, false)), "");
    }

    #[test]
    fn idempotent_for_every_flag_combination() {
        let samples = ["Café!", "œuvre", "  It's Naïve!  ", "route_66", "ÑANDÚ"];
        for case in [false, true] {
            for punct in [false, true] {
                for diacritic in [false, true] {
                    let flags = config(case, punct, diacritic);
                    for word in samples {
                        let once = normalize(word, &flags);
                        assert_eq!(normalize(&once, &flags), once, "flags: {flags:?}, word: {word:?}");
                    }
                }
            }
        }
    }
}
