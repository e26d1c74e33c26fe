//! Approximate word equality under inflection.
//!
//! Two words are "the same word" when, after dropping accents and case, a long
//! enough run of characters is shared between them. Declined and conjugated
//! forms usually keep their stem, which is what this measures.

use caseless::Caseless;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Words with a [`delta`] at or below this are treated as one word
pub const SAME_WORD_THRESHOLD: f64 = 0.3;

/// Length of the longest run of `a` found contiguously in `b`.
///
/// Scans `a` left to right, growing each run while it still occurs in `b` and
/// jumping past the character that broke it. The scan is greedy, so a run that
/// starts inside a skipped span is missed: call it both ways and keep the max.
pub fn longest_common_substring(a: &str, b: &str) -> usize {
    if a == b {
        return a.chars().count();
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut best = 0;
    let mut start = 0;
    while start < a.len() {
        let mut len = 0;
        while start + len < a.len() && contains(&b, &a[start..start + len + 1]) {
            len += 1;
        }
        best = best.max(len);
        start += len + 1;
    }

    best
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Accent and case insensitive form: "Άλφα", "άλφα" and "αλφα" all become "αλφα"
pub fn normalize(word: &str) -> String {
    word.nfkd()
        .default_case_fold()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Distance in `[0, 1]`: 0 for the same normalized word, close to 1 for
/// unrelated words.
///
/// Two empty words have no meaningful distance; they count as unrelated (1.0).
pub fn delta(a: &str, b: &str) -> f64 {
    let aa = normalize(a);
    let bb = normalize(b);

    let max_len = aa.chars().count().max(bb.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let shared = longest_common_substring(&aa, &bb).max(longest_common_substring(&bb, &aa));

    (max_len - shared) as f64 / max_len as f64
}

pub fn is_same_word(a: &str, b: &str) -> bool {
    delta(a, b) <= SAME_WORD_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_and_case_variants_are_identical() {
        let words = ["Άλφα", "Αλφα", "άλφα", "αλφα"];
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                assert_eq!(delta(a, b), 0.0, "{a} vs {b}");
            }
        }
        assert_eq!(delta("Άλφα", "αλφα"), 0.0);
        assert_eq!(delta("Straße", "STRASSE"), 0.0);
        assert_eq!(delta("ΛΌΓΟΣ", "λόγος"), 0.0);
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for w in ["Άλφα", "ΛΌΓΟΣ", "ημερήσιος", "Café", "ϊΐ"] {
            let once = normalize(w);
            assert_eq!(normalize(&once), once);
        }
        assert_eq!(normalize("ΛΌΓΟΣ"), normalize("λόγος"));
    }

    #[test]
    fn test_lcs() {
        assert_eq!(longest_common_substring("abc", "abc"), 3);
        assert_eq!(longest_common_substring("abc", "xabcx"), 3);
        assert_eq!(longest_common_substring("abc", "xyz"), 0);
        assert_eq!(longest_common_substring("", "abc"), 0);
        // The greedy scan misses "abc" starting from "xabc"...
        assert_eq!(longest_common_substring("xabc", "abcx"), 2);
        // ...but the reverse direction finds it
        assert_eq!(longest_common_substring("abcx", "xabc"), 3);
    }

    #[test]
    fn test_delta_bounds() {
        let words = ["", "a", "φάω", "να", "ημερήσιος", "daily", "quotidian"];
        for a in words {
            for b in words {
                let d = delta(a, b);
                assert!((0.0..=1.0).contains(&d), "{a} vs {b}: {d}");
            }
            if !a.is_empty() {
                assert_eq!(delta(a, a), 0.0);
            }
        }
    }

    #[test]
    fn test_inflected_forms_match() {
        assert!(is_same_word("ημερήσιος", "ημερήσια"));
        assert!(is_same_word("Ημερήσιο", "ημερήσιος"));
        assert!(!is_same_word("να", "φάω"));
        assert!(!is_same_word("Θέλω", "φάω"));
        assert!(!is_same_word("daily", "diurnal"));
    }
}
