use lexi_config::language::{LanguagePair, LanguageProfile};

/// Part-of-speech markers appended to Greek words
/// (https://www.wordreference.com/english/abbreviationsWRD.aspx?dict=engr)
pub const GREEK_ANNOTATIONS: &[&str] = &[
    "επίθ",
    "επίθ άκλ",
    "φρ ως",
    "ουσ ουδ",
    "ουσ αρσ",
    "ουσ θηλ",
    "ουσ αρσ/θηλ",
    "ουσ πλ",
    "ρ έκφρ",
    "ρ αμ + επίρ",
    "ρ αμ",
    "ρ μ + πρόθ",
    "ρ μ",
    "έκφρ",
    "περίφρ",
    "επίρ",
    "πρόθ",
    "σύνδ",
    "αντων",
    "επιφ",
];

pub const ENGLISH_ANNOTATIONS: &[&str] = &[
    "adj",
    "adv",
    "n",
    "npl",
    "n as adj",
    "v expr",
    "vi",
    "vi phrasal",
    "vtr phrasal sep",
    "vtr phrasal insep",
    "vtr + prep",
    "vtr",
    "prep",
    "conj",
    "pron",
    "interj",
    "expr",
];

/// Code points of English text stay below this; Greek starts at U+0370
pub const LATIN_CEILING: u32 = 200;

pub fn greek_english() -> LanguagePair {
    LanguagePair {
        native: LanguageProfile::new("el", GREEK_ANNOTATIONS),
        reference: LanguageProfile::new("en", ENGLISH_ANNOTATIONS),
        reference_ceiling: LATIN_CEILING,
    }
}
