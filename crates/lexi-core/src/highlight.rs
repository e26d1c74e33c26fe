use std::collections::{BTreeSet, HashMap};

use crate::similarity::{SAME_WORD_THRESHOLD, delta};

/// Markdown emphasis used for matched words
pub const EMPHASIS: &str = "**";

/// Stripped from both ends of a token before comparing it
const PUNCTUATION: &[char] = &[
    '(', ')', ',', '.', ';', ':', '!', '?', '«', '»', '"', '\'', '·',
];

/// Known forms of the looked-up word on one side of an item.
///
/// Ordered so that matching never depends on hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymSet {
    words: BTreeSet<String>,
}

impl SynonymSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.trim().is_empty())
                .collect(),
        }
    }

    /// Words of one item side without the literal query word
    pub fn for_side(words: &[String], query_word: &str) -> Self {
        Self::new(words.iter().filter(|w| *w != query_word).cloned())
    }

    pub fn with_word(mut self, word: &str) -> Self {
        if !word.trim().is_empty() {
            self.words.insert(word.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Closest synonym within the same-word threshold; ties go to the shorter
    /// synonym, then to the alphabetically first.
    pub fn best_match(&self, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }

        self.iter()
            .map(|syn| (syn, delta(token, syn)))
            .filter(|(_, d)| *d <= SAME_WORD_THRESHOLD)
            .min_by(|(a, da), (b, db)| {
                da.total_cmp(db)
                    .then_with(|| a.chars().count().cmp(&b.chars().count()))
            })
            .map(|(syn, _)| syn)
    }
}

/// Embolden every token of `sentence` that is an inflected form of a synonym.
///
/// Surrounding punctuation stays outside the markers and whitespace is kept
/// as is.
pub fn highlight_synonyms(sentence: &str, synonyms: &SynonymSet) -> String {
    let mut verdicts: HashMap<&str, bool> = HashMap::new();
    let mut out = String::with_capacity(sentence.len() + 8);

    for piece in sentence.split_inclusive(char::is_whitespace) {
        let token = piece.trim_end();
        let spacing = &piece[token.len()..];

        let inner = token.trim_start_matches(PUNCTUATION);
        let lead = &token[..token.len() - inner.len()];
        let core = inner.trim_end_matches(PUNCTUATION);
        let trail = &inner[core.len()..];

        let matched = !core.is_empty()
            && *verdicts
                .entry(core)
                .or_insert_with(|| synonyms.best_match(core).is_some());

        if matched {
            out.push_str(lead);
            out.push_str(EMPHASIS);
            out.push_str(core);
            out.push_str(EMPHASIS);
            out.push_str(trail);
        } else {
            out.push_str(token);
        }
        out.push_str(spacing);
    }

    out
}
