/// Which side of the dictionary the query word is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Native word looked up for its reference-language meaning
    Forward,
    /// Reference-language word looked up for the native word
    Reverse,
}

impl Direction {
    pub fn from_forward(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// One sense of an entry: words on both sides plus paired example sentences.
///
/// Sources are always in the query word's language once an entry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryEntryItem {
    pub source_words: Vec<String>,
    pub target_words: Vec<String>,
    pub source_examples: Vec<String>,
    pub target_examples: Vec<String>,
}

impl DictionaryEntryItem {
    /// Examples are cut to the shorter list, keeping the earliest ones
    pub fn new(
        source_words: Vec<String>,
        target_words: Vec<String>,
        mut source_examples: Vec<String>,
        mut target_examples: Vec<String>,
    ) -> Self {
        let pairs = source_examples.len().min(target_examples.len());
        source_examples.truncate(pairs);
        target_examples.truncate(pairs);

        Self {
            source_words,
            target_words,
            source_examples,
            target_examples,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.source_words.is_empty()
            && !self.target_words.is_empty()
            && !self.source_examples.is_empty()
            && !self.target_examples.is_empty()
    }

    pub fn has_examples(&self) -> bool {
        !self.source_examples.is_empty() && !self.target_examples.is_empty()
    }

    /// Same sense seen from the other language
    pub fn inverted(self) -> Self {
        Self {
            source_words: self.target_words,
            target_words: self.source_words,
            source_examples: self.target_examples,
            target_examples: self.source_examples,
        }
    }

    pub fn example_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.source_examples
            .iter()
            .zip(&self.target_examples)
            .map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn primary_translation(&self) -> Option<&str> {
        self.target_words.first().map(String::as_str)
    }

    /// A source word other than `query_word` for the "(~synonym)" hint,
    /// single words preferred over phrases
    pub fn alternative_source_word(&self, query_word: &str) -> Option<&str> {
        let mut candidates: Vec<&str> = self
            .source_words
            .iter()
            .map(String::as_str)
            .filter(|w| *w != query_word)
            .collect();
        candidates.sort_by_key(|w| w.contains(' '));
        candidates.first().copied()
    }
}

/// Everything extracted for one query
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub query_word: String,
    pub direction: Direction,
    pub url: Option<String>,
    pub items: Vec<DictionaryEntryItem>,
}

impl DictionaryEntry {
    pub fn is_valid(&self) -> bool {
        self.items.iter().any(DictionaryEntryItem::is_valid)
    }

    pub fn valid_items(&self) -> impl Iterator<Item = &DictionaryEntryItem> {
        self.items.iter().filter(|i| i.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn item() -> DictionaryEntryItem {
        DictionaryEntryItem::new(
            strings(&["ημερήσιος", "ημερήσια"]),
            strings(&["daily", "quotidian"]),
            strings(&["Η ημερήσια εφημερίδα.", "Ημερήσια έξοδα."]),
            strings(&["The daily paper."]),
        )
    }

    #[test]
    fn test_examples_are_balanced() {
        let item = item();
        assert_eq!(item.source_examples.len(), item.target_examples.len());
        assert_eq!(item.source_examples, strings(&["Η ημερήσια εφημερίδα."]));

        let empty = DictionaryEntryItem::new(vec![], vec![], strings(&["a", "b"]), vec![]);
        assert!(empty.source_examples.is_empty());
        assert!(!empty.has_examples());
    }

    #[test]
    fn test_invert_swaps_and_round_trips() {
        let original = item();
        let inverted = original.clone().inverted();

        assert_eq!(inverted.source_words, original.target_words);
        assert_eq!(inverted.target_words, original.source_words);
        assert_eq!(inverted.source_examples, original.target_examples);
        assert_eq!(inverted.target_examples, original.source_examples);
        assert_eq!(inverted.inverted(), original);
    }

    #[test]
    fn test_validity() {
        assert!(item().is_valid());

        let no_words = DictionaryEntryItem::new(vec![], strings(&["x"]), strings(&["a"]), strings(&["b"]));
        assert!(!no_words.is_valid());
        assert!(no_words.has_examples());

        let mut entry = DictionaryEntry {
            query_word: "ημερήσιος".to_string(),
            direction: Direction::Forward,
            url: None,
            items: vec![no_words],
        };
        assert!(!entry.is_valid());
        entry.items.push(item());
        assert!(entry.is_valid());
        assert_eq!(entry.valid_items().count(), 1);
    }

    #[test]
    fn test_alternative_source_word_prefers_single_words() {
        let item = DictionaryEntryItem::new(
            strings(&["τρώω", "τρώω λίγο", "φάγω"]),
            strings(&["eat"]),
            vec![],
            vec![],
        );
        assert_eq!(item.alternative_source_word("τρώω"), Some("φάγω"));
        assert_eq!(item.alternative_source_word("φάγω"), Some("τρώω"));

        let alone = DictionaryEntryItem::new(strings(&["τρώω"]), vec![], vec![], vec![]);
        assert_eq!(alone.alternative_source_word("τρώω"), None);
    }
}
