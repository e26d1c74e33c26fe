use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Clean a user supplied query word; None when nothing is left
    fn process(&self, text: &str) -> Option<String> {
        let text = text.trim();

        if text.is_empty() {
            return None;
        }

        // Compatibility forms ("ά" as U+1F71) become the forms the site uses
        let text: String = text.nfkc().collect();

        // Inner newlines and runs of spaces collapse to one space
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

        Some(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
