//! Chat message for an entry, bounded by the platform's size ceiling.

use lexi_config::language::LanguagePair;
use lexi_config::lookup::LookupConfig;

use crate::entry::{DictionaryEntry, DictionaryEntryItem, Direction};
use crate::error::LookupError;
use crate::highlight::{EMPHASIS, SynonymSet, highlight_synonyms};

/// Spoiler markers hiding text until clicked
pub const SPOILER: &str = "||";

const PRONUNCIATION_URL: &str = "https://forvo.com/word";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub hide_words: bool,
    /// Example pairs needed across all shown items
    pub min_sentences: usize,
    /// Example pairs shown per item
    pub max_sentences: usize,
    pub max_items_shown: usize,
    pub size_limit: usize,
    pub show_footer: bool,
}

impl From<&LookupConfig> for RenderOptions {
    fn from(config: &LookupConfig) -> Self {
        Self {
            hide_words: config.hide_words,
            min_sentences: config.min_sentences,
            max_sentences: config.max_sentences,
            max_items_shown: config.max_items_shown,
            size_limit: config.size_limit,
            show_footer: config.show_footer,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&LookupConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub title: String,
    pub url: String,
    pub body: String,
    pub footer: String,
}

impl RenderedMessage {
    /// Size as the chat platform counts it; the url is not part of it
    pub fn size(&self) -> usize {
        self.title.chars().count() + self.body.chars().count() + self.footer.chars().count()
    }
}

fn render_item(
    item: &DictionaryEntryItem,
    query_word: &str,
    options: &RenderOptions,
    out: &mut String,
) {
    let sep = if options.hide_words { SPOILER } else { "" };

    let primary = item.primary_translation().unwrap_or_default();
    out.push_str(&format!("{EMPHASIS}{sep}{primary}{sep}{EMPHASIS}"));
    if let Some(synonym) = item.alternative_source_word(query_word) {
        out.push_str(&format!(" (~{synonym})"));
    }
    out.push('\n');

    // The query word is bolded in its own sentences too
    let source_synonyms = SynonymSet::for_side(&item.source_words, query_word).with_word(query_word);
    let target_synonyms = SynonymSet::for_side(&item.target_words, query_word);

    // "> 1." would be turned into a numbered list by the platform
    for (idx, (source, target)) in item.example_pairs().take(options.max_sentences).enumerate() {
        let n = idx + 1;
        out.push_str(&format!(
            "> {n}: {}\n",
            highlight_synonyms(source, &source_synonyms)
        ));
        out.push_str(&format!(
            "> {n}: {sep}{}{sep}\n",
            highlight_synonyms(target, &target_synonyms)
        ));
    }
}

/// Word in the dictionary's native language for the pronunciation link.
/// Reverse queries have it on the translation side.
fn native_word<'e>(entry: &'e DictionaryEntry, first: &'e DictionaryEntryItem) -> &'e str {
    match entry.direction {
        Direction::Forward => entry.query_word.as_str(),
        Direction::Reverse => first.primary_translation().unwrap_or(entry.query_word.as_str()),
    }
}

/// Render up to `max_items_shown` valid items.
///
/// Fails instead of truncating: an oversized message is never produced.
pub fn render(
    entry: &DictionaryEntry,
    options: &RenderOptions,
    pair: &LanguagePair,
) -> Result<RenderedMessage, LookupError> {
    let items: Vec<&DictionaryEntryItem> =
        entry.valid_items().take(options.max_items_shown).collect();

    let Some(first) = items.first() else {
        return Err(LookupError::InvalidEntry(entry.query_word.clone()));
    };

    let sentences: usize = items
        .iter()
        .map(|i| i.source_examples.len().min(options.max_sentences))
        .sum();
    if sentences < options.min_sentences {
        tracing::warn!(
            "Not enough sentences ({sentences} < {}) for '{}'",
            options.min_sentences,
            entry.query_word
        );
        return Err(LookupError::InvalidEntry(entry.query_word.clone()));
    }

    let mut body = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            body.push('\n');
        }
        render_item(item, &entry.query_word, options, &mut body);
    }

    let footer = if options.show_footer {
        format!(
            "{PRONUNCIATION_URL}/{}/#{}",
            native_word(entry, first),
            pair.native.code
        )
    } else {
        String::new()
    };

    let message = RenderedMessage {
        title: format!("∙∙∙∙∙ {} ∙∙∙∙∙", entry.query_word),
        url: entry.url.clone().unwrap_or_default(),
        body,
        footer,
    };

    let size = message.size();
    if size >= options.size_limit {
        return Err(LookupError::OversizeRender {
            size,
            limit: options.size_limit,
        });
    }

    Ok(message)
}
