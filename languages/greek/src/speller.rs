use async_trait::async_trait;
use lexi_config::site::SiteConfig;
use lexi_core::{PageFetcher, SpellingCorrector, resolve_headword};

use crate::greeklish::greeklish_to_greek;

/// Recovers the accented Greek spelling of a word typed in Greeklish or
/// without accents by asking the dictionary which headword it lands on.
///
/// "xara" -> "χαρά", "χαρα" -> "χαρά", "nonsense" -> "nonsense"
pub struct GreekSpeller<F> {
    fetcher: F,
    site: SiteConfig,
}

impl<F: PageFetcher> GreekSpeller<F> {
    pub fn new(fetcher: F, site: SiteConfig) -> Self {
        Self { fetcher, site }
    }
}

#[async_trait]
impl<F: PageFetcher> SpellingCorrector for GreekSpeller<F> {
    async fn correct(&self, word: &str) -> String {
        let greek = greeklish_to_greek(word.trim());
        if greek.is_empty() {
            return word.to_string();
        }

        let url = self.site.word_url(&self.site.forward_dict, &greek);
        tracing::debug!("Resolving spelling of '{}' via {}", word, url);

        let doc = match self.fetcher.fetch(&url).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!("Spelling lookup failed for '{}': {}", word, e);
                return word.to_string();
            }
        };

        match resolve_headword(&doc, &self.site) {
            Some(headword) => headword,
            None => word.to_string(),
        }
    }
}
