//! Query orchestration: fetch a page, build the entry, render it, and retry
//! where a retry can help.

use async_trait::async_trait;
use lexi_config::language::LanguagePair;
use lexi_config::lookup::LookupConfig;
use lexi_config::site::SiteConfig;

use crate::builder::{build_entry, dict_code, resolve_headword};
use crate::entry::{DictionaryEntry, Direction};
use crate::error::{FetchError, LookupError};
use crate::markup::Document;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::render::{RenderOptions, RenderedMessage, render};

/// Retrieves and parses one page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError>;
}

/// Suggests a better spelling for a word that gave no result
#[async_trait]
pub trait SpellingCorrector: Send + Sync {
    /// Best effort: the input comes back unchanged when nothing better is known
    async fn correct(&self, word: &str) -> String;
}

pub struct Lookup<F> {
    fetcher: F,
    site: SiteConfig,
    pair: LanguagePair,
    max_random_attempts: u32,
}

impl<F: PageFetcher> Lookup<F> {
    pub fn new(fetcher: F, site: SiteConfig, pair: LanguagePair) -> Self {
        Self {
            fetcher,
            site,
            pair,
            max_random_attempts: LookupConfig::default().max_random_attempts,
        }
    }

    pub fn with_max_random_attempts(mut self, attempts: u32) -> Self {
        self.max_random_attempts = attempts;
        self
    }

    pub fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    pub fn query_url(&self, word: Option<&str>) -> String {
        match word {
            Some(word) => self
                .site
                .word_url(dict_code(word, &self.site, &self.pair), word),
            None => self.site.random_url(),
        }
    }

    /// Fetch and build the entry for `word`, or for a random word when None.
    ///
    /// Random pages are native -> reference; a reverse random query takes the
    /// page's headword and inverts the entry like any other reverse lookup.
    pub async fn fetch_entry(
        &self,
        word: Option<&str>,
        direction: Direction,
    ) -> Result<DictionaryEntry, LookupError> {
        let word = match word {
            Some(raw) => Some(
                DefaultPreprocessor
                    .process(raw)
                    .ok_or_else(|| LookupError::NotFound(raw.to_string()))?,
            ),
            None => None,
        };
        let url = self.query_url(word.as_deref());
        tracing::debug!("GET {url}");
        let doc = self.fetcher.fetch(&url).await?;

        if !doc.find_by_id(&self.site.not_found_id).is_empty() {
            return Err(LookupError::NotFound(word.unwrap_or(url)));
        }

        // Forward and random queries take the site's accented spelling
        let headword = match word {
            Some(word) if direction == Direction::Reverse => word,
            word => match (resolve_headword(&doc, &self.site), word) {
                (Some(headword), _) => headword,
                (None, Some(word)) => {
                    tracing::warn!("Could not find the accented version of '{word}'");
                    word
                }
                (None, None) => {
                    return Err(LookupError::MalformedStructure(
                        "random page without a headword".to_string(),
                    ));
                }
            },
        };

        Ok(build_entry(&doc, &headword, direction, &self.site, &self.pair))
    }

    async fn try_render(
        &self,
        word: Option<&str>,
        direction: Direction,
        options: &RenderOptions,
    ) -> Result<RenderedMessage, LookupError> {
        let entry = self.fetch_entry(word, direction).await?;

        if !entry.is_valid() {
            tracing::warn!("No valid item for '{}'", entry.query_word);
            return Err(LookupError::InvalidEntry(entry.query_word));
        }

        let message = render(&entry, options, &self.pair)?;
        tracing::info!("Valid entry for '{}'", entry.query_word);

        Ok(message)
    }

    /// One attempt for a given word; up to `max_random_attempts` sequential
    /// attempts for a random word. Network failures are never retried.
    pub async fn fetch_best_effort(
        &self,
        word: Option<&str>,
        direction: Direction,
        options: &RenderOptions,
    ) -> Result<RenderedMessage, LookupError> {
        if word.is_some() {
            return self.try_render(word, direction, options).await;
        }

        let mut last_err = None;
        for attempt in 1..=self.max_random_attempts {
            match self.try_render(None, direction, options).await {
                Ok(message) => return Ok(message),
                Err(LookupError::Fetch(e)) => return Err(LookupError::Fetch(e)),
                Err(e) => {
                    tracing::debug!("Random attempt {attempt} failed: {e}");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| LookupError::NotFound("random word".to_string())))
    }

    /// [`Self::fetch_best_effort`], then a single retry with the corrected
    /// spelling when the word gave nothing usable.
    pub async fn fetch_with_correction<C>(
        &self,
        word: Option<&str>,
        direction: Direction,
        options: &RenderOptions,
        corrector: &C,
    ) -> Result<RenderedMessage, LookupError>
    where
        C: SpellingCorrector + ?Sized,
    {
        let err = match self.fetch_best_effort(word, direction, options).await {
            Ok(message) => return Ok(message),
            Err(e) => e,
        };

        let Some(word) = word else {
            return Err(err);
        };
        if !err.is_retryable_with_correction() {
            return Err(err);
        }

        let corrected = corrector.correct(word).await;
        if corrected == word {
            return Err(err);
        }

        tracing::info!("Tried to fix spelling: '{word}' to '{corrected}'");
        self.fetch_best_effort(Some(&corrected), direction, options)
            .await
    }
}
