use std::env;

use serde::{Deserialize, Serialize};

fn default_max_random_attempts() -> u32 {
    5
}

fn default_min_sentences() -> usize {
    1
}

fn default_max_sentences() -> usize {
    2
}

fn default_max_items_shown() -> usize {
    3
}

fn default_size_limit() -> usize {
    2000
}

fn default_show_footer() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Random-word queries retry this many times before giving up
    #[serde(default = "default_max_random_attempts")]
    pub max_random_attempts: u32,
    /// Wrap translations in spoiler markers
    #[serde(default)]
    pub hide_words: bool,
    #[serde(default = "default_min_sentences")]
    pub min_sentences: usize,
    /// Example pairs shown per item
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
    #[serde(default = "default_max_items_shown")]
    pub max_items_shown: usize,
    /// Chat platform message ceiling
    #[serde(default = "default_size_limit")]
    pub size_limit: usize,
    #[serde(default = "default_show_footer")]
    pub show_footer: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_random_attempts: default_max_random_attempts(),
            hide_words: false,
            min_sentences: default_min_sentences(),
            max_sentences: default_max_sentences(),
            max_items_shown: default_max_items_shown(),
            size_limit: default_size_limit(),
            show_footer: default_show_footer(),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        let max_random_attempts = env::var("LEXI_MAX_RANDOM_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_random_attempts);

        Self {
            max_random_attempts,
            ..Self::default()
        }
    }
}
