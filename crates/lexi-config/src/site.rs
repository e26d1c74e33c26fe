use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://www.wordreference.com".to_string()
}

fn default_table_class() -> String {
    "WRD".to_string()
}

fn default_direction_attr() -> String {
    "data-dict".to_string()
}

fn default_forward_dict() -> String {
    "gren".to_string()
}

fn default_reverse_dict() -> String {
    "engr".to_string()
}

fn default_row_markers() -> [String; 2] {
    ["odd".to_string(), "even".to_string()]
}

fn default_audio_marker() -> String {
    "ⓘ".to_string()
}

fn default_skip_classes() -> Vec<String> {
    vec!["tooltip".to_string()]
}

fn default_not_found_id() -> String {
    "noEntryFound".to_string()
}

/// Cell classes of one dictionary table row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellClasses {
    pub source_word: String,
    pub target_word: String,
    pub source_example: String,
    pub target_example: String,
}

impl Default for CellClasses {
    fn default() -> Self {
        Self {
            source_word: "FrWrd".to_string(),
            target_word: "ToWrd".to_string(),
            source_example: "FrEx".to_string(),
            target_example: "ToEx".to_string(),
        }
    }
}

/// Structural markers of the bilingual dictionary site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Class of every word table on a result page
    #[serde(default = "default_table_class")]
    pub table_class: String,
    /// Table attribute holding the dictionary direction code
    #[serde(default = "default_direction_attr")]
    pub direction_attr: String,
    /// Direction code for native -> reference tables, e.g. "gren"
    #[serde(default = "default_forward_dict")]
    pub forward_dict: String,
    #[serde(default = "default_reverse_dict")]
    pub reverse_dict: String,
    /// The two alternating row classes separating senses
    #[serde(default = "default_row_markers")]
    pub row_markers: [String; 2],
    pub cells: CellClasses,
    /// Glyph marking inline-audio cells, which never hold real examples
    #[serde(default = "default_audio_marker")]
    pub audio_marker: String,
    /// Elements whose text never belongs to a cell (hover tooltips)
    #[serde(default = "default_skip_classes")]
    pub skip_classes: Vec<String>,
    #[serde(default = "default_not_found_id")]
    pub not_found_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            table_class: default_table_class(),
            direction_attr: default_direction_attr(),
            forward_dict: default_forward_dict(),
            reverse_dict: default_reverse_dict(),
            row_markers: default_row_markers(),
            cells: CellClasses::default(),
            audio_marker: default_audio_marker(),
            skip_classes: default_skip_classes(),
            not_found_id: default_not_found_id(),
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        let base_url = env::var("LEXI_BASE_URL").unwrap_or_else(|_| default_base_url());

        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn word_url(&self, dict: &str, word: &str) -> String {
        format!("{}/{}/{}", self.base_url.trim_end_matches('/'), dict, word)
    }

    pub fn random_url(&self) -> String {
        format!(
            "{}/random/{}",
            self.base_url.trim_end_matches('/'),
            self.forward_dict
        )
    }
}
