use serde::{Deserialize, Serialize};

fn default_reference_ceiling() -> u32 {
    200
}

/// One language of a dictionary pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageProfile {
    /// ISO 639-1 code ("el", "en", ...)
    pub code: String,
    /// Trailing grammatical markers the site appends to words ("adj", "ουσ θηλ", ...)
    pub annotations: Vec<String>,
}

impl LanguageProfile {
    pub fn new(code: &str, annotations: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            annotations: annotations.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// The language being learned (native script of the dictionary) and the
/// reference language it is explained in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePair {
    pub native: LanguageProfile,
    pub reference: LanguageProfile,
    /// Text whose code points are all below this is reference-language text
    #[serde(default = "default_reference_ceiling")]
    pub reference_ceiling: u32,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            native: LanguageProfile::default(),
            reference: LanguageProfile::default(),
            reference_ceiling: default_reference_ceiling(),
        }
    }
}

impl LanguagePair {
    pub fn is_reference_script(&self, text: &str) -> bool {
        text.chars().all(|c| (c as u32) < self.reference_ceiling)
    }

    /// Profile of the language `text` is written in
    pub fn profile_for(&self, text: &str) -> &LanguageProfile {
        if self.is_reference_script(text) {
            &self.reference
        } else {
            &self.native
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> LanguagePair {
        LanguagePair {
            native: LanguageProfile::new("el", &["επίθ"]),
            reference: LanguageProfile::new("en", &["adj"]),
            ..LanguagePair::default()
        }
    }

    #[test]
    fn test_script_heuristic() {
        let pair = pair();
        assert!(pair.is_reference_script("daily adj"));
        assert!(!pair.is_reference_script("ημερήσιος"));
        // A single native character is enough
        assert!(!pair.is_reference_script("daily ή"));
        assert_eq!(pair.profile_for("καλός").code, "el");
        assert_eq!(pair.profile_for("good").code, "en");
    }
}
