use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::language::LanguagePair;
use self::lookup::LookupConfig;
use self::network::NetworkConfig;
use self::site::SiteConfig;

pub mod language;
pub mod lookup;
pub mod network;
pub mod site;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub network: NetworkConfig,
    pub lookup: LookupConfig,
    /// None means the language crate's built-in pair is used
    pub languages: Option<LanguagePair>,
}

impl Config {
    /// Defaults overridden by `LEXI_*` environment variables
    pub fn new() -> Self {
        Config {
            site: SiteConfig::new(),
            network: NetworkConfig::new(),
            lookup: LookupConfig::new(),
            languages: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
