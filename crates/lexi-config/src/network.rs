use std::env;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("lexi/", env!("CARGO_PKG_VERSION")).to_string()
}

/// HTTP settings for the page fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("LEXI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let user_agent = env::var("LEXI_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            timeout_seconds,
            user_agent,
        }
    }
}
