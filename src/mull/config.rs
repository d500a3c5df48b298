use crate::error::{MullError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BRANCH: &str = "main";

/// The marker carried in a share link's URL fragment.
pub const SHARE_FRAGMENT_PREFIX: &str = "#config=";

/// GitHub settings: which repository holds the documents and how to
/// authenticate. Stored in `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GithubConfig {
    /// Repository in `owner/name` form.
    #[serde(default)]
    pub repo: String,

    /// Personal access token with contents read/write on the repo.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repo: String::new(),
            token: String::new(),
            branch: default_branch(),
        }
    }
}

impl GithubConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MullError::Io)?;
        let config: GithubConfig =
            serde_json::from_str(&content).map_err(MullError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MullError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MullError::Serialization)?;
        fs::write(config_path, content).map_err(MullError::Io)?;
        Ok(())
    }

    /// Both repo and token are set, so remote calls can be attempted.
    pub fn is_complete(&self) -> bool {
        !self.repo.is_empty() && !self.token.is_empty()
    }

    /// Encode this config as a `#config=<base64 JSON>` URL fragment, for
    /// carrying settings to another device.
    pub fn to_share_fragment(&self) -> Result<String> {
        if !self.is_complete() {
            return Err(MullError::Config(
                "Save the repo and token before generating a share link".to_string(),
            ));
        }
        let json = serde_json::to_string(self).map_err(MullError::Serialization)?;
        Ok(format!("{}{}", SHARE_FRAGMENT_PREFIX, BASE64.encode(json)))
    }

    /// Decode a share link. Accepts a full URL or a bare fragment; anything
    /// malformed (no marker, bad base64, invalid JSON) means no configuration
    /// is loaded, never an error the caller has to handle.
    pub fn from_share_fragment(input: &str) -> Option<Self> {
        let encoded = match input.find(SHARE_FRAGMENT_PREFIX) {
            Some(pos) => &input[pos + SHARE_FRAGMENT_PREFIX.len()..],
            None => {
                warn!("share link has no {} fragment", SHARE_FRAGMENT_PREFIX);
                return None;
            }
        };

        let bytes = match BASE64.decode(encoded.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "share link fragment is not valid base64");
                return None;
            }
        };

        let mut config: GithubConfig = match serde_json::from_slice(&bytes) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "share link fragment is not valid config JSON");
                return None;
            }
        };

        if config.branch.is_empty() {
            config.branch = default_branch();
        }
        Some(config)
    }
}
