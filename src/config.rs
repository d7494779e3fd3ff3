//! Site configuration module.
//!
//! Handles loading and resolving `site.config.json`. The file is optional:
//! every field has a fallback default, and a missing or unreadable file is
//! the same as an empty one.
//!
//! ## Config File Location
//!
//! Place `site.config.json` in the site source directory:
//!
//! ```text
//! site/
//! └── site.config.json
//! ```
//!
//! ## Configuration Options
//!
//! ```json
//! {
//!   "username": "NeilsBored",
//!   "name": "Shane John",
//!   "tagline": "I build things with code.",
//!   "about": "I'm a software engineer ...",
//!   "email": "shane@example.com",
//!   "featured": ["engine", "tools"]
//! }
//! ```
//!
//! All keys are optional. Unknown keys are ignored. An empty string counts as
//! absent, so `"tagline": ""` renders the default tagline.
//!
//! ## Two Layers
//!
//! [`SiteConfig`] is the file as written: every field optional.
//! [`Profile`] is the resolved view with a concrete value for every field the
//! page displays. Defaults are applied in exactly one place,
//! [`Profile::resolve`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// File name of the configuration resource, relative to the site source.
pub const CONFIG_FILE: &str = "site.config.json";

pub const DEFAULT_USERNAME: &str = "NeilsBored";
pub const DEFAULT_FIRST_NAME: &str = "Shane";
pub const DEFAULT_FULL_NAME: &str = "Shane John";
pub const DEFAULT_TAGLINE: &str = "I build things with code.";
pub const DEFAULT_ABOUT: &str = "I'm a software engineer with a passion for building delightful experiences.  This site pulls my latest GitHub repositories to showcase what I've been working on.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Personalization loaded from `site.config.json`.
///
/// Every field is optional; consumers go through [`Profile::resolve`] rather
/// than reading these directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// GitHub account whose repositories fill the projects grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Full display name. The first word is used in the hero heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One-line hero tagline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// About-section paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Contact address; becomes a `mailto:` link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Repository names shown before all others, matched exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<Vec<String>>,
}

impl SiteConfig {
    /// Drop empty strings so that "empty" and "absent" behave the same.
    pub fn normalized(self) -> Self {
        Self {
            username: non_empty(self.username),
            name: non_empty(self.name),
            tagline: non_empty(self.tagline),
            about: non_empty(self.about),
            email: non_empty(self.email),
            featured: self.featured,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// Loading
// =============================================================================

/// Read and parse `site.config.json` from `root`.
///
/// Returns `Err` when the file is missing, unreadable, or not a JSON object
/// matching [`SiteConfig`]. Most callers want [`load_config`] instead.
pub async fn try_load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let content = tokio::fs::read_to_string(&path).await?;
    let config = parse_config(&content)?;
    debug!(path = %path.display(), "loaded site config");
    Ok(config)
}

/// Parse config text. Only a JSON object is accepted: serde would otherwise
/// fill the struct positionally from an array.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let kind = match &value {
        serde_json::Value::Object(_) => None,
        serde_json::Value::Array(_) => Some("an array"),
        serde_json::Value::String(_) => Some("a string"),
        serde_json::Value::Number(_) => Some("a number"),
        serde_json::Value::Bool(_) => Some("a boolean"),
        serde_json::Value::Null => Some("null"),
    };
    if let Some(kind) = kind {
        return Err(ConfigError::NotAnObject(kind));
    }
    let config: SiteConfig = serde_json::from_value(value)?;
    Ok(config.normalized())
}

/// Load `site.config.json` from `root`, never failing.
///
/// Any failure is logged as a warning and yields an empty config, so every
/// field falls back to its default.
pub async fn load_config(root: &Path) -> SiteConfig {
    match try_load_config(root).await {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "config not found or invalid, using defaults");
            SiteConfig::default()
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Display values for the page, with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub username: String,
    /// First whitespace-delimited word of the configured name.
    pub first_name: String,
    pub tagline: String,
    pub about: String,
    /// `None` leaves the page's existing email link untouched.
    pub email: Option<String>,
    pub footer_name: String,
    pub featured: Vec<String>,
}

impl Profile {
    pub fn resolve(config: &SiteConfig) -> Self {
        let name = present(&config.name);
        Self {
            username: present(&config.username)
                .unwrap_or(DEFAULT_USERNAME)
                .to_string(),
            first_name: name
                .and_then(|n| n.split_whitespace().next())
                .unwrap_or(DEFAULT_FIRST_NAME)
                .to_string(),
            tagline: present(&config.tagline)
                .unwrap_or(DEFAULT_TAGLINE)
                .to_string(),
            about: present(&config.about).unwrap_or(DEFAULT_ABOUT).to_string(),
            email: present(&config.email).map(str::to_string),
            footer_name: name.unwrap_or(DEFAULT_FULL_NAME).to_string(),
            featured: config.featured.clone().unwrap_or_default(),
        }
    }

    pub fn hero_heading(&self) -> String {
        format!("Hi, I'm {}", self.first_name)
    }

    pub fn email_href(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{email}"))
    }
}

/// The config a user gets by accepting every default.
pub fn stock_config() -> SiteConfig {
    SiteConfig {
        username: Some(DEFAULT_USERNAME.to_string()),
        name: Some(DEFAULT_FULL_NAME.to_string()),
        tagline: Some(DEFAULT_TAGLINE.to_string()),
        about: Some(DEFAULT_ABOUT.to_string()),
        email: None,
        featured: Some(Vec::new()),
    }
}

/// Pretty-printed stock `site.config.json`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_json() -> String {
    // A struct of strings and string lists always serializes.
    serde_json::to_string_pretty(&stock_config()).unwrap_or_default()
}
