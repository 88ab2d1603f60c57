//! Site configuration module.
//!
//! Handles loading and validating the `config.toml` at the content root.
//! Config files are sparse — every key is optional and falls back to its
//! stock default:
//!
//! ```toml
//! title = "A quill blog"
//! description = ""
//! base_url = "http://localhost:8000/"
//!
//! posts_per_page = 5
//! excerpt_chars = 200
//!
//! posts_dir = "posts"
//! pages_dir = "pages"
//! static_dir = "static"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; user config files need only the values they
/// want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in page `<title>`s and the header.
    pub title: String,
    /// Site description, used in the header and meta tags.
    pub description: String,
    /// Public URL of the deployed site; absolute links are joined onto it.
    pub base_url: String,
    /// How many posts a listing page holds.
    pub posts_per_page: usize,
    /// Character budget for generated excerpts.
    pub excerpt_chars: usize,
    /// Directory of post markdown files, relative to the content root.
    pub posts_dir: String,
    /// Directory of page markdown files, relative to the content root.
    pub pages_dir: String,
    /// Directory of user static assets, relative to the content root.
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "A quill blog".to_string(),
            description: String::new(),
            base_url: "http://localhost:8000/".to_string(),
            posts_per_page: 5,
            excerpt_chars: 200,
            posts_dir: "posts".to_string(),
            pages_dir: "pages".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts_per_page == 0 {
            return Err(ConfigError::Validation(
                "posts_per_page must be at least 1".into(),
            ));
        }
        if self.excerpt_chars == 0 {
            return Err(ConfigError::Validation(
                "excerpt_chars must be at least 1".into(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Missing file means stock defaults. User values overlay defaults via
/// serde; unknown keys are rejected; the result is validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config: SiteConfig = if config_path.exists() {
        toml::from_str(&fs::read_to_string(&config_path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Quill Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Site title, shown in page titles and the site header.
title = "A quill blog"

# Site description, shown in the header and description meta tag.
description = ""

# Public URL of the deployed site. Absolute links are joined onto this.
base_url = "http://localhost:8000/"

# How many posts each listing page holds (front page, tag and category
# listings). Further posts go to 2.html, 3.html, ...
posts_per_page = 5

# Character budget for excerpts generated from posts without an
# explicit description.
excerpt_chars = 200

# Content directories, relative to the content root.
posts_dir = "posts"
pages_dir = "pages"

# Static assets directory, copied verbatim under static/ in the output.
static_dir = "static"
"#
}
