//! Shared types serialized between the scan and generate stages.
//!
//! These types travel through `manifest.json` and must deserialize exactly
//! as the scan stage wrote them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// A blog post loaded from `posts_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Title from the `title:` metadata field.
    pub title: String,
    /// `description:` field, or a generated excerpt of the body when empty.
    pub description: String,
    /// `author:` field; may be empty.
    #[serde(default)]
    pub author: String,
    /// `tags:` field, comma-split.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// `categories:` field, comma-split.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// `date:` field; posts list newest first.
    pub date: NaiveDateTime,
    /// Output file name (source file name with `.md` → `.html`).
    pub slug: String,
    /// Body converted to HTML.
    pub body: String,
}

/// A standalone page loaded from `pages_dir`.
///
/// Pages carry a `menu_name` instead of a date: the raw navigation label,
/// which may nest with `/` and hide a sort prefix behind `__`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDoc {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Raw menu label (markers intact); drives nav structure and order.
    pub menu_name: String,
    pub slug: String,
    pub body: String,
}

/// Everything the generate stage needs, as written by the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Posts, newest first.
    pub posts: Vec<Post>,
    /// Pages, in menu-priority order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageDoc>,
    pub config: SiteConfig,
}
