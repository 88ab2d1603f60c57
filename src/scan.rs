//! Content loading and manifest generation.
//!
//! Stage 1 of the quill build pipeline. Reads the content directory and
//! produces the structured [`Manifest`] the generate stage consumes.
//!
//! ## Content Structure
//!
//! ```text
//! content/                       # Content root
//! ├── config.toml                # Site configuration (optional)
//! ├── posts/                     # Blog posts
//! │   ├── first-post.md
//! │   └── more-news.md
//! ├── pages/                     # Standalone pages
//! │   ├── about.md               # menu_name: 0__About
//! │   └── contact.md             # menu_name: 1__Contact
//! └── static/                    # Copied verbatim under static/
//!     └── logo.png
//! ```
//!
//! Every document opens with a `key: value` metadata block ([`crate::meta`]).
//! Posts need a `date:`; they are listed newest first. Pages carry a
//! `menu_name:` that drives navigation structure and order (falling back
//! to the title when absent).
//!
//! A post without a `description:` gets a generated excerpt: the body
//! HTML stripped of tags and truncated to the configured budget.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use pulldown_cmark::{Parser, html as md_html};
use thiserror::Error;

use crate::config::{self, SiteConfig};
use crate::menu;
use crate::meta;
use crate::types::{Manifest, PageDoc, Post};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Missing date in {0}")]
    MissingDate(PathBuf),
    #[error("Unparseable date {value:?} in {path}")]
    BadDate { path: PathBuf, value: String },
}

/// Scan the content root into a manifest.
///
/// Loads `config.toml` (stock defaults when absent), reads every `.md`
/// under the posts and pages directories, sorts posts newest first and
/// pages by menu priority.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut posts = load_posts(&root.join(&config.posts_dir), &config)?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    let mut pages = load_pages(&root.join(&config.pages_dir))?;
    pages.sort_by_key(|p| menu::priority(&p.menu_name));

    Ok(Manifest {
        posts,
        pages,
        config,
    })
}

/// Markdown files directly inside `dir`, in file-name order.
///
/// A missing directory reads as empty — a site may have no pages at all.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn load_posts(dir: &Path, config: &SiteConfig) -> Result<Vec<Post>, ScanError> {
    markdown_files(dir)?
        .iter()
        .map(|path| read_post(path, config.excerpt_chars))
        .collect()
}

fn load_pages(dir: &Path) -> Result<Vec<PageDoc>, ScanError> {
    markdown_files(dir)?.iter().map(|path| read_page(path)).collect()
}

/// Read one post: metadata block, converted body, excerpt fallback.
fn read_post(path: &Path, excerpt_chars: usize) -> Result<Post, ScanError> {
    let raw = fs::read_to_string(path)?;
    let (block, body_md) = meta::parse_document(&raw);
    let body = markdown_to_html(body_md);

    let date_value = block.get("date");
    if date_value.is_empty() {
        return Err(ScanError::MissingDate(path.to_path_buf()));
    }
    let date = meta::parse_date(date_value).ok_or_else(|| ScanError::BadDate {
        path: path.to_path_buf(),
        value: date_value.to_string(),
    })?;

    let mut description = block.get("description").to_string();
    if description.is_empty() {
        description = excerpt(&body, excerpt_chars);
    }

    Ok(Post {
        title: block.get("title").to_string(),
        description,
        author: block.get("author").to_string(),
        tags: block.get_list("tags"),
        categories: block.get_list("categories"),
        date,
        slug: html_slug(path),
        body,
    })
}

/// Read one standalone page. `menu_name` falls back to the title.
fn read_page(path: &Path) -> Result<PageDoc, ScanError> {
    let raw = fs::read_to_string(path)?;
    let (block, body_md) = meta::parse_document(&raw);

    let title = block.get("title").to_string();
    let menu_name = match block.get("menu_name") {
        "" => title.clone(),
        name => name.to_string(),
    };

    Ok(PageDoc {
        title,
        description: block.get("description").to_string(),
        menu_name,
        slug: html_slug(path),
        body: markdown_to_html(body_md),
    })
}

/// Output file name for a source document: the stem with `.html` appended.
fn html_slug(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{stem}.html")
}

/// Convert a markdown body to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

/// Posts grouped by tag, in first-appearance order.
///
/// Each value keeps the posts in their manifest (newest-first) order; a
/// post appears under every tag it carries.
pub fn tags(posts: &[Post]) -> IndexMap<&str, Vec<&Post>> {
    group_by(posts, |post| &post.tags)
}

/// Posts grouped by category, in first-appearance order.
pub fn categories(posts: &[Post]) -> IndexMap<&str, Vec<&Post>> {
    group_by(posts, |post| &post.categories)
}

fn group_by<'a>(
    posts: &'a [Post],
    keys: impl Fn(&'a Post) -> &'a Vec<String>,
) -> IndexMap<&'a str, Vec<&'a Post>> {
    let mut groups: IndexMap<&str, Vec<&Post>> = IndexMap::new();
    for post in posts {
        for key in keys(post) {
            groups.entry(key.as_str()).or_default().push(post);
        }
    }
    groups
}

/// Strip HTML tags from text by dropping everything between angle brackets.
fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Generate an excerpt from a string of HTML: tags stripped, truncated to
/// `chars` characters, wrapped in a paragraph with a trailing ellipsis.
pub fn excerpt(html: &str, chars: usize) -> String {
    let text: String = strip_html(html).chars().take(chars).collect();
    format!("<p>{}...</p>", text.trim())
}
