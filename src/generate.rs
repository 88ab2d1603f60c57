//! HTML site generation.
//!
//! Stage 2 of the quill build pipeline. Takes the scan manifest and
//! generates the final static HTML site.
//!
//! ## Generated Pages
//!
//! - **Post listings** (`/index.html`, `/2.html`, …): paginated snippets of
//!   every post, newest first
//! - **Post pages** (`/post/{slug}`): one full page per post
//! - **Standalone pages** (`/page/{slug}`): about, contact, …
//! - **Category listings** (`/category/{name}/index.html`, …) and
//!   **tag listings** (`/tag/{name}/index.html`, …): paginated like the root
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Listing page 1
//! ├── 2.html                     # Listing page 2
//! ├── post/
//! │   ├── first-post.html
//! │   └── more-news.html
//! ├── page/
//! │   └── about.html
//! ├── category/news/index.html
//! ├── tag/rust/index.html
//! └── static/
//!     └── css/style.css          # Embedded stylesheet
//! ```
//!
//! The output directory is removed and rebuilt from scratch on every run.
//! Every file written is recorded in a [`PathTree`] keyed by its
//! output-relative path; the tree is returned so callers can report or
//! inspect the deployed layout.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; converted
//! markdown bodies are spliced in via `PreEscaped`.
//!
//! Post pages render in parallel (`rayon`) — the manifest is immutable by
//! then and each post writes its own file.

use std::fs;
use std::path::Path;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::menu::{self, MenuItem};
use crate::pager::{PageContext, Pager, PagerError};
use crate::scan;
use crate::tree::PathTree;
use crate::types::{Manifest, PageDoc, Post};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Pagination error: {0}")]
    Pager(#[from] PagerError),
    #[error("Static asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// URL section for individual post pages.
pub const POST_SECTION: &str = "post";
/// URL section for standalone pages.
pub const PAGE_SECTION: &str = "page";
/// URL section for per-category listings.
pub const CATEGORY_SECTION: &str = "category";
/// URL section for per-tag listings.
pub const TAG_SECTION: &str = "tag";
/// Output directory for copied and embedded static assets.
pub const STATIC_SECTION: &str = "static";

const CSS: &str = include_str!("../static/style.css");

/// Every output-relative path written by a generation run.
pub type SiteMap = PathTree<()>;

/// Render the site from a manifest file on disk.
pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<SiteMap, GenerateError> {
    let manifest: Manifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
    generate_site(&manifest, source_root, output_dir)
}

/// Render the site from an in-memory manifest.
///
/// Removes and recreates `output_dir`, writes every page and asset, and
/// returns the site map of written paths.
pub fn generate_site(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<SiteMap, GenerateError> {
    let mut site_map = SiteMap::new();
    create_output_structure(output_dir)?;

    // Embedded stylesheet
    let css_rel = format!("{STATIC_SECTION}/css/style.css");
    write_output(output_dir, &css_rel, CSS, &mut site_map)?;

    // User static assets
    copy_static_assets(
        &source_root.join(&manifest.config.static_dir),
        output_dir,
        &mut site_map,
    )?;

    let renderer = Renderer::new(manifest);

    // Root post listing
    let all_posts: Vec<&Post> = manifest.posts.iter().collect();
    renderer.render_listing(&all_posts, &[], None, output_dir, &mut site_map)?;

    // Category and tag listings
    for (name, posts) in scan::categories(&manifest.posts) {
        let section = dashed(name);
        renderer.render_listing(
            &posts,
            &[CATEGORY_SECTION, &section],
            Some(name),
            output_dir,
            &mut site_map,
        )?;
    }
    for (name, posts) in scan::tags(&manifest.posts) {
        let section = dashed(name);
        renderer.render_listing(
            &posts,
            &[TAG_SECTION, &section],
            Some(name),
            output_dir,
            &mut site_map,
        )?;
    }

    // Post pages, in parallel over the immutable manifest
    let written: Vec<String> = manifest
        .posts
        .par_iter()
        .map(|post| renderer.render_post_page(post, output_dir))
        .collect::<Result<_, GenerateError>>()?;
    for rel in written {
        site_map.insert(&rel, ());
    }

    // Standalone pages
    for page in &manifest.pages {
        let rel = renderer.render_page_page(page, output_dir)?;
        site_map.insert(&rel, ());
    }

    Ok(site_map)
}

/// Create the output directory, removing any previous build first.
fn create_output_structure(output_dir: &Path) -> Result<(), GenerateError> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;
    Ok(())
}

/// Write `content` at `rel` under the output root and record it.
fn write_output(
    output_dir: &Path,
    rel: &str,
    content: &str,
    site_map: &mut SiteMap,
) -> Result<(), GenerateError> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    site_map.insert(rel, ());
    Ok(())
}

/// Copy the user static directory file-for-file under `static/`.
fn copy_static_assets(
    static_dir: &Path,
    output_dir: &Path,
    site_map: &mut SiteMap,
) -> Result<(), GenerateError> {
    if !static_dir.is_dir() {
        return Ok(());
    }
    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(static_dir)
            .unwrap_or(entry.path());
        let dest_rel = Path::new(STATIC_SECTION).join(rel);
        let dest = output_dir.join(&dest_rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        site_map.insert(&dest_rel.to_string_lossy(), ());
    }
    Ok(())
}

/// Join URL fragments onto a base URL.
///
/// Fragments are `/`-joined; spaces become dashes and characters unsafe in
/// a URL path are percent-encoded.
pub fn site_url(base: &str, fragments: &[&str]) -> String {
    const PATH_ESCAPE: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'<')
        .add(b'>')
        .add(b'`')
        .add(b'#')
        .add(b'?')
        .add(b'{')
        .add(b'}');
    let path = fragments.join("/").replace(' ', "-");
    let encoded = utf8_percent_encode(&path, PATH_ESCAPE).to_string();
    format!("{}/{}", base.trim_end_matches('/'), encoded)
}

/// Directory-safe form of a tag/category name.
fn dashed(name: &str) -> String {
    name.replace(' ', "-")
}

// ============================================================================
// Page renderers
// ============================================================================

/// Holds the values shared by every rendered page: the manifest, the page
/// menu built from page `menu_name`s, and the sorted category links.
struct Renderer<'a> {
    manifest: &'a Manifest,
    page_menu: Vec<MenuItem>,
    category_links: Vec<(String, String)>,
}

impl<'a> Renderer<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let entries: Vec<(String, String)> = manifest
            .pages
            .iter()
            .map(|p| (p.menu_name.clone(), p.slug.clone()))
            .collect();
        let page_menu = menu::build_menu(&entries);

        let mut names: Vec<&str> = scan::categories(&manifest.posts).keys().copied().collect();
        names.sort_by_key(|name| menu::priority(name));
        let category_links = names
            .into_iter()
            .map(|name| {
                (
                    name.to_string(),
                    format!("/{CATEGORY_SECTION}/{}/", dashed(name)),
                )
            })
            .collect();

        Self {
            manifest,
            page_menu,
            category_links,
        }
    }

    fn config(&self) -> &SiteConfig {
        &self.manifest.config
    }

    /// Write one paginated listing (root, category, or tag) into
    /// `sections` under the output root.
    fn render_listing(
        &self,
        posts: &[&Post],
        sections: &[&str],
        heading: Option<&str>,
        output_dir: &Path,
        site_map: &mut SiteMap,
    ) -> Result<(), GenerateError> {
        let pager = Pager::new(posts, self.config().posts_per_page)?;
        for index in 0..pager.page_count() {
            let context = pager.page_context(index)?;
            let markup = self.listing_page(&context, heading);
            let rel = if sections.is_empty() {
                context.file_name.clone()
            } else {
                format!("{}/{}", sections.join("/"), context.file_name)
            };
            write_output(output_dir, &rel, &markup.into_string(), site_map)?;
        }
        Ok(())
    }

    /// Write one post page under `post/`, returning its relative path.
    fn render_post_page(&self, post: &Post, output_dir: &Path) -> Result<String, GenerateError> {
        let markup = self.post_page(post);
        let rel = format!("{POST_SECTION}/{}", post.slug);
        let dir = output_dir.join(POST_SECTION);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(&post.slug), markup.into_string())?;
        Ok(rel)
    }

    /// Write one standalone page under `page/`, returning its relative path.
    fn render_page_page(&self, page: &PageDoc, output_dir: &Path) -> Result<String, GenerateError> {
        let markup = self.page_page(page);
        let rel = format!("{PAGE_SECTION}/{}", page.slug);
        let dir = output_dir.join(PAGE_SECTION);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(&page.slug), markup.into_string())?;
        Ok(rel)
    }

    // ------------------------------------------------------------------
    // Markup
    // ------------------------------------------------------------------

    /// The site-wide `<nav>`: the nested page menu plus category links.
    fn nav(&self) -> Markup {
        html! {
            nav.site-nav {
                ul.page-menu {
                    li { a href="/" { "Home" } }
                    @for item in &self.page_menu {
                        (render_menu_item(item))
                    }
                }
                @if !self.category_links.is_empty() {
                    ul.category-menu {
                        @for (name, href) in &self.category_links {
                            li { a href=(href) { (name) } }
                        }
                    }
                }
            }
        }
    }

    fn listing_page(&self, context: &PageContext<'_, &Post>, heading: Option<&str>) -> Markup {
        let content = html! {
            @if let Some(heading) = heading {
                header.listing-header { h1 { (heading) } }
            }
            @for post in context.items {
                article.post-snippet {
                    h2 {
                        a href={ "/" (POST_SECTION) "/" (post.slug) } { (post.title) }
                    }
                    (post_byline(post))
                    div.post-description { (PreEscaped(post.description.as_str())) }
                }
            }
            (pagination_links(context))
        };
        self.base_document(heading.unwrap_or("Posts"), None, content)
    }

    fn post_page(&self, post: &Post) -> Markup {
        let canonical = site_url(&self.config().base_url, &[POST_SECTION, &post.slug]);
        let content = html! {
            article.post {
                header {
                    h1 { (post.title) }
                    (post_byline(post))
                }
                div.post-body { (PreEscaped(post.body.as_str())) }
                @if !post.tags.is_empty() || !post.categories.is_empty() {
                    footer.post-footer {
                        @if !post.categories.is_empty() {
                            ul.post-categories {
                                @for category in &post.categories {
                                    li {
                                        a href={ "/" (CATEGORY_SECTION) "/" (dashed(category)) "/" } { (category) }
                                    }
                                }
                            }
                        }
                        @if !post.tags.is_empty() {
                            ul.post-tags {
                                @for tag in &post.tags {
                                    li {
                                        a href={ "/" (TAG_SECTION) "/" (dashed(tag)) "/" } { (tag) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        };
        self.base_document(&post.title, Some(&canonical), content)
    }

    fn page_page(&self, page: &PageDoc) -> Markup {
        let canonical = site_url(&self.config().base_url, &[PAGE_SECTION, &page.slug]);
        let content = html! {
            article.page {
                header { h1 { (page.title) } }
                div.page-body { (PreEscaped(page.body.as_str())) }
            }
        };
        self.base_document(&page.title, Some(&canonical), content)
    }

    /// The base HTML document: head, site header with nav, main content.
    fn base_document(&self, page_title: &str, canonical: Option<&str>, content: Markup) -> Markup {
        let config = self.config();
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @if !config.description.is_empty() {
                        meta name="description" content=(config.description);
                    }
                    @if let Some(canonical) = canonical {
                        link rel="canonical" href=(canonical);
                    }
                    title { (page_title) " · " (config.title) }
                    link rel="stylesheet" href={ "/" (STATIC_SECTION) "/css/style.css" };
                }
                body {
                    header.site-header {
                        p.site-title { a href="/" { (config.title) } }
                        @if !config.description.is_empty() {
                            p.site-description { (config.description) }
                        }
                        (self.nav())
                    }
                    main { (content) }
                }
            }
        }
    }
}

/// Renders a single menu entry; groups recurse.
fn render_menu_item(item: &MenuItem) -> Markup {
    html! {
        @match item {
            MenuItem::Link { label, slug } => {
                li {
                    a href={ "/" (PAGE_SECTION) "/" (slug) } { (label) }
                }
            }
            MenuItem::Group { label, children } => {
                li.menu-group {
                    span.group-label { (label) }
                    ul {
                        @for child in children {
                            (render_menu_item(child))
                        }
                    }
                }
            }
        }
    }
}

/// Date and optional author line shown under post titles.
fn post_byline(post: &Post) -> Markup {
    let machine = post.date.format("%Y-%m-%d").to_string();
    let human = post.date.format("%B %e, %Y").to_string();
    html! {
        p.post-byline {
            time datetime=(machine) { (human) }
            @if !post.author.is_empty() {
                " by " (post.author)
            }
        }
    }
}

/// Pagination links between adjacent listing pages.
///
/// Listings run newest first, so the previous page holds newer posts and
/// the next page older ones.
fn pagination_links<T>(context: &PageContext<'_, T>) -> Markup {
    html! {
        @if context.prev.is_some() || context.next.is_some() {
            nav.pagination {
                @if let Some(prev) = &context.prev {
                    a.newer href=(prev) { "Newer posts" }
                }
                @if let Some(next) = &context.next {
                    a.older href=(next) { "Older posts" }
                }
            }
        }
    }
}
