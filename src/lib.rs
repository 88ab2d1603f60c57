//! # Quill
//!
//! A minimal static site generator for markdown blogs. Posts and pages are
//! markdown files with a `key: value` metadata header; the output is a
//! deployable tree of plain HTML with paginated listings, per-tag and
//! per-category indices, and a nested navigation menu.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Quill processes content through two independent stages, joined by a
//! JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (markdown + metadata → structured data)
//! 2. Generate  manifest  →  dist/            (HTML pages, listings, menu, assets)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: generation is a function from manifest to files, so
//!   tests can exercise rendering without parsing any markdown.
//! - **Stability**: rendering decisions (pagination, menus, URLs) operate on
//!   an immutable snapshot, so they are deterministic for a given manifest.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — reads posts and pages, extracts metadata, produces the manifest |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`tree`] | Path-keyed tree store: the menu substrate and the build's site map |
//! | [`menu`] | Navigation menu construction with priority-alphabet ordering |
//! | [`pager`] | Pagination with the canonical `index.html`, `2.html`, … sequence |
//! | [`meta`] | `key: value` metadata header parsing and date handling |
//! | [`config`] | `config.toml` loading, validation, and stock-config generation |
//! | [`types`] | Shared types serialized between stages (`Post`, `PageDoc`, `Manifest`) |
//! | [`output`] | CLI output formatting — content inventory and written-file reports |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine. Malformed HTML
//! is a build error, template variables are Rust expressions, interpolation
//! is auto-escaped, and there is no template directory to ship or get out
//! of sync.
//!
//! ## Labels Drive Navigation
//!
//! The menu is data, not configuration: each page's `menu_name` metadata
//! field is a label that may nest with `/` (`Docs/Guides`) and may hide a
//! sort key behind `__` (`0__About` sorts first, displays as "About").
//! Siblings order by the first character of the raw label against a fixed
//! `0-9a-z` alphabet, so authors control menu order from the content files
//! themselves. See [`menu`].
//!
//! ## Stable Listing URLs
//!
//! Every listing's first page is `index.html` — the URL a directory serves
//! by default — and further pages are `2.html`, `3.html`, … The sequence
//! depends only on position, never on content, so deployed links survive
//! any amount of reordering or rewriting. See [`pager`].

pub mod config;
pub mod generate;
pub mod menu;
pub mod meta;
pub mod output;
pub mod pager;
pub mod scan;
pub mod tree;
pub mod types;
