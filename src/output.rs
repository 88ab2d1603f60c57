//! CLI output formatting for the pipeline stages.
//!
//! Output is information-centric: the scan stage reports the content
//! inventory (posts, pages, their grouping metadata), the generate stage
//! reports the written site layout.
//!
//! ```text
//! Posts
//! 001 A fresh start (2021-03-01)
//!     Tags: meta
//! 002 Hello world (2021-01-01)
//!
//! Pages
//! 001 About
//!     Menu: 0__About
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::SiteMap;
use crate::types::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// The scan-stage inventory: posts with their grouping metadata, pages
/// with their menu labels.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    if manifest.posts.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            post.title,
            post.date.format("%Y-%m-%d")
        ));
        if !post.tags.is_empty() {
            lines.push(format!("    Tags: {}", post.tags.join(", ")));
        }
        if !post.categories.is_empty() {
            lines.push(format!("    Categories: {}", post.categories.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    if manifest.pages.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, page) in manifest.pages.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.title));
        lines.push(format!("    Menu: {}", page.menu_name));
    }
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

/// The generate-stage report: every written output-relative path.
pub fn format_generate_output(site_map: &SiteMap) -> Vec<String> {
    let paths = site_map.paths();
    let mut lines = vec!["Written".to_string()];
    lines.extend(paths.iter().map(|p| format!("    {p}")));
    lines.push(String::new());
    lines.push(format!("Generated {} files", paths.len()));
    lines
}

pub fn print_generate_output(site_map: &SiteMap) {
    for line in format_generate_output(site_map) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::types::{PageDoc, Post};
    use chrono::NaiveDate;

    fn manifest() -> Manifest {
        Manifest {
            posts: vec![Post {
                title: "Hello".to_string(),
                description: String::new(),
                author: String::new(),
                tags: vec!["rust".to_string()],
                categories: vec![],
                date: NaiveDate::from_ymd_opt(2021, 3, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
                slug: "hello.html".to_string(),
                body: String::new(),
            }],
            pages: vec![PageDoc {
                title: "About".to_string(),
                description: String::new(),
                menu_name: "0__About".to_string(),
                slug: "about.html".to_string(),
                body: String::new(),
            }],
            config: SiteConfig::default(),
        }
    }

    #[test]
    fn scan_output_lists_posts_and_pages() {
        let lines = format_scan_output(&manifest());
        assert_eq!(lines[0], "Posts");
        assert_eq!(lines[1], "001 Hello (2021-03-01)");
        assert_eq!(lines[2], "    Tags: rust");
        assert!(lines.contains(&"Pages".to_string()));
        assert!(lines.contains(&"001 About".to_string()));
        assert!(lines.contains(&"    Menu: 0__About".to_string()));
    }

    #[test]
    fn scan_output_marks_empty_sections() {
        let mut m = manifest();
        m.posts.clear();
        m.pages.clear();
        let lines = format_scan_output(&m);
        assert_eq!(lines[0], "Posts");
        assert_eq!(lines[1], "    (none)");
    }

    #[test]
    fn generate_output_lists_written_paths() {
        let mut site_map = SiteMap::new();
        site_map.insert("index.html", ());
        site_map.insert("post/hello.html", ());
        let lines = format_generate_output(&site_map);
        assert!(lines.contains(&"    index.html".to_string()));
        assert!(lines.contains(&"    post/hello.html".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 2 files");
    }
}
