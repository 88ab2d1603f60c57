//! End-to-end build: content tree in, deployable HTML tree out.

use std::fs;
use std::path::Path;

use quill::{generate, scan};
use tempfile::TempDir;

fn write_content(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A content tree exercising pagination, grouping, and menu nesting.
fn populate_content(root: &Path) {
    write_content(
        root,
        "config.toml",
        "title = \"Test Blog\"\nbase_url = \"http://example.com/\"\nposts_per_page = 2\n",
    );
    for (i, day) in [1, 2, 3, 4, 5].iter().enumerate() {
        write_content(
            root,
            &format!("posts/post-{day}.md"),
            &format!(
                "title: Post {day}\ndate: 2021-06-0{day}\ntags: rust\ncategories: news\nauthor: Ada\n\nBody of post number {}.\n",
                i + 1
            ),
        );
    }
    write_content(
        root,
        "pages/about.md",
        "title: About\nmenu_name: 0__About\n\nAll about this blog.\n",
    );
    write_content(
        root,
        "pages/contact.md",
        "title: Contact\nmenu_name: 1__Contact\n\nWrite to us.\n",
    );
    write_content(
        root,
        "pages/guides.md",
        "title: Guides\nmenu_name: Docs/Guides\n\nGuides live here.\n",
    );
    write_content(root, "static/img/logo.png", "not really a png");
}

fn build(tmp: &TempDir) -> (quill::types::Manifest, generate::SiteMap, std::path::PathBuf) {
    let source = tmp.path().join("content");
    let output = tmp.path().join("dist");
    populate_content(&source);
    let manifest = scan::scan(&source).unwrap();
    let site_map = generate::generate_site(&manifest, &source, &output).unwrap();
    (manifest, site_map, output)
}

#[test]
fn build_produces_the_expected_layout() {
    let tmp = TempDir::new().unwrap();
    let (_, site_map, output) = build(&tmp);

    // 5 posts at 2 per page → 3 listing pages
    assert!(output.join("index.html").is_file());
    assert!(output.join("2.html").is_file());
    assert!(output.join("3.html").is_file());
    assert!(!output.join("4.html").exists());

    for day in 1..=5 {
        assert!(output.join(format!("post/post-{day}.html")).is_file());
    }
    assert!(output.join("page/about.html").is_file());
    assert!(output.join("category/news/index.html").is_file());
    assert!(output.join("tag/rust/index.html").is_file());
    assert!(output.join("static/css/style.css").is_file());
    assert!(output.join("static/img/logo.png").is_file());

    let paths = site_map.paths();
    assert!(paths.contains(&"index.html".to_string()));
    assert!(paths.contains(&"post/post-1.html".to_string()));
    assert!(paths.contains(&"static/img/logo.png".to_string()));
}

#[test]
fn listings_paginate_newest_first_with_links() {
    let tmp = TempDir::new().unwrap();
    let (_, _, output) = build(&tmp);

    let first = fs::read_to_string(output.join("index.html")).unwrap();
    // Newest two posts on page one
    assert!(first.contains("Post 5"));
    assert!(first.contains("Post 4"));
    assert!(!first.contains("Post 3"));
    assert!(first.contains("href=\"2.html\""));
    assert!(!first.contains("Newer posts"));

    let second = fs::read_to_string(output.join("2.html")).unwrap();
    assert!(second.contains("Post 3"));
    assert!(second.contains("href=\"index.html\""));
    assert!(second.contains("href=\"3.html\""));

    let third = fs::read_to_string(output.join("3.html")).unwrap();
    assert!(third.contains("Post 1"));
    assert!(third.contains("href=\"2.html\""));
    assert!(!third.contains("Older posts"));
}

#[test]
fn nav_orders_pages_by_marker_priority() {
    let tmp = TempDir::new().unwrap();
    let (_, _, output) = build(&tmp);

    let html = fs::read_to_string(output.join("index.html")).unwrap();
    // Markers sort About before Contact and disappear from display
    let about = html.find(">About<").unwrap();
    let contact = html.find(">Contact<").unwrap();
    assert!(about < contact);
    assert!(!html.contains("0__About"));
    // Nested group from the Docs/Guides label
    let docs = html.find(">Docs<").unwrap();
    assert!(about < docs);
    assert!(html.contains("/page/guides.html"));
}

#[test]
fn post_pages_carry_content_and_group_links() {
    let tmp = TempDir::new().unwrap();
    let (_, _, output) = build(&tmp);

    let html = fs::read_to_string(output.join("post/post-5.html")).unwrap();
    assert!(html.contains("Post 5"));
    assert!(html.contains("Body of post number 5."));
    assert!(html.contains("Ada"));
    assert!(html.contains("/tag/rust/"));
    assert!(html.contains("/category/news/"));
    assert!(html.contains("http://example.com/post/post-5.html"));
}

#[test]
fn group_listings_hold_every_tagged_post() {
    let tmp = TempDir::new().unwrap();
    let (_, _, output) = build(&tmp);

    // 5 posts at 2 per page inside the tag listing too
    assert!(output.join("tag/rust/2.html").is_file());
    assert!(output.join("tag/rust/3.html").is_file());
    let html = fs::read_to_string(output.join("tag/rust/index.html")).unwrap();
    assert!(html.contains("rust"));
    assert!(html.contains("Post 5"));
}

#[test]
fn rebuild_replaces_previous_output() {
    let tmp = TempDir::new().unwrap();
    let (_, _, output) = build(&tmp);
    fs::write(output.join("stale.html"), "leftover").unwrap();

    let source = tmp.path().join("content");
    let manifest = scan::scan(&source).unwrap();
    generate::generate_site(&manifest, &source, &output).unwrap();
    assert!(!output.join("stale.html").exists());
    assert!(output.join("index.html").is_file());
}

#[test]
fn manifest_roundtrips_through_json() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    populate_content(&source);
    let manifest = scan::scan(&source).unwrap();

    let json = serde_json::to_string_pretty(&manifest).unwrap();
    let manifest_path = tmp.path().join("manifest.json");
    fs::write(&manifest_path, json).unwrap();

    let output = tmp.path().join("dist");
    generate::generate(&manifest_path, &source, &output).unwrap();
    assert!(output.join("index.html").is_file());
    assert!(output.join("post/post-1.html").is_file());
}
