//! Navigation menu construction.
//!
//! Turns a flat list of `(label, slug)` pairs into a nested, ordered menu.
//! Labels drive both structure and order:
//!
//! - **Nesting**: a `/` in a label opens a group — `"Docs/Guides"` puts a
//!   `Guides` link inside a `Docs` group. Depth is unbounded.
//! - **Ordering**: siblings at every level sort by the rank of the label's
//!   first character (lowercased) in [`SORT_ORDER`] — digits before
//!   letters. Characters outside the alphabet rank after everything in it.
//! - **Priority markers**: a label may hide its sort key behind `__`.
//!   `"0__About"` sorts as `0` but displays as `About`. Only the part
//!   after the rightmost `__` is shown; the full raw label sorts.
//!
//! ```
//! use quill::menu::{MenuItem, build_menu};
//!
//! let menu = build_menu(&[
//!     ("1__Contact".to_string(), "contact.html".to_string()),
//!     ("0__About".to_string(), "about.html".to_string()),
//! ]);
//! assert_eq!(menu[0].label(), "About");
//! assert_eq!(menu[1].label(), "Contact");
//! ```

use crate::tree::PathTree;

/// The fixed priority alphabet ranking menu siblings by first character.
pub const SORT_ORDER: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// One navigation entry: a direct link, or a labeled group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Link { label: String, slug: String },
    Group { label: String, children: Vec<MenuItem> },
}

impl MenuItem {
    /// The display label of this entry.
    pub fn label(&self) -> &str {
        match self {
            MenuItem::Link { label, .. } | MenuItem::Group { label, .. } => label,
        }
    }
}

/// Build a nested navigation menu from ordered `(label, slug)` pairs.
///
/// Duplicate labels overwrite: the last pair for a given label path wins.
/// A label that is both a link and a group prefix (`"Docs"` next to
/// `"Docs/Guides"`) becomes a group; the bare slug is dropped.
pub fn build_menu(entries: &[(String, String)]) -> Vec<MenuItem> {
    let mut tree = PathTree::new();
    for (label, slug) in entries {
        tree.insert(label, slug.clone());
    }
    flatten(&tree)
}

/// Flatten one tree level into sorted menu items, recursing into groups.
///
/// Sorting happens on the raw (marker-bearing) segment; the sort is stable,
/// so equal-priority siblings keep insertion order.
fn flatten(tree: &PathTree<String>) -> Vec<MenuItem> {
    let mut entries: Vec<(&str, &PathTree<String>)> = tree.children().collect();
    entries.sort_by_key(|(raw, _)| priority(raw));
    entries
        .into_iter()
        .map(|(raw, child)| {
            let label = display_label(raw).to_string();
            if child.is_leaf() {
                MenuItem::Link {
                    label,
                    slug: child.value().cloned().unwrap_or_default(),
                }
            } else {
                MenuItem::Group {
                    label,
                    children: flatten(child),
                }
            }
        })
        .collect()
}

/// Rank of a label's first character in [`SORT_ORDER`], lowercased.
///
/// Labels that are empty or start with a character outside the alphabet
/// rank after every alphabet character.
pub fn priority(label: &str) -> usize {
    label
        .chars()
        .next()
        .and_then(|c| SORT_ORDER.find(c.to_ascii_lowercase()))
        .unwrap_or(SORT_ORDER.len())
}

/// The display form of a raw label: everything after the rightmost `__`.
fn display_label(raw: &str) -> &str {
    raw.rsplit_once("__").map_or(raw, |(_, shown)| shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(l, s)| (l.to_string(), s.to_string()))
            .collect()
    }

    fn link(label: &str, slug: &str) -> MenuItem {
        MenuItem::Link {
            label: label.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn empty_input_builds_empty_menu() {
        assert_eq!(build_menu(&[]), vec![]);
    }

    #[test]
    fn siblings_sort_by_first_character() {
        let menu = build_menu(&pairs(&[("1", "1"), ("0", "0")]));
        assert_eq!(menu, vec![link("0", "0"), link("1", "1")]);
    }

    #[test]
    fn slash_in_label_nests_a_group() {
        let menu = build_menu(&pairs(&[("0", "0"), ("1/0", "1"), ("1/1", "1")]));
        assert_eq!(
            menu,
            vec![
                link("0", "0"),
                MenuItem::Group {
                    label: "1".to_string(),
                    children: vec![link("0", "1"), link("1", "1")],
                },
            ]
        );
    }

    #[test]
    fn marker_prefix_sorts_but_does_not_display() {
        let menu = build_menu(&pairs(&[("0__1", "1"), ("1__0", "0")]));
        assert_eq!(menu, vec![link("1", "1"), link("0", "0")]);
    }

    #[test]
    fn display_strips_only_after_the_rightmost_marker() {
        let menu = build_menu(&pairs(&[("a__b__Name", "n.html")]));
        assert_eq!(menu, vec![link("Name", "n.html")]);
    }

    #[test]
    fn digits_rank_before_letters() {
        let menu = build_menu(&pairs(&[("about", "a"), ("9th", "n")]));
        assert_eq!(menu[0].label(), "9th");
        assert_eq!(menu[1].label(), "about");
    }

    #[test]
    fn first_character_rank_is_case_insensitive() {
        let menu = build_menu(&pairs(&[("Zoo", "z"), ("apple", "a")]));
        assert_eq!(menu[0].label(), "apple");
        assert_eq!(menu[1].label(), "Zoo");
    }

    #[test]
    fn characters_outside_the_alphabet_sort_last() {
        let menu = build_menu(&pairs(&[("!bang", "b"), ("zebra", "z"), ("0zero", "0")]));
        assert_eq!(menu[0].label(), "0zero");
        assert_eq!(menu[1].label(), "zebra");
        assert_eq!(menu[2].label(), "!bang");
    }

    #[test]
    fn nested_levels_sort_independently() {
        let menu = build_menu(&pairs(&[
            ("z/9", "z9"),
            ("z/0", "z0"),
            ("a", "a"),
        ]));
        assert_eq!(menu[0].label(), "a");
        assert_eq!(
            menu[1],
            MenuItem::Group {
                label: "z".to_string(),
                children: vec![link("0", "z0"), link("9", "z9")],
            }
        );
    }

    #[test]
    fn duplicate_label_last_slug_wins() {
        let menu = build_menu(&pairs(&[("home", "old.html"), ("home", "new.html")]));
        assert_eq!(menu, vec![link("home", "new.html")]);
    }

    #[test]
    fn equal_priorities_keep_input_order() {
        let menu = build_menu(&pairs(&[("alpha", "1"), ("azure", "2")]));
        assert_eq!(menu[0].label(), "alpha");
        assert_eq!(menu[1].label(), "azure");
    }

    #[test]
    fn priority_ranks_match_the_alphabet() {
        assert_eq!(priority("0"), 0);
        assert_eq!(priority("9"), 9);
        assert_eq!(priority("a"), 10);
        assert_eq!(priority("z"), 35);
        assert_eq!(priority("!"), 36);
        assert_eq!(priority(""), 36);
    }
}
