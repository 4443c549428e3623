//! Navigation model over an authored table of contents.
//!
//! [`Navigation`] validates the tree once and precomputes every derived
//! view the site build needs:
//! - the flattened page list in document order (route table, sitemap)
//! - an alias table for redirects
//! - previous/next pagination across category boundaries
//! - the sidebar presentation tree and breadcrumb trails
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<FlatEntry>` in depth-first document
//! order. This provides:
//! - O(1) page and alias lookups via `HashMap` indexes
//! - O(1) previous/next by index arithmetic
//!
//! The model is immutable after construction and can be shared by
//! reference across parallel page renderers.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::NavError;
use crate::node::{Category, Node};

/// Whether a flattened entry came from a post or a category page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Category carrying its own `href`.
    Category,
    /// Leaf post.
    Post,
}

/// Ancestor category in a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Category display label.
    pub name: String,
    /// Category landing path (`href`, else `overview`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One page of the flattened table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlatEntry {
    /// Canonical page path.
    pub path: String,
    /// Display label.
    pub name: String,
    /// Node kind the page came from.
    pub kind: EntryKind,
    /// Ancestor categories, outermost first.
    pub breadcrumbs: Vec<Crumb>,
}

/// Pages adjacent to a page in reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors<'a> {
    /// Page before, `None` for the first page.
    pub previous: Option<&'a FlatEntry>,
    /// Page after, `None` for the last page.
    pub next: Option<&'a FlatEntry>,
}

/// Alias redirect rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Legacy path.
    pub from: String,
    /// Canonical path.
    pub to: String,
}

/// Result of resolving a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The path is a canonical page path.
    Page(&'a FlatEntry),
    /// The path is an alias of this page.
    Redirect(&'a FlatEntry),
}

/// Sidebar item ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Display label.
    pub name: String,
    /// Link target: page path, or overview path for categories without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Node kind.
    pub kind: EntryKind,
    /// Render emphasized.
    pub highlight_category: bool,
    /// Render a separator before this item.
    pub sidebar_separator: bool,
    /// Child items in authored order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

/// Validated navigation model with precomputed lookups.
#[derive(Debug)]
pub struct Navigation {
    root: Vec<Node>,
    entries: Vec<FlatEntry>,
    path_index: HashMap<String, usize>,
    aliases: HashMap<String, String>,
    redirects: Vec<Redirect>,
}

impl Navigation {
    /// Validate a tree and build the model.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidNode`] for a node that is neither a page nor
    /// a group, [`NavError::DuplicatePath`] when two nodes share an `href`, and
    /// [`NavError::DuplicateAlias`] when an alias collides with another alias
    /// or with a page path.
    pub fn new(root: Vec<Node>) -> Result<Self, NavError> {
        let entries = flatten(&root)?;
        let path_index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.path.clone(), i))
            .collect::<HashMap<_, _>>();

        let mut aliases = HashMap::new();
        let mut redirects = Vec::new();
        collect_aliases(&root, &path_index, &mut aliases, &mut redirects)?;

        warn_missing_overviews(&root, &path_index);

        tracing::debug!(
            pages = entries.len(),
            aliases = redirects.len(),
            "Navigation model built"
        );

        Ok(Self {
            root,
            entries,
            path_index,
            aliases,
            redirects,
        })
    }

    /// The authored tree.
    #[must_use]
    pub fn root(&self) -> &[Node] {
        &self.root
    }

    /// All pages in document order.
    #[must_use]
    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    /// Get page by canonical path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FlatEntry> {
        self.path_index.get(path).map(|&i| &self.entries[i])
    }

    /// Resolve an alias to its canonical path.
    #[must_use]
    pub fn resolve_alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    /// Resolve a request path to a page, directly or through an alias.
    ///
    /// A trailing slash is ignored, so exported `/docs/page/` URLs resolve
    /// like `/docs/page`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<Resolved<'_>> {
        let path = normalize(path);
        if let Some(entry) = self.get(path) {
            return Some(Resolved::Page(entry));
        }
        self.resolve_alias(path)
            .and_then(|target| self.get(target))
            .map(Resolved::Redirect)
    }

    /// Pages immediately before and after `href` in reading order.
    ///
    /// Unknown paths have no neighbors.
    #[must_use]
    pub fn neighbors(&self, href: &str) -> Neighbors<'_> {
        let Some(&idx) = self.path_index.get(href) else {
            return Neighbors::default();
        };

        Neighbors {
            previous: idx.checked_sub(1).map(|i| &self.entries[i]),
            next: self.entries.get(idx + 1),
        }
    }

    /// Breadcrumb trail of a page, outermost category first.
    #[must_use]
    pub fn breadcrumbs(&self, href: &str) -> Option<&[Crumb]> {
        self.get(href).map(|entry| entry.breadcrumbs.as_slice())
    }

    /// Alias redirect rules in document order.
    #[must_use]
    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    /// Sidebar presentation tree for this model.
    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        sidebar_tree(&self.root)
    }
}

/// Flatten a tree into its pages in depth-first document order.
///
/// A category with an `href` precedes its descendants; a category without
/// one contributes only its descendants.
///
/// # Errors
///
/// Returns [`NavError::InvalidNode`] for malformed nodes and
/// [`NavError::DuplicatePath`] on the first repeated `href`.
pub fn flatten(root: &[Node]) -> Result<Vec<FlatEntry>, NavError> {
    let mut flattener = Flattener::default();
    for node in root {
        flattener.visit(node)?;
    }
    Ok(flattener.entries)
}

/// Transform a tree into sidebar items.
///
/// Keeps authored order and display hints; a category without its own page
/// links to its overview.
#[must_use]
pub fn sidebar_tree(root: &[Node]) -> Vec<SidebarItem> {
    root.iter().map(sidebar_item).collect()
}

fn sidebar_item(node: &Node) -> SidebarItem {
    match node {
        Node::Category(category) => SidebarItem {
            name: category.name.clone(),
            href: category.landing().map(str::to_owned),
            kind: EntryKind::Category,
            highlight_category: category.highlight_category,
            sidebar_separator: category.sidebar_separator,
            children: sidebar_tree(&category.posts),
        },
        Node::Post(post) => SidebarItem {
            name: post.name.clone(),
            href: Some(post.href.clone()),
            kind: EntryKind::Post,
            highlight_category: post.highlight_category,
            sidebar_separator: post.sidebar_separator,
            children: Vec::new(),
        },
    }
}

#[derive(Default)]
struct Flattener {
    entries: Vec<FlatEntry>,
    seen: HashSet<String>,
    trail: Vec<Crumb>,
}

impl Flattener {
    fn visit(&mut self, node: &Node) -> Result<(), NavError> {
        match node {
            Node::Post(post) => {
                if post.href.is_empty() {
                    return Err(NavError::InvalidNode {
                        name: post.name.clone(),
                        reason: "post has an empty href",
                    });
                }
                self.push(&post.name, &post.href, EntryKind::Post)
            }
            Node::Category(category) => self.visit_category(category),
        }
    }

    fn visit_category(&mut self, category: &Category) -> Result<(), NavError> {
        if category.href.is_none() && category.overview.is_none() && category.posts.is_empty() {
            return Err(NavError::InvalidNode {
                name: category.name.clone(),
                reason: "node has neither href nor posts",
            });
        }

        if let Some(href) = &category.href {
            self.push(&category.name, href, EntryKind::Category)?;
        }

        if !category.posts.is_empty() {
            self.trail.push(Crumb {
                name: category.name.clone(),
                path: category.landing().map(str::to_owned),
            });
            for child in &category.posts {
                self.visit(child)?;
            }
            self.trail.pop();
        }

        Ok(())
    }

    fn push(&mut self, name: &str, href: &str, kind: EntryKind) -> Result<(), NavError> {
        if !self.seen.insert(href.to_owned()) {
            return Err(NavError::DuplicatePath {
                path: href.to_owned(),
            });
        }

        self.entries.push(FlatEntry {
            path: href.to_owned(),
            name: name.to_owned(),
            kind,
            breadcrumbs: self.trail.clone(),
        });
        Ok(())
    }
}

/// Register every alias of `nodes` (recursively) in document order.
fn collect_aliases(
    nodes: &[Node],
    path_index: &HashMap<String, usize>,
    aliases: &mut HashMap<String, String>,
    redirects: &mut Vec<Redirect>,
) -> Result<(), NavError> {
    for node in nodes {
        if !node.aliases().is_empty() {
            let target = match node {
                Node::Category(category) => category.landing(),
                Node::Post(post) => Some(post.href.as_str()),
            };
            let Some(target) = target else {
                return Err(NavError::InvalidNode {
                    name: node.name().to_owned(),
                    reason: "aliases declared without href or overview",
                });
            };
            if !path_index.contains_key(target) {
                return Err(NavError::InvalidNode {
                    name: node.name().to_owned(),
                    reason: "aliases target an overview that matches no page",
                });
            }

            for alias in node.aliases() {
                if path_index.contains_key(alias) {
                    return Err(NavError::DuplicateAlias {
                        alias: alias.clone(),
                        existing: "a page path".to_owned(),
                    });
                }
                if let Some(existing) = aliases.get(alias) {
                    return Err(NavError::DuplicateAlias {
                        alias: alias.clone(),
                        existing: format!("an alias of {existing}"),
                    });
                }
                aliases.insert(alias.clone(), target.to_owned());
                redirects.push(Redirect {
                    from: alias.clone(),
                    to: target.to_owned(),
                });
            }
        }

        collect_aliases(node.children(), path_index, aliases, redirects)?;
    }
    Ok(())
}

/// A category whose landing page rendering would break.
#[derive(Clone, Debug, PartialEq, Eq)]
enum OverviewIssue {
    /// Only sub-categories and no landing page.
    Missing { category: String },
    /// The overview matches no page.
    Unmatched { category: String, overview: String },
}

fn warn_missing_overviews(nodes: &[Node], path_index: &HashMap<String, usize>) {
    let mut issues = Vec::new();
    overview_issues(nodes, path_index, &mut issues);

    for issue in issues {
        match issue {
            OverviewIssue::Missing { category } => tracing::warn!(
                category = %category,
                "Category contains only sub-categories but defines no overview"
            ),
            OverviewIssue::Unmatched { category, overview } => tracing::warn!(
                category = %category,
                overview = %overview,
                "Overview does not match any page"
            ),
        }
    }
}

fn overview_issues(
    nodes: &[Node],
    path_index: &HashMap<String, usize>,
    issues: &mut Vec<OverviewIssue>,
) {
    for node in nodes {
        let Node::Category(category) = node else {
            continue;
        };

        if category.has_only_subcategories() && category.landing().is_none() {
            issues.push(OverviewIssue::Missing {
                category: category.name.clone(),
            });
        }
        if let Some(overview) = &category.overview
            && !path_index.contains_key(overview)
        {
            issues.push(OverviewIssue::Unmatched {
                category: category.name.clone(),
                overview: overview.clone(),
            });
        }

        overview_issues(&category.posts, path_index, issues);
    }
}

/// Strip a trailing slash, keeping `/` itself.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::node::Post;

    assert_impl_all!(Navigation: Send, Sync);

    fn intro_guides() -> Vec<Node> {
        vec![
            Post::new("Intro", "/docs/intro")
                .with_aliases(["/docs"])
                .into(),
            Category::new("Guides")
                .with_posts(vec![
                    Post::new("A", "/docs/a").into(),
                    Post::new("B", "/docs/b").into(),
                ])
                .into(),
        ]
    }

    fn paths(entries: &[FlatEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.path.as_str()).collect()
    }

    // flatten tests

    #[test]
    fn test_flatten_intro_guides_document_order() {
        let entries = flatten(&intro_guides()).unwrap();

        assert_eq!(paths(&entries), vec!["/docs/intro", "/docs/a", "/docs/b"]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let root = intro_guides();

        let first = flatten(&root).unwrap();
        let second = flatten(&root).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_category_href_precedes_children() {
        let root = vec![
            Category::new("Advanced")
                .with_href("/advanced")
                .with_posts(vec![Post::new("Builds", "/advanced/builds").into()])
                .into(),
        ];

        let entries = flatten(&root).unwrap();

        assert_eq!(paths(&entries), vec!["/advanced", "/advanced/builds"]);
        assert_eq!(entries[0].kind, EntryKind::Category);
        assert_eq!(entries[1].kind, EntryKind::Post);
    }

    #[test]
    fn test_flatten_records_breadcrumb_trail() {
        let root = vec![
            Category::new("Advanced")
                .with_posts(vec![
                    Category::new("Builders")
                        .with_overview("/builders/overview")
                        .with_posts(vec![Post::new("Overview", "/builders/overview").into()])
                        .into(),
                ])
                .into(),
        ];

        let entries = flatten(&root).unwrap();

        assert_eq!(
            entries[0].breadcrumbs,
            vec![
                Crumb {
                    name: "Advanced".to_owned(),
                    path: None,
                },
                Crumb {
                    name: "Builders".to_owned(),
                    path: Some("/builders/overview".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_flatten_top_level_post_has_no_breadcrumbs() {
        let entries = flatten(&intro_guides()).unwrap();

        assert!(entries[0].breadcrumbs.is_empty());
        assert_eq!(entries[1].breadcrumbs.len(), 1);
        assert_eq!(entries[1].breadcrumbs[0].name, "Guides");
    }

    #[test]
    fn test_flatten_empty_root_is_empty() {
        assert!(flatten(&[]).unwrap().is_empty());
    }

    // construction error tests

    #[test]
    fn test_duplicate_href_fails() {
        let root = vec![
            Category::new("One")
                .with_posts(vec![Post::new("A", "/docs/a").into()])
                .into(),
            Category::new("Two")
                .with_posts(vec![Post::new("A again", "/docs/a").into()])
                .into(),
        ];

        let err = Navigation::new(root).err().unwrap();

        assert!(
            matches!(&err, NavError::DuplicatePath { path } if path == "/docs/a"),
            "Expected DuplicatePath, got {err:?}"
        );
        assert!(err.to_string().contains("/docs/a"));
    }

    #[test]
    fn test_category_href_colliding_with_post_fails() {
        let root = vec![
            Category::new("Guides")
                .with_href("/docs/guides")
                .with_posts(vec![Post::new("Guides", "/docs/guides").into()])
                .into(),
        ];

        let result = Navigation::new(root);

        assert!(matches!(result, Err(NavError::DuplicatePath { .. })));
    }

    #[test]
    fn test_overview_matching_child_href_is_allowed() {
        let root = vec![
            Category::new("Builders")
                .with_overview("/builders/overview")
                .with_posts(vec![Post::new("Overview", "/builders/overview").into()])
                .into(),
        ];

        let nav = Navigation::new(root).unwrap();

        assert_eq!(paths(nav.entries()), vec!["/builders/overview"]);
    }

    #[test]
    fn test_alias_equal_to_href_fails() {
        let root = vec![
            Post::new("A", "/docs/a").into(),
            Post::new("B", "/docs/b").with_aliases(["/docs/a"]).into(),
        ];

        let err = Navigation::new(root).err().unwrap();

        assert!(
            matches!(&err, NavError::DuplicateAlias { alias, .. } if alias == "/docs/a"),
            "Expected DuplicateAlias, got {err:?}"
        );
        assert!(err.to_string().contains("page path"));
    }

    #[test]
    fn test_alias_equal_to_own_href_fails() {
        let root = vec![Post::new("A", "/docs/a").with_aliases(["/docs/a"]).into()];

        assert!(matches!(
            Navigation::new(root),
            Err(NavError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn test_alias_declared_twice_fails() {
        let root = vec![
            Post::new("A", "/docs/a").with_aliases(["/old"]).into(),
            Post::new("B", "/docs/b").with_aliases(["/old"]).into(),
        ];

        let err = Navigation::new(root).err().unwrap();

        assert!(matches!(&err, NavError::DuplicateAlias { alias, .. } if alias == "/old"));
        assert!(err.to_string().contains("an alias of /docs/a"));
    }

    #[test]
    fn test_category_without_href_or_posts_fails() {
        let root = vec![Category::new("Empty").into()];

        let err = Navigation::new(root).err().unwrap();

        assert!(
            matches!(&err, NavError::InvalidNode { name, .. } if name == "Empty"),
            "Expected InvalidNode, got {err:?}"
        );
    }

    #[test]
    fn test_nested_invalid_node_fails() {
        let root = vec![
            Category::new("Guides")
                .with_posts(vec![
                    Post::new("A", "/docs/a").into(),
                    Category::new("Broken").into(),
                ])
                .into(),
        ];

        assert!(matches!(
            Navigation::new(root),
            Err(NavError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_post_with_empty_href_fails() {
        let root = vec![Post::new("Nowhere", "").into()];

        assert!(matches!(
            Navigation::new(root),
            Err(NavError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_overview_only_category_is_valid() {
        let root = vec![Category::new("Concepts").with_overview("/concepts").into()];

        let nav = Navigation::new(root).unwrap();

        assert!(nav.entries().is_empty());
        assert_eq!(nav.sidebar()[0].href.as_deref(), Some("/concepts"));
    }

    #[test]
    fn test_aliases_without_target_fail() {
        let root = vec![
            Category::new("Guides")
                .with_aliases(["/old-guides"])
                .with_posts(vec![Post::new("A", "/docs/a").into()])
                .into(),
        ];

        assert!(matches!(
            Navigation::new(root),
            Err(NavError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_alias_to_unmatched_overview_fails() {
        let root = vec![
            Category::new("Concepts")
                .with_overview("/concepts/missing")
                .with_aliases(["/concepts"])
                .with_posts(vec![Post::new("A", "/concepts/a").into()])
                .into(),
        ];

        let err = Navigation::new(root).unwrap_err();

        assert!(
            matches!(&err, NavError::InvalidNode { name, .. } if name == "Concepts"),
            "Expected InvalidNode, got {err:?}"
        );
    }

    // overview warnings

    fn issues_of(root: &[Node]) -> Vec<OverviewIssue> {
        let path_index = flatten(root)
            .unwrap()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| (entry.path, i))
            .collect::<HashMap<_, _>>();
        let mut issues = Vec::new();
        overview_issues(root, &path_index, &mut issues);
        issues
    }

    #[test]
    fn test_overview_issues_reports_missing_overview() {
        let root = vec![
            Category::new("Platform")
                .with_posts(vec![
                    Category::new("Deployments")
                        .with_posts(vec![Post::new("A", "/platform/a").into()])
                        .into(),
                ])
                .into(),
        ];

        assert_eq!(
            issues_of(&root),
            vec![OverviewIssue::Missing {
                category: "Platform".to_owned()
            }]
        );
    }

    #[test]
    fn test_overview_issues_reports_unmatched_overview() {
        let root = vec![
            Category::new("Guides")
                .with_overview("/guides/gone")
                .with_posts(vec![
                    Category::new("Nested")
                        .with_overview("/guides/a")
                        .with_posts(vec![Post::new("A", "/guides/a").into()])
                        .into(),
                ])
                .into(),
        ];

        assert_eq!(
            issues_of(&root),
            vec![OverviewIssue::Unmatched {
                category: "Guides".to_owned(),
                overview: "/guides/gone".to_owned(),
            }]
        );
    }

    #[test]
    fn test_overview_issues_empty_for_intro_guides() {
        assert!(issues_of(&intro_guides()).is_empty());
    }

    // alias tests

    #[test]
    fn test_resolve_alias_returns_canonical_path() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert_eq!(nav.resolve_alias("/docs"), Some("/docs/intro"));
    }

    #[test]
    fn test_resolve_alias_unknown_returns_none() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert_eq!(nav.resolve_alias("/docs/intro"), None);
        assert_eq!(nav.resolve_alias("/missing"), None);
    }

    #[test]
    fn test_category_alias_resolves_to_overview() {
        let root = vec![
            Category::new("Concepts")
                .with_overview("/concepts/overview")
                .with_aliases(["/concepts"])
                .with_posts(vec![Post::new("Overview", "/concepts/overview").into()])
                .into(),
        ];

        let nav = Navigation::new(root).unwrap();

        assert_eq!(nav.resolve_alias("/concepts"), Some("/concepts/overview"));
    }

    #[test]
    fn test_redirects_in_document_order() {
        let root = vec![
            Post::new("Intro", "/intro").with_aliases(["/v2", "/"]).into(),
            Category::new("Guides")
                .with_posts(vec![Post::new("A", "/a").with_aliases(["/old-a"]).into()])
                .into(),
        ];

        let nav = Navigation::new(root).unwrap();

        let froms: Vec<_> = nav.redirects().iter().map(|r| r.from.as_str()).collect();
        assert_eq!(froms, vec!["/v2", "/", "/old-a"]);
        assert_eq!(nav.redirects()[2].to, "/a");
    }

    // lookup tests

    #[test]
    fn test_lookup_page_and_alias() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert!(matches!(
            nav.lookup("/docs/a"),
            Some(Resolved::Page(entry)) if entry.path == "/docs/a"
        ));
        assert!(matches!(
            nav.lookup("/docs"),
            Some(Resolved::Redirect(entry)) if entry.path == "/docs/intro"
        ));
        assert!(nav.lookup("/nope").is_none());
    }

    #[test]
    fn test_lookup_ignores_trailing_slash() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert!(matches!(nav.lookup("/docs/b/"), Some(Resolved::Page(_))));
        assert!(matches!(nav.lookup("/docs/"), Some(Resolved::Redirect(_))));
    }

    #[test]
    fn test_normalize_keeps_root() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("//"), "/");
        assert_eq!(normalize("/docs/"), "/docs");
        assert_eq!(normalize("/docs"), "/docs");
    }

    // neighbors tests

    #[test]
    fn test_neighbors_interior_crosses_category_boundary() {
        let nav = Navigation::new(intro_guides()).unwrap();

        let neighbors = nav.neighbors("/docs/a");

        assert_eq!(neighbors.previous.unwrap().path, "/docs/intro");
        assert_eq!(neighbors.next.unwrap().path, "/docs/b");
    }

    #[test]
    fn test_neighbors_at_ends() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert!(nav.neighbors("/docs/intro").previous.is_none());
        assert!(nav.neighbors("/docs/b").next.is_none());
        assert_eq!(nav.neighbors("/docs/b").previous.unwrap().path, "/docs/a");
    }

    #[test]
    fn test_neighbors_unknown_path_is_empty() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert_eq!(nav.neighbors("/docs"), Neighbors::default());
    }

    #[test]
    fn test_breadcrumbs_lookup() {
        let nav = Navigation::new(intro_guides()).unwrap();

        assert_eq!(nav.breadcrumbs("/docs/intro"), Some(&[][..]));
        assert_eq!(nav.breadcrumbs("/docs/b").unwrap()[0].name, "Guides");
        assert!(nav.breadcrumbs("/missing").is_none());
    }

    // sidebar tests

    #[test]
    fn test_sidebar_tree_keeps_order_and_flags() {
        let mut guides = Category::new("Guides")
            .with_overview("/guides")
            .with_posts(vec![
                Post::new("A", "/docs/a").into(),
                Post::new("B", "/docs/b").into(),
            ]);
        guides.highlight_category = true;
        guides.sidebar_separator = true;
        let root = vec![Post::new("Intro", "/docs/intro").into(), guides.into()];

        let sidebar = sidebar_tree(&root);

        assert_eq!(sidebar.len(), 2);
        assert_eq!(sidebar[0].kind, EntryKind::Post);
        assert!(!sidebar[0].highlight_category);
        assert_eq!(sidebar[1].name, "Guides");
        assert_eq!(sidebar[1].href.as_deref(), Some("/guides"));
        assert!(sidebar[1].highlight_category);
        assert!(sidebar[1].sidebar_separator);
        let children: Vec<_> = sidebar[1].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(children, vec!["A", "B"]);
    }

    #[test]
    fn test_sidebar_tree_is_pure() {
        let root = intro_guides();

        assert_eq!(sidebar_tree(&root), sidebar_tree(&root));
    }

    #[test]
    fn test_sidebar_item_serialization() {
        let sidebar = sidebar_tree(&intro_guides());

        let json = serde_json::to_value(&sidebar).unwrap();

        assert_eq!(json[0]["href"], "/docs/intro");
        assert_eq!(json[0]["kind"], "post");
        assert_eq!(json[0]["highlightCategory"], false);
        assert!(json[0].get("children").is_none());
        assert!(json[1].get("href").is_none());
        assert_eq!(json[1]["children"][1]["name"], "B");
    }
}
