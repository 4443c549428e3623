//! Authored table-of-contents nodes.
//!
//! The table of contents is a tree of [`Node`]s: a [`Category`] groups
//! posts or nested categories, a [`Post`] is a single page. Authored data
//! uses one flat record shape for both (`name`, `href`, `overview`,
//! `posts`, `aliases`, `highlightCategory`, `sidebarSeparator`); a record
//! with `posts` is a category, a record with only `href` is a post.

use serde::{Deserialize, Serialize};

/// A node of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum Node {
    /// Group of posts or sub-categories.
    Category(Category),
    /// Single page.
    Post(Post),
}

/// Category node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    /// Display label.
    pub name: String,
    /// Canonical path when the category is itself a page.
    pub href: Option<String>,
    /// Overview page representing the category.
    pub overview: Option<String>,
    /// Ordered children.
    pub posts: Vec<Node>,
    /// Legacy paths resolving to the category's page.
    pub aliases: Vec<String>,
    /// Render the category emphasized in the sidebar.
    pub highlight_category: bool,
    /// Render a separator before the category in the sidebar.
    pub sidebar_separator: bool,
}

/// Leaf page node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    /// Display label.
    pub name: String,
    /// Canonical page path.
    pub href: String,
    /// Legacy paths resolving to `href`.
    pub aliases: Vec<String>,
    /// Render the post emphasized in the sidebar.
    pub highlight_category: bool,
    /// Render a separator before the post in the sidebar.
    pub sidebar_separator: bool,
}

impl Category {
    /// Create an empty category.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the category's own page path.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the overview page path.
    #[must_use]
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    /// Set the children.
    #[must_use]
    pub fn with_posts(mut self, posts: Vec<Node>) -> Self {
        self.posts = posts;
        self
    }

    /// Set legacy aliases.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Path the category links to: its own page, else its overview.
    #[must_use]
    pub fn landing(&self) -> Option<&str> {
        self.href.as_deref().or(self.overview.as_deref())
    }

    /// True when the category has children and none of them is a post.
    pub(crate) fn has_only_subcategories(&self) -> bool {
        !self.posts.is_empty()
            && self
                .posts
                .iter()
                .all(|child| matches!(child, Node::Category(_)))
    }
}

impl Post {
    /// Create a post.
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    /// Set legacy aliases.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

impl Node {
    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Category(category) => &category.name,
            Self::Post(post) => &post.name,
        }
    }

    /// Canonical page path, if the node is a page.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Category(category) => category.href.as_deref(),
            Self::Post(post) => Some(&post.href),
        }
    }

    /// Declared aliases.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        match self {
            Self::Category(category) => &category.aliases,
            Self::Post(post) => &post.aliases,
        }
    }

    /// Children (empty for posts).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Category(category) => &category.posts,
            Self::Post(_) => &[],
        }
    }
}

impl From<Category> for Node {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl From<Post> for Node {
    fn from(post: Post) -> Self {
        Self::Post(post)
    }
}

/// Authored record shape shared by categories and posts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    posts: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    highlight_category: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    sidebar_separator: bool,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        // A record without posts or overview but with href is a post. Anything
        // else stays a category so construction can report it if malformed.
        match (raw.posts, raw.href, raw.overview) {
            (None, Some(href), None) => Self::Post(Post {
                name: raw.name,
                href,
                aliases: raw.aliases,
                highlight_category: raw.highlight_category,
                sidebar_separator: raw.sidebar_separator,
            }),
            (posts, href, overview) => Self::Category(Category {
                name: raw.name,
                href,
                overview,
                posts: posts.unwrap_or_default(),
                aliases: raw.aliases,
                highlight_category: raw.highlight_category,
                sidebar_separator: raw.sidebar_separator,
            }),
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Category(category) => Self {
                name: category.name,
                href: category.href,
                overview: category.overview,
                posts: (!category.posts.is_empty()).then_some(category.posts),
                aliases: category.aliases,
                highlight_category: category.highlight_category,
                sidebar_separator: category.sidebar_separator,
            },
            Node::Post(post) => Self {
                name: post.name,
                href: Some(post.href),
                overview: None,
                posts: None,
                aliases: post.aliases,
                highlight_category: post.highlight_category,
                sidebar_separator: post.sidebar_separator,
            },
        }
    }
}
