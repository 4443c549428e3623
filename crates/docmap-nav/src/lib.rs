//! Documentation navigation model.
//!
//! This crate provides:
//! - [`Node`]: authored table-of-contents tree (categories and posts)
//! - [`Navigation`]: validated model with route, alias, pagination,
//!   breadcrumb and sidebar views
//! - Tree loading from YAML, JSON or TOML files
//! - Sitemap and redirect file rendering
//!
//! # Quick Start
//!
//! ```
//! use docmap_nav::{Category, Navigation, Post};
//!
//! let root = vec![
//!     Post::new("Intro", "/docs/intro").with_aliases(["/docs"]).into(),
//!     Category::new("Guides")
//!         .with_posts(vec![
//!             Post::new("A", "/docs/a").into(),
//!             Post::new("B", "/docs/b").into(),
//!         ])
//!         .into(),
//! ];
//! let nav = Navigation::new(root).unwrap();
//!
//! assert_eq!(nav.resolve_alias("/docs"), Some("/docs/intro"));
//! let neighbors = nav.neighbors("/docs/a");
//! assert_eq!(neighbors.previous.unwrap().path, "/docs/intro");
//! assert_eq!(neighbors.next.unwrap().path, "/docs/b");
//! ```

mod error;
mod loader;
mod navigation;
mod node;
mod sitemap;

pub use error::NavError;
pub use loader::load_tree;
pub use navigation::{
    Crumb, EntryKind, FlatEntry, Navigation, Neighbors, Redirect, Resolved, SidebarItem, flatten,
    sidebar_tree,
};
pub use node::{Category, Node, Post};
pub use sitemap::{SiteUrls, render_redirects, render_sitemap};
