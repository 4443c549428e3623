//! `docmap neighbors` command implementation.

use clap::Args;
use docmap_nav::{FlatEntry, Navigation, Resolved};
use serde::Serialize;

use super::{NavArgs, print_json};
use crate::error::CliError;

/// Arguments for the neighbors command.
#[derive(Args)]
pub(crate) struct NeighborsArgs {
    /// Page path (an alias resolves to its page).
    path: String,

    #[command(flatten)]
    nav: NavArgs,
}

/// Previous/next pages of a page.
#[derive(Serialize)]
struct NeighborsReport<'a> {
    path: &'a str,
    previous: Option<&'a FlatEntry>,
    next: Option<&'a FlatEntry>,
}

impl NeighborsArgs {
    /// Print the pages before and after a page as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, nav) = self.nav.load()?;
        let report = neighbors_report(&nav, &self.path)?;
        print_json(&report)
    }
}

fn neighbors_report<'a>(nav: &'a Navigation, path: &str) -> Result<NeighborsReport<'a>, CliError> {
    let entry = match nav.lookup(path) {
        Some(Resolved::Page(entry) | Resolved::Redirect(entry)) => entry,
        None => return Err(CliError::UnknownPage(path.to_owned())),
    };
    let neighbors = nav.neighbors(&entry.path);

    Ok(NeighborsReport {
        path: &entry.path,
        previous: neighbors.previous,
        next: neighbors.next,
    })
}

#[cfg(test)]
mod tests {
    use docmap_nav::{Category, Post};

    use super::*;

    fn nav() -> Navigation {
        Navigation::new(vec![
            Post::new("Intro", "/docs/intro")
                .with_aliases(["/docs"])
                .into(),
            Category::new("Guides")
                .with_posts(vec![
                    Post::new("A", "/docs/a").into(),
                    Post::new("B", "/docs/b").into(),
                ])
                .into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_report_for_page() {
        let nav = nav();

        let report = neighbors_report(&nav, "/docs/a").unwrap();

        assert_eq!(report.path, "/docs/a");
        assert_eq!(report.previous.unwrap().path, "/docs/intro");
        assert_eq!(report.next.unwrap().path, "/docs/b");
    }

    #[test]
    fn test_report_for_alias_uses_canonical_page() {
        let nav = nav();

        let report = neighbors_report(&nav, "/docs").unwrap();

        assert_eq!(report.path, "/docs/intro");
        assert!(report.previous.is_none());
        assert_eq!(report.next.unwrap().path, "/docs/a");
    }

    #[test]
    fn test_report_serializes_missing_side_as_null() {
        let nav = nav();

        let json = serde_json::to_value(neighbors_report(&nav, "/docs/b").unwrap()).unwrap();

        assert!(json["next"].is_null());
        assert_eq!(json["previous"]["path"], "/docs/a");
    }

    #[test]
    fn test_report_for_unknown_path_fails() {
        let nav = nav();

        let err = neighbors_report(&nav, "/missing").err().unwrap();

        assert!(matches!(err, CliError::UnknownPage(_)));
        assert!(err.to_string().contains("/missing"));
    }
}
