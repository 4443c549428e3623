//! `docmap check` command implementation.

use clap::Args;
use docmap_config::CliSettings;
use docmap_nav::{Navigation, Node};

use super::NavArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    nav: NavArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the tree is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.nav.load_config(CliSettings::default())?;
        let source = &config.navigation_resolved.source;
        output.info(&format!("Navigation source: {}", source.display()));

        let nav = Navigation::load(source)?;

        output.highlight(&format!(
            "{} pages, {} categories, {} aliases",
            nav.entries().len(),
            count_categories(nav.root()),
            nav.redirects().len()
        ));
        output.success("Navigation is valid");
        Ok(())
    }
}

/// Count category nodes in a tree.
fn count_categories(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Category(category) => 1 + count_categories(&category.posts),
            Node::Post(_) => 0,
        })
        .sum()
}
