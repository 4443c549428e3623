//! `docmap routes` command implementation.

use clap::Args;

use super::{NavArgs, print_json};
use crate::error::CliError;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    nav: NavArgs,
}

impl RoutesArgs {
    /// Print every page in document order as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, nav) = self.nav.load()?;
        print_json(nav.entries())
    }
}
