//! `docmap redirects` command implementation.

use clap::Args;

use super::{NavArgs, print_json};
use crate::error::CliError;

/// Arguments for the redirects command.
#[derive(Args)]
pub(crate) struct RedirectsArgs {
    #[command(flatten)]
    nav: NavArgs,
}

impl RedirectsArgs {
    /// Print the alias table as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, nav) = self.nav.load()?;
        print_json(nav.redirects())
    }
}
