//! `docmap sidebar` command implementation.

use clap::Args;

use super::{NavArgs, print_json};
use crate::error::CliError;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    nav: NavArgs,
}

impl SidebarArgs {
    /// Print the sidebar presentation tree as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, nav) = self.nav.load()?;
        print_json(&nav.sidebar())
    }
}
