//! `docmap header` command implementation.

use clap::Args;
use docmap_layout::{HeaderFlags, HeaderStyle};

use super::print_json;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the header command.
#[derive(Args)]
pub(crate) struct HeaderArgs {
    /// The page scrolled past the hide threshold.
    #[arg(long)]
    hide_header: bool,

    /// The page has a search hero.
    #[arg(long)]
    dynamic_search: bool,

    /// Show the header search box instead of deferring to the hero.
    #[arg(long)]
    show_header_search: bool,

    /// The page is scrolled to the top.
    #[arg(long)]
    is_top: bool,

    /// Print the computed style as JSON instead of CSS.
    #[arg(long)]
    json: bool,
}

impl HeaderArgs {
    /// Print the header style for the given flags.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let style = HeaderStyle::from_flags(self.flags());
        if self.json {
            print_json(&style)
        } else {
            Output::new().data(style.to_css().trim_end())?;
            Ok(())
        }
    }

    fn flags(&self) -> HeaderFlags {
        HeaderFlags {
            hide_header: self.hide_header,
            dynamic_search: self.dynamic_search,
            hide_header_search: !self.show_header_search,
            is_top: self.is_top,
        }
    }
}
