//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod header;
pub(crate) mod neighbors;
pub(crate) mod redirects;
pub(crate) mod routes;
pub(crate) mod sidebar;
pub(crate) mod sitemap;

use std::path::PathBuf;

use clap::Args;
use docmap_config::{CliSettings, Config};
use docmap_nav::Navigation;
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use header::HeaderArgs;
pub(crate) use neighbors::NeighborsArgs;
pub(crate) use redirects::RedirectsArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use sidebar::SidebarArgs;
pub(crate) use sitemap::SitemapArgs;

/// Arguments shared by every command that reads the navigation tree.
#[derive(Args, Debug, Default)]
pub(crate) struct NavArgs {
    /// Path to configuration file (default: auto-discover docmap.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Navigation tree file (overrides config).
    #[arg(short, long)]
    pub source: Option<PathBuf>,
}

impl NavArgs {
    /// Load configuration, applying `--source` on top of `settings`.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            source: self.source.clone().or(settings.source),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }

    /// Load configuration and build the navigation model.
    pub(crate) fn load(&self) -> Result<(Config, Navigation), CliError> {
        let config = self.load_config(CliSettings::default())?;
        let nav = Navigation::load(&config.navigation_resolved.source)?;
        Ok((config, nav))
    }
}

/// Write `value` as pretty JSON to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    Output::new().data(&json)?;
    Ok(())
}
