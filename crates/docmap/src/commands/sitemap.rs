//! `docmap sitemap` command implementation.

use std::path::PathBuf;

use clap::Args;
use docmap_config::{CliSettings, Config};
use docmap_nav::{Navigation, SiteUrls, render_redirects, render_sitemap};

use super::NavArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[command(flatten)]
    nav: NavArgs,

    /// Site base URL (overrides config).
    #[arg(long, env = "DOCMAP_BASE_URL")]
    base_url: Option<String>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl SitemapArgs {
    /// Write the sitemap and redirects files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the tree is invalid, or the
    /// files cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.nav.load_config(CliSettings {
            base_url: self.base_url,
            output_dir: self.output_dir,
            ..CliSettings::default()
        })?;
        let nav = Navigation::load(&config.navigation_resolved.source)?;

        let (sitemap, redirects) = write_outputs(&config, &nav)?;

        output.success(&format!(
            "Wrote {} pages to {}",
            nav.entries().len(),
            sitemap.display()
        ));
        output.success(&format!(
            "Wrote {} redirects to {}",
            nav.redirects().len(),
            redirects.display()
        ));
        Ok(())
    }
}

/// Render and write both files, returning their paths.
fn write_outputs(config: &Config, nav: &Navigation) -> Result<(PathBuf, PathBuf), CliError> {
    let urls = SiteUrls::new(config.site.public_url(), config.site.trailing_slash);
    let sitemap = render_sitemap(nav, &urls)?;
    let redirects = render_redirects(nav, config.site.trailing_slash);

    std::fs::create_dir_all(&config.output_resolved.dir)?;

    let sitemap_path = config.output_resolved.sitemap_path();
    let redirects_path = config.output_resolved.redirects_path();
    std::fs::write(&sitemap_path, sitemap)?;
    std::fs::write(&redirects_path, redirects)?;

    tracing::info!(
        sitemap = %sitemap_path.display(),
        redirects = %redirects_path.display(),
        "Wrote site files"
    );
    Ok((sitemap_path, redirects_path))
}
