//! docmap CLI - Documentation navigation model.
//!
//! Provides commands for:
//! - `check`: Validate the navigation tree
//! - `routes`: Print the page route table
//! - `redirects`: Print the alias redirect table
//! - `neighbors`: Print previous/next pages of a page
//! - `sidebar`: Print the sidebar presentation tree
//! - `sitemap`: Write the sitemap and redirects files
//! - `header`: Print the header style for scroll/search flags

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CheckArgs, HeaderArgs, NeighborsArgs, RedirectsArgs, RoutesArgs, SidebarArgs, SitemapArgs,
};
use output::Output;

/// docmap - Documentation navigation model.
#[derive(Parser)]
#[command(name = "docmap", version, about)]
struct Cli {
    /// Enable verbose output (show loading and construction logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the navigation tree.
    Check(CheckArgs),
    /// Print every page in document order as JSON.
    Routes(RoutesArgs),
    /// Print alias redirects as JSON.
    Redirects(RedirectsArgs),
    /// Print the pages before and after a page as JSON.
    Neighbors(NeighborsArgs),
    /// Print the sidebar tree as JSON.
    Sidebar(SidebarArgs),
    /// Write the sitemap and redirects files.
    Sitemap(SitemapArgs),
    /// Print the header style for scroll/search flags.
    Header(HeaderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
        Commands::Redirects(args) => args.execute(),
        Commands::Neighbors(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Sitemap(args) => args.execute(),
        Commands::Header(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
