//! chunjun-site - ChunJun website server and navigation tooling

mod cli;

use anyhow::{Context, Result};
use chunjun_site_core::{builtin_nav, load_nav, NavConfig};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::cli::{links_table, LinkSummary};

#[derive(Parser)]
#[command(
    name = "chunjun-site",
    version,
    about = "ChunJun website server and navigation tooling",
    long_about = "Serves the ChunJun website (Leptos frontend + JSON API) and validates\n\
                  the header navigation files it is built from.\n\
                  \n\
                  Examples:\n\
                    chunjun-site                          # Serve on port 3333 (default)\n\
                    chunjun-site serve --port 8080 --open # Custom port, open browser\n\
                    chunjun-site check nav.yaml           # Validate a navigation file\n\
                    chunjun-site links                    # Show the built-in header links\n\
                    chunjun-site links --nav nav.toml --json\n\
                  \n\
                  Frontend Workflow:\n\
                    cd crates/chunjun-site-web && trunk build --release\n\
                    chunjun-site serve\n\
                  \n\
                  Environment Variables:\n\
                    CHUNJUN_SITE_DIST                     # Compiled frontend directory\n\
                    CHUNJUN_SITE_LOG                      # Log filter (falls back to RUST_LOG)\n\
                    CHUNJUN_SITE_NO_COLOR                 # Disable table styling"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Serve options used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,

    /// Log filter, e.g. "debug" or "chunjun_site_core=trace"
    #[arg(long, env = "CHUNJUN_SITE_LOG", global = true)]
    log: Option<String>,

    /// Disable table styling (log-friendly)
    #[arg(long, env = "CHUNJUN_SITE_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
struct ServeArgs {
    /// Port for web server
    #[arg(long, default_value = "3333")]
    port: u16,
    /// Directory holding the Trunk build
    #[arg(long, env = "CHUNJUN_SITE_DIST", default_value = "crates/chunjun-site-web/dist")]
    dist: PathBuf,
    /// Open the site in the default browser
    #[arg(long)]
    open: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the website (default)
    Serve(ServeArgs),
    /// Validate a navigation file (.yaml, .yml, .json or .toml)
    Check {
        /// Navigation file to validate
        file: PathBuf,
    },
    /// Print the header links
    Links {
        /// Navigation file (default: the built-in list)
        #[arg(long)]
        nav: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Serve(cli.serve)) {
        Mode::Serve(ServeArgs { port, dist, open }) => {
            run_serve(port, dist, open).await?;
        }
        Mode::Check { file } => {
            run_check(&file, no_color)?;
        }
        Mode::Links { nav, json } => {
            run_links(nav.as_deref(), json, no_color)?;
        }
    }

    Ok(())
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_serve(port: u16, dist: PathBuf, open: bool) -> Result<()> {
    let nav = Arc::new(builtin_nav().clone());

    if dist.join("index.html").exists() {
        println!("\n🌐 Website + API: http://localhost:{}", port);
        println!("   API endpoints: http://localhost:{}/api/*", port);
    } else {
        println!("\n🌐 API only:      http://localhost:{}/api/*", port);
        println!("   💡 Run 'trunk build' in crates/chunjun-site-web to compile the frontend");
    }

    if open {
        let url = format!("http://localhost:{}", port);
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, url = %url, "Failed to open browser");
        }
    }

    chunjun_site_web::run(nav, Some(dist), port).await
}

fn run_check(file: &Path, no_color: bool) -> Result<()> {
    let nav = load_nav(file)
        .with_context(|| format!("Navigation file {} is invalid", file.display()))?;

    let mark = if no_color { "OK" } else { "✓" };
    println!(
        "{} {}: {} links ({})",
        mark,
        file.display(),
        nav.len(),
        LinkSummary::of(&nav)
    );
    Ok(())
}

fn run_links(file: Option<&Path>, json: bool, no_color: bool) -> Result<()> {
    let nav: NavConfig = match file {
        Some(path) => load_nav(path)
            .with_context(|| format!("Failed to load navigation from {}", path.display()))?,
        None => builtin_nav().clone(),
    };

    if json {
        let out = serde_json::to_string_pretty(&nav).context("Failed to serialize navigation")?;
        println!("{}", out);
    } else {
        println!("{}", links_table(&nav, no_color));
        println!("{}", LinkSummary::of(&nav));
    }
    Ok(())
}
