//! Renders the greeter page without a browser.
//!
//! ```text
//! greeter-preview --clicks 3
//! greeter-preview --config page.toml --name Ada
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use greeter_core::{mount_page, CounterEvent, GreeterConfig};

#[derive(Parser, Debug)]
#[command(name = "greeter-preview", version, about)]
struct Cli {
    /// TOML file with `surface_id` and `names`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra names appended to the configured list
    #[arg(short, long = "name", value_name = "NAME")]
    names: Vec<String>,

    /// Number of clicks to deliver to the counter before printing
    #[arg(long, default_value_t = 0)]
    clicks: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GreeterConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GreeterConfig::default(),
    };
    config.names.extend(cli.names);

    let mut host = mount_page(&config).context("mounting page")?;
    for _ in 0..cli.clicks {
        host.click(&config.surface_id, CounterEvent::INCREMENT_HANDLER)?;
    }
    tracing::info!(
        surface = %config.surface_id,
        cards = config.names.len(),
        clicks = cli.clicks,
        "rendered preview"
    );

    println!("{}", host.html(&config.surface_id)?);
    Ok(())
}
