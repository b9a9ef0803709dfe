//! Main entry point for the getrecords CLI application.
//!
//! Parses the search flags, downloads the matching records and reports
//! where they were written.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cesmd::search::tables::{NETWORKS, STATION_TYPES};
use cesmd::{Cli, ServiceClient, get_records};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // WARN by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.list_networks || cli.list_station_types {
        let tables = [
            (cli.list_networks, NETWORKS),
            (cli.list_station_types, STATION_TYPES),
        ];
        for (_, table) in tables.iter().filter(|(wanted, _)| *wanted) {
            for (code, description) in table.iter() {
                println!("{:>4}  {}", code, description);
            }
        }
        return Ok(());
    }

    let Some(request) = cli.records_request() else {
        anyhow::bail!("OUTPUT and --email are required");
    };

    let client = ServiceClient::with_endpoint(cli.url.clone())?;
    let result = get_records(&client, &request).await?;

    if !cli.is_very_quiet() {
        println!("{}", result.path.display());
    }
    if !cli.is_quiet() {
        for file in &result.files {
            println!("  {}", file);
        }
    }

    Ok(())
}
