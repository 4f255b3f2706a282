use crate::config::ProbeConfig;
use crate::error::Result;
use crate::output;
use crate::probe::DatabaseProbe;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pgprobe")]
#[command(about = "Check PostgreSQL connectivity: ensure a table, seed it, read it back")]
#[command(version)]
pub struct Cli {
    /// Connection string (overrides DATABASE_URL)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the probe and print its report
pub async fn run(cli: Cli) -> Result<()> {
    let config = ProbeConfig::resolve(cli.database_url);
    let probe = DatabaseProbe::new(config);
    let report = probe.run().await?;

    if cli.json {
        println!("{}", output::format_report_json(&report)?);
    } else {
        println!("{}", output::format_report(&report));
    }

    Ok(())
}
