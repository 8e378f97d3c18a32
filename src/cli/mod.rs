use anyhow::{Context, Result};
use clap::Parser;

use crate::config;
use crate::io::export_accounts;

/// Default location of the owners file
pub const DEFAULT_OUTPUT: &str = "./aws_accounts.json";

/// Account Exporter - writes the employee account list for the resource sweeper
#[derive(Parser, Debug)]
#[command(name = "account-exporter")]
#[command(about = "Store the employee AWS accounts as a JSON owners file")]
#[command(version)]
pub struct Cli {
    /// Where to store accounts
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: String,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mapping =
            config::employee_accounts().context("Failed to load employee account mapping")?;

        let count = export_accounts(&mapping, &self.output)
            .with_context(|| format!("Failed to write accounts to {}", self.output))?;

        eprintln!("Exported {} accounts to {}", count, self.output);
        Ok(())
    }
}
