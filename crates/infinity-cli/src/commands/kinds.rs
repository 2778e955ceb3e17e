//! Kinds command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use infinity_config::CATALOGUE;

use crate::output;

#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Print one JSON object per kind
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: KindsArgs) -> Result<()> {
    let width = CATALOGUE.iter().map(|d| d.kind.len()).max().unwrap_or(0);

    for descriptor in CATALOGUE {
        let operations = descriptor.operations();
        if args.json {
            output::json(&json!({
                "kind": descriptor.kind,
                "singleton": descriptor.is_singleton(),
                "operations": operations,
            }))?;
        } else {
            println!(
                "{:<width$}  {}",
                descriptor.kind,
                operations.join(" ").dimmed(),
                width = width
            );
        }
    }

    Ok(())
}
