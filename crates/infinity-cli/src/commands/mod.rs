//! Subcommand implementations.

mod create;
mod delete;
mod get;
mod kinds;
mod list;
mod login;
mod logout;
mod update;
mod whoami;

use std::io::{self, Read};

use anyhow::{Context as _, Result};
use clap::Subcommand;
use serde_json::Value;

use infinity_core::Context;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a connection and store it as the profile
    Login(login::LoginArgs),

    /// Display the stored profile
    Whoami(whoami::WhoamiArgs),

    /// Delete the stored profile
    Logout(logout::LogoutArgs),

    /// List the supported kinds and their operations
    Kinds(kinds::KindsArgs),

    /// List objects of a kind
    List(list::ListArgs),

    /// Fetch a single object
    Get(get::GetArgs),

    /// Create an object
    Create(create::CreateArgs),

    /// Update an object
    Update(update::UpdateArgs),

    /// Delete an object
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: Command, ctx: &Context) -> Result<()> {
    match cmd {
        Command::Login(args) => login::run(args, ctx).await,
        Command::Whoami(args) => whoami::run(args),
        Command::Logout(args) => logout::run(args),
        Command::Kinds(args) => kinds::run(args),
        Command::List(args) => list::run(args, ctx).await,
        Command::Get(args) => get::run(args, ctx).await,
        Command::Create(args) => create::run(args, ctx).await,
        Command::Update(args) => update::run(args, ctx).await,
        Command::Delete(args) => delete::run(args, ctx).await,
    }
}

/// Parse a `--data` argument: inline JSON, `@path` for a file, `@-` for stdin.
fn read_data(data: &str) -> Result<Value> {
    match data.strip_prefix('@') {
        Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            serde_json::from_str(&buf).context("Invalid JSON from stdin")
        }
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read JSON file '{path}'"))?;
            serde_json::from_str(&content).context("Invalid JSON in file")
        }
        None => serde_json::from_str(data).context("Invalid JSON data"),
    }
}
