//! Login command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;
use colored::Colorize;

use infinity_core::Context;

use crate::output;
use crate::profile::{Profile, storage};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Admin API base URL (e.g., https://infinity.example.com/api/admin/)
    #[arg(long, env = "INFINITY_URL")]
    pub url: String,

    /// Username for basic authentication
    #[arg(long, env = "INFINITY_USERNAME", conflicts_with = "token")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, env = "INFINITY_PASSWORD", hide_env_values = true, requires = "username")]
    pub password: Option<String>,

    /// Bearer token
    #[arg(long, env = "INFINITY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let profile = match (args.token, args.username, args.password) {
        (Some(token), None, _) => Profile::bearer(&args.url, token),
        (None, Some(username), Some(password)) => Profile::basic(&args.url, username, password),
        (None, Some(_), None) => bail!("--password is required with --username"),
        _ => bail!("Provide either --username and --password, or --token"),
    };

    eprintln!("{}", "Connecting...".dimmed());

    let service = profile.service()?;
    service
        .global()
        .get(ctx)
        .await
        .context("Failed to fetch the global configuration")?;

    storage::save_profile(&profile).context("Failed to save profile")?;

    output::success("Logged in successfully");
    println!();
    output::field("URL", service.transport().base_url().as_str());
    output::field("Auth", profile.scheme());
    if let Some(username) = &profile.username {
        output::field("Username", username);
    }

    Ok(())
}
