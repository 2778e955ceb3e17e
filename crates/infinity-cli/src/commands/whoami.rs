//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs) -> Result<()> {
    let profile = storage::require_profile()?;

    output::field("URL", &profile.url);
    output::field("Auth", profile.scheme());
    if let Some(username) = &profile.username {
        output::field("Username", username);
    }

    Ok(())
}
