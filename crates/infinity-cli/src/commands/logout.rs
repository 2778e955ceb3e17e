//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(_args: LogoutArgs) -> Result<()> {
    if storage::clear_profile()? {
        output::success("Logged out");
    } else {
        output::note("No stored profile.");
    }
    Ok(())
}
