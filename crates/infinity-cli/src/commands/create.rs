//! Create command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use infinity_config::Created;
use infinity_core::Context;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Resource kind (see `infinity kinds`)
    pub kind: String,

    /// Object as JSON, `@file`, or `@-` for stdin
    #[arg(long)]
    pub data: String,

    /// Pretty-print a returned object
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let body = super::read_data(&args.data)?;
    let service = storage::require_profile()?.service()?;

    let created = service
        .by_kind(&args.kind)?
        .create(ctx, &body)
        .await
        .with_context(|| format!("Failed to create {}", args.kind))?;

    match created {
        Created::Location(uri) => {
            println!("{}", uri);
            output::note(&format!("Created {}", args.kind));
        }
        Created::Body(object) => output::object(&object, args.pretty)?,
    }

    Ok(())
}
