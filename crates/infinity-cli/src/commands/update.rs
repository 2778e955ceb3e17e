//! Update command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use infinity_core::Context;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resource kind (see `infinity kinds`)
    pub kind: String,

    /// Object id (omit for singletons such as `global`)
    pub id: Option<String>,

    /// Fields to change as JSON, `@file`, or `@-` for stdin
    #[arg(long)]
    pub data: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let body = super::read_data(&args.data)?;
    let service = storage::require_profile()?.service()?;

    let updated = service
        .by_kind(&args.kind)?
        .update(ctx, args.id.as_deref(), &body)
        .await
        .with_context(|| format!("Failed to update {}", args.kind))?;

    output::object(&updated, args.pretty)
}
