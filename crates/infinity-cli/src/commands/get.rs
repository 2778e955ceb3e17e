//! Get command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use infinity_core::Context;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource kind (see `infinity kinds`)
    pub kind: String,

    /// Object id (omit for singletons such as `global`)
    pub id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs, ctx: &Context) -> Result<()> {
    let service = storage::require_profile()?.service()?;

    let object = service
        .by_kind(&args.kind)?
        .get(ctx, args.id.as_deref())
        .await
        .with_context(|| format!("Failed to get {}", args.kind))?;

    output::object(&object, args.pretty)
}
