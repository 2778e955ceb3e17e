//! Delete command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use infinity_core::Context;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Resource kind (see `infinity kinds`)
    pub kind: String,

    /// Object id
    pub id: String,
}

pub async fn run(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let service = storage::require_profile()?.service()?;

    service
        .by_kind(&args.kind)?
        .delete(ctx, &args.id)
        .await
        .with_context(|| format!("Failed to delete {} {}", args.kind, args.id))?;

    output::success(&format!("Deleted {} {}", args.kind, args.id));

    Ok(())
}
