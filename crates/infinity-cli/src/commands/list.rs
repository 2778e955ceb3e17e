//! List command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use infinity_core::{Context, ListMeta, ListOptions};

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource kind (see `infinity kinds`)
    pub kind: String,

    /// Maximum number of objects to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of objects to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Case-insensitive name search
    #[arg(long)]
    pub search: Option<String>,

    /// Field filter as key=value (repeatable)
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let service = storage::require_profile()?.service()?;
    let resource = service.by_kind(&args.kind)?;

    let mut options = ListOptions::new();
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(offset) = args.offset {
        options = options.with_offset(offset);
    }
    if let Some(search) = args.search {
        options = options.with_search(search);
    }
    for (key, value) in args.filters {
        options = options.with_filter(key, value);
    }

    let page = resource
        .list(ctx, Some(&options))
        .await
        .with_context(|| format!("Failed to list {}", args.kind))?;

    if page.is_empty() {
        output::note("No objects found.");
    }
    for object in &page.objects {
        output::object(object, args.pretty)?;
    }

    let meta = &page.meta;
    if !page.is_empty() {
        eprintln!();
        output::note(&showing(meta, page.len()));
    }
    if let Some(next) = options.next_page(meta) {
        output::note(&format!("Next page: --offset {}", next.offset));
    }

    Ok(())
}

/// One-based range of the page within the collection.
fn showing(meta: &ListMeta, len: usize) -> String {
    let first = u64::from(meta.offset).saturating_add(1);
    let last = u64::from(meta.offset).saturating_add(len as u64);
    format!("Showing {first}-{last} of {}", meta.total_count)
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
