//! # DISCOSweb Live Fetch Test
//!
//! Fetches one resource or one page of a collection from the live catalogue
//! and prints what came back. Reads `DISCOS_API_KEY` (and optionally
//! `DISCOS_API_URL`) from the environment or a local `.env` file.
//!
//! ```text
//! cargo run -p project_tests --bin test_discos_live -- --kind object --id 61272
//! cargo run -p project_tests --bin test_discos_live -- --kind entity --query "?filter=contains(name,'United')"
//! ```

use anyhow::Context;
use clap::Parser;
use lib_discos::loggers::{init_tracing, LoggingOptions};
use lib_discos::{ClientConfig, DiscosClient, ModelKind};
use tracing::info;

#[derive(Debug, Parser)]
#[command(about = "Live smoke test against the DISCOSweb API")]
struct Args {
    /// Model kind, e.g. object, entity, launch-vehicle-engine
    #[arg(long, default_value = "object")]
    kind: String,

    /// Resource id; omit to fetch a collection page
    #[arg(long)]
    id: Option<String>,

    /// Raw query string appended to the request
    #[arg(long, default_value = "")]
    query: String,

    /// Fetch the first page of every registered kind instead
    #[arg(long)]
    all: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "DISCOS_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1. Logging to the console only
    let _guard = init_tracing(&LoggingOptions {
        level: args.log.clone(),
        ..Default::default()
    })?;

    // 2. Client from the environment
    let config = ClientConfig::from_env().context("Loading DISCOSweb configuration")?;
    info!("{}", config);
    let client = DiscosClient::new(&config)?;

    if args.all {
        return sweep_all_kinds(&client).await;
    }

    let kind: ModelKind = args.kind.parse()?;

    println!("[*] Requesting {} from {}...", kind.endpoint(), config.base_url);

    // 3. Fetch and print
    match args.id {
        Some(id) => {
            let resource = client.get_single_by_kind(kind, &id, &args.query).await?;
            println!("\n[SUCCESS] {} {}:", resource.resource_type(), resource.id());
            println!("{:#?}", resource.attributes);
        }
        None => {
            let result = client
                .get_multiple_by_kind_with_pagination(kind, &args.query)
                .await?;
            println!(
                "\n[SUCCESS] Page {}/{} ({} per page, {} total):",
                result.page.current_page,
                result.page.total_pages,
                result.page.page_size,
                result
                    .page
                    .total_items
                    .map_or_else(|| "unknown".to_string(), |n| n.to_string())
            );
            for item in &result.items {
                println!("  - {} {}", item.resource_type(), item.id());
            }
        }
    }

    Ok(())
}

/// Requests one small page per kind and reports which ones resolved.
async fn sweep_all_kinds(client: &DiscosClient) -> anyhow::Result<()> {
    let mut failures = 0;

    // Entity pages mix countries and organisations; `entity` covers both.
    let kinds = ModelKind::ALL
        .into_iter()
        .filter(|k| !matches!(k, ModelKind::Country | ModelKind::Organisation));

    for kind in kinds {
        match client
            .get_multiple_by_kind_with_pagination(kind, "?page[size]=2")
            .await
        {
            Ok(result) => println!(
                "[OK]    {:<24} {} item(s), {} page(s)",
                kind.name(),
                result.items.len(),
                result.page.total_pages
            ),
            Err(e) => {
                failures += 1;
                eprintln!("[FAIL]  {:<24} {}", kind.name(), e);
            }
        }
    }

    anyhow::ensure!(failures == 0, "{failures} kind(s) failed");
    Ok(())
}
