use clap::Parser;
use std::path::Path;

use asset_fetch::fetcher;
use asset_fetch::fetcher::retry::RetryPolicy;
use asset_fetch::manifest::{self, AssetSet};
use asset_fetch::utils::files;

/// Simple program to fetch the game's image assets from their remote sources
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Built-in asset set to fetch
    #[arg(value_enum, required_unless_present = "manifest")]
    set: Option<AssetSet>,

    /// Path to a JSON manifest with a custom job list
    #[arg(short, long)]
    manifest: Option<String>,

    /// Path where to save the assets
    #[arg(short, long, default_value = "assets")]
    path: String,

    /// Number of concurrent downloads
    #[arg(short, long, default_value_t = 5)]
    threads: usize,

    /// Skip jobs whose destination file already exists
    #[arg(long, default_value_t = false)]
    skip_existing: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let jobs = if let Some(manifest_path) = &args.manifest {
        println!("Manifest: {}", manifest_path);
        manifest::load_manifest(manifest_path)?
    } else {
        // clap requires `set` whenever --manifest is absent
        let set = args.set.unwrap_or(AssetSet::Ocean);
        println!("Set: {:?}", set);
        set.jobs()
    };
    println!("Path: {}", args.path);

    // Ensure the output directory exists
    files::ensure_output_dir(&args.path)?;

    let policy = RetryPolicy::default();
    let summary = fetcher::fetch_assets(
        jobs,
        Path::new(&args.path),
        args.threads,
        &policy,
        args.skip_existing,
    )
    .await?;

    println!(
        "\nFetched {}/{} assets",
        summary.succeeded(),
        summary.attempted()
    );
    if summary.skipped_existing > 0 {
        println!("Skipped {} assets (already existed)", summary.skipped_existing);
    }
    if summary.fetched_fallback > 0 {
        println!(
            "{} assets fetched from fallback sources",
            summary.fetched_fallback
        );
    }
    if summary.placeholders > 0 {
        println!(
            "{} placeholders substituted for unreachable sources",
            summary.placeholders
        );
    }
    if summary.failed > 0 {
        eprintln!("Warning: {} assets could not be fetched", summary.failed);
    }

    Ok(())
}
