use anyhow::{Context, Result, bail};
use clap::Parser;
use quote_compose::{BuildConfig, CommercialInputs, VehicleData, build_quotation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quotegen", about = "Vehicle quotation PDF generator", version)]
struct Cli {
    /// Listing JSON produced by the scraper (bare object or one-element array)
    #[arg(short, long)]
    listing: PathBuf,

    /// Commercial terms JSON (fees, identities, quotation number)
    #[arg(short, long)]
    terms: Option<PathBuf>,

    /// Directory holding the static assets (body font, logos, cover background)
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Directory the finished PDF is written to
    #[arg(short, long, default_value = ".")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let listing_text = std::fs::read_to_string(&cli.listing)
        .with_context(|| format!("reading {}", cli.listing.display()))?;
    let vehicle = parse_listing(&listing_text)?;

    let inputs = match &cli.terms {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => CommercialInputs::default(),
    };

    let config = BuildConfig {
        asset_dir: cli.assets,
        output_dir: cli.out,
    };

    let path = build_quotation(&vehicle, &inputs, &config).await?;
    tracing::info!(path = %path.display(), "quotation written");
    println!("{}", path.display());
    Ok(())
}

/// The scraper feed wraps the record in a one-element array; accept both
/// that and a bare object.
fn parse_listing(text: &str) -> Result<VehicleData> {
    if let Ok(mut items) = serde_json::from_str::<Vec<VehicleData>>(text) {
        if items.is_empty() {
            bail!("listing file contains an empty array");
        }
        return Ok(items.remove(0));
    }
    Ok(serde_json::from_str(text).context("parsing listing JSON")?)
}
