use anyhow::Result;
use clap::Parser;
use convoy_cli::{ConvoyClient, ThreatSnapshot};
use convoy_core::{plan_route, Coordinate};
use std::path::PathBuf;

/// Plan a convoy route offline against a threat snapshot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, allow_hyphen_values = true)]
    start_lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    start_lng: f64,

    #[arg(long, allow_hyphen_values = true)]
    end_lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    end_lng: f64,

    /// Threat snapshot JSON file
    #[arg(long, conflicts_with = "url")]
    threats: Option<PathBuf>,

    /// Pull the snapshot from a running server instead
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let snapshot = match (&args.threats, &args.url) {
        (Some(path), _) => ThreatSnapshot::load(path)?,
        (None, Some(url)) => ConvoyClient::new(url.as_str()).fetch_snapshot().await?,
        (None, None) => ThreatSnapshot::default(),
    };
    let model = snapshot.threat_model();
    eprintln!("Planning around {} threat regions", model.len());

    let start = Coordinate::new(args.start_lat, args.start_lng);
    let end = Coordinate::new(args.end_lat, args.end_lng);
    let route = plan_route(start, end, model.regions());

    if let Some(detour) = route.detour() {
        eprintln!("Detour via {:.6}, {:.6}", detour.lat, detour.lng);
    } else {
        eprintln!("Direct route is clear");
    }
    println!("{}", serde_json::to_string_pretty(&route)?);

    Ok(())
}
