use anyhow::Result;
use clap::Parser;
use convoy_cli::ConvoyClient;
use convoy_core::{ConvoyRequest, Coordinate};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Convoy server URL
    #[arg(long, default_value = "http://localhost:8000")]
    url: String,

    /// Convoy name
    #[arg(long)]
    name: String,

    #[arg(long, allow_hyphen_values = true)]
    start_lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    start_lng: f64,

    #[arg(long, allow_hyphen_values = true)]
    end_lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    end_lng: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = ConvoyClient::new(args.url);

    let request = ConvoyRequest {
        name: args.name,
        start: Coordinate::new(args.start_lat, args.start_lng),
        end: Coordinate::new(args.end_lat, args.end_lng),
    };

    println!("Submitting convoy '{}'...", request.name);
    let update = client.create_convoy(&request).await?;
    println!("Convoy {} planned with {} waypoints", update.convoy_id, update.route.len());
    for (sequence, [lat, lng]) in update.route.iter().enumerate() {
        println!("  {}: {:.6}, {:.6}", sequence, lat, lng);
    }

    Ok(())
}
