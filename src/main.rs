mod config;
mod lookup;
mod profiles;
mod query;
mod report;
mod tavily;

use std::io;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use config::Config;
use lookup::SearchOutcome;
use tavily::TavilyClient;

#[derive(Parser)]
#[command(
    name = "hr_lookup",
    about = "Find LinkedIn profiles of HR staff at a company via Tavily search"
)]
struct Cli {
    /// Company to search for (prompts when omitted)
    #[arg(short, long)]
    company: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    config::load_dotenv();
    let config = Config::from_env();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let outcome =
        lookup::run(config, TavilyClient::new, cli.company, &mut input, &mut out).await?;

    // Failures were already printed; the exit status stays 0 either way.
    match outcome {
        SearchOutcome::Profiles(p) => info!("Lookup finished with {} profiles", p.len()),
        SearchOutcome::Config(e) => info!("Lookup aborted: {}", e),
        SearchOutcome::Search(e) => info!("Lookup failed: {}", e),
    }
    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());

    Ok(())
}
