use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seo_meta_analyzer::client::ProxyClient;
use seo_meta_analyzer::seo::preview::render_text;
use seo_meta_analyzer::session::{run_analysis, AnalysisState};

/// Analyze a page's SEO meta tags through a running fetch proxy.
#[derive(Parser, Debug)]
#[command(name = "seo-inspect", version, about)]
struct Args {
    /// Page to analyze, e.g. https://www.example.com
    url: String,

    /// Base URL of the fetch proxy
    #[arg(long, env = "SEO_PROXY_URL", default_value = "http://127.0.0.1:3001")]
    proxy: String,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = ProxyClient::new(&args.proxy).context("Invalid --proxy value")?;

    let state = run_analysis(&client, &AnalysisState::Idle, &args.url).await?;

    match state {
        AnalysisState::Success { report } => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_text(&report));
            }
            Ok(())
        }
        AnalysisState::Error { message, .. } => bail!("{message}"),
        other => bail!("Analysis ended in unexpected state: {other:?}"),
    }
}
