mod config;
mod output;

use std::sync::Arc;

use feed::FeedClient;
use github::{GithubClient, RepoRef};
use pipeline::IssuePipeline;
use tracker::GithubTracker;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let entries = FeedClient::new().fetch(&config.feed).await?;
    tracing::info!("{} entries in feed", entries.len());

    let github_client = match &config.api_url {
        Some(api_url) => GithubClient::with_base_url(&config.token, api_url),
        None => GithubClient::new(&config.token),
    };
    let repo = RepoRef::parse(&config.repository)?;
    let tracker = GithubTracker::new(github_client, repo, config.pipeline.labels.clone());

    let pipeline = IssuePipeline::new(Arc::new(tracker), config.pipeline);
    let issues = pipeline.run(entries).await?;

    output::set_output("issues", &issues)?;
    Ok(())
}
