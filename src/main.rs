use anyhow::Context;
use fetchling::config::Config;
use fetchling::fetch::Fetcher;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the fetched body.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let url = std::env::args()
        .nth(1)
        .context("usage: fetchling <url>")?;

    let cfg = Config::load();
    let fetcher = Fetcher::new(cfg);

    let body = fetcher.retrieve(&url).await?;
    std::io::stdout().write_all(&body)?;

    Ok(())
}
