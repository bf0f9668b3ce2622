mod collectors;
mod config;
mod error;
mod models;
mod report;
mod salary;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::collectors::headhunter::HeadHunter;
use crate::collectors::runner::collect_stats;
use crate::collectors::superjob::SuperJob;
use crate::config::{Config, HH_TITLE, POPULAR_LANGUAGES, SJ_TITLE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("salary_stats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let client = collectors::http_client()?;
    let headhunter = HeadHunter::new(client.clone(), &config.hh_api_url);
    let superjob = SuperJob::new(client, &config.sj_api_url, &config.superjob_api_key);

    tracing::info!("Collecting statistics for {} languages", POPULAR_LANGUAGES.len());
    let hh_stats = collect_stats(&headhunter, &POPULAR_LANGUAGES).await?;
    let sj_stats = collect_stats(&superjob, &POPULAR_LANGUAGES).await?;

    println!("{}", report::render_table(&hh_stats, HH_TITLE));
    println!();
    println!("{}", report::render_table(&sj_stats, SJ_TITLE));

    Ok(())
}
