use clap::Parser;
use wp_draft_dedup::utils::validation::Validate;
use wp_draft_dedup::{ListPostsCli, ListingEngine, WpRestClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = ListPostsCli::parse();
    cli.log.init();

    let config = match cli.site.to_site_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = WpRestClient::new(&config)?;
    let groups = ListingEngine::new(client).run().await;
    tracing::debug!("{} duplicate title group(s) reported", groups.len());

    Ok(())
}
