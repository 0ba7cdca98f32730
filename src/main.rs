use clap::Parser;
use wp_draft_dedup::utils::error::DedupError;
use wp_draft_dedup::utils::validation::Validate;
use wp_draft_dedup::{DedupEngine, RemoveDuplicatesCli, SiteConfig, WpRestClient};

fn fail(e: &DedupError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn load_config(cli: &RemoveDuplicatesCli) -> Result<SiteConfig, DedupError> {
    let config = cli.site.to_site_config()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = RemoveDuplicatesCli::parse();

    // 初始化日誌
    cli.log.init();

    // 驗證配置：缺任何一項就在連線前結束
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Site config: {:?}", config);

    let client = match WpRestClient::new(&config) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };

    let engine = DedupEngine::new(client).with_dry_run(cli.dry_run);
    let summary = engine.run().await;

    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} deletion(s) failed",
            summary.failed,
            summary.candidates
        );
    }
    tracing::info!(
        "Done: {} deleted, {} kept{}",
        summary.deleted,
        summary.kept,
        if summary.dry_run { " (dry run)" } else { "" }
    );
}
