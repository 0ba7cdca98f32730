use clap::Parser;
use std::time::Duration;
use wp_draft_dedup::config::SiteConfig;
use wp_draft_dedup::utils::validation::validate_required_field;
use wp_draft_dedup::{LoginForm, LoginOutcome, SessionClient, SessionLoginCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = SessionLoginCli::parse();
    cli.log.init();

    let site = match validate_required_field("WP_SITE", &cli.site) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = SessionClient::new(
        site,
        Duration::from_secs(SiteConfig::DEFAULT_TIMEOUT_SECS),
    )?;
    let form = LoginForm {
        username: cli.username.clone(),
        password: cli.password.clone(),
        remember: cli.remember,
    };

    match client.login(&form).await {
        Ok(LoginOutcome::Success { redirect }) => {
            println!("✅ Signed in, continue at {}{}", site.trim_end_matches('/'), redirect);
            // 帶著 session cookie 開啟導向頁面
            match client.open(&redirect).await {
                Ok(status) => tracing::info!("Opened {} (HTTP {})", redirect, status),
                Err(e) => tracing::warn!("Could not open {}: {}", redirect, e),
            }
        }
        Ok(LoginOutcome::Rejected { message }) => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
