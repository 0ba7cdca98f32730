use crate::config::SiteConfig;
use crate::utils::error::Result;
use crate::utils::logger;
use clap::{Args, Parser};

#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// WordPress site base URL
    #[arg(long, env = "WP_SITE")]
    pub site: Option<String>,

    /// WordPress username
    #[arg(long, env = "WP_USER")]
    pub user: Option<String>,

    /// Application password for the user
    #[arg(long, env = "WP_APP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = SiteConfig::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl SiteArgs {
    pub fn to_site_config(&self) -> Result<SiteConfig> {
        Ok(SiteConfig::from_parts(&self.site, &self.user, &self.password)?
            .with_timeout_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl LogArgs {
    pub fn init(&self) {
        if self.json_logs {
            logger::init_json_logger(self.verbose);
        } else {
            logger::init_cli_logger(self.verbose);
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wp-draft-dedup")]
#[command(about = "Delete duplicate WordPress draft posts, keeping the oldest of each title")]
pub struct RemoveDuplicatesCli {
    #[command(flatten)]
    pub site: SiteArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[arg(long, help = "Show what would be deleted without deleting anything")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "list_posts")]
#[command(about = "List every WordPress post grouped by status and report duplicate titles")]
pub struct ListPostsCli {
    #[command(flatten)]
    pub site: SiteArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "session_login")]
#[command(about = "Sign in through the site's session login endpoint")]
pub struct SessionLoginCli {
    #[arg(long, env = "WP_SITE")]
    pub site: Option<String>,

    #[arg(long)]
    pub username: String,

    #[arg(long, env = "WP_LOGIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(long, help = "Keep the session cookie for longer")]
    pub remember: bool,

    #[command(flatten)]
    pub log: LogArgs,
}
