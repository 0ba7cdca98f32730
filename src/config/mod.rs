#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::time::Duration;

/// 站台連線設定，啟動時建立一次再傳給各元件
#[derive(Clone)]
pub struct SiteConfig {
    pub site_url: String,
    pub username: String,
    pub app_password: String,
    pub timeout_secs: u64,
}

impl SiteConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// 三個欄位都必填；缺任何一個就是設定錯誤
    pub fn from_parts(
        site_url: &Option<String>,
        username: &Option<String>,
        app_password: &Option<String>,
    ) -> Result<Self> {
        let site_url = validation::validate_required_field("WP_SITE", site_url)?;
        let username = validation::validate_required_field("WP_USER", username)?;
        let app_password = validation::validate_required_field("WP_APP_PASSWORD", app_password)?;

        Ok(Self {
            site_url: site_url.trim().trim_end_matches('/').to_string(),
            username: username.to_string(),
            app_password: app_password.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        })
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// `{site}/wp-json/wp/v2`
    pub fn api_base(&self) -> String {
        format!("{}/wp-json/wp/v2", self.site_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// 不把密碼印進日誌
impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .field(
                "app_password",
                &format!("<redacted, {} chars>", self.app_password.len()),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("WP_SITE", &self.site_url)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
