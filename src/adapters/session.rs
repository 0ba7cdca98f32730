use crate::utils::error::{DedupError, Result};
use crate::utils::validation::{self, Validate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_REJECTION: &str = "Invalid username or password";

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("rememberme", if self.remember { "forever" } else { "" }),
        ]
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("username", &self.username)?;
        if self.password.is_empty() {
            return Err(DedupError::MissingConfigError {
                field: "password".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { redirect: String },
    Rejected { message: String },
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// `POST /login` 的表單登入；cookie store 保留伺服器設定的 session cookie
pub struct SessionClient {
    client: Client,
    site_url: String,
    login_url: String,
}

impl SessionClient {
    pub fn new(site_url: &str, timeout: Duration) -> Result<Self> {
        validation::validate_url("WP_SITE", site_url)?;
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        let site_url = site_url.trim_end_matches('/').to_string();
        Ok(Self {
            client,
            login_url: format!("{}/login", site_url),
            site_url,
        })
    }

    pub async fn login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        form.validate()?;

        tracing::debug!("POST {} as {}", self.login_url, form.username);
        let response = self
            .client
            .post(&self.login_url)
            .form(&form.fields())
            .send()
            .await
            .map_err(|e| DedupError::LoginError {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| DedupError::LoginError {
            message: e.to_string(),
        })?;
        let parsed: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Unreadable login response (HTTP {}): {}", status, e);
            DedupError::SerializationError(e)
        })?;

        if status.is_success() && parsed.success {
            tracing::info!("✅ Signed in as {}", form.username);
            return Ok(LoginOutcome::Success {
                redirect: "/".to_string(),
            });
        }

        let message = parsed
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
        tracing::warn!("Login rejected (HTTP {}): {}", status, message);
        Ok(LoginOutcome::Rejected { message })
    }

    /// 以同一個 cookie store 開啟登入後的頁面（例如 `Success` 的 redirect）
    pub async fn open(&self, path: &str) -> Result<u16> {
        let url = format!("{}/{}", self.site_url, path.trim_start_matches('/'));

        tracing::debug!("GET {} with session cookie", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DedupError::HttpStatusError {
                status: status.as_u16(),
                url,
            });
        }
        Ok(status.as_u16())
    }
}
