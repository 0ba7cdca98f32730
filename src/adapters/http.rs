use crate::config::SiteConfig;
use crate::core::{PageQuery, PostApi, RemoteItem};
use crate::domain::model::WpPost;
use crate::utils::error::{DedupError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

/// `wp/v2` REST 用戶端，使用 Basic 認證（應用程式密碼）
pub struct WpRestClient {
    client: Client,
    api_base: String,
    username: String,
    app_password: String,
}

impl WpRestClient {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_base: config.api_base(),
            username: config.username.clone(),
            app_password: config.app_password.clone(),
        })
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.app_password))
    }

    fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(DedupError::HttpStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PostApi for WpRestClient {
    async fn list_posts(&self, query: &PageQuery) -> Result<Vec<RemoteItem>> {
        let url = format!("{}/posts", self.api_base);
        let params = [
            ("per_page", query.per_page.to_string()),
            ("page", query.page.to_string()),
            ("status", query.status.as_query_value().to_string()),
            ("orderby", PageQuery::ORDER_BY.to_string()),
            ("order", PageQuery::ORDER.to_string()),
        ];

        tracing::debug!("GET {} page={}", url, query.page);
        let response = self.authed(self.client.get(&url)).query(&params).send().await?;
        let response = Self::ensure_success(response)?;

        // 回應為 null 時當作空頁
        let posts: Option<Vec<WpPost>> = response.json().await?;
        Ok(posts
            .unwrap_or_default()
            .into_iter()
            .map(RemoteItem::from)
            .collect())
    }

    async fn delete_post(&self, id: u64) -> Result<()> {
        let url = format!("{}/posts/{}", self.api_base, id);

        tracing::debug!("DELETE {} (force)", url);
        let response = self
            .authed(self.client.delete(&url))
            .query(&[("force", "true")])
            .send()
            .await?;
        Self::ensure_success(response)?;
        Ok(())
    }
}
