use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Login failed: {message}")]
    LoginError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    Authentication,
}

impl DedupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DedupError::MissingConfigError { .. }
            | DedupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DedupError::ApiError(_) | DedupError::HttpStatusError { .. } => ErrorCategory::Network,
            DedupError::SerializationError(_) => ErrorCategory::Data,
            DedupError::LoginError { .. } => ErrorCategory::Authentication,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DedupError::MissingConfigError { .. } => {
                "Missing required environment variables".to_string()
            }
            DedupError::ApiError(e) if e.is_timeout() => {
                "The WordPress site did not respond in time".to_string()
            }
            DedupError::HttpStatusError { status: 401, .. }
            | DedupError::HttpStatusError { status: 403, .. } => {
                "The WordPress site rejected the credentials".to_string()
            }
            // 登入頁面對傳輸錯誤與無法解析的回應顯示同一句訊息
            DedupError::LoginError { .. } | DedupError::SerializationError(_) => {
                "An error occurred. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set WP_SITE, WP_USER and WP_APP_PASSWORD (or pass --site/--user/--password)"
            }
            ErrorCategory::Network => "Check the site URL and that the REST API is reachable",
            ErrorCategory::Data => "The site returned an unexpected response body",
            ErrorCategory::Authentication => "Verify the username and password",
        }
    }
}

pub type Result<T> = std::result::Result<T, DedupError>;
