// Adapters layer: concrete implementations for the remote WordPress site.

pub mod http;
pub mod session;

pub use http::WpRestClient;
pub use session::{LoginForm, LoginOutcome, SessionClient};
