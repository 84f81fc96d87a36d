use std::{env, sync::Arc, time::Duration};

use hanming_core::error::{HanmingError, Result};
use reqwest::Client as HttpClient;

use crate::client::OpenRouterClient;

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_SITE_URL: &str = "OPENROUTER_SITE_URL";
pub const ENV_SITE_NAME: &str = "OPENROUTER_SITE_NAME";

const DEFAULT_SITE_URL: &str = "http://localhost:5173";
const DEFAULT_SITE_NAME: &str = "Chinese Name Finder";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wires the HTTP client into a value that implements
/// [`hanming_core::provider::ChatCompletionProvider`].
///
/// All user-facing functionality sits on the generic
/// [`hanming_core::HanmingClient`] once the adapter is plugged in.
pub struct OpenRouterAdapter {
    pub(crate) client: Arc<OpenRouterClient>,
}

impl OpenRouterAdapter {
    /// Whether a usable API key is present. When it is not, every request
    /// fails with [`HanmingError::Configuration`] without touching the network.
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }
}

/// Builder for [`OpenRouterAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use hanming_openrouter::OpenRouterAdapterBuilder;
///
/// let backend = OpenRouterAdapterBuilder::new_from_env()
///     .build()
///     .expect("HTTP client should build");
/// ```
///
/// A missing or placeholder key does **not** fail the build: the product
/// still renders, and each generation reports the configuration problem.
#[derive(Default)]
pub struct OpenRouterAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) site_url: Option<String>,
    pub(crate) site_name: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenRouterAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENROUTER_API_KEY`, `OPENROUTER_SITE_URL` and
    /// `OPENROUTER_SITE_NAME` from the environment.
    ///
    /// Never panics; unset variables fall back to defaults.
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(ENV_API_KEY).ok(),
            site_url: env::var(ENV_SITE_URL).ok(),
            site_name: env::var(ENV_SITE_NAME).ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Site URL and name sent as `HTTP-Referer` and `X-Title`.
    pub fn with_site(mut self, url: impl Into<String>, name: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self.site_name = Some(name.into());
        self
    }

    /// Override the API root (defaults to `https://openrouter.ai/api/v1`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whole-request timeout, surfaced as a transport error when exceeded.
    /// Defaults to 30 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`HanmingError::Configuration`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenRouterAdapter> {
        let http = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|err| HanmingError::Configuration(format!("building HTTP client: {err}")))?;

        let client = OpenRouterClient::new(
            self.api_key,
            self.site_url.unwrap_or_else(|| DEFAULT_SITE_URL.to_owned()),
            self.site_name.unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
            http,
            self.base_url,
        );

        if !client.is_configured() {
            tracing::warn!("{ENV_API_KEY} is missing or a placeholder; generation requests will fail");
        }

        Ok(OpenRouterAdapter {
            client: Arc::new(client),
        })
    }
}
