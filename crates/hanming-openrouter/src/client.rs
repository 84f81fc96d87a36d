use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse},
    error::OpenRouterError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Value shipped in `.env` templates; treated exactly like a missing key.
pub(crate) const PLACEHOLDER_API_KEY: &str = "your_openrouter_api_key_here";

const HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");
const X_TITLE: HeaderName = HeaderName::from_static("x-title");

/// Minimal HTTP client for OpenRouter's *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response), never retries.
/// * Sends the bearer token plus the `HTTP-Referer` / `X-Title` attribution
///   headers OpenRouter uses to identify the calling site.
/// * Shares a single `reqwest::Client`, so cloning is cheap.
#[derive(Clone)]
pub(crate) struct OpenRouterClient {
    api_key: Option<String>,
    site_url: String,
    site_name: String,
    http: HttpClient,
    base: String,
}

impl OpenRouterClient {
    pub(crate) fn new(
        api_key: Option<String>,
        site_url: String,
        site_name: String,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key,
            site_url,
            site_name,
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    /// Whether a real API key is present.
    pub(crate) fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(is_usable_key)
    }

    fn headers(&self) -> Result<HeaderMap, OpenRouterError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| is_usable_key(key))
            .ok_or_else(|| {
                OpenRouterError::NotConfigured("missing env variable: `OPENROUTER_API_KEY`".into())
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key.trim())).map_err(|_| {
                OpenRouterError::NotConfigured("API key contains invalid characters".into())
            })?,
        );
        headers.insert(HTTP_REFERER, attribution_value(&self.site_url, "site url")?);
        headers.insert(X_TITLE, attribution_value(&self.site_name, "site name")?);
        Ok(headers)
    }

    /// Perform a **non-streaming** chat completion.
    ///
    /// Fails fast with [`OpenRouterError::NotConfigured`] before any network
    /// I/O when no usable API key is set.
    pub(crate) async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenRouterError> {
        let headers = self.headers()?;

        let url = format!("{}/chat/completions", self.base);
        tracing::debug!(%url, model = %request.model, "sending chat completion");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenRouterError::Api {
                status,
                message: api_error_message(&body),
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

fn attribution_value(value: &str, what: &str) -> Result<HeaderValue, OpenRouterError> {
    HeaderValue::from_str(value)
        .map_err(|_| OpenRouterError::NotConfigured(format!("{what} is not a valid header value")))
}

/// Prefer the provider's `error.message`; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| body.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> OpenRouterClient {
        OpenRouterClient::new(
            api_key.map(str::to_owned),
            "http://localhost:5173".into(),
            "Chinese Name Finder".into(),
            HttpClient::new(),
            Some("http://localhost:9/api/v1/".into()),
        )
    }

    #[test]
    fn placeholder_and_blank_keys_are_not_configured() {
        assert!(!client(None).is_configured());
        assert!(!client(Some("")).is_configured());
        assert!(!client(Some("  ")).is_configured());
        assert!(!client(Some(PLACEHOLDER_API_KEY)).is_configured());
        assert!(client(Some("sk-or-v1-abc")).is_configured());
    }

    #[test]
    fn headers_carry_bearer_and_attribution() {
        let headers = client(Some("sk-or-v1-abc")).headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-or-v1-abc");
        assert_eq!(headers["http-referer"], "http://localhost:5173");
        assert_eq!(headers["x-title"], "Chinese Name Finder");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        assert_eq!(client(None).base, "http://localhost:9/api/v1");
    }

    #[test]
    fn error_message_prefers_provider_envelope() {
        assert_eq!(
            api_error_message(r#"{"error": {"message": "Rate limit exceeded", "code": 429}}"#),
            "Rate limit exceeded"
        );
        assert_eq!(api_error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
