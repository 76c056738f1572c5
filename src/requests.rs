use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{config::ScrapingConfig, error::FetchError};

/// Anything that can hand back the HTML body behind a URL.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// Pooled HTTP session shared by every request of a run.
pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new(config: &ScrapingConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&config.accept_language)?);
        let client = ClientBuilder::new().default_headers(headers).build()?;
        Ok(Self { client })
    }

    pub async fn fetch_url_response(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<Response, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    pub async fn fetch_url_body(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self.fetch_url_response(url, timeout).await?;
        response.text().await.map_err(|e| classify(url, e))
    }
}

impl PageSource for RequestClient {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        self.fetch_url_body(url, timeout).await
    }
}

fn classify(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: Box::new(err),
        }
    }
}
