use crate::error::SourceError;
use lazy_static::lazy_static;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; AgendaFindeBot/1.0)";

lazy_static! {
    static ref REST_CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|err| {
            warn!("Couldn't build HTTP client with custom settings ({}), using defaults", err);
            Client::new()
        });
}

/// Downloads a source's listing. Fails rather than returning a partial page.
#[allow(async_fn_in_trait)]
pub trait ContentFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, SourceError>;
}

pub struct HttpFetcher;

impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, SourceError> {
        debug!("Fetching {}", url);

        let body = REST_CLIENT
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| to_source_error(err, timeout))?
            .text()
            .await
            .map_err(|err| to_source_error(err, timeout))?;

        debug!("Received {} bytes", body.len());

        Ok(body)
    }
}

fn to_source_error(err: reqwest::Error, timeout: Duration) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout(timeout.as_secs())
    } else {
        SourceError::Fetch(err.to_string())
    }
}
