//! Data-source client.
//!
//! The backend is a fixed collaborator: a single endpoint returning the
//! whole dataset as a JSON array of uniform row records, fetched once. All
//! sorting, filtering, and slicing happen client-side afterwards.

mod retry;

pub use retry::RetryConfig;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error::ApiError;
use crate::error::Error;
use crate::model::RawRecord;

/// Client for fetching the row dataset from the backend.
///
/// This client is cheap to clone (uses `Arc` internally). The fetch is
/// wrapped in bounded retry with exponential backoff so a transient failure
/// does not leave the table permanently unrendered.
///
/// # Example
///
/// ```ignore
/// use gridview_lib::client::DataClient;
///
/// let client = DataClient::builder()
///     .url("http://localhost:3000/data")
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// let records = client.fetch_rows().await?;
/// ```
#[derive(Clone)]
pub struct DataClient {
    inner: Arc<DataClientInner>,
}

struct DataClientInner {
    url: String,
    http_client: Client,
    timeout: Option<Duration>,
    retry: RetryConfig,
}

impl DataClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> DataClientBuilder<Missing> {
        DataClientBuilder::new()
    }

    /// Returns the endpoint URL this client fetches from.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Fetches the full dataset, retrying transient failures.
    ///
    /// Returns the raw records in document order. The records are not yet
    /// validated against a column shape; that happens when they are loaded
    /// into a [`TableSession`](crate::TableSession).
    pub async fn fetch_rows(&self) -> Result<Vec<RawRecord>, Error> {
        let retry = &self.inner.retry;
        let mut delay = retry.initial_delay;
        let mut attempt = 0u32;
        loop {
            match self.try_fetch().await {
                Ok(records) => {
                    log::debug!("fetched {} records from {}", records.len(), self.inner.url);
                    return Ok(records);
                }
                Err(error) => {
                    if attempt >= retry.max_retries || !retry.should_retry(&error) {
                        return Err(error.into());
                    }
                    attempt += 1;
                    log::warn!(
                        "fetch attempt {} failed ({}), retrying in {:?}",
                        attempt,
                        error,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(retry.max_delay);
                }
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<RawRecord>, ApiError> {
        let mut request = self.inner.http_client.get(&self.inner.url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), body));
        }

        let body = response.text().await.map_err(ApiError::from)?;
        serde_json::from_str(&body).map_err(|error| ApiError::parse_with_body(error.to_string(), body))
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`DataClient`].
///
/// Uses the typestate pattern so the required endpoint URL is enforced at
/// compile time: `build` is only available once `url` has been set.
///
/// # Example
///
/// ```
/// use gridview_lib::client::DataClient;
/// use gridview_lib::client::RetryConfig;
///
/// let client = DataClient::builder()
///     .url("http://localhost:3000/data")
///     .retry(RetryConfig::default().max_retries(5))
///     .build();
/// ```
pub struct DataClientBuilder<Url> {
    url: Url,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: RetryConfig,
    http_client: Option<Client>,
}

impl DataClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            retry: RetryConfig::default(),
            http_client: None,
        }
    }

    /// Sets the endpoint URL to fetch the dataset from.
    pub fn url(self, url: impl Into<String>) -> DataClientBuilder<Set<String>> {
        DataClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            retry: self.retry,
            http_client: self.http_client,
        }
    }
}

impl Default for DataClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> DataClientBuilder<U> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the retry configuration.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl DataClientBuilder<Set<String>> {
    /// Builds the [`DataClient`].
    ///
    /// This method is only available once `url` has been set.
    pub fn build(self) -> DataClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        DataClient {
            inner: Arc::new(DataClientInner {
                url: self.url.0,
                http_client,
                timeout: self.timeout,
                retry: self.retry,
            }),
        }
    }
}
