//! eCloud HTTP client for API interactions

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::ecloud::traits::{ApiItemResponse, PaginatedResponse};
use crate::error::{EcloudError, Result};

/// eCloud API client
pub struct EcloudClient {
    client: Client,
    api_key: String,
    base_uri: String,
}

impl EcloudClient {
    /// Create a new eCloud client with optimized connection settings
    pub fn new(api_key: String, base_uri: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_uri,
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.base_uri.trim_end_matches('/'), api::BASE_PATH)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", &self.api_key)
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(EcloudError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for any other non-success status.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/tasks/task-abc123")
    /// * `resource_label` - Human-readable label for error messages (e.g., "task [task-abc123]")
    pub async fn fetch_resource_by_path<T>(&self, path: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }

        let item: ApiItemResponse<T> = self.parse_api_response(response, resource_label).await?;
        Ok(Some(item.data))
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// Page 1 is fetched first to learn `total_pages`, remaining pages are
    /// fetched in parallel (bounded) and reassembled in page order.
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: Send,
        R: DeserializeOwned + PaginatedResponse<T> + Send,
    {
        let first_page_url = self.page_url(path, 1);
        debug!("Fetching page 1 from: {}", first_page_url);

        let response = self.get(&first_page_url).send().await?;
        let first_resp: R = self.parse_api_response(response, error_context).await?;
        let meta = first_resp.meta().cloned();
        let mut all_items = first_resp.into_data();

        let total_pages = match meta.and_then(|m| m.pagination) {
            Some(p) => {
                debug!("Page 1/{}, total items: {}", p.total_pages, p.total);
                p.total_pages
            }
            None => return Ok(all_items),
        };

        if total_pages <= 1 {
            return Ok(all_items);
        }

        let page_futures = (2..=total_pages).map(|page_num| {
            let url = self.page_url(path, page_num);
            self.fetch_single_page::<T, R>(url, page_num, error_context)
        });

        let results: Vec<Result<(u32, Vec<T>)>> = stream::iter(page_futures)
            .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
            .collect()
            .await;

        let mut page_results = results.into_iter().collect::<Result<Vec<_>>>()?;
        page_results.sort_by_key(|(page_num, _)| *page_num);
        for (_, items) in page_results {
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    fn page_url(&self, path: &str, page: u32) -> String {
        let separator = if path.contains('?') { "&" } else { "?" };
        format!(
            "{}{}{}page={}&per_page={}",
            self.base_url(),
            path,
            separator,
            page,
            api::DEFAULT_PAGE_SIZE
        )
    }

    async fn fetch_single_page<T, R>(
        &self,
        url: String,
        page_num: u32,
        error_context: &str,
    ) -> Result<(u32, Vec<T>)>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(&url).send().await?;
        let page_context = format!("{} (page {})", error_context, page_num);
        let resp: R = self.parse_api_response(response, &page_context).await?;
        Ok((page_num, resp.into_data()))
    }
}

#[cfg(test)]
impl EcloudClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_uri: &str) -> Self {
        Self::new("test-api-key".to_string(), base_uri.to_string())
    }
}
