//! Records API client for the geonames city dataset.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::cursor::PageCursor;
use crate::error::CityError;
use crate::types::{City, RecordsResponse};

const USER_AGENT: &str = "CityWeather/0.1.0";

#[derive(Debug, Clone)]
pub struct CityClient {
    client: Arc<Client>,
    endpoint: Url,
    dataset: String,
    page_size: u32,
}

impl CityClient {
    pub fn new(
        endpoint: &str,
        dataset: &str,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self, CityError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoint: Url::parse(endpoint)?,
            dataset: dataset.to_string(),
            page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page of cities ordered by name, starting at `cursor * page_size`.
    #[instrument(skip(self), fields(page = cursor.page()), level = "info")]
    pub async fn load_page(&self, cursor: PageCursor) -> Result<Vec<City>, CityError> {
        let start = cursor.offset(self.page_size);
        let rows = self.page_size.to_string();
        let start = start.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("dataset", self.dataset.as_str()),
                ("rows", rows.as_str()),
                ("sort", "name"),
                ("start", start.as_str()),
            ])
            .send()
            .await?;

        let body: RecordsResponse = self.handle_response(response).await?;
        let cities: Vec<City> = body
            .records
            .into_iter()
            .map(|record| City::from(record.fields))
            .collect();

        tracing::debug!(count = cities.len(), "Loaded city page");
        Ok(cities)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CityError> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes).map_err(|e| CityError::Parse(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CityError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
