use crate::domain::model::RawRecord;
use crate::utils::error::Result;
use reqwest::Client;

/// Issues the single GET against the configured endpoint. Transport errors,
/// non-2xx statuses and unparseable bodies all collapse into `None`; the
/// cause is only visible through the diagnostic logged here.
pub struct Fetcher {
    client: Client,
    endpoint: String,
}

impl Fetcher {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub async fn fetch(&self) -> Option<Vec<RawRecord>> {
        match self.try_fetch().await {
            Ok(records) => {
                tracing::debug!("fetched {} records", records.len());
                Some(records)
            }
            Err(e) => {
                tracing::error!("error fetching from the API: {}", e);
                None
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        let records = response.json().await?;
        Ok(records)
    }
}
