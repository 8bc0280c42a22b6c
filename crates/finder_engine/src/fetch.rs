use finder_logging::{finder_debug, finder_error, finder_info};
use reqwest::header::CONTENT_TYPE;

use crate::decode::{extract_response_text, parse_listing_text};
use crate::prompt::build_request_body;
use crate::settings::ServiceSettings;
use crate::types::{Failure, FailureKind, FetchError, ListingRecord};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Source of job listings for a free-text query.
#[async_trait::async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch_listings(&self, query: &str) -> Result<Vec<ListingRecord>, FetchError>;
}

/// Fetches listings from the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiFetcher {
    settings: ServiceSettings,
}

impl GeminiFetcher {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, Failure> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| Failure::new(FailureKind::Network, err.to_string()))
    }

    async fn try_fetch(&self, query: &str) -> Result<Vec<ListingRecord>, Failure> {
        let client = self.build_client()?;
        let response = client
            .post(self.settings.endpoint())
            .header(API_KEY_HEADER, &self.settings.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&build_request_body(query))
            .send()
            .await
            .map_err(|err| Failure::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| Failure::new(FailureKind::Network, err.to_string()))?;
        if !status.is_success() {
            return Err(Failure::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{status}: {body}"),
            ));
        }

        let text = extract_response_text(&body)?;
        finder_debug!("Model returned {} bytes of listing text", text.len());
        parse_listing_text(&text)
    }
}

#[async_trait::async_trait]
impl ListingFetcher for GeminiFetcher {
    async fn fetch_listings(&self, query: &str) -> Result<Vec<ListingRecord>, FetchError> {
        finder_info!(
            "Fetching listings model={} query_len={}",
            self.settings.model,
            query.len()
        );
        match self.try_fetch(query).await {
            Ok(records) => {
                finder_info!("Fetched {} listings", records.len());
                Ok(records)
            }
            Err(failure) => {
                finder_error!(
                    "Error fetching or parsing job listings ({}): {}",
                    failure.kind,
                    failure.detail
                );
                Err(FetchError::new(failure.kind))
            }
        }
    }
}
