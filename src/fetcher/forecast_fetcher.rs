use crate::fetcher::error::FetchError;
use crate::fetcher::response::{classify, FetchOutcome};
use crate::types::request_params::RequestParams;
use log::{info, warn};
use reqwest::{Client, Url};

/// Issues the single `GET /api/data/{station}/{date}` request for a selection.
///
/// There is no caching and no retry: every call goes to the network exactly once,
/// unless the parameters are blank, in which case no request is made at all.
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    base_url: Url,
    http_client: Client,
}

impl ForecastFetcher {
    pub fn new(base_url: &str, http_client: Client) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|_| FetchError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Endpoint for the given selection. Station and date are percent-encoded as
    /// individual path segments.
    pub fn endpoint(&self, params: &RequestParams) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "data", params.station_id.as_str(), params.iso_date.as_str()]);
        Ok(url)
    }

    pub async fn fetch(&self, params: &RequestParams) -> Result<FetchOutcome, FetchError> {
        params.validate()?;
        let url = self.endpoint(params)?;
        let url_text = url.to_string();
        info!(
            "Requesting predictions for station '{}' on {} from {}",
            params.station_id, params.iso_date, url_text
        );

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {:?}", url_text, e);
                FetchError::Transport(url_text.clone(), e)
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(url_text.clone(), e))?;

        let outcome = classify(&url_text, status, &body)?;
        match &outcome {
            FetchOutcome::Data(series) => info!(
                "Received {} prediction points for station '{}' on {}",
                series.len(),
                params.station_id,
                params.iso_date
            ),
            FetchOutcome::Empty(message) => info!(
                "No predictions for station '{}' on {}: {}",
                params.station_id,
                params.iso_date,
                message.as_deref().unwrap_or("empty series")
            ),
        }
        Ok(outcome)
    }
}
