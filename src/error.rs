use crate::fetcher::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to initialise HTTP client")]
    HttpClientBuild(#[source] reqwest::Error),
}
