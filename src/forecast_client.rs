//! Main entry point: a configured client for one forecast backend.

use crate::clock::{Clock, SystemClock};
use crate::error::ForecastError;
use crate::fetcher::error::FetchError;
use crate::fetcher::forecast_fetcher::ForecastFetcher;
use crate::fetcher::response::FetchOutcome;
use crate::selector::{select_next_index, DayRelation};
use crate::types::forecast_series::ForecastSeries;
use crate::types::request_params::RequestParams;
use crate::types::time_of_day::TimeOfDay;
use crate::view_model::{ViewModel, DEFAULT_UNIT};
use bon::bon;
use chrono::NaiveDateTime;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Client for the `/api/data/{station}/{date}` prediction endpoint.
///
/// Create one with [`ForecastClient::builder()`]. Only the base URL is required.
///
/// # Examples
///
/// ```
/// # use pv_forecast::{ForecastClient, ForecastError};
/// # use std::time::Duration;
/// # fn run() -> Result<(), ForecastError> {
/// let client = ForecastClient::builder()
///     .base_url("http://localhost:5000")
///     .unit("kW")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// assert_eq!(client.unit(), "kW");
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ForecastClient {
    fetcher: ForecastFetcher,
    unit: String,
    clock: Arc<dyn Clock>,
}

#[bon]
impl ForecastClient {
    /// Builds the client.
    ///
    /// # Arguments
    ///
    /// * `.base_url(&str)`: **Required.** Root of the backend, e.g. `http://localhost:5000`.
    /// * `.unit(String)`: Optional. Display unit appended to values. Defaults to `"MW"`.
    /// * `.timeout(Duration)`: Optional. Overall request timeout. Defaults to none.
    /// * `.clock(Arc<dyn Clock>)`: Optional. Time source for picking the next point.
    ///   Defaults to [`SystemClock`].
    ///
    /// # Errors
    ///
    /// [`ForecastError::Fetch`] with [`FetchError::InvalidBaseUrl`] when the base URL
    /// cannot carry a path, and [`ForecastError::HttpClientBuild`] when the HTTP client
    /// cannot be initialised.
    #[builder]
    pub fn new(
        base_url: &str,
        #[builder(into)] unit: Option<String>,
        timeout: Option<Duration>,
        clock: Option<Arc<dyn Clock>>,
    ) -> Result<Self, ForecastError> {
        let mut http = Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        let http_client = http.build().map_err(ForecastError::HttpClientBuild)?;

        Ok(Self {
            fetcher: ForecastFetcher::new(base_url, http_client)?,
            unit: unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            clock: clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }

    /// Fetches the prediction series for one station and date.
    ///
    /// # Arguments
    ///
    /// * `.station(&str)`: **Required.** Station identifier.
    /// * `.date(&str)`: **Required.** Date as `YYYY-MM-DD`.
    ///
    /// # Returns
    ///
    /// [`FetchOutcome::Data`] with the series, or [`FetchOutcome::Empty`] when the backend
    /// has nothing for that day.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pv_forecast::{ForecastClient, ForecastError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ForecastError> {
    /// let client = ForecastClient::builder().base_url("http://localhost:5000").build()?;
    /// let outcome = client.forecast().station("1").date("2024-06-01").call().await?;
    /// if let Some(series) = outcome.series() {
    ///     println!("{} points", series.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn forecast(&self, station: &str, date: &str) -> Result<FetchOutcome, ForecastError> {
        let params = RequestParams::new(station, date);
        Ok(self.fetch(&params).await?)
    }

    /// Fetches a day and builds its [`ViewModel`] against the client's clock.
    ///
    /// Returns `Ok(None)` when the backend has no data for that day.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pv_forecast::{ForecastClient, ForecastError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ForecastError> {
    /// let client = ForecastClient::builder().base_url("http://localhost:5000").build()?;
    /// if let Some(view) = client.view().station("1").date("2024-06-01").call().await? {
    ///     println!("next: {} {}", view.next_timestamp, view.next_value_text);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn view(
        &self,
        station: &str,
        date: &str,
    ) -> Result<Option<ViewModel>, ForecastError> {
        let params = RequestParams::new(station, date);
        let outcome = self.fetch(&params).await?;
        Ok(outcome
            .into_series()
            .map(|series| self.build_view(series, &params.iso_date)))
    }
}

impl ForecastClient {
    pub async fn fetch(&self, params: &RequestParams) -> Result<FetchOutcome, FetchError> {
        self.fetcher.fetch(params).await
    }

    /// Picks the next point of `series` for `iso_date` at the current time and builds the view.
    pub fn build_view(&self, series: ForecastSeries, iso_date: &str) -> ViewModel {
        let now = self.now();
        let relation = DayRelation::between(iso_date, now.date());
        let index = select_next_index(&series, TimeOfDay::of(now), relation);
        ViewModel::build(series, index, &self.unit)
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn fetcher(&self) -> &ForecastFetcher {
        &self.fetcher
    }
}
