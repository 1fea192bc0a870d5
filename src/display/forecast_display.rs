//! Owner of the rendered forecast chart and of the texts shown around it.

use crate::chart::ChartData;
use crate::display::surface::ChartSurface;
use crate::fetcher::error::FetchError;
use crate::fetcher::response::FetchOutcome;
use crate::forecast_client::ForecastClient;
use crate::selector::{select_next_index, DayRelation};
use crate::types::request_params::RequestParams;
use crate::types::time_of_day::TimeOfDay;
use crate::view_model::{placeholder_value_text, ViewModel, PLACEHOLDER_TIMESTAMP};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::collections::HashMap;

pub const INVALID_SELECTION_MESSAGE: &str = "Please select a valid station and date.";
pub const NO_DATA_MESSAGE: &str = "No prediction data available for this date.";

/// Sequence number of an issued request. Only the most recently issued ticket may
/// change what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What applying a response did to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    /// A new chart replaced the previous one.
    Rendered { highlight_index: Option<usize> },
    /// The backend had no data; the chart was cleared.
    Empty { message: String },
    /// Fetching or rendering failed; the chart was cleared.
    Failed { message: String },
    /// Station or date missing; nothing was requested.
    Invalid,
    /// A newer request was issued in the meantime; nothing changed.
    Stale,
}

/// Drives one chart surface: fetch, pick the next point, build the view, render.
///
/// The display exclusively owns the current chart handle. Before a new chart is drawn,
/// or when a request ends without data, the previous handle is released.
pub struct ForecastDisplay<S: ChartSurface> {
    surface: S,
    chart: Option<S::Chart>,
    latest: u64,
    unit: String,
    station_labels: HashMap<String, String>,
    message: String,
    next_timestamp: String,
    next_value_text: String,
    info_visible: bool,
    view_model: Option<ViewModel>,
}

impl<S: ChartSurface> ForecastDisplay<S> {
    pub fn new(surface: S, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        Self {
            surface,
            chart: None,
            latest: 0,
            next_value_text: placeholder_value_text(&unit),
            unit,
            station_labels: HashMap::new(),
            message: String::new(),
            next_timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
            info_visible: false,
            view_model: None,
        }
    }

    /// Human-readable name used in the chart title instead of the raw station id.
    pub fn with_station_label(
        mut self,
        station_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.station_labels.insert(station_id.into(), label.into());
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn next_timestamp(&self) -> &str {
        &self.next_timestamp
    }

    pub fn next_value_text(&self) -> &str {
        &self.next_value_text
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view_model.as_ref()
    }

    /// Starts a new request. Any response for an earlier ticket is ignored from now on.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        self.message.clear();
        self.reset_next_point();
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a finished fetch, unless `ticket` has been superseded.
    ///
    /// `now` is the local wall-clock time used to choose the highlighted point.
    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        params: &RequestParams,
        result: Result<FetchOutcome, FetchError>,
        now: NaiveDateTime,
    ) -> DisplayUpdate {
        if !self.is_latest(ticket) {
            warn!(
                "Discarding response #{} for station '{}' on {}, request #{} is newer",
                ticket.0, params.station_id, params.iso_date, self.latest
            );
            return DisplayUpdate::Stale;
        }

        match result {
            Ok(FetchOutcome::Data(series)) => {
                let relation = DayRelation::between(&params.iso_date, now.date());
                let index = select_next_index(&series, TimeOfDay::of(now), relation);
                debug!("Highlight index {:?} ({:?}) at {}", index, relation, now);
                let view_model = ViewModel::build(series, index, &self.unit);
                self.show(params, view_model)
            }
            Ok(FetchOutcome::Empty(message)) => {
                let message = message.unwrap_or_else(|| NO_DATA_MESSAGE.to_string());
                self.clear_with(message.clone());
                DisplayUpdate::Empty { message }
            }
            Err(FetchError::InvalidRequest { .. }) => {
                self.clear_with(INVALID_SELECTION_MESSAGE.to_string());
                DisplayUpdate::Invalid
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Fetches and applies the forecast for `params` in one go.
    ///
    /// The display stays mutably borrowed while the fetch is in flight, so requests made
    /// through `update` never overlap and never come back [`DisplayUpdate::Stale`]. A front
    /// end that lets a newer selection start before the previous fetch finished should call
    /// [`ForecastDisplay::issue`], run [`ForecastClient::fetch`] itself, and hand the result
    /// to [`ForecastDisplay::apply`].
    pub async fn update(
        &mut self,
        client: &ForecastClient,
        params: &RequestParams,
    ) -> DisplayUpdate {
        let ticket = self.issue();
        if params.validate().is_err() {
            self.clear_with(INVALID_SELECTION_MESSAGE.to_string());
            return DisplayUpdate::Invalid;
        }
        let result = client.fetch(params).await;
        self.apply(ticket, params, result, client.now())
    }

    /// Releases the current chart, if any.
    pub fn clear(&mut self) {
        if let Some(chart) = self.chart.take() {
            self.surface.release(chart);
        }
        self.view_model = None;
    }

    fn show(&mut self, params: &RequestParams, view_model: ViewModel) -> DisplayUpdate {
        let station_label = self
            .station_labels
            .get(&params.station_id)
            .map(String::as_str)
            .unwrap_or(&params.station_id);
        let data =
            ChartData::from_view_model(&view_model, station_label, &params.iso_date, &self.unit);

        self.clear();
        match self.surface.render(&data) {
            Ok(chart) => {
                self.chart = Some(chart);
                self.next_timestamp = view_model.next_timestamp.clone();
                self.next_value_text = view_model.next_value_text.clone();
                self.info_visible = true;
                let highlight_index = view_model.highlight_index;
                self.view_model = Some(view_model);
                info!(
                    "Rendered {} points for station '{}' on {}",
                    data.len(),
                    params.station_id,
                    params.iso_date
                );
                DisplayUpdate::Rendered { highlight_index }
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, reason: String) -> DisplayUpdate {
        warn!("Forecast chart update failed: {}", reason);
        let message = format!("Failed to load chart: {}", reason);
        self.clear_with(message.clone());
        DisplayUpdate::Failed { message }
    }

    fn clear_with(&mut self, message: String) {
        self.clear();
        self.reset_next_point();
        self.info_visible = false;
        self.message = message;
    }

    fn reset_next_point(&mut self) {
        self.next_timestamp = PLACEHOLDER_TIMESTAMP.to_string();
        self.next_value_text = placeholder_value_text(&self.unit);
    }
}

impl<S: ChartSurface> Drop for ForecastDisplay<S> {
    fn drop(&mut self) {
        self.clear();
    }
}
