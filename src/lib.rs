mod chart;
mod clock;
mod display;
mod error;
mod fetcher;
mod forecast_client;
mod selector;
mod types;
mod view_model;

pub use error::ForecastError;
pub use forecast_client::*;

pub use chart::{ChartData, PointStyle};
pub use clock::{Clock, FixedClock, SystemClock};
pub use selector::{select_next_index, select_next_index_for_dates, DayRelation};
pub use view_model::{
    format_value, two_decimals, ViewModel, DEFAULT_UNIT, MISSING_VALUE_TEXT,
    PLACEHOLDER_TIMESTAMP,
};

pub use display::error::DisplayError;
pub use display::forecast_display::{
    DisplayUpdate, ForecastDisplay, RequestTicket, INVALID_SELECTION_MESSAGE, NO_DATA_MESSAGE,
};
pub use display::surface::{ChartSurface, RecordedChart, RecordingSurface};

pub use fetcher::error::FetchError;
pub use fetcher::forecast_fetcher::ForecastFetcher;
pub use fetcher::response::FetchOutcome;

pub use types::forecast_series::{ForecastPoint, ForecastSeries};
pub use types::request_params::RequestParams;
pub use types::time_of_day::TimeOfDay;
