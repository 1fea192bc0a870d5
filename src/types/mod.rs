pub mod forecast_series;
pub mod request_params;
pub mod time_of_day;
