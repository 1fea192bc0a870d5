pub mod error;
pub mod forecast_fetcher;
pub mod response;
