pub mod error;
pub mod forecast_display;
pub mod surface;
