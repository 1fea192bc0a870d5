use crate::fetcher::error::FetchError;

/// Station and date selected by the user.
///
/// Both values are opaque to this crate. They are only checked for presence;
/// the backend decides whether they are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestParams {
    pub station_id: String,
    pub iso_date: String,
}

impl RequestParams {
    pub fn new(station_id: impl Into<String>, iso_date: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            iso_date: iso_date.into(),
        }
    }

    /// Fails with [`FetchError::InvalidRequest`] naming the first blank field.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.station_id.trim().is_empty() {
            return Err(FetchError::InvalidRequest { field: "station" });
        }
        if self.iso_date.trim().is_empty() {
            return Err(FetchError::InvalidRequest { field: "date" });
        }
        Ok(())
    }
}
