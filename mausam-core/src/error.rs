use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

/// Failures produced by the core library.
///
/// The dashboard collapses every fetch-related variant into a single
/// localized "city not found" message, but the variants stay distinct
/// here so logs and tests can tell them apart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    ProviderStatus { status: StatusCode, body: String },

    #[error("could not decode the forecast response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("forecast point reports an impossible temperature of {0} K")]
    TemperatureBelowAbsoluteZero(f64),

    #[error("{0} is outside the supported Bikram Sambat year range (2000-2090 BS)")]
    DateOutOfRange(NaiveDate),

    #[error("{0} is not a valid Bikram Sambat date in the supported range (2000-2090 BS)")]
    InvalidBsDate(crate::bsdate::BsDate),
}

impl Error {
    /// Whether the error came from the fetch path (as opposed to the
    /// date converter or series validation).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::ProviderStatus { .. } | Error::Decode(_)
        )
    }
}
