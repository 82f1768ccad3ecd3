use std::fmt::Debug;

use async_trait::async_trait;

use crate::{Config, ForecastSeries, error::Error, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Abstraction over forecast sources.
///
/// One implementation ships (OpenWeather); the trait keeps the
/// dashboard and tests independent of the concrete HTTP plumbing.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Fetch the forecast series for a city.
    ///
    /// An empty or whitespace-only city name short-circuits: no request
    /// is made and an empty series is returned.
    async fn fetch_forecast(&self, city: &str) -> Result<ForecastSeries, Error>;
}

/// Construct the default provider from configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.resolve_api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_key_is_set() {
        let cfg = Config { api_key: Some("KEY".to_string()) };
        assert!(provider_from_config(&cfg).is_ok());
    }
}
