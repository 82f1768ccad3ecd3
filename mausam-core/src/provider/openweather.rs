use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::Error,
    model::{ForecastPoint, ForecastSeries},
};

use super::ForecastProvider;

/// Production endpoint. Tests point `base_url` at a local mock server.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch_forecast(&self, city: &str) -> Result<ForecastSeries, Error> {
        let city = city.trim();
        if city.is_empty() {
            return Ok(ForecastSeries::default());
        }

        let url = format!("{}/data/2.5/forecast", self.base_url);
        debug!(%city, "requesting forecast");

        // Temperatures arrive in Kelvin: no `units` parameter is sent.
        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%city, %status, "forecast request failed");
            return Err(Error::ProviderStatus { status, body: truncate_body(&body) });
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let points = parsed
            .list
            .into_iter()
            .map(|entry| ForecastPoint {
                temperature_k: entry.main.temp,
                condition: entry
                    .weather
                    .into_iter()
                    .next()
                    .map(|w| w.description)
                    .unwrap_or_default(),
            })
            .collect();

        ForecastSeries::new(points)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Cut on a char boundary: byte MAX may fall inside a multibyte
    // sequence, e.g. a Devanagari error message.
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= MAX)
        .last()
        .unwrap_or(0);
    format!("{}...", &body[..cut])
}
