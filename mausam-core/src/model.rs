use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One forecast observation as returned by the provider.
///
/// Ordering is positional: the series index, not a timestamp, decides
/// which point is "current" and which belong to the upcoming strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Temperature in Kelvin, as delivered by the provider.
    pub temperature_k: f64,
    /// Free-text condition description, e.g. "light rain".
    pub condition: String,
}

impl ForecastPoint {
    /// Display temperature in whole degrees Celsius (300.15 K -> 27).
    pub fn temperature_c(&self) -> i32 {
        (self.temperature_k - 273.15).round() as i32
    }
}

/// Ordered forecast series in provider order.
///
/// Element 0 is the current weather; elements 1..=5 form the upcoming
/// strip. The series is recomputed on every fetch and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

/// How many points the upcoming strip shows.
pub const UPCOMING_LEN: usize = 5;

impl ForecastSeries {
    /// Build a series, rejecting points below absolute zero.
    pub fn new(points: Vec<ForecastPoint>) -> Result<Self, Error> {
        if let Some(bad) = points.iter().find(|p| p.temperature_k < 0.0) {
            return Err(Error::TemperatureBelowAbsoluteZero(bad.temperature_k));
        }
        Ok(Self { points })
    }

    /// The current weather: the first point, if any.
    pub fn current(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    /// Points 1..=5, or fewer when the provider returned a short list.
    pub fn upcoming(&self) -> &[ForecastPoint] {
        let end = self.points.len().min(1 + UPCOMING_LEN);
        self.points.get(1..end).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(temperature_k: f64) -> ForecastPoint {
        ForecastPoint { temperature_k, condition: "clear sky".to_string() }
    }

    #[test]
    fn kelvin_renders_as_rounded_celsius() {
        assert_eq!(point(300.15).temperature_c(), 27);
        assert_eq!(point(273.15).temperature_c(), 0);
        assert_eq!(point(272.5).temperature_c(), -1);
    }

    #[test]
    fn six_entries_split_into_current_and_strip() {
        let series =
            ForecastSeries::new((0..6).map(|i| point(280.0 + f64::from(i))).collect()).unwrap();

        assert_eq!(series.current(), Some(&point(280.0)));
        assert_eq!(series.upcoming().len(), 5);
        assert_eq!(series.upcoming()[0], point(281.0));
        assert_eq!(series.upcoming()[4], point(285.0));
    }

    #[test]
    fn long_series_caps_the_strip_at_five() {
        let series =
            ForecastSeries::new((0..40).map(|i| point(280.0 + f64::from(i))).collect()).unwrap();
        assert_eq!(series.upcoming().len(), 5);
    }

    #[test]
    fn short_series_yields_short_strip() {
        let series = ForecastSeries::new(vec![point(280.0), point(281.0)]).unwrap();
        assert_eq!(series.current(), Some(&point(280.0)));
        assert_eq!(series.upcoming(), &[point(281.0)]);

        let empty = ForecastSeries::default();
        assert!(empty.current().is_none());
        assert!(empty.upcoming().is_empty());
    }

    #[test]
    fn negative_kelvin_is_rejected() {
        let err = ForecastSeries::new(vec![point(-1.0)]).unwrap_err();
        assert!(matches!(err, Error::TemperatureBelowAbsoluteZero(t) if t == -1.0));
    }
}
