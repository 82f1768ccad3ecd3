//! Dashboard state.
//!
//! All presentation-facing state in one explicit value that the
//! front-end owns and passes around; there is no ambient context.
//! Fetch outcomes are applied by sequence number: a response tagged
//! with a lower sequence than the newest applied one is stale and
//! ignored, so a slow superseded request can never overwrite the
//! result of a newer search.

use tracing::debug;

use crate::condition::{IconKind, classify};
use crate::locale::{Lang, MessageKey};
use crate::model::{ForecastPoint, ForecastSeries};

/// One forecast point resolved for display under the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointView {
    pub icon: IconKind,
    pub label: &'static str,
    pub temperature_c: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    lang: Lang,
    dark_mode: bool,
    series: ForecastSeries,
    error: Option<MessageKey>,
    last_applied_seq: u64,
}

impl Dashboard {
    pub fn new(lang: Lang) -> Self {
        Self { lang, ..Self::default() }
    }

    /// Apply a successful fetch. Returns false when the response is
    /// stale and was dropped.
    pub fn apply_success(&mut self, seq: u64, series: ForecastSeries) -> bool {
        if seq < self.last_applied_seq {
            debug!(seq, newest = self.last_applied_seq, "dropping stale forecast response");
            return false;
        }
        self.last_applied_seq = seq;
        self.series = series;
        self.error = None;
        true
    }

    /// Apply a failed fetch: the series and current weather are
    /// cleared, and the single localized error message is set. Returns
    /// false when the failure is stale and was dropped.
    pub fn apply_failure(&mut self, seq: u64) -> bool {
        if seq < self.last_applied_seq {
            debug!(seq, newest = self.last_applied_seq, "dropping stale fetch failure");
            return false;
        }
        self.last_applied_seq = seq;
        self.series.clear();
        self.error = Some(MessageKey::ErrorCityNotFound);
        true
    }

    pub fn current(&self) -> Option<&ForecastPoint> {
        self.series.current()
    }

    pub fn upcoming(&self) -> &[ForecastPoint] {
        self.series.upcoming()
    }

    /// The localized error message, if the last fetch failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(|key| self.lang.text(key))
    }

    /// Template string lookup under the active locale.
    pub fn text(&self, key: MessageKey) -> &'static str {
        self.lang.text(key)
    }

    /// Resolve a point's icon, localized label and display temperature.
    pub fn view(&self, point: &ForecastPoint) -> PointView {
        let entry = classify(&point.condition);
        PointView {
            icon: entry.icon,
            label: self.lang.text(entry.label),
            temperature_c: point.temperature_c(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Pure in-memory swap; fetched data is untouched.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(temps: &[f64]) -> ForecastSeries {
        ForecastSeries::new(
            temps
                .iter()
                .map(|&temperature_k| ForecastPoint {
                    temperature_k,
                    condition: "light rain".to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn success_populates_current_and_strip() {
        let mut dash = Dashboard::new(Lang::English);
        assert!(dash.apply_success(1, series(&[300.15, 281.0, 282.0])));

        assert_eq!(dash.current().unwrap().temperature_k, 300.15);
        assert_eq!(dash.upcoming().len(), 2);
        assert!(dash.error_message().is_none());
    }

    #[test]
    fn failure_clears_data_and_sets_localized_error() {
        let mut dash = Dashboard::new(Lang::Nepali);
        assert!(dash.apply_success(1, series(&[300.15])));

        assert!(dash.apply_failure(2));
        assert!(dash.current().is_none());
        assert!(dash.upcoming().is_empty());
        assert_eq!(dash.error_message(), Some("शहर फेला परेन"));
    }

    #[test]
    fn stale_success_is_dropped() {
        let mut dash = Dashboard::new(Lang::English);
        assert!(dash.apply_success(2, series(&[290.0])));

        // A slow response from an earlier search arrives late.
        assert!(!dash.apply_success(1, series(&[250.0])));
        assert_eq!(dash.current().unwrap().temperature_k, 290.0);
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut dash = Dashboard::new(Lang::English);
        assert!(dash.apply_success(3, series(&[290.0])));

        assert!(!dash.apply_failure(2));
        assert!(dash.error_message().is_none());
        assert!(dash.current().is_some());
    }

    #[test]
    fn success_after_failure_clears_the_error() {
        let mut dash = Dashboard::new(Lang::English);
        assert!(dash.apply_failure(1));
        assert!(dash.error_message().is_some());

        assert!(dash.apply_success(2, series(&[290.0])));
        assert!(dash.error_message().is_none());
    }

    #[test]
    fn locale_switch_changes_strings_but_not_numbers() {
        let mut dash = Dashboard::new(Lang::English);
        assert!(dash.apply_success(1, series(&[300.15])));

        let current = dash.current().unwrap().clone();
        let before = dash.view(&current);
        assert_eq!(before.label, "rainy");
        assert_eq!(before.temperature_c, 27);

        dash.set_lang(Lang::Nepali);
        let after = dash.view(&current);
        assert_eq!(after.label, "बर्सात");
        assert_eq!(after.temperature_c, 27);
        assert_eq!(after.icon, before.icon);

        assert_eq!(dash.text(MessageKey::AppTitle), "मौसम एप");
    }

    #[test]
    fn theme_toggle_flips_dark_mode() {
        let mut dash = Dashboard::new(Lang::English);
        assert!(!dash.dark_mode());
        dash.toggle_theme();
        assert!(dash.dark_mode());
        dash.toggle_theme();
        assert!(!dash.dark_mode());
    }
}
