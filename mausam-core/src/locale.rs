use std::convert::TryFrom;

/// Display language. Two locales ship; the table is closed and
/// hand-authored, not a dynamic catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    English,
    Nepali,
}

/// Fixed keys for every user-visible template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    SearchPlaceholder,
    SearchButton,
    Cloudy,
    Rainy,
    Snowy,
    Clear,
    Unknown,
    ErrorCityNotFound,
    UpcomingForecast,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::English => "en",
            Lang::Nepali => "ne",
        }
    }

    pub const fn all() -> &'static [Lang] {
        &[Lang::English, Lang::Nepali]
    }

    /// Resolve a message key to this locale's display string.
    ///
    /// Switching locale is a pure in-memory swap: the tables live in
    /// the binary, so no I/O happens per switch.
    pub fn text(&self, key: MessageKey) -> &'static str {
        match self {
            Lang::English => match key {
                MessageKey::AppTitle => "Weather App",
                MessageKey::SearchPlaceholder => "Enter city name",
                MessageKey::SearchButton => "Search",
                MessageKey::Cloudy => "cloudy",
                MessageKey::Rainy => "rainy",
                MessageKey::Snowy => "snowy",
                MessageKey::Clear => "clear",
                MessageKey::Unknown => "unknown",
                MessageKey::ErrorCityNotFound => "City not found",
                MessageKey::UpcomingForecast => "Upcoming 5-hour forecast:",
            },
            Lang::Nepali => match key {
                MessageKey::AppTitle => "मौसम एप",
                MessageKey::SearchPlaceholder => "शहरको नाम लेख्नुहोस्",
                MessageKey::SearchButton => "खोज्नुहोस्",
                MessageKey::Cloudy => "बादल",
                MessageKey::Rainy => "बर्सात",
                MessageKey::Snowy => "बर्फबारी",
                MessageKey::Clear => "स्पष्ट",
                MessageKey::Unknown => "अज्ञात",
                MessageKey::ErrorCityNotFound => "शहर फेला परेन",
                MessageKey::UpcomingForecast => "आगामी ५ घण्टाको मौसम:",
            },
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Lang {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "en" | "english" => Ok(Lang::English),
            "ne" | "np" | "nepali" => Ok(Lang::Nepali),
            _ => Err(anyhow::anyhow!(
                "Unknown language '{value}'. Supported languages: en, ne."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_as_str_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::try_from(lang.as_str()).expect("roundtrip should succeed");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn unknown_language_error() {
        let err = Lang::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }

    #[test]
    fn nepali_table_matches_the_shipped_strings() {
        let ne = Lang::Nepali;
        assert_eq!(ne.text(MessageKey::Cloudy), "बादल");
        assert_eq!(ne.text(MessageKey::Rainy), "बर्सात");
        assert_eq!(ne.text(MessageKey::Snowy), "बर्फबारी");
        assert_eq!(ne.text(MessageKey::Clear), "स्पष्ट");
        assert_eq!(ne.text(MessageKey::ErrorCityNotFound), "शहर फेला परेन");
    }

    #[test]
    fn every_key_has_text_in_both_locales() {
        let keys = [
            MessageKey::AppTitle,
            MessageKey::SearchPlaceholder,
            MessageKey::SearchButton,
            MessageKey::Cloudy,
            MessageKey::Rainy,
            MessageKey::Snowy,
            MessageKey::Clear,
            MessageKey::Unknown,
            MessageKey::ErrorCityNotFound,
            MessageKey::UpcomingForecast,
        ];

        for lang in Lang::all() {
            for key in keys {
                assert!(!lang.text(key).is_empty());
            }
        }
    }
}
