use crate::locale::MessageKey;

/// Which pictogram a condition maps to. The front-end decides how an
/// icon kind is actually drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Sun,
    CloudRain,
    Cloud,
    Snowflake,
    /// Fallback for condition strings outside the fixed vocabulary.
    Unknown,
}

/// Classifier output: an icon kind plus a locale key for the label.
///
/// The label is a key rather than a string so the same classification
/// renders correctly under any active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionEntry {
    pub icon: IconKind,
    pub label: MessageKey,
}

const CLOUDY: ConditionEntry = ConditionEntry { icon: IconKind::Cloud, label: MessageKey::Cloudy };
const RAINY: ConditionEntry =
    ConditionEntry { icon: IconKind::CloudRain, label: MessageKey::Rainy };
const SNOWY: ConditionEntry =
    ConditionEntry { icon: IconKind::Snowflake, label: MessageKey::Snowy };
const CLEAR: ConditionEntry = ConditionEntry { icon: IconKind::Sun, label: MessageKey::Clear };
const UNKNOWN: ConditionEntry =
    ConditionEntry { icon: IconKind::Unknown, label: MessageKey::Unknown };

/// Map a provider condition string to its icon/label entry.
///
/// Exact-string lookup over the fixed OpenWeather vocabulary; anything
/// else gets the explicit fallback entry instead of a missing-key
/// fault.
pub fn classify(condition: &str) -> ConditionEntry {
    match condition {
        "few clouds" | "scattered clouds" | "broken clouds" | "overcast clouds" => CLOUDY,
        "light rain" | "moderate rain" | "heavy intensity rain" => RAINY,
        "light snow" | "moderate snow" | "heavy snow" => SNOWY,
        "clear sky" => CLEAR,
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_conditions_map_to_cloud_icon() {
        for s in ["few clouds", "scattered clouds", "broken clouds", "overcast clouds"] {
            let entry = classify(s);
            assert_eq!(entry.icon, IconKind::Cloud, "{s}");
            assert_eq!(entry.label, MessageKey::Cloudy, "{s}");
        }
    }

    #[test]
    fn rain_conditions_map_to_cloud_rain_icon() {
        for s in ["light rain", "moderate rain", "heavy intensity rain"] {
            let entry = classify(s);
            assert_eq!(entry.icon, IconKind::CloudRain, "{s}");
            assert_eq!(entry.label, MessageKey::Rainy, "{s}");
        }
    }

    #[test]
    fn snow_conditions_map_to_snowflake_icon() {
        for s in ["light snow", "moderate snow", "heavy snow"] {
            let entry = classify(s);
            assert_eq!(entry.icon, IconKind::Snowflake, "{s}");
            assert_eq!(entry.label, MessageKey::Snowy, "{s}");
        }
    }

    #[test]
    fn clear_sky_maps_to_sun_icon() {
        let entry = classify("clear sky");
        assert_eq!(entry.icon, IconKind::Sun);
        assert_eq!(entry.label, MessageKey::Clear);
    }

    #[test]
    fn unrecognized_conditions_get_the_fallback_entry() {
        for s in ["thunderstorm", "mist", "Clear Sky", ""] {
            let entry = classify(s);
            assert_eq!(entry.icon, IconKind::Unknown, "{s:?}");
            assert_eq!(entry.label, MessageKey::Unknown, "{s:?}");
        }
    }
}
