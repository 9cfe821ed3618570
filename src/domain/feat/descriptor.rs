//! Feat descriptor and target-duration parsing.
//!
//! A feat's target duration is not a separate field on the wire: it is
//! encoded in the display name ("1 MIN PUSH-UPS", "3 MIN BURPEES").

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::FeatId;

/// Minutes used when a feat name carries no usable number.
pub const DEFAULT_DURATION_MINUTES: u32 = 5;

/// A monthly exercise challenge as described by the feats service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feat {
    /// Opaque feat identity.
    pub id: FeatId,

    /// Display name; the target duration is parsed from it.
    pub name: String,

    /// Movement label shown during the test (e.g. "Push-ups").
    pub movement: String,

    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Feat {
    pub fn new(id: FeatId, name: impl Into<String>, movement: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            movement: movement.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Target duration in minutes: the first integer token of the name.
    ///
    /// Falls back to [`DEFAULT_DURATION_MINUTES`] when the name has no digits
    /// or the token does not fit in a `u32`.
    pub fn duration_minutes(&self) -> u32 {
        first_integer_token(&self.name)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    /// Target duration of a test run for this feat.
    pub fn test_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_minutes()) * 60)
    }

    /// Short label such as `"1 min"`, taken from the first `<n> MIN` in the
    /// name, or `"5 min"` when none is present.
    pub fn duration_text(&self) -> String {
        let upper = self.name.to_uppercase();
        match find_minutes_label(&upper) {
            Some(label) => label
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase(),
            None => format!("{} min", DEFAULT_DURATION_MINUTES),
        }
    }
}

fn first_integer_token(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Finds the first `<digits><whitespace*>MIN` slice of an upper-cased name.
fn find_minutes_label(upper: &str) -> Option<&str> {
    let mut offset = 0;
    while let Some(relative) = upper[offset..].find(|c: char| c.is_ascii_digit()) {
        let start = offset + relative;
        let after_digits = upper[start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(upper.len(), |i| start + i);
        let after_space = upper[after_digits..]
            .find(|c: char| !c.is_whitespace())
            .map_or(upper.len(), |i| after_digits + i);

        if upper[after_space..].starts_with("MIN") {
            return Some(&upper[start..after_space + 3]);
        }
        offset = after_digits;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feat(name: &str) -> Feat {
        Feat::new(FeatId::new("test-feat").unwrap(), name, "Test Movement")
    }

    #[test]
    fn one_minute_pushups_is_sixty_seconds() {
        assert_eq!(feat("1 MIN PUSH-UPS").test_duration(), Duration::from_secs(60));
    }

    #[test]
    fn three_minute_burpees_is_one_eighty_seconds() {
        assert_eq!(feat("3 MIN BURPEES").test_duration(), Duration::from_secs(180));
    }

    #[test]
    fn name_without_digits_defaults_to_five_minutes() {
        let f = feat("PLANK HOLD");
        assert_eq!(f.duration_minutes(), 5);
        assert_eq!(f.test_duration(), Duration::from_secs(300));
    }

    #[test]
    fn first_integer_token_wins() {
        assert_eq!(feat("2 MIN 50 SQUATS").duration_minutes(), 2);
        assert_eq!(feat("MAX PUSHUPS IN 10").duration_minutes(), 10);
    }

    #[test]
    fn overflowing_token_falls_back_to_default() {
        assert_eq!(feat("99999999999 MIN").duration_minutes(), 5);
    }

    #[test]
    fn duration_text_extracts_minutes_label() {
        assert_eq!(feat("1 MIN PUSH-UPS").duration_text(), "1 min");
        assert_eq!(feat("3   min burpees").duration_text(), "3 min");
        assert_eq!(feat("2MIN SITUPS").duration_text(), "2min");
    }

    #[test]
    fn duration_text_skips_numbers_not_followed_by_min() {
        assert_eq!(feat("100 REPS IN 4 MIN").duration_text(), "4 min");
    }

    #[test]
    fn duration_text_defaults_to_five_minutes() {
        assert_eq!(feat("PLANK HOLD").duration_text(), "5 min");
        assert_eq!(feat("50 SQUATS").duration_text(), "5 min");
    }

    #[test]
    fn feat_deserializes_without_description() {
        let json = r#"{"id":"feat_1","name":"1 MIN PUSH-UPS","movement":"Push-ups"}"#;
        let f: Feat = serde_json::from_str(json).unwrap();
        assert_eq!(f.id.as_str(), "feat_1");
        assert!(f.description.is_none());
    }
}
