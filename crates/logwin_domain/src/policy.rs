use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Decides which open begin an end closes when several are eligible.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum PairingPolicy {
    /// Oldest open window closes first
    #[default]
    Fifo,
    /// Most recently opened window closes first
    Lifo,
}

/// Which side of a line filter is thrown away.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FilterMode {
    /// Drop lines that contain the search text
    #[default]
    RemoveMatching,
    /// Drop lines that do not contain the search text
    RemoveNonMatching,
}

impl FilterMode {
    /// Returns true if a line with the given containment outcome survives.
    pub fn keeps(self, contains: bool) -> bool {
        match self {
            FilterMode::RemoveMatching => !contains,
            FilterMode::RemoveNonMatching => contains,
        }
    }

    /// Describes the removed lines in user-facing messages.
    pub fn removed_label(self) -> &'static str {
        match self {
            FilterMode::RemoveMatching => "matching",
            FilterMode::RemoveNonMatching => "non-matching",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_policy_parses_either_case() {
        assert_eq!(PairingPolicy::from_str("FIFO").unwrap(), PairingPolicy::Fifo);
        assert_eq!(PairingPolicy::from_str("lifo").unwrap(), PairingPolicy::Lifo);
    }

    #[test]
    fn test_policy_rejects_unknown_value() {
        let actual = PairingPolicy::from_str("RANDOM");
        assert!(actual.is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in PairingPolicy::iter() {
            let actual = PairingPolicy::from_str(&policy.to_string()).unwrap();
            assert_eq!(actual, policy);
        }
    }

    #[test]
    fn test_policy_serializes_uppercase() {
        let actual = serde_json::to_string(&PairingPolicy::Lifo).unwrap();
        let expected = "\"LIFO\"";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_filter_mode_names() {
        assert_eq!(FilterMode::RemoveMatching.to_string(), "remove-matching");
        assert_eq!(
            FilterMode::from_str("remove-non-matching").unwrap(),
            FilterMode::RemoveNonMatching
        );
    }

    #[test]
    fn test_filter_mode_keeps() {
        assert!(FilterMode::RemoveMatching.keeps(false));
        assert!(!FilterMode::RemoveMatching.keeps(true));
        assert!(FilterMode::RemoveNonMatching.keeps(true));
        assert!(!FilterMode::RemoveNonMatching.keeps(false));
    }
}
