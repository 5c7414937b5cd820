use serde::{Deserialize, Serialize};

use crate::{FilterMode, Occurrence, Pair};

/// Outcome of one window search over a document snapshot.
///
/// `pairs` is ordered by ascending begin line. Both unpaired lists keep the
/// order in which their occurrences were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub pairs: Vec<Pair>,
    pub unpaired_begins: Vec<Occurrence>,
    pub unpaired_ends: Vec<Occurrence>,
}

impl SearchResult {
    /// True when no marker was found at all.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.unpaired_begins.is_empty() && self.unpaired_ends.is_empty()
    }

    /// Looks up a pair by its 1-based position, as numbered in rendered output.
    pub fn pair(&self, number: usize) -> Option<&Pair> {
        number.checked_sub(1).and_then(|index| self.pairs.get(index))
    }
}

/// Outcome of filtering a document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    /// Surviving lines in their original order and exact text
    pub kept_lines: Vec<String>,
    pub removed_count: usize,
}

impl FilterResult {
    /// Content that replaces the whole document.
    pub fn to_text(&self) -> String {
        self.kept_lines.join("\n")
    }

    /// User-facing notice, e.g. `Removed 2 matching lines`.
    pub fn notice(&self, mode: FilterMode) -> String {
        let plural = if self.removed_count == 1 { "" } else { "s" };
        format!(
            "Removed {} {} line{plural}",
            self.removed_count,
            mode.removed_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_search_result_serializes_camel_case() {
        let fixture = SearchResult {
            pairs: vec![Pair::new(Occurrence::new(0, "BEGIN"), Occurrence::new(2, "END"))],
            unpaired_begins: vec![Occurrence::new(3, "BEGIN again")],
            unpaired_ends: vec![],
        };

        let actual = serde_json::to_value(&fixture).unwrap();
        let expected = json!({
            "pairs": [{
                "begin": {"line": 0, "text": "BEGIN"},
                "end": {"line": 2, "text": "END"}
            }],
            "unpairedBegins": [{"line": 3, "text": "BEGIN again"}],
            "unpairedEnds": []
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_pair_lookup_is_one_based() {
        let fixture = SearchResult {
            pairs: vec![Pair::new(Occurrence::new(1, "a"), Occurrence::new(4, "b"))],
            ..Default::default()
        };

        assert_eq!(fixture.pair(0), None);
        assert_eq!(fixture.pair(1).map(|pair| pair.begin.line), Some(1));
        assert_eq!(fixture.pair(2), None);
    }

    #[test]
    fn test_empty_search_result() {
        assert!(SearchResult::default().is_empty());
    }

    #[test]
    fn test_notice_plural() {
        let fixture = FilterResult { kept_lines: vec!["b".into()], removed_count: 2 };
        let actual = fixture.notice(FilterMode::RemoveMatching);
        let expected = "Removed 2 matching lines";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_notice_singular() {
        let fixture = FilterResult { kept_lines: vec![], removed_count: 1 };
        let actual = fixture.notice(FilterMode::RemoveNonMatching);
        let expected = "Removed 1 non-matching line";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_to_text_joins_with_newline() {
        let fixture = FilterResult {
            kept_lines: vec!["a".into(), "".into(), "c\r".into()],
            removed_count: 0,
        };
        assert_eq!(fixture.to_text(), "a\n\nc\r");
    }
}
