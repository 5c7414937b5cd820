use logwin_domain::{Marker, PairingPolicy, SearchResult};
use tracing::debug;

use crate::{assemble, match_pairs, scan};

/// Finds begin/end windows in a document snapshot.
///
/// Both markers are scanned independently, so one line may be a begin and an
/// end at the same time. Identical inputs always give an identical result.
pub fn search_windows<S: AsRef<str>>(
    lines: &[S],
    begin: &Marker,
    end: &Marker,
    policy: PairingPolicy,
) -> SearchResult {
    let begins = scan(lines, begin);
    let ends = scan(lines, end);
    let matching = match_pairs(&begins, &ends, policy);

    debug!(
        lines = lines.len(),
        begins = begins.len(),
        ends = ends.len(),
        pairs = matching.claims.len(),
        %policy,
        "Matched windows"
    );

    assemble(&begins, &ends, &matching)
}

#[cfg(test)]
mod tests {
    use logwin_domain::{Document, MarkerRole, Occurrence, Pair};
    use logwin_test_kit::fixture;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn markers(begin: &str, end: &str) -> (Marker, Marker) {
        (
            Marker::new(MarkerRole::Begin, begin).unwrap(),
            Marker::new(MarkerRole::End, end).unwrap(),
        )
    }

    fn pair(begin: (usize, &str), end: (usize, &str)) -> Pair {
        Pair::new(Occurrence::new(begin.0, begin.1), Occurrence::new(end.0, end.1))
    }

    async fn transactions() -> Document {
        Document::from_text(&fixture!("src/fixtures/transactions.log").await)
    }

    #[tokio::test]
    async fn test_fifo_on_transaction_log() {
        let fixture = transactions().await;
        let (begin, end) = markers("BEGIN", "END");

        let actual = search_windows(fixture.lines(), &begin, &end, PairingPolicy::Fifo);

        let expected = SearchResult {
            pairs: vec![
                pair(
                    (2, "2025-03-02 09:00:02 INFO  BEGIN tx 1"),
                    (6, "2025-03-02 09:00:06 INFO  END tx 2"),
                ),
                pair(
                    (4, "2025-03-02 09:00:04 INFO  BEGIN tx 2"),
                    (8, "2025-03-02 09:00:08 INFO  END tx 1"),
                ),
            ],
            unpaired_begins: vec![Occurrence::new(9, "2025-03-02 09:00:09 INFO  BEGIN tx 3")],
            unpaired_ends: vec![Occurrence::new(1, "2025-03-02 09:00:01 INFO  END tx 0 (stale)")],
        };
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_lifo_on_transaction_log() {
        let fixture = transactions().await;
        let (begin, end) = markers("BEGIN", "END");

        let actual = search_windows(fixture.lines(), &begin, &end, PairingPolicy::Lifo);

        let expected = SearchResult {
            pairs: vec![
                pair(
                    (2, "2025-03-02 09:00:02 INFO  BEGIN tx 1"),
                    (8, "2025-03-02 09:00:08 INFO  END tx 1"),
                ),
                pair(
                    (4, "2025-03-02 09:00:04 INFO  BEGIN tx 2"),
                    (6, "2025-03-02 09:00:06 INFO  END tx 2"),
                ),
            ],
            unpaired_begins: vec![Occurrence::new(9, "2025-03-02 09:00:09 INFO  BEGIN tx 3")],
            unpaired_ends: vec![Occurrence::new(1, "2025-03-02 09:00:01 INFO  END tx 0 (stale)")],
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_fifo_pairs_earliest_begin() {
        let fixture = ["", "B", "", "B", "", "B", "", "E"];
        let (begin, end) = markers("B", "E");

        let actual = search_windows(&fixture, &begin, &end, PairingPolicy::Fifo);

        assert_eq!(actual.pairs, vec![pair((1, "B"), (7, "E"))]);
        assert_eq!(
            actual.unpaired_begins,
            vec![Occurrence::new(3, "B"), Occurrence::new(5, "B")]
        );
        assert!(actual.unpaired_ends.is_empty());
    }

    #[test]
    fn test_lifo_pairs_latest_begin() {
        let fixture = ["", "B", "", "B", "", "B", "", "E"];
        let (begin, end) = markers("B", "E");

        let actual = search_windows(&fixture, &begin, &end, PairingPolicy::Lifo);

        assert_eq!(actual.pairs, vec![pair((5, "B"), (7, "E"))]);
        assert_eq!(
            actual.unpaired_begins,
            vec![Occurrence::new(1, "B"), Occurrence::new(3, "B")]
        );
    }

    #[test]
    fn test_end_on_first_line_never_pairs() {
        let fixture = ["E", "B", "E"];
        let (begin, end) = markers("B", "E");

        for policy in [PairingPolicy::Fifo, PairingPolicy::Lifo] {
            let actual = search_windows(&fixture, &begin, &end, policy);
            assert_eq!(actual.unpaired_ends, vec![Occurrence::new(0, "E")]);
            assert_eq!(actual.pairs, vec![pair((1, "B"), (2, "E"))]);
        }
    }

    #[test]
    fn test_same_marker_for_begin_and_end() {
        // Every line is both a begin and an end; each end closes the line
        // before it.
        let fixture = ["--", "--", "--"];
        let (begin, end) = markers("--", "--");

        let actual = search_windows(&fixture, &begin, &end, PairingPolicy::Fifo);

        assert_eq!(
            actual.pairs,
            vec![pair((0, "--"), (1, "--")), pair((1, "--"), (2, "--"))]
        );
        assert_eq!(actual.unpaired_begins, vec![Occurrence::new(2, "--")]);
        assert_eq!(actual.unpaired_ends, vec![Occurrence::new(0, "--")]);
    }

    #[test]
    fn test_no_markers_found() {
        let fixture = ["nothing", "here"];
        let (begin, end) = markers("B", "E");

        let actual = search_windows(&fixture, &begin, &end, PairingPolicy::Lifo);

        assert!(actual.is_empty());
    }

    /// Quadratic rescan per end, kept as the behavioural reference for the
    /// queue/stack matcher.
    fn reference(lines: &[&str], begin: &str, end: &str, policy: PairingPolicy) -> SearchResult {
        let begins: Vec<Occurrence> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(begin))
            .map(|(i, line)| Occurrence::new(i, *line))
            .collect();
        let ends: Vec<Occurrence> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(end))
            .map(|(i, line)| Occurrence::new(i, *line))
            .collect();

        let mut used_begins = vec![false; begins.len()];
        let mut used_ends = vec![false; ends.len()];
        let mut pairs = Vec::new();
        for (e, end) in ends.iter().enumerate() {
            let order: Vec<usize> = match policy {
                PairingPolicy::Fifo => (0..begins.len()).collect(),
                PairingPolicy::Lifo => (0..begins.len()).rev().collect(),
            };
            for b in order {
                if !used_begins[b] && begins[b].line < end.line {
                    pairs.push(Pair::new(begins[b].clone(), end.clone()));
                    used_begins[b] = true;
                    used_ends[e] = true;
                    break;
                }
            }
        }
        pairs.sort_by_key(|pair| pair.begin.line);

        SearchResult {
            pairs,
            unpaired_begins: begins
                .iter()
                .zip(&used_begins)
                .filter(|(_, used)| !**used)
                .map(|(o, _)| o.clone())
                .collect(),
            unpaired_ends: ends
                .iter()
                .zip(&used_ends)
                .filter(|(_, used)| !**used)
                .map(|(o, _)| o.clone())
                .collect(),
        }
    }

    fn policy() -> impl Strategy<Value = PairingPolicy> {
        prop_oneof![Just(PairingPolicy::Fifo), Just(PairingPolicy::Lifo)]
    }

    fn document() -> impl Strategy<Value = Vec<&'static str>> {
        prop::collection::vec(
            prop::sample::select(vec!["B", "E", "B E", "x", ""]),
            0..48,
        )
    }

    proptest! {
        #[test]
        fn test_matches_reference(lines in document(), policy in policy()) {
            let (begin, end) = markers("B", "E");

            let actual = search_windows(&lines, &begin, &end, policy);
            let expected = reference(&lines, "B", "E", policy);

            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn test_every_occurrence_accounted_once(lines in document(), policy in policy()) {
            let (begin, end) = markers("B", "E");
            let begin_total = lines.iter().filter(|line| line.contains('B')).count();
            let end_total = lines.iter().filter(|line| line.contains('E')).count();

            let actual = search_windows(&lines, &begin, &end, policy);

            prop_assert_eq!(actual.pairs.len() + actual.unpaired_begins.len(), begin_total);
            prop_assert_eq!(actual.pairs.len() + actual.unpaired_ends.len(), end_total);

            let mut begin_lines: Vec<usize> = actual.pairs.iter().map(|p| p.begin.line).collect();
            let mut end_lines: Vec<usize> = actual.pairs.iter().map(|p| p.end.line).collect();
            begin_lines.dedup();
            end_lines.sort_unstable();
            end_lines.dedup();
            prop_assert_eq!(begin_lines.len(), actual.pairs.len());
            prop_assert_eq!(end_lines.len(), actual.pairs.len());
        }

        #[test]
        fn test_pairs_are_ordered_and_forward(lines in document(), policy in policy()) {
            let (begin, end) = markers("B", "E");

            let actual = search_windows(&lines, &begin, &end, policy);

            prop_assert!(actual.pairs.iter().all(|p| p.begin.line < p.end.line));
            prop_assert!(actual.pairs.windows(2).all(|w| w[0].begin.line < w[1].begin.line));
        }

        #[test]
        fn test_search_is_deterministic(lines in document(), policy in policy()) {
            let (begin, end) = markers("B", "E");

            let first = search_windows(&lines, &begin, &end, policy);
            let second = search_windows(&lines, &begin, &end, policy);

            prop_assert_eq!(first, second);
        }
    }
}
