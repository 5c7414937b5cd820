use logwin_domain::{FilterMode, FilterResult, Marker};
use tracing::debug;

use crate::scanner::LineMatcher;

/// Keeps or drops each line by whether it contains `search`.
///
/// One pass; kept lines retain their order and exact text. The caller is
/// expected to apply the result as a single whole-document replacement.
pub fn filter_lines<S: AsRef<str>>(lines: &[S], search: &Marker, mode: FilterMode) -> FilterResult {
    let matcher = LineMatcher::new(search);
    let kept_lines: Vec<String> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| mode.keeps(matcher.is_match(line)))
        .map(str::to_owned)
        .collect();
    let removed_count = lines.len() - kept_lines.len();

    debug!(
        total = lines.len(),
        kept = kept_lines.len(),
        removed = removed_count,
        %mode,
        "Filtered lines"
    );

    FilterResult { kept_lines, removed_count }
}
