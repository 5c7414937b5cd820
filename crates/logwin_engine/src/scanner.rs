use logwin_domain::{Marker, Occurrence};
use memchr::memmem::Finder;

/// Literal, case-sensitive containment test built once per marker.
pub(crate) struct LineMatcher<'m> {
    finder: Finder<'m>,
}

impl<'m> LineMatcher<'m> {
    pub(crate) fn new(marker: &'m Marker) -> Self {
        Self { finder: Finder::new(marker.as_bytes()) }
    }

    pub(crate) fn is_match(&self, line: &str) -> bool {
        self.finder.find(line.as_bytes()).is_some()
    }
}

/// Collects every line containing `marker`, in ascending line order.
pub fn scan<S: AsRef<str>>(lines: &[S], marker: &Marker) -> Vec<Occurrence> {
    let matcher = LineMatcher::new(marker);
    lines
        .iter()
        .map(AsRef::as_ref)
        .enumerate()
        .filter(|(_, line)| matcher.is_match(line))
        .map(|(index, line)| Occurrence::new(index, line))
        .collect()
}
