use std::fmt;

use colored::Colorize;
use logwin_domain::{Occurrence, SearchResult};

/// Renders a search result the way the results panel lists it: numbered
/// pairs first, then unpaired begins and unpaired ends.
pub struct ResultView<'a> {
    result: &'a SearchResult,
    color: bool,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self { result, color: false }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        items: &[Occurrence],
        width: usize,
        separate: bool,
    ) -> fmt::Result {
        if items.is_empty() {
            return Ok(());
        }
        if separate {
            writeln!(f)?;
        }
        writeln!(f, "{}", self.paint(title, |s| s.red().bold().to_string()))?;
        for item in items {
            self.write_line(f, item, width)?;
        }
        Ok(())
    }

    fn write_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        occurrence: &Occurrence,
        width: usize,
    ) -> fmt::Result {
        let label = format!("Line {:>width$}", occurrence.display_line());
        writeln!(
            f,
            "  {}  {}",
            self.paint(&label, |s| s.dimmed().to_string()),
            occurrence.text
        )
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.color { style(text) } else { text.to_string() }
    }

    /// Width of the largest displayed line number, for alignment.
    fn line_number_width(&self) -> usize {
        let result = self.result;
        result
            .pairs
            .iter()
            .flat_map(|pair| [&pair.begin, &pair.end])
            .chain(&result.unpaired_begins)
            .chain(&result.unpaired_ends)
            .map(|occurrence| occurrence.display_line().to_string().len())
            .max()
            .unwrap_or(1)
    }
}

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        if result.is_empty() {
            return writeln!(f, "No results found");
        }

        let width = self.line_number_width();
        for (index, pair) in result.pairs.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let header = format!("Pair {}", index + 1);
            writeln!(f, "{}", self.paint(&header, |s| s.cyan().bold().to_string()))?;
            self.write_line(f, &pair.begin, width)?;
            self.write_line(f, &pair.end, width)?;
        }

        let mut separate = !result.pairs.is_empty();
        self.write_section(f, "Unpaired Begin Markers", &result.unpaired_begins, width, separate)?;
        separate |= !result.unpaired_begins.is_empty();
        self.write_section(f, "Unpaired End Markers", &result.unpaired_ends, width, separate)
    }
}
