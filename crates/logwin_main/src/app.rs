use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use logwin_config::{LogwinConfig, OutputFormat};
use logwin_domain::{Document, FilterResult, Marker, MarkerRole, SearchResult};
use logwin_engine::{filter_lines, search_windows};
use logwin_fs::LogFS;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::{ExtractArgs, FilterArgs, ResultView, SearchArgs, TopLevelCommand, UiError};

/// What a search produced for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutput {
    Result(SearchResult),
    /// Lines of a single pair, markers included
    Window(String),
}

/// What a filter produced for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutput {
    pub result: FilterResult,
    /// Set when the document was rewritten on disk instead of printed
    pub rewritten: bool,
    pub notice: String,
}

/// Runs CLI commands against the configured defaults.
pub struct App {
    config: LogwinConfig,
}

impl App {
    pub fn new(config: LogwinConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self, command: TopLevelCommand) -> Result<()> {
        match command {
            TopLevelCommand::Search(args) => {
                let format = args.format.unwrap_or(self.config.output.format);
                let color = self.config.output.color
                    && !args.no_color
                    && std::io::stdout().is_terminal();

                match self.search(&args).await? {
                    SearchOutput::Window(text) => println!("{text}"),
                    SearchOutput::Result(result) => match format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&result)?)
                        }
                        OutputFormat::Text => {
                            print!("{}", ResultView::new(&result).color(color))
                        }
                    },
                }
            }
            TopLevelCommand::Filter(args) => {
                let output = self.filter(&args).await?;
                if !output.rewritten {
                    print!("{}", output.result.to_text());
                }
                eprintln!("{}", output.notice.green());
            }
            TopLevelCommand::Extract(args) => println!("{}", self.extract(&args).await?),
        }
        Ok(())
    }

    pub async fn search(&self, args: &SearchArgs) -> Result<SearchOutput> {
        let (begin, end) = match (
            Marker::new(MarkerRole::Begin, args.begin.as_str()),
            Marker::new(MarkerRole::End, args.end.as_str()),
        ) {
            (Ok(begin), Ok(end)) => (begin, end),
            _ => return Err(UiError::MissingSearchCriteria.into()),
        };
        let policy = args.policy.unwrap_or(self.config.search.policy);

        let document = load_document(args.file.as_deref()).await?;
        let result = search_windows(document.lines(), &begin, &end, policy);
        info!(
            pairs = result.pairs.len(),
            unpaired_begins = result.unpaired_begins.len(),
            unpaired_ends = result.unpaired_ends.len(),
            %policy,
            "Search complete"
        );

        match args.extract {
            None => Ok(SearchOutput::Result(result)),
            Some(number) => {
                let pair = result.pair(number).ok_or(UiError::PairNotFound {
                    number,
                    total: result.pairs.len(),
                })?;
                info!(pair = number, lines = pair.line_count(), "Extracting pair window");
                Ok(SearchOutput::Window(document.window_text(pair)?))
            }
        }
    }

    pub async fn filter(&self, args: &FilterArgs) -> Result<FilterOutput> {
        let search = Marker::new(MarkerRole::Search, args.text.as_str())
            .map_err(|_| UiError::MissingFilterText)?;
        let mode = args.mode.unwrap_or(self.config.filter.mode);
        if args.in_place && args.file.is_none() {
            return Err(UiError::InPlaceWithoutFile.into());
        }

        let document = load_document(args.file.as_deref()).await?;
        let result = filter_lines(document.lines(), &search, mode);

        let rewritten = match &args.file {
            Some(path) if args.in_place => {
                LogFS::replace_document(path, &result.to_text()).await?;
                info!(path = %path.display(), removed = result.removed_count, "Rewrote document");
                true
            }
            _ => false,
        };

        let notice = result.notice(mode);
        Ok(FilterOutput { result, rewritten, notice })
    }

    pub async fn extract(&self, args: &ExtractArgs) -> Result<String> {
        let (content, window) = LogFS::read_window(&args.file, args.from, args.to).await?;
        info!(
            start = window.start_line,
            end = window.end_line,
            total = window.total_lines,
            partial = window.is_partial(),
            "Extracted window"
        );
        Ok(content)
    }
}

/// Takes a snapshot of the active document: the given file, or piped stdin.
async fn load_document(file: Option<&Path>) -> Result<Document> {
    if let Some(path) = file {
        return LogFS::read_document(path).await;
    }

    let mut stdin = tokio::io::stdin();
    if std::io::stdin().is_terminal() {
        return Err(UiError::NoActiveDocument.into());
    }
    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .await
        .context("Failed to read document from stdin")?;
    LogFS::parse_document(&bytes)
}
