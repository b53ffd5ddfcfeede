use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version = CliArgs::unstable_version(), about, long_about = None)]
#[command(next_line_help = true)]
/// Pick a value from a list of candidates with substring autocomplete
pub struct CliArgs {
    /// Candidates to offer, in order.
    candidates: Vec<String>,
    /// Read additional candidates from a file, one per line.
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Use this config file instead of searching for one.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of dropdown rows before the list is truncated.
    #[arg(long)]
    max_items: Option<usize>,
    /// Show the selection as an inline completion instead of a dropdown.
    #[arg(long)]
    no_dropdown: bool,
    /// Do not offer suggestions at all.
    #[arg(long)]
    no_suggestions: bool,
    /// Text shown while the input is empty.
    #[arg(long)]
    placeholder: Option<String>,
    /// Prompt printed before the input.
    #[arg(long)]
    prompt: Option<String>,
    /// Maximum number of characters accepted, 0 for no limit.
    #[arg(long)]
    char_limit: Option<usize>,
    /// Width the placeholder is truncated to, 0 for no limit.
    #[arg(long)]
    width: Option<usize>,
    /// Print the matches for this query instead of starting the picker.
    #[arg(long, short)]
    query: Option<String>,
    /// Never start the interactive picker.
    #[arg(long)]
    non_interactive: bool,
    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    format: OutputFormat,
}

impl CliArgs {
    /// Surface current version together with the current git revision and date, if available
    fn unstable_version() -> &'static str {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        let date = option_env!("GIT_DATE").unwrap_or("no_date");
        let rev = option_env!("GIT_REV").unwrap_or("no_rev");
        // This is a memory leak, only use sparingly.
        Box::leak(format!("{VERSION} - {date} - {rev}").into_boxed_str())
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    pub fn no_dropdown(&self) -> bool {
        self.no_dropdown
    }

    pub fn no_suggestions(&self) -> bool {
        self.no_suggestions
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn non_interactive(&self) -> bool {
        self.non_interactive
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "autocomplete-input",
            "--max-items",
            "3",
            "--no-dropdown",
            "--format",
            "json",
            "Apple",
            "Banana",
        ])
        .unwrap();
        assert_eq!(args.candidates(), ["Apple", "Banana"]);
        assert_eq!(args.max_items(), Some(3));
        assert!(args.no_dropdown());
        assert!(!args.no_suggestions());
        assert_eq!(args.format(), OutputFormat::Json);
        assert_eq!(args.query(), None);
    }
}
