use crate::autocomplete::Autocomplete;
use crate::cli::CliArgs;
use crate::config::{Config, ConfigError};
use crate::error::AutocompleteError;
use crate::tui::{self, App};
use crate::tui::components::input::InputState;

use super::candidates;
use super::output::{self, MatchReport, Selection};

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Autocomplete(#[from] AutocompleteError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("No candidates given: pass them as arguments, with --file, or in the config")]
    NoCandidates,
}

/// Fold command line overrides into the loaded configuration.
pub fn apply_overrides(mut config: Config, args: &CliArgs) -> Config {
    if let Some(max_items) = args.max_items() {
        config.suggestions.max_items = max_items;
    }
    if args.no_dropdown() {
        config.suggestions.dropdown = false;
    }
    if args.no_suggestions() {
        config.suggestions.show = false;
    }
    if let Some(placeholder) = args.placeholder() {
        config.input.placeholder = placeholder.to_string();
    }
    if let Some(prompt) = args.prompt() {
        config.input.prompt = prompt.to_string();
    }
    if let Some(char_limit) = args.char_limit() {
        config.input.char_limit = char_limit;
    }
    if let Some(width) = args.width() {
        config.input.width = width;
    }
    config
}

/// Main entry point for the application.
///
/// Loads configuration and candidates, then either prints the matches for
/// `--query` or runs the interactive picker.
pub fn run(args: CliArgs) -> Result<()> {
    let config = Config::load_from(args.config().map(|p| p.as_path()))?;
    let config = apply_overrides(config, &args);
    let items = candidates::collect(&args, &config)?;
    if items.is_empty() {
        return Err(HandlerError::NoCandidates);
    }

    let interactive = tui::is_interactive(args.non_interactive());
    if !interactive || args.query().is_some() {
        let query = args.query().unwrap_or_default();
        println!("{}", query_matches(&config, items, query, &args)?);
        return Ok(());
    }

    let state = InputState::from_config(&config, items)?;
    let app = App::new("Pick", config.input.prompt.clone(), state);
    if let Some(value) = tui::run(app)? {
        let selection = Selection { value: &value };
        println!("{}", output::format_selection(&selection, args.format()));
    }
    Ok(())
}

/// Format the match set for `query` without starting the picker.
pub fn query_matches(
    config: &Config,
    items: Vec<String>,
    query: &str,
    args: &CliArgs,
) -> Result<String> {
    let mut completion = Autocomplete::new(Vec::new());
    completion.configure(items, config.suggestions.max_items)?;
    if config.suggestions.show {
        completion.set_query(query);
    }
    let report = MatchReport {
        query,
        matches: completion.matches(),
    };
    Ok(output::format_matches(&report, args.format()))
}
