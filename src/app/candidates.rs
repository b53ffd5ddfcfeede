//! Where the candidate list comes from.

use std::path::Path;

use crate::cli::CliArgs;
use crate::config::Config;

/// Parse newline separated candidates, skipping blank lines.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_file(path: &Path) -> std::io::Result<Vec<String>> {
    Ok(parse_lines(&std::fs::read_to_string(path)?))
}

/// Positional candidates first, then the file. Config candidates are only
/// used when neither is given.
pub fn collect(args: &CliArgs, config: &Config) -> std::io::Result<Vec<String>> {
    let mut items = args.candidates().to_vec();
    if let Some(path) = args.file() {
        items.extend(read_file(path)?);
    }
    if items.is_empty() {
        items = config.suggestions.candidates.clone();
    }
    tracing::debug!("Collected {} candidates", items.len());
    Ok(items)
}
