//! Printing results in the requested format.

use serde::Serialize;

use crate::cli::OutputFormat;

/// Matches for a query, printed in non-interactive mode
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    pub query: &'a str,
    pub matches: &'a [String],
}

/// The value submitted in the picker
#[derive(Debug, Serialize)]
pub struct Selection<'a> {
    pub value: &'a str,
}

pub fn format_matches(report: &MatchReport<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => report.matches.join("\n"),
        OutputFormat::Json => to_json(report),
    }
}

pub fn format_selection(selection: &Selection<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => selection.value.to_string(),
        OutputFormat::Json => to_json(selection),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Only strings and slices of strings are serialized here.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_plain() {
        let matches = vec!["Apple".to_string(), "Apricot".to_string()];
        let report = MatchReport {
            query: "ap",
            matches: &matches,
        };
        assert_eq!(format_matches(&report, OutputFormat::Plain), "Apple\nApricot");
    }

    #[test]
    fn test_matches_json() {
        let matches = vec!["Apple".to_string()];
        let report = MatchReport {
            query: "ap",
            matches: &matches,
        };
        insta::assert_snapshot!(format_matches(&report, OutputFormat::Json), @r#"
        {
          "query": "ap",
          "matches": [
            "Apple"
          ]
        }
        "#);
    }

    #[test]
    fn test_selection_json() {
        let selection = Selection { value: "Kiwi" };
        assert_eq!(
            format_selection(&selection, OutputFormat::Json),
            "{\n  \"value\": \"Kiwi\"\n}"
        );
        assert_eq!(format_selection(&selection, OutputFormat::Plain), "Kiwi");
    }
}
