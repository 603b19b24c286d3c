use clap::{Parser, Subcommand, ValueEnum};

/// sentilex - lexicon-based sentiment scoring for professional text
#[derive(Parser, Debug)]
#[command(name = "sentilex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one text and print the ranked sentiments
    Analyze {
        /// Text to analyze. Use "-" (or omit) to read from stdin
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<String>,

        /// Print results as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Print the full scoring trace as JSON (context, rules, matches)
        #[arg(long, default_value = "false")]
        explain: bool,

        /// Include the polarity / pleasure-arousal-dominance summary
        #[arg(long, default_value = "false")]
        summary: bool,
    },

    /// Analyze one text per input line in parallel; writes JSONL in input order
    Batch {
        /// Input file (default: stdin)
        #[arg(long, value_name = "PATH")]
        input: Option<String>,

        /// Input lines are JSON objects: {"id": ..., "text": "..."}
        #[arg(long, default_value = "false")]
        jsonl: bool,
    },

    /// Print the inferred communication context and per-context scores
    Classify {
        /// Text to classify. Use "-" (or omit) to read from stdin
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Print as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Inspect the built-in lexicon
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum LexiconAction {
    /// Check the lexicon for authoring defects (exit code 1 on issues)
    Validate {
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List categories with term counts
    List,

    /// Show one category's terms, exemplars and antonyms
    Show {
        /// Sentiment id, e.g. "urgency"
        #[arg(value_name = "SENTIMENT")]
        sentiment: String,

        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Dump the whole lexicon
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lexicon_export_format() {
        let cli = Cli::parse_from(["sentilex", "lexicon", "export", "--format", "yaml"]);
        match cli.command {
            Commands::Lexicon {
                action: LexiconAction::Export { format },
            } => assert_eq!(format, ExportFormat::Yaml),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn analyze_file_conflicts_with_text() {
        let parsed = Cli::try_parse_from(["sentilex", "analyze", "hi", "--file", "x.txt"]);
        assert!(parsed.is_err());
    }
}
