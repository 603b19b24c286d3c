mod cli;
mod commands;
mod observability;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, LexiconAction};
use commands::analyze::AnalyzeOptions;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            file,
            json,
            explain,
            summary,
        } => {
            commands::analyze::cmd_analyze(
                text.as_deref(),
                file.as_deref(),
                AnalyzeOptions {
                    json,
                    explain,
                    summary,
                },
            )?;
        }
        Commands::Batch { input, jsonl } => {
            commands::batch::cmd_batch(input.as_deref(), jsonl)?;
        }
        Commands::Classify { text, json } => {
            commands::classify::cmd_classify(text.as_deref(), json)?;
        }
        Commands::Lexicon { action } => match action {
            LexiconAction::Validate { json } => {
                if !commands::lexicon::cmd_validate(json)? {
                    std::process::exit(1);
                }
            }
            LexiconAction::List => commands::lexicon::cmd_list()?,
            LexiconAction::Show { sentiment, json } => {
                commands::lexicon::cmd_show(&sentiment, json)?
            }
            LexiconAction::Export { format } => commands::lexicon::cmd_export(format)?,
        },
    }

    Ok(())
}
