//! Reference CLI for browsing the embedded idiom cheat-sheet.
//!
//! Implements the `cpkit ref` command family:
//! - `ref list` shows every topic and its title
//! - `ref show <topic>[#section]` prints a document or one section
//! - `ref search <regex>` greps all documents
//! - `ref dump` prints everything, delimited per topic

use crate::core::output::compact_line;
use crate::core::{assets, error, reference};
use clap::Subcommand;
use colored::Colorize;

const SEARCH_PREVIEW_CHARS: usize = 100;

#[derive(clap::Args, Debug)]
pub struct RefCli {
    #[clap(subcommand)]
    pub command: RefCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum RefCommand {
    /// List all embedded reference topics.
    List {
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Display a topic, or one section of it with `topic#section`.
    Show {
        #[clap(value_parser)]
        reference: String,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Search every topic with a case-insensitive regular expression.
    Search {
        pattern: String,
    },
    /// Print every topic in reading order.
    Dump,
}

pub fn run_ref_cli(cli: RefCli) -> Result<(), error::CpkitError> {
    match cli.command {
        RefCommand::List { format } => {
            let topics = assets::list_docs();
            match format {
                OutputFormat::Json => {
                    let items: Vec<_> = topics
                        .iter()
                        .map(|t| {
                            serde_json::json!({
                                "topic": t,
                                "title": assets::doc_title(t),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&items)?);
                }
                OutputFormat::Text => {
                    println!("Embedded reference topics:");
                    for t in topics {
                        let title = assets::doc_title(t).unwrap_or_default();
                        println!("- {:<12} {}", t, title);
                    }
                }
            }
            Ok(())
        }
        RefCommand::Show { reference, format } => {
            let (topic, anchor) = reference::split_ref(&reference);
            let fragment = reference::get_fragment(topic, anchor)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fragment)?),
                OutputFormat::Text => println!("{}", fragment.content),
            }
            Ok(())
        }
        RefCommand::Search { pattern } => {
            let hits = reference::search(&pattern)?;
            if hits.is_empty() {
                println!("No matches for /{}/", pattern);
                return Ok(());
            }
            for hit in &hits {
                println!(
                    "{}:{}: {}",
                    hit.topic.bright_cyan(),
                    hit.line,
                    compact_line(&hit.text, SEARCH_PREVIEW_CHARS)
                );
            }
            println!("{} match(es)", hits.len());
            Ok(())
        }
        RefCommand::Dump => {
            for topic in assets::list_docs() {
                if let Some(content) = assets::get_doc(topic) {
                    println!("--- BEGIN {} ---", topic);
                    println!("{}", content);
                    println!("--- END {} ---", topic);
                }
            }
            Ok(())
        }
    }
}
