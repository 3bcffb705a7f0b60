//! Canvas catalog CLI.
//!
//! Browse the Code Canvas challenges and print their target patterns.

use std::io::{self, Write};

use anyhow::Result;
use canvas_pattern::catalog::{self, Challenge};
use canvas_pattern::{match_percentage, patterns_match, Difficulty};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "canvas")]
#[command(about = "Code Canvas challenge catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List challenges
    List {
        /// Only show one difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a challenge's target pattern
    Show {
        /// Challenge id
        id: u32,
    },

    /// Score one challenge's target against another's
    Compare {
        /// Challenge whose target is treated as the drawing
        id: u32,

        /// Challenge whose target is scored against
        target: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct CompareReport {
    id: u32,
    target: u32,
    matches: bool,
    percentage: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    canvas_programs::init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { difficulty, json } => {
            let selected: Vec<&Challenge> = match difficulty {
                Some(d) => catalog::challenges_by_difficulty(d).collect(),
                None => catalog::challenges().iter().collect(),
            };
            info!(count = selected.len(), "listing challenges");

            if json {
                serde_json::to_writer_pretty(&mut out, &selected)?;
                writeln!(out)?;
            } else {
                for c in selected {
                    writeln!(
                        out,
                        "{:>2}  {:<16}  {:<6}  {} pts",
                        c.id, c.title, c.difficulty, c.points
                    )?;
                }
            }
        }

        Commands::Show { id } => {
            let challenge = catalog::require_challenge(id)?;
            info!(id, title = challenge.title, "showing target");

            challenge.target().write_json(&mut out)?;
            writeln!(out)?;
        }

        Commands::Compare { id, target, json } => {
            let drawn = catalog::require_challenge(id)?.target();
            let expected = catalog::require_challenge(target)?.target();

            let report = CompareReport {
                id,
                target,
                matches: patterns_match(&drawn, &expected),
                percentage: match_percentage(&drawn, &expected),
            };
            info!(?report, "compared targets");

            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(
                    out,
                    "{id} vs {target}: {} ({:.1}%)",
                    if report.matches { "match" } else { "no match" },
                    report.percentage
                )?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
