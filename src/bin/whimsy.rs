//! Command-line front end for the name generator.
//!
//! Prints composed names, single category words, and catalog listings. All
//! randomness and validation live in the library; this binary only parses
//! flags and formats output. Diagnostics go to stderr through `tracing`,
//! filtered by `WHIMSY_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use whimsy::{Catalog, Category, CategoryKind};

const LOG_ENV: &str = "WHIMSY_LOG";

#[derive(Parser, Debug)]
#[command(name = "whimsy")]
#[command(about = "Random memorable names from plants, animals, and colors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one or more composed names
    Name {
        /// Words per name (1 to the number of categories)
        #[arg(short, long, env = "WHIMSY_PARTS", default_value_t = whimsy::DEFAULT_PARTS, allow_negative_numbers = true)]
        parts: i64,

        /// How many names to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Print one random word from a category
    Word {
        /// plants, animals, or colors
        category: CategoryKind,
    },
    /// List the words of one category, or of every category
    List {
        category: Option<CategoryKind>,
    },
    /// Show each category with its size
    Categories {
        /// Print the full catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show word counts and a sample from each category
    Stats,
    /// Walk through every operation with example output
    Demo,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Name { parts, count, json } => {
            let names = generate_names(parts, count)?;
            if json {
                serde_json::to_writer(&mut out, &names)?;
                writeln!(out)?;
            } else {
                for name in names {
                    writeln!(out, "{name}")?;
                }
            }
        }
        Commands::Word { category } => {
            let word = whimsy::random_word(category)
                .with_context(|| format!("picking a random {}", category.singular()))?;
            writeln!(out, "{word}")?;
        }
        Commands::List { category } => match category {
            Some(kind) => {
                for word in whimsy::words(kind) {
                    writeln!(out, "{word}")?;
                }
            }
            None => {
                for category in whimsy::categories() {
                    for word in category.words {
                        writeln!(out, "{}\t{word}", category.name())?;
                    }
                }
            }
        },
        Commands::Categories { json } => {
            if json {
                serde_json::to_writer_pretty(&mut out, &CatalogExport::builtin())?;
                writeln!(out)?;
            } else {
                for category in whimsy::categories() {
                    writeln!(out, "{:<8} {}", category.name(), category.len())?;
                }
            }
        }
        Commands::Stats => write_stats(&mut out, Catalog::builtin())?,
        Commands::Demo => write_demo(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn generate_names(parts: i64, count: usize) -> Result<Vec<String>> {
    tracing::debug!(parts, count, "generating names");
    (0..count)
        .map(|_| whimsy::random_name(Some(parts)).context("composing name"))
        .collect()
}

#[derive(Serialize)]
/// Catalog document matching `schema/catalog.schema.json`.
struct CatalogExport {
    max_parts: usize,
    total_words: usize,
    categories: &'static [Category],
}

impl CatalogExport {
    fn builtin() -> Self {
        let catalog = Catalog::builtin();
        Self {
            max_parts: catalog.max_parts(),
            total_words: catalog.word_count(),
            categories: catalog.categories(),
        }
    }
}

fn write_stats(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    for category in catalog.categories() {
        writeln!(
            out,
            "{:<8}: {} names",
            title_case(category.name()),
            category.len()
        )?;
    }
    writeln!(out, "Total words: {}", catalog.word_count())?;
    writeln!(out, "Categories:  {}", catalog.max_parts())?;

    writeln!(out)?;
    writeln!(out, "Sample names:")?;
    for category in catalog.categories() {
        if let Some(sample) = sample_words(category) {
            writeln!(
                out,
                "{:<8}: {}",
                title_case(category.name()),
                sample.join(", ")
            )?;
        }
    }
    Ok(())
}

/// First, quartile, middle, third quartile, and last word of a category.
fn sample_words(category: &Category) -> Option<[&'static str; 5]> {
    let words = category.words;
    let len = words.len();
    if len < 5 {
        return None;
    }
    Some([
        words[0],
        words[len / 4],
        words[len / 2],
        words[3 * len / 4],
        words[len - 1],
    ])
}

fn write_demo(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Whimsy - random memorable names")?;
    writeln!(out)?;

    writeln!(out, "Individual words:")?;
    for kind in CategoryKind::ALL {
        let word = whimsy::random_word(kind)?;
        writeln!(out, "  {:<7} {word}", format!("{}:", title_case(kind.singular())))?;
    }

    writeln!(out)?;
    writeln!(out, "Random names:")?;
    for parts in 1..=whimsy::max_parts() {
        let name = whimsy::random_name(Some(parts as i64))?;
        let label = if parts == 1 { "part" } else { "parts" };
        writeln!(out, "  {parts} {label}: {name}")?;
    }
    writeln!(out, "  default: {}", whimsy::random_name(None)?)?;

    writeln!(out)?;
    writeln!(out, "Infrastructure examples:")?;
    writeln!(out, "  Server:   {}.example.com", whimsy::random_name(Some(2))?)?;
    writeln!(out, "  Database: {}-db", whimsy::random_name(Some(3))?)?;
    writeln!(out, "  Cluster:  {}-cluster", whimsy::random_name(Some(1))?)?;

    writeln!(out)?;
    writeln!(out, "Statistics:")?;
    write_stats(out, Catalog::builtin())
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
