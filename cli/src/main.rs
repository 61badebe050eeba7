use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moviematch_core::load::load_corpus;
use moviematch_core::{prepare, IndexSnapshot, Recommendation, RecommendError, DEFAULT_TOP_N};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};

const DEFAULT_INPUT: &str = "IMDB Top 250 Movies.csv";
const SEPARATOR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "moviematch")]
#[command(about = "Content-based movie recommendations from TF-IDF similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for titles and print recommendations until `exit`
    Interactive {
        /// Movie listing (csv, json, jsonl, or a directory of them)
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: String,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },
    /// Print recommendations for a single title
    Recommend {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
        /// Emit the results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print corpus and vocabulary statistics
    Stats {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Interactive { input, top_n } => {
            println!("Loading and preparing movie data...");
            let snapshot = load(&input)?;
            println!("Movie recommendation engine is ready.");
            println!("{}", separator());
            let stdin = io::stdin();
            run_prompt(&snapshot, top_n, stdin.lock(), io::stdout().lock())
        }
        Commands::Recommend { input, title, top_n, json } => {
            let snapshot = load(&input)?;
            print!("{}", recommend_once(&snapshot, &title, top_n, json)?);
            Ok(())
        }
        Commands::Stats { input } => {
            let snapshot = load(&input)?;
            println!("documents: {}", snapshot.corpus().len());
            println!("vocabulary: {}", snapshot.vocabulary().len());
            println!("empty documents: {}", snapshot.empty_documents());
            Ok(())
        }
    }
}

fn load(input: &str) -> Result<IndexSnapshot> {
    let corpus = load_corpus(input).with_context(|| format!("cannot read movie data from '{input}'"))?;
    Ok(prepare(corpus))
}

/// Output of the `recommend` subcommand. Unknown titles surface as errors.
fn recommend_once(snapshot: &IndexSnapshot, title: &str, top_n: usize, json: bool) -> Result<String> {
    let recs = snapshot.recommend(title, top_n)?;
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&recs)?))
    } else {
        Ok(render(title, top_n, &recs))
    }
}

fn separator() -> String { "-".repeat(SEPARATOR_WIDTH) }

fn render(title: &str, top_n: usize, recs: &[Recommendation]) -> String {
    let mut out = format!("Top {top_n} recommendations for '{title}':\n");
    for rec in recs {
        out.push_str(&format!("- {} (Similarity: {:.3})\n", rec.title, rec.score));
    }
    out
}

/// Read titles line by line until `exit` (any case) or end of input.
fn run_prompt<R: BufRead, W: Write>(snapshot: &IndexSnapshot, top_n: usize, input: R, mut out: W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "Enter a movie title to get recommendations (or type 'exit' to quit): ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let title = line?;
        let title = title.trim_end_matches(['\r', '\n']);
        if title.eq_ignore_ascii_case("exit") {
            break;
        }
        match snapshot.recommend(title, top_n) {
            Ok(recs) => write!(out, "{}", render(title, top_n, &recs))?,
            Err(RecommendError::NotFound { title }) => {
                tracing::debug!(%title, "unknown title");
                writeln!(out, "Error: Movie '{title}' not found in the dataset.")?
            }
        }
        writeln!(out, "{}", separator())?;
    }
    writeln!(out)?;
    Ok(())
}
