//! fuzzyfind - rank stdin lines against fuzzy query terms

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fuzzyfind::{Score, ScoringPolicy, search};
use log::debug;

/// Reads candidate lines from stdin and prints those matching every QUERY, best
/// first.
#[derive(Parser, Debug)]
#[command(name = "fuzzyfind", version, about)]
struct Cli {
    /// Query terms; a line must match all of them
    #[arg(required = true)]
    queries: Vec<String>,

    /// Print at most this many results
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print each result with a marker line under matched characters
    #[arg(long)]
    highlight: bool,

    /// Reward for a matching character
    #[arg(long, default_value_t = ScoringPolicy::DEFAULT_MATCH)]
    match_score: Score,

    /// Reward for a non-matching character
    #[arg(long, default_value_t = ScoringPolicy::DEFAULT_MISMATCH, allow_hyphen_values = true)]
    mismatch: Score,

    /// Bonus for a match at a word boundary
    #[arg(long, default_value_t = ScoringPolicy::DEFAULT_BOUNDARY_BONUS)]
    boundary_bonus: Score,

    /// Bonus for a match on a camel hump
    #[arg(long, default_value_t = ScoringPolicy::DEFAULT_CAMEL_CASE_BONUS)]
    camel_case_bonus: Score,

    /// Multiplier for the bonuses of the first query character
    #[arg(long, default_value_t = ScoringPolicy::DEFAULT_FIRST_CHAR_MULTIPLIER)]
    first_char_multiplier: Score,

    /// Bonus for consecutive matches
    #[arg(long, default_value_t = ScoringPolicy::DEFAULT_CONSECUTIVE_BONUS)]
    consecutive_bonus: Score,
}

impl Cli {
    fn policy(&self) -> ScoringPolicy {
        ScoringPolicy::default()
            .match_score(self.match_score)
            .mismatch(self.mismatch)
            .boundary_bonus(self.boundary_bonus)
            .camel_case_bonus(self.camel_case_bonus)
            .first_char_bonus_multiplier(self.first_char_multiplier)
            .consecutive_bonus(self.consecutive_bonus)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{cli:?}");

    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("failed to read candidates from stdin")?;

    let results = search(&cli.queries, &lines, &cli.policy());
    let limit = cli.limit.unwrap_or(results.len());

    let mut out = BufWriter::new(io::stdout().lock());
    for res in results.iter().take(limit) {
        if cli.highlight {
            writeln!(out, "{}\t{}", res.score, res.highlight().replace('\n', "\n\t"))?;
        } else {
            writeln!(out, "{}\t{}", res.score, res.as_string())?;
        }
    }
    out.flush()?;
    Ok(())
}
