use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use align_speller::{
    dictionary_path, AlignmentSpellChecker, Candidate, Dictionary, Selection, SuggestConfig,
    SUGGESTION_LIMIT,
};

/// Suggest the closest dictionary words for each misspelled input word
#[derive(Parser, Debug)]
#[command(name = "align-speller")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Whitespace-separated word list (defaults to the bundled list)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Number of suggestions per word
    #[arg(short = 'n', long, default_value_t = SUGGESTION_LIMIT)]
    limit: usize,

    /// Stream candidates through a heap bounded to the limit
    #[arg(long)]
    bounded: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Words to check; read from stdin when omitted
    words: Vec<String>,
}

#[derive(Serialize)]
struct SuggestionRequest<'a> {
    word: &'a str,
    suggestions: &'a [Candidate],
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| PathBuf::from(dictionary_path()));
    let dictionary = Dictionary::load(&path)
        .with_context(|| format!("could not load dictionary {}", path.display()))?;

    let config = SuggestConfig {
        limit: args.limit,
        selection: if args.bounded {
            Selection::Bounded
        } else {
            Selection::HeapSort
        },
        ..SuggestConfig::default()
    };
    let checker = AlignmentSpellChecker::new(dictionary, config);

    let words = if args.words.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("could not read words from stdin")?;
        input.split_whitespace().map(str::to_owned).collect()
    } else {
        args.words.clone()
    };

    let mut results = Vec::with_capacity(words.len());
    for word in &words {
        results.push((word.as_str(), checker.spell(word)?));
    }

    if args.json {
        let requests: Vec<SuggestionRequest> = results
            .iter()
            .map(|(word, suggestions)| SuggestionRequest {
                word: *word,
                suggestions: suggestions.as_slice(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&requests)?);
    } else {
        for (word, suggestions) in &results {
            println!("Input: {}", word);
            for candidate in suggestions {
                println!("{}\t{}", candidate.word, candidate.score);
            }
            println!();
        }
    }

    Ok(())
}
