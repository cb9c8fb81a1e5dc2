use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

use wordgrid::crossword::MIN_PLACED_PERCENT;
use wordgrid::errors::GenerateError;
use wordgrid::generate;
use wordgrid::word_list::{Entry, EntryList};

const DEFAULT_SIZE: usize = 15;

/// Word-search and crossword grid generator
#[derive(Parser, Debug)]
#[command(author, version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide words in a grid of random letters
    Search(PuzzleArgs),
    /// Build a crossword from interlocking words (`word;clue` lines)
    Crossword(PuzzleArgs),
}

#[derive(Args, Debug)]
struct PuzzleArgs {
    /// Words to place (ignored if --words-file is given)
    words: Vec<String>,

    /// File with one word per line, optionally `word;clue`
    #[arg(short = 'f', long)]
    words_file: Option<String>,

    /// Grid width
    #[arg(short = 'W', long, default_value_t = DEFAULT_SIZE)]
    width: usize,

    /// Grid height
    #[arg(short = 'H', long, default_value_t = DEFAULT_SIZE)]
    height: usize,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl PuzzleArgs {
    fn entries(&self) -> std::io::Result<Vec<Entry>> {
        match &self.words_file {
            Some(path) => Ok(EntryList::load_from_path(path)?.entries),
            None => Ok(self.words.iter().map(|w| Entry::from(w.as_str())).collect()),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], printing any error in detail before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(generate_err) = e.downcast_ref::<GenerateError>() {
            eprintln!("Error: {}", generate_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic: parse arguments, generate, print.
///
/// The puzzle goes to stdout; placement summaries go to stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Search(args) => {
            let words: Vec<String> = args.entries()?.into_iter().map(|e| e.word).collect();
            let puzzle = generate::generate_word_search(&words, args.width, args.height, &mut args.rng())?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print!("{puzzle}");
                for p in &puzzle.placements {
                    eprintln!("{:<20} {} {:?}", p.word, p.start, p.direction);
                }
            }
        }
        Command::Crossword(args) => {
            let entries = args.entries()?;
            let Some(crossword) = generate::generate_crossword(&entries, args.width, args.height, &mut args.rng())? else {
                eprintln!(
                    "No crossword placed at least {MIN_PLACED_PERCENT}% of the words. Try more words that share letters, or a larger grid."
                );
                return Ok(());
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&crossword)?);
            } else {
                print!("{crossword}");
                for (title, clues) in [("Across", &crossword.across_clues), ("Down", &crossword.down_clues)] {
                    println!("\n{title}");
                    for clue in clues {
                        println!("{:>3}. {} ({})", clue.number, clue.clue.as_deref().unwrap_or("(no clue)"), clue.answer);
                    }
                }
                eprintln!("Placed {}/{} words.", crossword.placements.len(), entries.len());
            }
        }
    }

    Ok(())
}
