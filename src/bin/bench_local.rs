//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of puzzles on *your* machine.
//! - Each case is generated once per seed; we report the median over seeds.
//! - Seeds are fixed, so two runs on the same build do the same work.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - More seeds per case:            `cargo run --bin bench_local --release -- -r 20`
//! - Print the last puzzle per case: `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Cases live in `get_cases()` below.
//! - I/O (printing) is kept outside the timed section.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::generate;
use wordgrid::word_list::Entry;

/// Simple local benchmark runner: time word-search and crossword generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of seeds per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 10)]
    num_repeats: u64,

    /// Print the puzzle from the last seed of each case
    #[arg(short = 'p', long = "print")]
    print: bool,
}

#[derive(Clone, Copy)]
enum Kind {
    Search,
    Crossword,
}

#[derive(Clone)]
struct Case {
    name: &'static str,
    kind: Kind,
    words: &'static [&'static str],
    size: usize,
}

const ANIMALS: &[&str] = &[
    "ALLIGATOR", "BADGER", "CAMEL", "DONKEY", "ELEPHANT", "FERRET", "GIRAFFE", "HEDGEHOG",
    "IGUANA", "JAGUAR", "KANGAROO", "LEOPARD", "MONGOOSE", "NARWHAL", "OCELOT", "PENGUIN",
];

const KITCHEN: &[&str] = &[
    "OVEN", "STOVE", "KETTLE", "TOASTER", "BLENDER", "SPATULA", "LADLE", "WHISK", "COLANDER",
    "SKILLET", "GRATER", "TONGS", "PEELER", "STRAINER", "TEAPOT", "APRON", "RAMEKIN", "SIEVE",
];

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "search animals 15x15", kind: Kind::Search, words: ANIMALS, size: 15 },
        Case { name: "search animals 10x10", kind: Kind::Search, words: ANIMALS, size: 10 },
        Case { name: "search kitchen 20x20", kind: Kind::Search, words: KITCHEN, size: 20 },
        Case { name: "crossword animals 15x15", kind: Kind::Crossword, words: ANIMALS, size: 15 },
        Case { name: "crossword kitchen 15x15", kind: Kind::Crossword, words: KITCHEN, size: 15 },
        Case { name: "crossword kitchen 11x11", kind: Kind::Crossword, words: KITCHEN, size: 11 },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Run one seed of a case. Returns whether it produced a puzzle, plus its text.
fn run_once(case: &Case, seed: u64) -> (bool, String) {
    let mut rng = StdRng::seed_from_u64(seed);
    match case.kind {
        Kind::Search => match generate::generate_word_search(black_box(case.words), case.size, case.size, &mut rng) {
            Ok(puzzle) => (true, puzzle.to_string()),
            Err(e) => (false, e.to_string()),
        },
        Kind::Crossword => {
            let entries: Vec<Entry> = case.words.iter().copied().map(Entry::from).collect();
            match generate::generate_crossword(black_box(&entries), case.size, case.size, &mut rng) {
                Ok(Some(grid)) => (true, grid.to_string()),
                Ok(None) => (false, "no crossword".to_string()),
                Err(e) => (false, e.to_string()),
            }
        }
    }
}

const MAX_NAME_LEN: usize = 28;

fn main() {
    let cli = Cli::parse();
    let cases = get_cases();
    let mut summary: Vec<(&str, f64, u64)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.name);

        let mut times = Vec::new();
        let mut successes = 0;
        let mut last = String::new();

        for seed in 0..cli.num_repeats {
            let t = Instant::now();
            let (ok, text) = run_once(case, seed);
            times.push(t.elapsed().as_secs_f64());
            if ok {
                successes += 1;
            }
            last = text;
        }

        let med = median(times);
        eprintln!(
            "  → median {:.4}s over {} {}; {} succeeded",
            med,
            cli.num_repeats,
            pluralizer(cli.num_repeats as usize, "seed".into(), None),
            successes
        );
        if cli.print {
            println!("{last}");
        }

        summary.push((case.name, med, successes));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>9}", "case", "median (s)", "succeeded");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}", "", "", "");
    for (name, med, successes) in &summary {
        eprintln!("{name:<MAX_NAME_LEN$} | {med:>10.4} | {successes:>4}/{:<4}", cli.num_repeats);
    }
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
