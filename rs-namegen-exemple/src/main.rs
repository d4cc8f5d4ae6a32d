use std::path::PathBuf;

use clap::Parser;
use rs_namegen_core::{random_seed, LoadMode, NameGenerator, Seed, TokenTable};

/// Patterns shown by the demo
const PATTERNS: &[&str] = &[
    "!ssV'!i",
    "v!M",
    "c(dim)",
    "C!i",
    "<(C!i)|(v!M)>",
    "<C!i|v!M|>",
    "!t !BVs T",
    "!DdM",
];

#[derive(Parser, Debug)]
#[command(about = "Prints a name for each example pattern")]
struct Args {
    /// JSON token file merged over the built-in lists
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Starting seed (random when omitted)
    #[arg(long)]
    seed: Option<Seed>,

    /// Extra patterns to try after the built-in examples
    patterns: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Start from the built-in lists, optionally overridden by a JSON file
    let mut table = TokenTable::builtin();
    if let Some(path) = &args.tokens {
        table.load_from_json(path, LoadMode::Merge)?;
    }
    let generator = NameGenerator::with_table(table, vec!["exemple".to_owned()]);

    // Keep the seed around so a run can be reproduced with `--seed`
    let mut seed = args.seed.unwrap_or_else(random_seed);
    println!("Seed: {seed}");

    for pattern in PATTERNS.iter().copied().chain(args.patterns.iter().map(String::as_str)) {
        match generator.generate(pattern, &mut seed) {
            Ok(name) => println!("| {pattern:>32} | {name:>32} |"),
            Err(e) => println!("| {pattern:>32} | {:>32} |", format!("error: {e}")),
        }
    }

    // A batch of names from the same pattern, generated in parallel
    let names = generator.generate_batch("!sV<c|B>s", &mut seed, 5)?;
    println!("Batch: {}", names.join(", "));

    Ok(())
}
