use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::warn;
use std::path::PathBuf;

use nucmotif::generate::{self, GenerateOpt};
use nucmotif::motif::{self, CountOpt};

#[derive(Parser, Debug)]
#[command(name = "nucmotif", author, version, about = "Random nucleotide corpus generator and brute-force motif counter", arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write random sequences whose Shannon entropy exceeds the threshold, one per line
    Generate {
        /// Number of sequences to draw (before entropy filtering)
        #[arg(short = 'n', long = "count", default_value_t = 1_000_000)]
        n: usize,
        /// Length of each sequence
        #[arg(short = 'm', long = "length", default_value_t = 50)]
        m: usize,
        /// Sampling weights for A,C,G,T
        #[arg(short, long, value_delimiter = ',', default_values_t = [0.25, 0.25, 0.25, 0.25])]
        probabilities: Vec<f64>,
        /// Keep only sequences whose Shannon entropy (bits) is strictly above this
        #[arg(long = "entropy-threshold", default_value_t = nucmotif::DEFAULT_ENTROPY_THRESHOLD)]
        entropy_threshold: f64,
        /// Seed for a reproducible corpus
        #[arg(long)]
        seed: Option<u64>,
        /// Output corpus path (overwritten)
        #[arg(short, long, default_value = nucmotif::DEFAULT_CORPUS)]
        output: PathBuf,
    },
    /// Count every motif of length s in a corpus and print the best one
    Count {
        /// Motif length
        #[arg(short = 's', long = "motif-len", default_value_t = nucmotif::DEFAULT_MOTIF_LEN)]
        motif_len: usize,
        /// Also print the top K motifs with their counts
        #[arg(long, default_value_t = 0)]
        top: usize,
        /// Corpus file, one sequence per line
        #[arg(default_value = nucmotif::DEFAULT_CORPUS)]
        corpus: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            n,
            m,
            probabilities,
            entropy_threshold,
            seed,
            output,
        } => {
            let probabilities = match <[f64; 4]>::try_from(probabilities.as_slice()) {
                Ok(p) => p,
                Err(_) => anyhow::bail!(
                    "--probabilities expects 4 comma-separated weights (A,C,G,T), got {}",
                    probabilities.len()
                ),
            };
            let opt = GenerateOpt {
                n,
                m,
                probabilities,
                entropy_threshold,
                seed,
                output,
            };
            run_generate(&opt)
        }
        Commands::Count {
            motif_len,
            top,
            corpus,
        } => {
            let opt = CountOpt {
                motif_len,
                corpus,
                top,
            };
            run_count(&opt)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run_generate(opt: &GenerateOpt) -> Result<()> {
    let stats = generate::generate_and_write(opt)?;
    println!("sequences drawn: {}", stats.generated);
    println!("sequences written: {}", stats.retained);
    println!("corpus saved: {}", opt.output.display());
    Ok(())
}

fn run_count(opt: &CountOpt) -> Result<()> {
    let table = motif::count_motifs(&opt.corpus, opt.motif_len)?;
    match motif::select_best(&table) {
        Some(best) => println!("{}{}", nucmotif::BEST_MOTIF_LABEL, best),
        None => warn!("motif table for '{}' is empty", opt.corpus.display()),
    }
    for (motif, count) in motif::rank_motifs(&table, opt.top) {
        println!("{}\t{}", motif, count);
    }
    Ok(())
}
