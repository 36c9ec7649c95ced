use clap::error::ErrorKind;
use clap::Parser;
use log::{error, info};
use pos_inducer::{tag_file_for_language, LanguageTable, PipelineConfig};
use std::path::PathBuf;

/// Induce part-of-speech pseudo-tags from a language's corpus and tag a test file.
#[derive(Parser, Debug)]
#[command(name = "pos-inducer-cli", version)]
struct Cli {
    /// Index into the language table (0 = hindi with the built-in table)
    language: usize,

    /// Test file with one whitespace-tokenized sentence per line
    test_file: PathBuf,

    /// CSV file replacing the built-in language table
    #[arg(long, value_name = "CSV")]
    languages: Option<PathBuf>,

    /// Reuse the language's existing pseudo-tagged training file instead of clustering
    #[arg(long)]
    skip_clustering: bool,
}

fn print_usage() {
    println!("Usage: pos-inducer-cli <language> <test_file_path>");
    println!("Example: pos-inducer-cli 0 ./data/hindi_testing.txt");
    println!("Run with --help for all options");
}

#[cfg(feature = "logger-support")]
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(not(feature = "logger-support"))]
fn init_logger() {
    eprintln!("Logging is unavailable: rebuild with the `logger-support` feature to see progress.");
}

fn main() {
    init_logger();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(_) => {
            // A usage query, not a failure
            print_usage();
            return;
        }
    };

    let language_table = match &cli.languages {
        Some(path) => match LanguageTable::from_csv_path(path) {
            Ok(table) => table,
            Err(e) => {
                error!("Failed to load language table: {}", e);
                std::process::exit(1);
            }
        },
        None => LanguageTable::default(),
    };

    let profile = match language_table.get(cli.language) {
        Ok(profile) => profile,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Processing {}... It may take a few second(s)", profile.name);

    let config = PipelineConfig::default();

    if let Err(e) = tag_file_for_language(profile, &cli.test_file, &config, cli.skip_clustering) {
        error!("Error tagging {}: {}", cli.test_file.display(), e);
        std::process::exit(1);
    }
}
