use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use wordseek::classify::Classifier;
use wordseek::report::Reporter;
use wordseek::traverse::{TraverseOptions, search_directory};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Recursively search text files for a word"
)]
struct Cli {
    /// Case insensitive search
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Word to search for
    word: String,

    /// Directory to search in (defaults to ~/files)
    directory: Option<PathBuf>,

    /// Maximum directory traversal depth (0 for unlimited)
    #[arg(long = "max-depth", default_value = "64")]
    max_depth: usize,

    /// Comma-separated extension allow-list for text candidates
    #[arg(long = "ext", value_delimiter = ',', default_value = "txt,c,h,cpp,java")]
    ext: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize structured logging
    wordseek::telemetry::init()?;

    // A missing search word must exit with status 1, not clap's usage
    // status, so parse errors are dispatched by kind.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(());
            }
            _ => {
                err.print()?;
                std::process::exit(1);
            }
        },
    };

    let root = cli.directory.unwrap_or_else(default_root);

    let options = TraverseOptions {
        case_insensitive: cli.ignore_case,
        classifier: Classifier::with_extensions(cli.ext),
        depth: if cli.max_depth == 0 {
            None
        } else {
            Some(cli.max_depth)
        },
    };

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    reporter.banner(&cli.word, &root);
    search_directory(&root, &cli.word, &options, |found| reporter.report(&found));

    Ok(())
}

/// Resolves the default search root, `<HOME>/files`, falling back to a
/// literal `~/files` when no home directory is known.
fn default_root() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("files"),
        None => PathBuf::from("~/files"),
    }
}
