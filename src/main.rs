//! Friendly Words CLI
//!
//! Checks, inspects and renders directories of word-list files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use friendly_words::{build, render_module, source, Assembly, IngestOptions, InvalidNamePolicy};

#[derive(Parser)]
#[command(
    name = "friendly-words",
    about = "Validate word-list files and build length-indexed collections",
    version
)]
struct Cli {
    /// Emit log lines as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Scan the words of files with invalid names and report them too
    #[arg(long, global = true)]
    scan_invalid_names: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every word file in a directory and list the issues
    Check {
        /// Directory containing *.txt word files
        dir: PathBuf,
    },

    /// Show word and length-bucket counts per collection
    Stats {
        /// Directory containing *.txt word files
        dir: PathBuf,
    },

    /// Print the words of one collection
    Lookup {
        /// Directory containing *.txt word files
        dir: PathBuf,

        /// Property name of the collection, e.g. `Adjectives`
        property: String,

        /// Only print words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Render the collections as Rust source
    Render {
        /// Directory containing *.txt word files
        dir: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn load(dir: &Path, options: IngestOptions) -> Result<Assembly> {
    let files = source::read_dir(dir)
        .with_context(|| format!("loading word files from {}", dir.display()))?;
    Ok(build(files, options))
}

fn check(assembly: &Assembly) -> ExitCode {
    for issue in &assembly.issues {
        println!("{} {}: {}", issue.severity(), issue.code(), issue);
    }

    let errors = assembly.issues.iter().filter(|issue| issue.is_error()).count();
    println!(
        "{} collections, {} issues ({} errors)",
        assembly.words.len(),
        assembly.issues.len(),
        errors
    );

    if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn stats(assembly: &Assembly) {
    for entry in assembly.words.entries() {
        println!(
            "{:<20} {:>8} words {:>4} lengths",
            entry.property_name,
            entry.collection.word_count(),
            entry.collection.count()
        );
        for (length, words) in entry.collection.buckets() {
            println!("  {:>4}: {}", length, words.len());
        }
    }
}

fn lookup(assembly: &Assembly, property: &str, length: Option<usize>) -> Result<()> {
    let Some(collection) = assembly.words.get(property) else {
        let known: Vec<&str> = assembly.words.property_names().collect();
        bail!("no collection named {property} (known: {})", known.join(", "));
    };

    match length {
        Some(n) => collection.of_length(n).iter().for_each(|word| println!("{word}")),
        None => collection.iter().for_each(|word| println!("{word}")),
    }
    Ok(())
}

fn render(assembly: &Assembly, output: Option<&Path>) -> Result<()> {
    let code = render_module(&assembly.words);
    match output {
        Some(path) => fs::write(path, code)
            .with_context(|| format!("writing rendered source to {}", path.display()))?,
        None => print!("{code}"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let options = IngestOptions {
        invalid_name_policy: if cli.scan_invalid_names {
            InvalidNamePolicy::ScanWords
        } else {
            InvalidNamePolicy::Skip
        },
    };

    match cli.command {
        Commands::Check { dir } => Ok(check(&load(&dir, options)?)),
        Commands::Stats { dir } => {
            stats(&load(&dir, options)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lookup {
            dir,
            property,
            length,
        } => {
            lookup(&load(&dir, options)?, &property, length)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Render { dir, output } => {
            render(&load(&dir, options)?, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
