//! CLI entry point for vwalk

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;
use vwalk::output::{self, FileRecord, print_json};
use vwalk::report::{Reporter, auto_color_choice};
use vwalk::walk::{FileWalker, WalkerConfig};

/// Color output mode for stderr diagnostics
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => auto_color_choice(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "vwalk")]
#[command(about = "Recursively list regular files in version-sorted order")]
#[command(version)]
struct Args {
    /// Directories to list
    // The default PathBuf parser rejects "" before main can report
    // WalkError::EmptyRoot; accept any OsString so that path is reachable.
    #[arg(default_value = ".", value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Include entries whose name starts with a dot
    #[arg(short, long)]
    all: bool,

    /// Show human-readable file sizes
    #[arg(short, long)]
    size: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Suppress warnings about unreadable directories
    #[arg(short, long)]
    quiet: bool,

    /// Control color of diagnostics: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    let reporter = Reporter::new(args.quiet).with_color(color_choice(args.color));
    let config = WalkerConfig {
        recursive: args.recursive,
        skip_hidden: !args.all,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut records = Vec::new();
    let mut failed = false;

    for root in &args.paths {
        let walker = match FileWalker::open(root, config.clone()) {
            Ok(walker) => walker.with_reporter(reporter.clone()),
            Err(err) => {
                eprintln!("vwalk: {}: {}", root.display(), err);
                failed = true;
                continue;
            }
        };

        for path in walker {
            let record = FileRecord::new(path, args.size);
            if args.json {
                records.push(record);
            } else if let Err(err) = output::write_record(&mut out, &record) {
                reporter.fatal(&format!("failed to write output: {}", err));
            }
        }
    }

    if args.json {
        drop(out);
        if let Err(err) = print_json(&records) {
            reporter.fatal(&format!("failed to write output: {}", err));
        }
    } else if let Err(err) = out.flush() {
        reporter.fatal(&format!("failed to write output: {}", err));
    }

    if failed {
        process::exit(1);
    }
}
