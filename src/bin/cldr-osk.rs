// cldr-osk CLI
// Converts a CLDR keyboard file into an on-screen keyboard layout document

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cldr_osk_core::{LayoutBuilder, SourceDocument, X11Keysyms};

/// CLDR keyboard to on-screen keyboard layout converter
#[derive(Parser, Debug)]
#[command(name = "cldr-osk")]
#[command(author = "cldr-osk contributors")]
#[command(version)]
#[command(about = "Convert a CLDR keyboard file into an on-screen keyboard layout", long_about = None)]
struct Args {
    /// CLDR keyboard XML file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write the layout here instead of standard output
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = SourceDocument::from_path(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let layout = LayoutBuilder::new(&X11Keysyms)
        .build(&source)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    let document = cldr_osk_core::layout_to_string(&layout)?;

    // Nothing is written until the whole layout has been built
    match &args.output {
        Some(path) => {
            fs::write(path, document.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}
