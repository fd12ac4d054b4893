//! chordshift CLI entry point

use chordshift::{
    read_document, suggested_output_name, transpose_document, transpose_sequence, ChordError,
    Direction, SequenceTransposition, Settings,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// chordshift - transpose chords and chord charts
///
/// Moves every chord up or down by a number of tones (0.5 = half tone).
/// Lyric lines in a chart are left exactly as they are.
#[derive(Parser, Debug)]
#[command(name = "chordshift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transpose up or down
    #[arg(short, long, global = true, value_enum)]
    direction: Option<Direction>,

    /// Interval in tones (0.5 = half tone, 1 = whole tone, 1.5 = tone and a half)
    #[arg(short, long, global = true, value_name = "TONES")]
    tones: Option<f64>,

    /// YAML file with default settings
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, default_value = "false")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transpose a sequence of chords, e.g. `chords G D/F# Em C`
    Chords {
        /// Chords to transpose
        #[arg(required = true)]
        chords: Vec<String>,

        /// Print the result as YAML
        #[arg(long, default_value = "false")]
        yaml: bool,

        /// Do not print enharmonic notes
        #[arg(long, default_value = "false")]
        no_notes: bool,
    },

    /// Transpose a chord chart read from a .txt or .docx file
    File {
        /// Input file
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Transpose a chord chart read from standard input
    Text {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the result to the current directory under a suggested name
    #[arg(long, default_value = "false")]
    save: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if cli.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), ChordError> {
    let base = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = base.with_overrides(cli.direction, cli.tones);
    settings.validate()?;
    let request = settings.request();
    info!(direction = ?request.direction, tones = request.tones, "transposing");

    match &cli.command {
        Command::Chords { chords, yaml, no_notes } => {
            let tokens: Vec<&str> = chords.iter().flat_map(|c| c.split_whitespace()).collect();
            if tokens.is_empty() {
                return Err(ChordError::EmptyInput);
            }
            let result = transpose_sequence(&tokens, &request);
            if *yaml {
                print!("{}", serde_yaml::to_string(&result)?);
            } else {
                print_sequence(&tokens, &result, settings.show_notes && !no_notes);
            }
            Ok(())
        }
        Command::File { path, output } => {
            let bytes = fs::read(path)?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let text = read_document(&name, &bytes)?;
            if text.trim().is_empty() {
                return Err(ChordError::EmptyInput);
            }
            let transposed = transpose_document(&text, &request);
            emit(&transposed, output, Some(&name))
        }
        Command::Text { output } => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            if text.trim().is_empty() {
                return Err(ChordError::EmptyInput);
            }
            let transposed = transpose_document(&text, &request);
            emit(&transposed, output, None)
        }
    }
}

fn print_sequence(original: &[&str], result: &SequenceTransposition, show_notes: bool) {
    println!("Original:   {}", original.join(" "));
    println!("Transposed: {}", result.chords.join(" "));

    if !show_notes {
        return;
    }
    if !result.input_notes.is_empty() {
        println!();
        println!("Notes on the original chords:");
        for note in result.input_notes.iter() {
            println!("  - {}", note);
        }
    }
    if !result.output_notes.is_empty() {
        println!();
        println!("Notes on the transposed chords:");
        for note in result.output_notes.iter() {
            println!("  - {}", note);
        }
    }
}

fn emit(text: &str, output: &OutputArgs, input_name: Option<&str>) -> Result<(), ChordError> {
    let target = match (&output.output, output.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(suggested_output_name(input_name))),
        (None, false) => None,
    };

    match target {
        Some(path) => write_output(&path, text),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn write_output(path: &Path, text: &str) -> Result<(), ChordError> {
    fs::write(path, text)?;
    eprintln!("Wrote transposed chart to {}", path.display());
    Ok(())
}
