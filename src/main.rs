use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use log::{debug, LevelFilter};
use std::path::{Path, PathBuf};

use scriptmark::document::{
    format_file, inspect_docx, load_docx, mark_file, output_dir_of, render_json, render_text,
};
use scriptmark::{ReportFormat, Settings};

#[derive(Parser)]
#[command(name = "scriptmark")]
#[command(about = "Highlight spoken dialogue in .docx scripts")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Script to mark (shorthand for `scriptmark mark <FILE>`)
    file: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark dialogue bold red and save as `<prefix>_<name>` next to the input
    Mark {
        /// Script document (.docx)
        file: PathBuf,
    },
    /// Rebuild a script with uniform fonts, headings and marked dialogue
    Format {
        /// Script document (.docx)
        file: PathBuf,
    },
    /// Show how each paragraph would be classified, without writing anything
    Inspect {
        /// Script document (.docx)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
    /// Write the default settings file
    InitConfig,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    // RUST_LOG still overrides the flag-derived level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    debug!("settings: {settings:?}");
    Ok(settings)
}

fn run(cli: Cli) -> Result<()> {
    let command = match (cli.command, cli.file) {
        (Some(command), _) => command,
        (None, Some(file)) => Commands::Mark { file },
        // No file chosen: nothing to do
        (None, None) => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    match command {
        Commands::Mark { file } => {
            let settings = load_settings(cli.config.as_deref())?;
            let outcome = mark_file(&file, &settings)?;
            println!(
                "Done! Saved to: {}",
                output_dir_of(&outcome.output_path).display()
            );
        }
        Commands::Format { file } => {
            let settings = load_settings(cli.config.as_deref())?;
            let output_path = format_file(&file, &settings)?;
            println!("Done! Saved to: {}", output_path.display());
        }
        Commands::Inspect { file, format } => {
            let settings = load_settings(cli.config.as_deref())?;
            let docx = load_docx(&file)?;
            let reports = inspect_docx(&docx, &settings.markers());
            let output = match format {
                ReportFormat::Text => render_text(&reports)?,
                ReportFormat::Json => render_json(&reports)?,
            };
            print!("{output}");
        }
        Commands::InitConfig => {
            let path = Settings::init_default()?;
            println!("Default settings written to {}", path.display());
        }
    }

    Ok(())
}
