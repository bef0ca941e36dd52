//! ircsv - IR test-collection to CSV converter
//!
//! Converts the document, query and relevance-judgment files of classic test
//! collections (CRAN, CISI, MED, NPL) into CSV tables.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::{project_config_path, user_config_path, Config, DEFAULT_CONFIG};
use ircsv_backend::{
    convert_to_csv_str, default_datasets, CollectionRunner, DatasetDescriptor, DatasetReport,
    DEFAULT_BASE_PATH,
};
use ircsv_core::{CollectionFormat, FileType};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Verbosity level for output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Verbosity {
    /// Suppress all output except warnings and errors
    Quiet,
    /// Normal output (default)
    Normal,
    /// Verbose output with extra details
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if output should be shown (not quiet)
    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Default log filter; `RUST_LOG` still wins
    const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Normal => "info",
            Self::Verbose => "debug",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "ircsv",
    about = "Convert IR test collections to CSV",
    long_about = "Convert the documents (.ALL), queries (.QRY) and relevance judgments (.REL)\n\
                  of classic IR test collections to CSV.\n\
                  \n\
                  Supports tagged collections (CRAN, CISI, MED) and the numeric-delimited\n\
                  NPL layout.",
    version
)]
struct Args {
    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show detailed processing information
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a single collection file to CSV
    #[command(long_about = "Convert a single collection file to CSV.\n\
                      \n\
                      Examples:\n\
                        ircsv convert cran/cran.ALL -o cran_docs.csv -t ALL\n\
                        ircsv convert NPL/npl.REL -o npl_qrels.csv -t REL -f numeric")]
    Convert {
        /// Input collection file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// File type: ALL, QRY or REL
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        file_type: String,

        /// Collection format: tagged or numeric
        #[arg(short, long, value_name = "FORMAT", default_value = "tagged")]
        format: String,
    },

    /// Convert every file of the configured datasets
    #[command(long_about = "Convert the .ALL, .REL and .QRY files of every dataset.\n\
                      \n\
                      Input files are read from <BASE>/<name>/<stem>.<EXT> and written to\n\
                      <BASE>/<stem>_docs.csv, <stem>_qrels.csv and <stem>_queries.csv.\n\
                      Defaults can be set via .ircsv.toml configuration file.")]
    Run {
        /// Directory holding the collections (default: ./collections)
        #[arg(short, long, value_name = "DIR")]
        base_path: Option<PathBuf>,

        /// Only convert the named dataset (repeatable)
        #[arg(short, long = "dataset", value_name = "NAME")]
        datasets: Vec<String>,

        /// Convert datasets concurrently
        #[arg(long)]
        parallel: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration settings
    #[command(long_about = "Manage ircsv configuration files and settings.\n\
                      \n\
                      Configuration files are loaded in this order (later overrides earlier):\n\
                        1. User config: ~/.ircsv.toml\n\
                        2. Project config: ./.ircsv.toml\n\
                        3. Command-line arguments")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Create a new .ircsv.toml configuration file
    Init {
        /// Create in user home directory (~/.ircsv.toml) instead of current directory
        #[arg(long)]
        global: bool,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Display the current effective configuration
    Show {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);

    // JSON reports own stdout
    let json_output = matches!(args.command, Commands::Run { json: true, .. });
    init_logging(verbosity, json_output);

    match args.command {
        Commands::Convert {
            input,
            output,
            file_type,
            format,
        } => convert_command(&input, &output, &file_type, &format),
        Commands::Run {
            base_path,
            datasets,
            parallel,
            json,
        } => {
            let config = Config::load();
            run_command(config, base_path, &datasets, parallel, json, verbosity)
        }
        Commands::Config { action } => config_command(action, verbosity),
    }
}

/// Console messages go to stdout, one plain line per message
fn init_logging(verbosity: Verbosity, json_output: bool) {
    let target = if json_output {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    };

    let env = env_logger::Env::default().default_filter_or(verbosity.log_filter());
    env_logger::Builder::from_env(env)
        .target(target)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn convert_command(
    input: &std::path::Path,
    output: &std::path::Path,
    file_type: &str,
    format: &str,
) -> Result<()> {
    let format: CollectionFormat = format.parse()?;

    convert_to_csv_str(input, output, format, file_type)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    Ok(())
}

/// Serializable view of a [`DatasetReport`]
#[derive(Debug, Serialize)]
struct DatasetSummary<'a> {
    dataset: &'a str,
    format: CollectionFormat,
    files: Vec<FileSummary>,
}

#[derive(Debug, Serialize)]
struct FileSummary {
    file_type: FileType,
    input: PathBuf,
    output: PathBuf,
    rows: usize,
    written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a DatasetReport> for DatasetSummary<'a> {
    fn from(report: &'a DatasetReport) -> Self {
        let files = report
            .files
            .iter()
            .map(|file| {
                let (rows, written, error) = match &file.result {
                    Ok(outcome) => (outcome.rows, outcome.written, None),
                    Err(e) => (0, false, Some(e.to_string())),
                };
                FileSummary {
                    file_type: file.file_type,
                    input: file.input.clone(),
                    output: file.output.clone(),
                    rows,
                    written,
                    error,
                }
            })
            .collect();

        Self {
            dataset: &report.dataset.name,
            format: report.dataset.format,
            files,
        }
    }
}

/// Pick the datasets named on the command line (case-insensitive on name or stem)
///
/// A dataset named more than once is selected once, so no two conversions
/// write the same CSV files.
fn select_datasets(
    available: Vec<DatasetDescriptor>,
    names: &[String],
) -> Result<Vec<DatasetDescriptor>> {
    if names.is_empty() {
        return Ok(available);
    }

    let mut selected: Vec<DatasetDescriptor> = Vec::with_capacity(names.len());
    for name in names {
        let dataset = available
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name) || d.stem().eq_ignore_ascii_case(name))
            .with_context(|| {
                let known: Vec<_> = available.iter().map(|d| d.name.as_str()).collect();
                format!("Unknown dataset '{name}'. Available datasets: {}", known.join(", "))
            })?;
        if !selected.contains(dataset) {
            selected.push(dataset.clone());
        }
    }
    Ok(selected)
}

fn run_command(
    config: Config,
    base_path: Option<PathBuf>,
    dataset_names: &[String],
    parallel: bool,
    json_output: bool,
    verbosity: Verbosity,
) -> Result<()> {
    let base_path = base_path
        .or(config.base_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_PATH));
    let parallel = parallel || config.parallel.unwrap_or(false);
    let datasets = select_datasets(
        config.datasets.unwrap_or_else(default_datasets),
        dataset_names,
    )?;

    let runner = CollectionRunner::new(base_path).with_parallel(parallel);
    let reports = runner.run(&datasets);
    let failed: usize = reports.iter().map(DatasetReport::failed).sum();

    if json_output {
        let summaries: Vec<DatasetSummary<'_>> = reports.iter().map(DatasetSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if verbosity.should_show_output() {
        print_summary(&reports);
    }

    if failed > 0 {
        bail!("{failed} file(s) failed to convert");
    }
    Ok(())
}

fn print_summary(reports: &[DatasetReport]) {
    println!();
    for report in reports {
        let status = if report.failed() > 0 {
            "✗".red().bold()
        } else {
            "✓".green().bold()
        };
        println!(
            "{status} {}: {} written, {} failed",
            report.dataset.name.bold(),
            report.written(),
            report.failed()
        );
    }
}

fn config_command(action: ConfigAction, verbosity: Verbosity) -> Result<()> {
    match action {
        ConfigAction::Init { global, force } => config_init(global, force, verbosity),
        ConfigAction::Show { json } => config_show(json),
    }
}

/// Create a new configuration file with commented defaults
fn config_init(global: bool, force: bool, verbosity: Verbosity) -> Result<()> {
    let config_path = if global {
        user_config_path().context("Could not determine home directory")?
    } else {
        project_config_path()
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    if verbosity.should_show_output() {
        println!(
            "{} Created configuration file: {}",
            "Success:".green().bold(),
            config_path.display()
        );
    }

    Ok(())
}

/// Display the current effective configuration
fn config_show(json_output: bool) -> Result<()> {
    let merged = Config::load();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&merged)?);
    } else {
        println!("{}", toml::to_string_pretty(&merged)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filters() {
        assert_eq!(Verbosity::from_flags(true, false).log_filter(), "warn");
        assert_eq!(Verbosity::from_flags(false, false).log_filter(), "info");
        assert_eq!(Verbosity::from_flags(false, true).log_filter(), "debug");
    }

    #[test]
    fn test_select_datasets() {
        let selected = select_datasets(default_datasets(), &["npl".to_string(), "CRAN".to_string()])
            .unwrap();
        let names: Vec<_> = selected.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["NPL", "cran"]);

        assert_eq!(select_datasets(default_datasets(), &[]).unwrap().len(), 4);
        assert!(select_datasets(default_datasets(), &["trec".to_string()]).is_err());
    }

    #[test]
    fn test_select_datasets_deduplicates() {
        let names = ["cran", "CRAN", "NPL", "npl", "cran"].map(String::from);
        let selected = select_datasets(default_datasets(), &names).unwrap();
        let names: Vec<_> = selected.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["cran", "NPL"]);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "ircsv", "convert", "npl.REL", "-o", "out.csv", "-t", "REL", "-f", "numeric",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Commands::Convert { ref file_type, ref format, .. } if file_type == "REL" && format == "numeric"
        ));
    }
}
