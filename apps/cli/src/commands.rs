//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use coursemark_core::batch::{self, ProgressReporter};
use coursemark_core::validator;
use coursemark_shared::{AppConfig, init_config, load_config};
use coursemark_tables::TableStore;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// coursemark — JSON-LD structured data for course-catalog pages.
#[derive(Parser)]
#[command(
    name = "coursemark",
    version,
    about = "Generate schema.org JSON-LD documents from course-catalog CSV tables.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate documents for all categories (or one with --category).
    Generate {
        /// Directory containing the eight input CSV tables.
        #[arg(long)]
        data: Option<String>,

        /// Output directory for generated documents.
        #[arg(short, long)]
        out: Option<String>,

        /// Generate a single category instead of the whole batch.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Validate previously generated document files.
    Validate {
        /// Document file paths to check.
        files: Vec<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "coursemark=info",
        1 => "coursemark=debug",
        _ => "coursemark=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            data,
            out,
            category,
        } => cmd_generate(data.as_deref(), out.as_deref(), category.as_deref()),
        Command::Validate { files } => cmd_validate(&files),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(data: Option<&str>, out: Option<&str>, category: Option<&str>) -> Result<()> {
    let config = load_config()?;

    let data_dir = PathBuf::from(data.unwrap_or(&config.defaults.data_dir));
    let output_dir = PathBuf::from(out.unwrap_or(&config.defaults.output_dir));

    info!(
        data = %data_dir.display(),
        out = %output_dir.display(),
        "loading input tables"
    );

    // Load-time failures abort immediately: nothing downstream can proceed.
    let store = TableStore::load(&data_dir)?;

    if !store.warnings().is_empty() {
        println!("  Data-quality warnings:");
        for warning in store.warnings() {
            println!("    ! {warning}");
        }
        println!();
    }

    if let Some(category_id) = category {
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| eyre!("cannot create '{}': {e}", output_dir.display()))?;
        let path =
            batch::generate_one(&store, &config.conventions, category_id, &output_dir)?;
        println!("  Generated: {}", path.display());
        return Ok(());
    }

    let progress = CliProgress::new();
    let result = batch::run_batch(&store, &config.conventions, &output_dir, &progress)?;
    progress.finish();

    println!();
    println!("  Batch complete.");
    println!("  Succeeded: {}", result.succeeded());
    println!("  Failed:    {}", result.failed());
    if !result.failures.is_empty() {
        println!();
        for (category_id, error) in &result.failures {
            println!("  ✗ {category_id}: {error}");
        }
    }
    println!();
    for path in &result.written {
        println!("  • {}", path.display());
    }
    println!();

    Ok(())
}

fn cmd_validate(files: &[String]) -> Result<()> {
    if files.is_empty() {
        return Err(eyre!("no files given"));
    }

    let mut total_warnings = 0usize;

    for file in files {
        let path = Path::new(file);
        let content = std::fs::read_to_string(path)
            .map_err(|e| eyre!("cannot read '{file}': {e}"))?;
        let document: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| eyre!("'{file}' is not valid JSON: {e}"))?;

        let warnings = validator::validate(&document);
        if warnings.is_empty() {
            println!("  ✓ {file}");
        } else {
            println!("  ✗ {file}");
            for warning in &warnings {
                println!("      {warning}");
            }
            total_warnings += warnings.len();
        }
    }

    if total_warnings > 0 {
        println!();
        println!("  {total_warnings} warning(s) across {} file(s)", files.len());
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Batch progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn category_started(&self, category_id: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Generating [{current}/{total}] {category_id}"));
    }

    fn category_finished(&self, _category_id: &str, _ok: bool) {}
}
