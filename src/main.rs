//! Privacy Filter CLI Application.
//!
//! This binary provides a command-line interface for the privacy-filter
//! library: scanning text, redacting it, filtering JSON documents and
//! assembling meeting reports. Results go to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use privacy_filter::policy::presets;
use privacy_filter::{
    filter_json, FilterOrchestrator, FilterableUnit, MeetingTypePolicy, PrivacyConfig,
};

/// Privacy Filter Tool
///
/// Detect and redact Dutch personal data in meeting transcriptions and reports.
#[derive(Parser)]
#[command(name = "privacy-filter")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report detected privacy-sensitive spans as JSON
    Scan {
        /// Input text file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Redact a text file
    Filter {
        /// Input text file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Filter a JSON array of units and print the assembled report
    Report {
        /// JSON file with units (id, speaker_name, speaker_role, text)
        #[arg(short, long, value_name = "FILE")]
        units: PathBuf,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Redact every string value of a JSON document
    Json {
        /// Input JSON file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// List the built-in meeting types
    MeetingTypes,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PolicyArgs {
    /// Built-in meeting type name
    #[arg(short, long, value_name = "NAME")]
    meeting_type: Option<String>,

    /// Meeting type record as JSON
    #[arg(short, long, value_name = "FILE")]
    policy: Option<PathBuf>,
}

/// Command handler with the configured orchestrator.
struct FilterHandler {
    orchestrator: FilterOrchestrator,
}

impl FilterHandler {
    fn new(config: &PrivacyConfig) -> Result<Self> {
        let orchestrator = config
            .build_orchestrator()
            .context("Invalid privacy filter configuration")?;
        Ok(Self { orchestrator })
    }

    fn scan(&self, input: &Path) -> Result<()> {
        let text = read_input(input)?;
        let result = self
            .orchestrator
            .scanner()
            .try_scan(&input.display().to_string(), &text)
            .context("Scan failed")?;

        let output = serde_json::json!({
            "catalog_version": self.orchestrator.scanner().catalog().version(),
            "matches": result.matches,
            "counts": result.counts,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn filter(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let text = read_input(input)?;
        let mut unit = FilterableUnit::new(input.display().to_string(), text);
        let outcome = self.orchestrator.filter_unit(&mut unit);

        if outcome.needs_review() {
            anyhow::bail!(
                "Unit could not be filtered and needs manual review: {}",
                input.display()
            );
        }

        if let Some(output_path) = output {
            std::fs::write(output_path, unit.current_content())
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        } else {
            println!("{}", unit.current_content());
        }

        let total: usize = unit.privacy_markers().values().sum();
        if total > 0 {
            eprintln!("✓ Redacted {} instance(s)", total);
        } else {
            eprintln!("⚠ No privacy-sensitive data found");
        }

        Ok(())
    }

    fn report(&self, units_path: &Path, policy: &MeetingTypePolicy) -> Result<()> {
        let raw = read_input(units_path)?;
        let mut units: Vec<FilterableUnit> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid units JSON in {}", units_path.display()))?;

        self.orchestrator.filter_batch(&mut units);
        let report = self.orchestrator.assemble_report(policy, &units);

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn json(&self, input: &Path) -> Result<()> {
        let raw = read_input(input)?;
        let mut doc: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid JSON in {}", input.display()))?;

        if self.orchestrator.is_enabled() {
            let summary = filter_json(
                &mut doc,
                self.orchestrator.scanner(),
                self.orchestrator.redactor(),
            );
            tracing::info!(
                values = summary.values_redacted,
                withheld = summary.withheld.len(),
                "JSON document filtered"
            );
        }

        println!("{}", serde_json::to_string_pretty(&doc)?);
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn resolve_policy(args: &PolicyArgs) -> Result<MeetingTypePolicy> {
    if let Some(name) = &args.meeting_type {
        return presets::by_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown meeting type: {}", name));
    }

    let path = args
        .policy
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("--meeting-type or --policy is required"))?;
    let raw = read_input(path)?;
    MeetingTypePolicy::from_json(&raw)
        .with_context(|| format!("Invalid meeting type in {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => PrivacyConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PrivacyConfig::default(),
    };
    let handler = FilterHandler::new(&config)?;

    match &cli.command {
        Commands::Scan { input } => handler.scan(input)?,
        Commands::Filter { input, output } => handler.filter(input, output.as_deref())?,
        Commands::Report { units, policy } => {
            let policy = resolve_policy(policy)?;
            handler.report(units, &policy)?;
        }
        Commands::Json { input } => handler.json(input)?,
        Commands::MeetingTypes => {
            for policy in presets::all() {
                println!(
                    "{}\t{}",
                    policy.name,
                    policy.display_name.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}
