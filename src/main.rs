use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cloud_advisor::config;
use cloud_advisor::output::{self, Report};
use cloud_advisor::profile::{validate_profile, ProfileConfig};

const EXIT_SUCCESS: u8 = 0;
const EXIT_IO: u8 = 1;
const EXIT_CONFIG: u8 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Score metrics, tier banners and considerations
    #[default]
    Text,
    /// category<TAB>score<TAB>tier, highest first
    Tsv,
    /// Full report including the profile and score breakdown
    Json,
}

#[derive(Args, Debug, Default)]
struct EvaluateArgs {
    /// Industry (tech, finance, healthcare, manufacturing, ai-research, government, other)
    #[arg(long)]
    industry: Option<String>,

    /// Primary region (north-america, europe, asia, global)
    #[arg(long)]
    region: Option<String>,

    /// Budget constraint (low, medium, high)
    #[arg(long)]
    budget: Option<String>,

    /// Data sovereignty requirement (none, prefer-local, must-stay-in-country)
    #[arg(long)]
    sovereignty: Option<String>,

    /// Compliance requirement (gdpr, hipaa, fedramp, pci, sox, iso27001); repeatable
    #[arg(long, value_delimiter = ',')]
    compliance: Option<Vec<String>>,

    /// Technical requirement (ai-ml, serverless, edge-computing, containers, iot, blockchain); repeatable
    #[arg(long, value_delimiter = ',')]
    tech: Option<Vec<String>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show how each factor moved the scores
    #[arg(long)]
    breakdown: bool,
}

impl EvaluateArgs {
    fn profile_overrides(&self) -> ProfileConfig {
        ProfileConfig {
            industry: self.industry.clone(),
            region: self.region.clone(),
            budget: self.budget.clone(),
            data_sovereignty: self.sovereignty.clone(),
            compliance: self.compliance.clone(),
            tech: self.tech.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score provider categories for a profile (default if no subcommand)
    Evaluate(EvaluateArgs),
    /// Create a config file with an interactive profile wizard
    Init {
        /// Where to write the config (defaults to ~/.config/cloud-advisor/config.yaml)
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "cloud-advisor")]
#[command(about = "Cloud and AI provider recommendations from an organization profile", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file (defaults to ~/.config/cloud-advisor/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Evaluate(EvaluateArgs::default()));

    let code = match command {
        Commands::Init { path } => match config::init::run_init_wizard(path) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                EXIT_IO
            }
        },
        Commands::Evaluate(args) => run_evaluate(cli.config, &args, !cli.no_color),
    };

    ExitCode::from(code)
}

fn run_evaluate(config_path: Option<PathBuf>, args: &EvaluateArgs, allow_colors: bool) -> u8 {
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let raw_profile = config.profile.merge(args.profile_overrides());
    tracing::info!(?raw_profile, "effective profile");

    if let Err(errors) = validate_profile(&raw_profile) {
        eprintln!("Profile errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_CONFIG;
    }

    let profile = match raw_profile.resolve() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Profile error: {}", e);
            return EXIT_CONFIG;
        }
    };

    let report = Report::build(profile);
    let use_colors = allow_colors && output::should_use_colors();

    match args.format {
        OutputFormat::Text => {
            let show_breakdown = args.breakdown || tracing::enabled!(tracing::Level::DEBUG);
            println!(
                "{}",
                output::format_report(&report, show_breakdown, use_colors)
            );
        }
        OutputFormat::Tsv => println!("{}", output::format_tsv(&report.recommendations)),
        OutputFormat::Json => match output::format_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                return EXIT_IO;
            }
        },
    }

    EXIT_SUCCESS
}
