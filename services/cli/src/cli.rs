use crate::infra::{build_analyzer, load_catalog, Overrides, SharedContext};
use crate::render::{render_analysis_json, render_analysis_text};
use clap::{Args, Parser, Subcommand, ValueEnum};
use outage_intel::config::AppConfig;
use outage_intel::error::AppError;
use outage_intel::outage::{ZoneAnalyzer, ZoneInput};
use outage_intel::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Outage Impact Planner",
    about = "Score the impact of a power outage on a service zone and print a restoration plan",
    version
)]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List the zone identifiers known to the catalog
    Zones,
    /// Analyze a single zone
    Analyze(AnalyzeArgs),
    /// Analyze every known zone with the same outage assumptions (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default, PartialEq)]
struct CatalogArgs {
    /// Zones CSV export replacing the built-in catalog (requires --hospitals-csv)
    #[arg(long, global = true, requires = "hospitals_csv")]
    zones_csv: Option<PathBuf>,
    /// Hospitals CSV export joined onto --zones-csv
    #[arg(long, global = true, requires = "zones_csv")]
    hospitals_csv: Option<PathBuf>,
    /// Seed the synthetic weather sample for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, PartialEq)]
struct AnalyzeArgs {
    /// Zone identifier, e.g. ZONE-001
    #[arg(long)]
    zone: String,
    /// Expected outage duration in hours
    #[arg(long)]
    duration: f64,
    /// Hospital backup capacity in hours
    #[arg(long)]
    backup_hours: f64,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug, PartialEq)]
struct DemoArgs {
    /// Expected outage duration in hours
    #[arg(long, default_value_t = 4.0)]
    duration: f64,
    /// Hospital backup capacity in hours
    #[arg(long, default_value_t = 24.0)]
    backup_hours: f64,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            duration: 4.0,
            backup_hours: 24.0,
        }
    }
}

impl CatalogArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            seed: self.seed,
            zones_csv: self.zones_csv.clone(),
            hospitals_csv: self.hospitals_csv.clone(),
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let overrides = cli.catalog.overrides();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Zones => {
            let catalog = load_catalog(&config, &overrides)?;
            for zone_id in catalog.zone_ids() {
                println!("{zone_id}");
            }
            Ok(())
        }
        Command::Analyze(args) => {
            let analyzer = build_analyzer(&config, &overrides)?;
            run_analyze(&analyzer, args)
        }
        Command::Demo(args) => {
            let analyzer = build_analyzer(&config, &overrides)?;
            run_demo(&analyzer, args)
        }
    }
}

fn run_analyze(analyzer: &ZoneAnalyzer<SharedContext>, args: AnalyzeArgs) -> Result<(), AppError> {
    let input = ZoneInput::new(args.zone, args.duration, args.backup_hours)?;
    let analysis = analyzer.analyze(&input)?;

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => render_analysis_text(&mut stdout, &analysis)?,
        OutputFormat::Json => writeln!(stdout, "{}", render_analysis_json(&analysis)?)?,
    }
    Ok(())
}

fn run_demo(analyzer: &ZoneAnalyzer<SharedContext>, args: DemoArgs) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Outage impact demo: {}h outage, {}h hospital backup",
        args.duration, args.backup_hours
    )?;

    for zone_id in analyzer.zone_ids() {
        let input = ZoneInput::new(zone_id, args.duration, args.backup_hours)?;
        let analysis = analyzer.analyze(&input)?;
        writeln!(stdout)?;
        render_analysis_text(&mut stdout, &analysis)?;
    }
    Ok(())
}
