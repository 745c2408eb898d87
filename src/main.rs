use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use life_optimizer::config::Config;
use life_optimizer::engine::{self, Evaluation, Streak};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show overall scores, balance, key metrics and insights (default if no subcommand)
    Dashboard,
    /// Show every derived metric for each lifestyle domain
    Impacts,
    /// Project weight, scores and income over the next year
    Project,
    /// Estimate daily calorie needs from the configured profile
    Tdee {
        /// Activity level key (sedentary, light, moderate, active, very_active).
        /// Unknown keys fall back to moderate.
        #[arg(short, long)]
        activity: Option<String>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Json,
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "life-optimizer")]
#[command(about = "See where your daily habits lead", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/life-optimizer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Override one input for this run, e.g. --set sleep_hours=8 (repeatable)
    #[arg(long = "set", global = true, value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Serialize)]
struct DashboardReport<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    streak: &'a Streak,
    streak_message: &'a str,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_IO);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard);
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = life_optimizer::config::init::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_IO);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    if cli.verbose {
        match &config_path {
            Some(p) => eprintln!("Loading config from {}", p.display()),
            None => eprintln!("Loading config from default location"),
        }
    }
    let config: Config = match life_optimizer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = life_optimizer::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Apply per-run overrides, then validate the resulting snapshot
    let inputs = match life_optimizer::config::apply_overrides(&config.inputs, &cli.overrides) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    if let Err(errors) = engine::validate_inputs(&inputs) {
        eprintln!("Input errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    if cli.verbose && !cli.overrides.is_empty() {
        eprintln!("Applied {} override(s):", cli.overrides.len());
        for o in &cli.overrides {
            eprintln!("  {}", o);
        }
    }

    let use_colors = life_optimizer::output::should_use_colors();
    let evaluation = engine::evaluate(&inputs);

    if cli.verbose {
        let breakdowns = engine::explain_overall(&evaluation.impacts);
        eprintln!("{}", life_optimizer::output::format_breakdown(&breakdowns));
    }

    match command {
        Commands::Dashboard => {
            let today = chrono::Local::now().date_naive();
            match cli.format {
                Format::Table => println!(
                    "{}",
                    life_optimizer::output::format_dashboard(
                        &evaluation,
                        &config.streak,
                        today,
                        use_colors
                    )
                ),
                Format::Json => print_json(&DashboardReport {
                    evaluation: &evaluation,
                    streak: &config.streak,
                    streak_message: config.streak.message(),
                }),
                Format::Tsv => println!(
                    "{}",
                    life_optimizer::output::format_overall_tsv(&evaluation.overall)
                ),
            }
        }
        Commands::Impacts => match cli.format {
            Format::Table => println!(
                "{}",
                life_optimizer::output::format_impacts(&evaluation.impacts, use_colors)
            ),
            Format::Json => print_json(&evaluation.impacts),
            Format::Tsv => println!(
                "{}",
                life_optimizer::output::format_impacts_tsv(&evaluation.impacts)
            ),
        },
        Commands::Project => match cli.format {
            Format::Table => println!(
                "{}",
                life_optimizer::output::format_projection(
                    &evaluation.projection,
                    &evaluation.milestones,
                    use_colors
                )
            ),
            Format::Json => print_json(&serde_json::json!({
                "projection": evaluation.projection,
                "milestones": evaluation.milestones,
            })),
            Format::Tsv => println!(
                "{}",
                life_optimizer::output::format_projection_tsv(&evaluation.projection)
            ),
        },
        Commands::Tdee { activity } => {
            let key = activity.unwrap_or_else(|| config.profile.activity_level.key().to_string());
            if cli.verbose && engine::ActivityLevel::from_key(&key).is_none() {
                eprintln!("Unknown activity level '{}', using moderate multiplier", key);
            }
            let estimate = engine::tdee::estimate_energy(&config.profile, &key);
            match cli.format {
                Format::Table => println!(
                    "{}",
                    life_optimizer::output::format_energy(&estimate, use_colors)
                ),
                Format::Json => print_json(&estimate),
                Format::Tsv => println!(
                    "{:.2}\t{}\t{}\t{}",
                    estimate.bmr, estimate.activity_key, estimate.multiplier, estimate.tdee
                ),
            }
        }
        // Handled before the config is loaded
        Commands::Init => {}
    }

    if cli.verbose {
        eprintln!();
        eprintln!("Evaluated in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}
