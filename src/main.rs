use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use standing::config::Config;
use standing::session::Session;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_USAGE: i32 = 5;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List subjects ranked by score (default if no subcommand)
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Show the score breakdown for one subject
    Show {
        /// Subject id, e.g. EMP-3321
        id: String,
    },
    /// Print tier thresholds and suggested actions
    Tiers,
    /// Dashboard totals: top performer, attendance, inactivity alerts
    Summary,
    /// Interactive session for editing events and weights (changes are not saved)
    Session,
    /// Write the demo roster as a starter config file
    Init {
        /// Where to write (defaults to ~/.config/standing/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "standing")]
#[command(about = "Weighted performance scoring with tiers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/standing/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Use the built-in demo roster instead of a config file
    #[arg(long, global = true)]
    demo: bool,

    /// Override scoring.event_weight
    #[arg(long, global = true)]
    event_weight: Option<f64>,

    /// Override scoring.penalty_weight
    #[arg(long, global = true)]
    penalty_weight: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List {
        format: Format::Table,
    });
    let start_time = Instant::now();

    if let Commands::Init { path, force } = &command {
        let path = match path.clone().map(Ok).unwrap_or_else(standing::config::get_config_path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = standing::config::write_starter_config(&path, *force) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_IO);
        }
        println!("Config written to {}", path.display());
        println!("Run `standing` to see the ranking.");
        std::process::exit(EXIT_SUCCESS);
    }

    // Load roster
    let mut config = if cli.demo {
        if cli.verbose {
            eprintln!("Using built-in demo roster");
        }
        Config::demo()
    } else {
        let config_path = cli.config.map(PathBuf::from);
        match standing::config::load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    };
    config.scoring = Some(
        config
            .effective_scoring()
            .with_overrides(cli.event_weight, cli.penalty_weight),
    );

    // Validate roster at startup
    if let Err(errors) = standing::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    for warning in standing::config::config_warnings(&config) {
        eprintln!("warning: {}", warning);
    }

    if cli.verbose {
        let scoring = config.effective_scoring();
        eprintln!(
            "Loaded {} events and {} subjects",
            config.events.len(),
            config.subjects.len()
        );
        eprintln!(
            "  Weights: events x{}, penalty x{}",
            scoring.event_weight, scoring.penalty_weight
        );
    }

    let mut session = Session::from_config(config);
    let use_colors = standing::output::should_use_colors();

    match command {
        Commands::List { format } => {
            let ranked = session.ranked();
            let output = match format {
                Format::Table => standing::output::format_ranked_table(&ranked, use_colors),
                Format::Tsv => standing::output::format_tsv(&ranked),
                Format::Json => match standing::output::format_json(&ranked) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                },
            };
            println!("{}", output);

            if cli.verbose {
                eprintln!();
                eprintln!("Total: {} subjects in {:?}", ranked.len(), start_time.elapsed());
            }
        }
        Commands::Show { id } => match (session.subject(&id), session.score(&id)) {
            (Some(subject), Some(result)) => {
                println!(
                    "{}",
                    standing::output::format_breakdown(
                        subject,
                        &result,
                        &session.scoring(),
                        use_colors
                    )
                );
            }
            _ => {
                eprintln!("No subject with id '{}'", id);
                std::process::exit(EXIT_USAGE);
            }
        },
        Commands::Tiers => println!("{}", standing::output::format_tier_table(use_colors)),
        Commands::Summary => {
            let summary = standing::summary::summarize(&session);
            println!("{}", standing::output::format_summary(&summary, use_colors));
        }
        Commands::Session => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            if let Err(e) =
                standing::session::run_session(&mut session, &mut input, &mut output, use_colors)
            {
                eprintln!("Session error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Init { .. } => unreachable!("handled before loading the roster"),
    }

    std::process::exit(EXIT_SUCCESS);
}
