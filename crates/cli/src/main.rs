use clap::{Parser, Subcommand};
use rules::{
    MatchTimeTable, RulesError,
    dto::division::DivisionDescriptor,
    models::{Athlete, Match},
    services::{age, pairing::MatchPair},
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use commands::RosterFile;
use error::CliError;

#[derive(Parser)]
#[command(name = "bjj-rules")]
#[command(about = "Jiu-jitsu tournament rules: catalogs, match times, ages and pairings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every reference table as JSON
    Catalog,
    /// Regulation match duration for a division
    MatchTime {
        #[arg(long, env = "BJJ_AGE_CATEGORY")]
        age_category: Option<String>,

        #[arg(long, env = "BJJ_BELT_RANK")]
        belt_rank: Option<String>,

        /// JSON division record; flags override its fields
        #[arg(long)]
        division: Option<PathBuf>,
    },
    /// Age in completed years
    Age {
        #[arg(long)]
        dob: String,

        /// Reference date, defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// Check a batch of manual pairings against the division roster
    ValidatePairs {
        #[arg(long)]
        roster: PathBuf,

        #[arg(long)]
        pairs: PathBuf,
    },
    /// Show matches grouped into named rounds
    Bracket {
        #[arg(long)]
        matches: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// List athletes still available for a division
    Athletes {
        #[arg(long)]
        athletes: PathBuf,

        #[arg(long)]
        enrolled: Option<PathBuf>,

        #[arg(long, default_value = "")]
        search: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bjj_rules={},rules={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Catalog => {
            println!("{}", commands::catalog()?);
        }
        Commands::MatchTime {
            age_category,
            belt_rank,
            division,
        } => {
            handle_match_time(age_category, belt_rank, division).await?;
        }
        Commands::Age { dob, today } => {
            println!("{}", commands::age(&dob, today.as_deref())?);
        }
        Commands::ValidatePairs { roster, pairs } => {
            handle_validate_pairs(roster, pairs).await?;
        }
        Commands::Bracket { matches, json } => {
            handle_bracket(matches, json).await?;
        }
        Commands::Athletes {
            athletes,
            enrolled,
            search,
        } => {
            handle_athletes(athletes, enrolled, &search).await?;
        }
    }

    Ok(())
}

async fn handle_match_time(
    age_category: Option<String>,
    belt_rank: Option<String>,
    division: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = match division {
        Some(path) => {
            tracing::info!("Loading division from: {}", path.display());
            Some(commands::load_json::<DivisionDescriptor>(&path).await?)
        }
        None => None,
    };

    let descriptor = commands::merge_descriptor(file, age_category, belt_rank);
    println!(
        "{}",
        commands::match_time(MatchTimeTable::standard(), descriptor.as_ref())?
    );

    Ok(())
}

async fn handle_validate_pairs(
    roster: PathBuf,
    pairs: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let roster = commands::load_json::<RosterFile>(&roster).await?.into_entries();
    let pairs: Vec<MatchPair> = commands::load_json(&pairs).await?;

    tracing::info!(
        "Validating {} pair(s) against {} athlete(s)",
        pairs.len(),
        roster.len()
    );

    for line in commands::describe_pairs(&pairs, &roster) {
        println!("{}", line);
    }

    let report = commands::validate_pairs(&pairs, &roster);
    if report.is_valid() {
        tracing::info!("✓ Pairings are valid");
        return Ok(());
    }

    let messages = report.messages();
    for message in &messages {
        eprintln!("✗ {}", message);
    }
    Err(CliError::from(RulesError::InvalidPairings(messages)).into())
}

async fn handle_bracket(matches: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let matches: Vec<Match> = commands::load_json(&matches).await?;

    if json {
        let rounds = rules::services::bracket::organize_by_round(&matches);
        println!("{}", serde_json::to_string_pretty(&rounds)?);
        return Ok(());
    }

    for line in commands::bracket(&matches) {
        println!("{}", line);
    }

    Ok(())
}

async fn handle_athletes(
    athletes: PathBuf,
    enrolled: Option<PathBuf>,
    search: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let all: Vec<Athlete> = commands::load_json(&athletes).await?;
    let enrolled: Vec<Athlete> = match enrolled {
        Some(path) => commands::load_json(&path).await?,
        None => Vec::new(),
    };

    let found = commands::athletes(&all, &enrolled, search);
    tracing::info!("{} of {} athlete(s) available", found.len(), all.len());

    for athlete in found {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            athlete.id,
            athlete.name,
            athlete.belt_rank.label(),
            age::display_age(athlete.age()),
            athlete.team.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
