//! Roster Tool CLI
//!
//! Lists the roster, converts CSV rosters to YAML and generates balanced teams.

#[cfg(feature = "cli")]
use anyhow::{bail, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tb_core::{
    balance, generate_teams, select_participants, BalanceSummary, GenerateTeamsRequest,
    RunConfiguration, SelectionStatus,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "roster_tool")]
#[command(about = "Manage rosters and generate balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show every regular with ratings and role
    List {
        /// Roster file (.yaml, .yml, .json or .csv)
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Convert a CSV roster into YAML
    Import {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Output YAML file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Split the present players into balanced teams
    Generate {
        /// Roster file (.yaml, .yml, .json or .csv)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Names of present regulars
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        present: Vec<String>,

        /// Guest as name:attack:defense:endurance:role or name:rating:role
        #[arg(long)]
        guest: Vec<String>,

        /// Number of teams
        #[arg(long, default_value_t = 2)]
        teams: usize,

        /// Players per team
        #[arg(long, default_value_t = 5)]
        per_team: usize,

        /// Print the JSON API response instead of the text report
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { roster } => {
            let roster = roster_tool::resolve_roster(roster.as_deref())?;
            print!("{}", roster_tool::render_roster(&roster));
            println!("\n{} regulars", roster.len());
        }

        Commands::Import { csv, out } => {
            println!("Importing roster from CSV...");
            println!("   Input:  {}", csv.display());
            println!("   Output: {}", out.display());

            let count = roster_tool::convert_csv_to_yaml(&csv, &out)?;
            println!("\n{} players written", count);
        }

        Commands::Generate { roster, present, guest, teams, per_team, json } => {
            let config = RunConfiguration::new(teams, per_team);
            if !config.is_reference() {
                log::warn!(
                    "{} teams of {} is outside the usual setups (2-3 teams of 4-6)",
                    teams,
                    per_team
                );
            }

            let roster = roster_tool::resolve_roster(roster.as_deref())?;
            let guests = roster_tool::guests_from_specs(&guest)?;
            let participants = select_participants(&roster, &present, &guests)?;
            let status = SelectionStatus::new(participants.len(), &config);

            if json {
                let request = GenerateTeamsRequest { schema_version: None, config, participants };
                let response = generate_teams(&request);
                println!("{}", serde_json::to_string_pretty(&response)?);
                if !response.success {
                    std::process::exit(1);
                }
                return Ok(());
            }

            println!("{}\n", roster_tool::render_selection(&status));
            match balance(&participants, &config) {
                Ok(teams) => {
                    let summary = BalanceSummary::of(&teams);
                    print!("{}", roster_tool::render_teams(&teams, &summary));
                }
                Err(err) => bail!(roster_tool::describe_failure(&err)),
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("roster_tool CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
