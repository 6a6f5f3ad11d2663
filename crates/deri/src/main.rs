mod config;
mod logging;
mod report;

use clap::{ArgAction, Parser, Subcommand};
use config::{ConfigError, Settings};
use deri_core::DeriError;
use deri_core::types::{DurationOrder, IncidentId, PoliceId};
use deri_serve::{AppState, build_deri};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

#[derive(Parser)]
#[command(name = "deri", version, about = "Security incident analytics")]
struct Cli {
    /// Settings file; `./deri.toml` is used when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve,
    /// Print the OpenAPI document.
    Openapi,
    /// Analyze stored data and print a report.
    Analyze {
        #[command(subcommand)]
        target: AnalyzeTarget,
    },
}

#[derive(Subcommand)]
enum AnalyzeTarget {
    /// Time spent in each status by one incident.
    Incident {
        id: IncidentId,
        /// Order rows by when each status was first entered.
        #[arg(long)]
        first_occurrence: bool,
        #[arg(long)]
        json: bool,
    },
    /// Attention-time statistics for one officer.
    Police {
        id: PoliceId,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deri(#[from] DeriError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("cannot render report: {0}")]
    Render(#[from] std::fmt::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => {
            logging::init(cli.verbose, settings.log.filter.as_deref());
            run(cli.command, &settings).await
        }
        Err(err) => Err(err.into()),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, settings: &Settings) -> Result<(), CliError> {
    match command {
        Command::Serve => {
            ensure_parent_dir(&settings.database.path)?;
            let state = app_state(settings);
            info!(percentiles = ?settings.analysis.percentiles, "starting server");
            deri_serve::serve(state, settings.socket_addr()).await?;
        }
        Command::Openapi => {
            println!("{}", deri_serve::openapi::generate_spec());
        }
        Command::Analyze { target } => analyze(target, settings)?,
    }
    Ok(())
}

fn analyze(target: AnalyzeTarget, settings: &Settings) -> Result<(), CliError> {
    let deri = build_deri(&app_state(settings))?;
    let color = std::io::stdout().is_terminal();
    match target {
        AnalyzeTarget::Incident {
            id,
            first_occurrence,
            json,
        } => {
            let order = if first_occurrence {
                DurationOrder::FirstOccurrence
            } else {
                DurationOrder::StatusId
            };
            let analysis = deri.analysis().incident_status_time(id, order)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", report::status_time(&analysis, color)?);
            }
        }
        AnalyzeTarget::Police { id, json } => {
            let analysis = deri.analysis().police_attention(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", report::attention(&analysis, color)?);
            }
        }
    }
    Ok(())
}

fn app_state(settings: &Settings) -> AppState {
    AppState {
        db_path: settings.database.path.clone(),
        analysis: settings.analysis_settings(),
    }
}

fn ensure_parent_dir(db_path: &str) -> std::io::Result<()> {
    match Path::new(db_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_incident_flags() {
        let cli = Cli::try_parse_from([
            "deri",
            "-vv",
            "analyze",
            "incident",
            "7",
            "--first-occurrence",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Analyze {
                target:
                    AnalyzeTarget::Incident {
                        id,
                        first_occurrence,
                        json,
                    },
            } => {
                assert_eq!(id, IncidentId::new(7));
                assert!(first_occurrence);
                assert!(!json);
            }
            _ => panic!("expected analyze incident"),
        }
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(Cli::try_parse_from(["deri", "analyze", "police", "abc"]).is_err());
    }

    #[test]
    fn creates_database_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("deri.db");
        ensure_parent_dir(db_path.to_str().unwrap()).unwrap();
        assert!(dir.path().join("nested").is_dir());
        ensure_parent_dir("deri.db").unwrap();
    }
}
