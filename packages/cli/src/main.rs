#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal front end for the waste dashboard.
//!
//! Without a subcommand, lets the user interactively pick between browsing
//! the dashboard, starting the API server and exporting CSV. The
//! subcommands do the same non-interactively.

mod interactive;
mod render;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use waste_dashboard_dataset::export::write_csv;
use waste_dashboard_dataset::{Snapshot, build_snapshot, config};
use waste_dashboard_dataset_models::DateRange;
use waste_dashboard_server::{CONFIG_ENV, ServerConfig};
use waste_dashboard_view::{Session, resolve_range, select_by_name};

#[derive(Parser)]
#[command(name = "waste_dashboard_cli", about = "Waste management dashboard")]
struct Cli {
    /// TOML generation config (falls back to `DASHBOARD_CONFIG`, then defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one section and the filtered preview
    Show {
        /// Section tag or label
        #[arg(long, default_value = "KeyMetrics")]
        section: String,
        /// First date of the preview filter
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last date of the preview filter
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Export records as CSV
    Export {
        /// First date to export
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last date to export
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Start the HTTP API server
    Serve,
}

/// Top-level tool selection when no subcommand is given.
enum Tool {
    Browse,
    Server,
    Export,
}

impl Tool {
    const ALL: &[Self] = &[Self::Browse, Self::Server, Self::Export];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Browse => "Browse dashboard",
            Self::Server => "Start server",
            Self::Export => "Export CSV",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let generation = config::load_config_or_default(config_path.as_deref())?;
    let snapshot = build_snapshot(&generation)?;

    match cli.command {
        Some(Commands::Show { section, from, to }) => {
            let range = DateRange::from_bounds(from, to, snapshot.span());
            let view = select_by_name(&snapshot, &section, range)?;
            print!("{}", render::render_view(&view));
        }
        Some(Commands::Export { from, to, output }) => {
            export(&snapshot, from, to, output.as_deref())?;
        }
        Some(Commands::Serve) => {
            actix_web::rt::System::new()
                .block_on(waste_dashboard_server::serve(snapshot, ServerConfig::from_env()))?;
        }
        None => run_interactive(snapshot)?,
    }

    Ok(())
}

fn run_interactive(snapshot: Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    println!("Waste Dashboard");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Browse => interactive::browse(&mut Session::new(snapshot))?,
        Tool::Server => {
            actix_web::rt::System::new()
                .block_on(waste_dashboard_server::interactive::run(snapshot))?;
        }
        Tool::Export => {
            let range = interactive::prompt_range(snapshot.span())?;
            let output: String = Input::new()
                .with_prompt("Output file")
                .default("waste_data.csv".to_string())
                .interact_text()?;
            export(
                &snapshot,
                Some(range.start),
                Some(range.end),
                Some(Path::new(&output)),
            )?;
        }
    }

    Ok(())
}

/// Writes the records within the requested range as CSV to `output`, or to
/// stdout when `output` is `None`.
fn export(
    snapshot: &Snapshot,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let requested = DateRange::from_bounds(from, to, snapshot.span());
    let range = resolve_range(snapshot.span(), requested)?;
    let records = snapshot.dataset().records_between(&range);

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    write_csv(records, writer)?;

    if let Some(path) = output {
        log::info!(
            "Exported {} records ({range}) to {}",
            records.len(),
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_dates_and_global_config() {
        let cli = Cli::parse_from([
            "waste_dashboard_cli",
            "show",
            "--section",
            "RawTable",
            "--from",
            "2024-03-01",
            "--config",
            "dashboard.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("dashboard.toml")));
        let Some(Commands::Show { section, from, to }) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(section, "RawTable");
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(to, None);
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["waste_dashboard_cli"]);
        assert!(cli.command.is_none());
    }
}
