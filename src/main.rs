//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use fpl_league::{
    cli::{Commands, FplLeague, GetCmd},
    commands::{snapshot::handle_snapshot, views::*},
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, debug_requests: bool) {
    let default = if verbose {
        "fpl_league=debug"
    } else if debug_requests {
        "fpl_league=info,fpl_league::fpl::http=debug"
    } else {
        "fpl_league=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FplLeague::parse();

    match app.command {
        Commands::Get { cmd } => {
            init_logging(app.verbose, cmd.source().debug);

            match cmd {
                GetCmd::Report {
                    source,
                    window,
                    json,
                } => handle_report(source, window, json).await?,
                GetCmd::Standings { source, json } => handle_standings(source, json).await?,
                GetCmd::TeamOfTheWeek { source, json } => {
                    handle_team_of_the_week(source, json).await?
                }
                GetCmd::Transfers { source, json } => handle_transfers(source, json).await?,
                GetCmd::RankHistory {
                    source,
                    window,
                    json,
                } => handle_rank_history(source, window, json).await?,
                GetCmd::Highlights { source, json } => handle_highlights(source, json).await?,
                GetCmd::Snapshot { source, output } => {
                    handle_snapshot(source, output).await?;
                }
            }
        }
    }

    Ok(())
}
