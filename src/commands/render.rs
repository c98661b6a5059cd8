//! Plain-text rendering of the computed views.
//!
//! Every function returns the text instead of printing it so output can be
//! asserted in tests.

use crate::{
    cli::types::Position,
    league::{
        models::{chip_label, EnrichedManager, Player, TransferImpact, ValuePick},
        rank_history::unique_labels,
        LeagueHighlights, LeagueReport, RankRow, TeamOfTheWeek,
    },
    PlayerId,
};

fn value_label(value: &Option<ValuePick>) -> String {
    match value {
        Some(v) => format!("{} {:.2}", v.player.name, v.points_per_cost),
        None => "-".to_string(),
    }
}

fn player_label(player: &Option<Player>, id: PlayerId) -> String {
    match player {
        Some(p) => p.name.clone(),
        None => format!("#{}", id),
    }
}

pub fn render_standings(managers: &[EnrichedManager]) -> String {
    managers
        .iter()
        .map(|m| {
            format!(
                concat!(
                    "{:>3}. {} ({})  GW {:>3}  Total {:>5}  Chip {}  DNP {}  Bench {}  ",
                    "Clinical {:+.2}  B/Y/R {}/{}/{}  Best {}  Worst {}"
                ),
                m.entry.rank,
                m.entry.team_name,
                m.entry.manager_name,
                m.entry.gameweek_points,
                m.entry.total_points,
                chip_label(&m.active_chip),
                m.did_not_play,
                m.bench_points,
                m.clinicality(),
                m.lineup.bonus,
                m.lineup.yellow_cards,
                m.lineup.red_cards,
                value_label(&m.best_value),
                value_label(&m.worst_value),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Smallest denominator used for ownership, so tiny leagues are not all `1/1`.
pub const MIN_OWNERSHIP_BASE: usize = 5;

/// Ownership as `owned/base`, with the base never below [`MIN_OWNERSHIP_BASE`].
pub fn ownership_label(owned: u32, league_size: usize) -> String {
    format!("{}/{}", owned, league_size.max(MIN_OWNERSHIP_BASE))
}

/// One line per position row, captains marked `(C)` with doubled points.
pub fn render_team_of_the_week(team: &TeamOfTheWeek, league_size: usize) -> String {
    if team.is_empty() {
        return "No players started this gameweek".to_string();
    }

    let mut lines: Vec<String> = Position::ALL
        .iter()
        .zip(team.rows())
        .filter(|(_, row)| !row.is_empty())
        .map(|(position, row)| {
            let players = row
                .iter()
                .map(|p| {
                    let captain = if p.is_captain { " (C)" } else { "" };
                    format!(
                        "{}{} {} [{}]",
                        p.pooled.player.name,
                        captain,
                        p.display_points,
                        ownership_label(p.pooled.owned_count, league_size)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}  {}", position, players)
        })
        .collect();
    lines.push(format!("Total {}", team.total_display_points()));
    lines.join("\n")
}

pub fn render_transfers(transfers: &[TransferImpact]) -> String {
    if transfers.is_empty() {
        return "No transfers this gameweek".to_string();
    }

    transfers
        .iter()
        .map(|t| {
            format!(
                "{:+4}  {}: {} ({}) -> {} ({})",
                t.diff,
                t.team_name,
                player_label(&t.player_out, t.player_out_id),
                t.points_out,
                player_label(&t.player_in, t.player_in_id),
                t.points_in,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table with one line per team in `teams` order and one column per gameweek.
///
/// Teams sharing a name are told apart the same way the rows key them.
pub fn render_rank_history(rows: &[RankRow], teams: &[&str]) -> String {
    if rows.is_empty() {
        return "No history recorded".to_string();
    }

    let labels = unique_labels(teams);
    let width = labels.iter().map(|t| t.len()).max().unwrap_or(0).max(4);
    let header = rows
        .iter()
        .fold(format!("{:<width$}", "Team"), |acc, r| format!("{} {:>5}", acc, r.label));

    let body = labels.iter().map(|label| {
        rows.iter().fold(format!("{:<width$}", label), |acc, r| {
            let cell = r
                .positions
                .get(label)
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            format!("{} {:>5}", acc, cell)
        })
    });

    std::iter::once(header).chain(body).collect::<Vec<_>>().join("\n")
}

pub fn render_highlights(highlights: &LeagueHighlights) -> String {
    let lines: Vec<String> = highlights
        .iter()
        .map(|h| format!("{}: {} ({}) {}", h.title, h.team_name, h.manager_name, h.impact))
        .collect();
    if lines.is_empty() {
        return "No highlights".to_string();
    }
    lines.join("\n")
}

pub fn render_report(report: &LeagueReport) -> String {
    let teams: Vec<&str> = report
        .standings
        .iter()
        .map(|m| m.entry.team_name.as_str())
        .collect();

    [
        format!(
            "{} | {} | {} managers",
            report.league.name,
            report.gameweek.label(),
            report.league_size
        ),
        format!("\nStandings\n{}", render_standings(&report.standings)),
        format!("\nTransfers\n{}", render_transfers(&report.transfers)),
        format!(
            "\nTeam of the Week\n{}",
            render_team_of_the_week(&report.team_of_the_week, report.league_size)
        ),
        format!(
            "\nRank History\n{}",
            render_rank_history(&report.rank_history, &teams)
        ),
        format!("\nHighlights\n{}", render_highlights(&report.highlights)),
    ]
    .join("\n")
}
