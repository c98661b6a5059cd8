//! Per-manager enrichment and league-wide aggregation.
//!
//! Enrichment of one manager is a pure function of the shared gameweek
//! context and that manager's bundle. Managers are processed in parallel with
//! rayon; each produces its own [`PlayerPool`], and the pools are reduced with
//! the commutative [`PlayerPool::merge`], so there is no shared mutable state.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::{Cost, Gameweek, PlayerId},
    fpl::{snapshot::ManagerBundle, types::LeagueInfo, LeagueSnapshot},
    league::{
        models::{
            ChipPlay, EnrichedManager, LineupStats, LiveStat, ManagerEntry, Player, Transfer,
            TransferImpact, ValuePick, NO_CHIP,
        },
        pool::PlayerPool,
    },
};


/// History entries kept on each enriched manager.
pub const RECENT_HISTORY_LEN: usize = 5;

/// Read-only lookups shared by every per-manager enrichment.
#[derive(Debug)]
pub struct GameweekContext<'a> {
    pub gameweek: Gameweek,
    players: HashMap<PlayerId, &'a Player>,
    live: HashMap<PlayerId, &'a LiveStat>,
}

impl<'a> GameweekContext<'a> {
    pub fn new(gameweek: Gameweek, players: &'a [Player], live: &'a [LiveStat]) -> Self {
        Self {
            gameweek,
            players: players.iter().map(|p| (p.id, p)).collect(),
            live: live.iter().map(|s| (s.player, s)).collect(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&'a Player> {
        self.players.get(&id).copied()
    }

    pub fn live(&self, id: PlayerId) -> Option<&'a LiveStat> {
        self.live.get(&id).copied()
    }

    /// Live points, 0 when the player has no live record.
    pub fn points(&self, id: PlayerId) -> i32 {
        self.live(id).map_or(0, |s| s.total_points)
    }
}

/// Everything one manager contributes to the aggregate.
#[derive(Debug, Clone)]
pub struct ManagerOutcome {
    pub manager: EnrichedManager,
    pub transfers: Vec<TransferImpact>,
    pub pool: PlayerPool,
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueAggregate {
    pub league: LeagueInfo,
    pub gameweek: Gameweek,
    /// In standings order.
    pub managers: Vec<EnrichedManager>,
    pub pool: PlayerPool,
    /// Sorted by descending point differential; ties keep standings order.
    pub transfers: Vec<TransferImpact>,
}

impl LeagueAggregate {
    pub fn league_size(&self) -> usize {
        self.managers.len()
    }
}

/// Gameweek points per £1m. A free player is worth 0, not infinity.
pub fn points_per_cost(points: i32, cost: Cost) -> f64 {
    if cost.is_zero() {
        0.0
    } else {
        f64::from(points) / cost.as_f64()
    }
}

/// Name of the chip played in `gameweek`, or [`NO_CHIP`].
pub fn active_chip(chips: &[ChipPlay], gameweek: Gameweek) -> String {
    chips
        .iter()
        .find(|c| c.gameweek == gameweek)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| NO_CHIP.to_string())
}

/// Point swing of each transfer the manager made for the context's gameweek.
pub fn transfer_impacts(
    ctx: &GameweekContext<'_>,
    entry: &ManagerEntry,
    transfers: &[Transfer],
) -> Vec<TransferImpact> {
    transfers
        .iter()
        .filter(|t| t.gameweek == ctx.gameweek)
        .map(|t| {
            let points_in = ctx.points(t.player_in);
            let points_out = ctx.points(t.player_out);
            TransferImpact {
                manager_id: entry.id,
                manager_name: entry.manager_name.clone(),
                team_name: entry.team_name.clone(),
                player_in_id: t.player_in,
                player_out_id: t.player_out,
                player_in: ctx.player(t.player_in).cloned(),
                player_out: ctx.player(t.player_out).cloned(),
                points_in,
                points_out,
                diff: points_in - points_out,
            }
        })
        .collect()
}

/// Enrich one manager and build their contribution to the player pool.
pub fn enrich_manager(ctx: &GameweekContext<'_>, bundle: &ManagerBundle) -> ManagerOutcome {
    let active_chip = active_chip(&bundle.chips, ctx.gameweek);
    let transfers = transfer_impacts(ctx, &bundle.entry, &bundle.transfers);

    let starting = bundle.picks.starting();
    let did_not_play = starting
        .iter()
        .filter(|id| ctx.live(**id).is_some_and(|s| s.minutes == 0))
        .count();
    let bench_points = bundle.picks.bench().iter().map(|id| ctx.points(*id)).sum();

    let mut lineup = LineupStats::default();
    let mut pool = PlayerPool::new();
    let mut best_value: Option<ValuePick> = None;
    let mut worst_value: Option<ValuePick> = None;

    for &id in starting {
        if let Some(stat) = ctx.live(id) {
            lineup.add(stat);
        }

        // Unknown ids have no cost or position, so they cannot be valued or pooled.
        let Some(player) = ctx.player(id) else {
            continue;
        };
        let points = ctx.points(id);
        pool.record(player, points);

        let value = ValuePick {
            player: player.clone(),
            gameweek_points: points,
            points_per_cost: points_per_cost(points, player.cost),
        };
        if best_value
            .as_ref()
            .map_or(true, |b| value.points_per_cost > b.points_per_cost)
        {
            best_value = Some(value.clone());
        }
        if worst_value
            .as_ref()
            .map_or(true, |w| value.points_per_cost < w.points_per_cost)
        {
            worst_value = Some(value);
        }
    }

    let skip = bundle.history.len().saturating_sub(RECENT_HISTORY_LEN);
    let recent_history = bundle.history[skip..].to_vec();

    ManagerOutcome {
        manager: EnrichedManager {
            entry: bundle.entry.clone(),
            active_chip,
            lineup,
            did_not_play,
            bench_points,
            best_value,
            worst_value,
            recent_history,
        },
        transfers,
        pool,
    }
}

/// Run the aggregator over a snapshot.
///
/// Deterministic: the same snapshot always produces the same aggregate.
pub fn aggregate(snapshot: &LeagueSnapshot) -> LeagueAggregate {
    let ctx = GameweekContext::new(snapshot.gameweek, &snapshot.players, &snapshot.live);

    let outcomes: Vec<ManagerOutcome> = snapshot
        .managers
        .par_iter()
        .map(|bundle| enrich_manager(&ctx, bundle))
        .collect();

    let mut managers = Vec::with_capacity(outcomes.len());
    let mut transfers = Vec::new();
    let mut pools = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        managers.push(outcome.manager);
        transfers.extend(outcome.transfers);
        pools.push(outcome.pool);
    }

    let pool = pools
        .into_par_iter()
        .reduce(PlayerPool::new, PlayerPool::merge);
    transfers.sort_by_key(|t| std::cmp::Reverse(t.diff));

    debug!(
        managers = managers.len(),
        pooled = pool.len(),
        transfers = transfers.len(),
        "aggregation complete"
    );

    LeagueAggregate {
        league: snapshot.league.clone(),
        gameweek: snapshot.gameweek,
        managers,
        pool,
        transfers,
    }
}
