//! Team of the Week: the best-scoring legal XI drawn from the league's pool.

use serde::Serialize;

use crate::{
    cli::types::Position,
    league::{models::PooledPlayer, pool::PlayerPool},
};


/// Players in a full selection.
pub const TEAM_SIZE: usize = 11;

/// Inclusive `(min, max)` players per position in a legal XI.
pub fn formation_bounds(position: Position) -> (usize, usize) {
    match position {
        Position::Goalkeeper => (1, 1),
        Position::Defender => (3, 5),
        Position::Midfielder => (3, 5),
        Position::Forward => (1, 3),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotwPlayer {
    #[serde(flatten)]
    pub pooled: PooledPlayer,
    pub is_captain: bool,
    /// Gameweek points, doubled for captains.
    pub display_points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamOfTheWeek {
    /// In selection order: floor picks first, then fill-ins.
    pub players: Vec<TotwPlayer>,
}

impl TeamOfTheWeek {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn count(&self, position: Position) -> usize {
        self.players
            .iter()
            .filter(|p| p.pooled.player.position == position)
            .count()
    }

    pub fn captains(&self) -> impl Iterator<Item = &TotwPlayer> {
        self.players.iter().filter(|p| p.is_captain)
    }

    /// Players grouped into pitch rows: GK, DEF, MID, FWD.
    pub fn rows(&self) -> [Vec<&TotwPlayer>; 4] {
        let mut rows: [Vec<&TotwPlayer>; 4] = Default::default();
        for p in &self.players {
            rows[p.pooled.player.position.index()].push(p);
        }
        rows
    }

    pub fn total_display_points(&self) -> i32 {
        self.players.iter().map(|p| p.display_points).sum()
    }
}

/// Pick the Team of the Week from `pool`.
///
/// The pool is ordered by descending points (stable, so equal scores keep the
/// pool's ascending-id order). The positional floors (1 GK, 3 DEF, 3 MID,
/// 1 FWD) are filled first, then the remaining slots go to the best leftover
/// outfield players whose position is still below its ceiling. A small pool
/// yields a short team; players are never invented.
///
/// Every selected player sharing the top score is captain and shown with
/// doubled points.
pub fn select_team_of_the_week(pool: &PlayerPool) -> TeamOfTheWeek {
    let mut ranked: Vec<&PooledPlayer> = pool.iter().collect();
    ranked.sort_by(|a, b| b.gameweek_points.cmp(&a.gameweek_points));

    let mut taken = vec![false; ranked.len()];
    let mut counts = [0usize; 4];
    let mut selected: Vec<&PooledPlayer> = Vec::with_capacity(TEAM_SIZE);

    for position in Position::ALL {
        let (floor, _) = formation_bounds(position);
        for (i, p) in ranked.iter().enumerate() {
            if counts[position.index()] == floor {
                break;
            }
            if p.player.position == position {
                taken[i] = true;
                counts[position.index()] += 1;
                selected.push(p);
            }
        }
    }

    for (i, p) in ranked.iter().enumerate() {
        if selected.len() >= TEAM_SIZE {
            break;
        }
        let position = p.player.position;
        let (_, ceiling) = formation_bounds(position);
        // The goalkeeper slot is closed after the floor pass.
        if taken[i] || position == Position::Goalkeeper || counts[position.index()] >= ceiling {
            continue;
        }
        taken[i] = true;
        counts[position.index()] += 1;
        selected.push(p);
    }

    let top = selected.iter().map(|p| p.gameweek_points).max();
    let players = selected
        .into_iter()
        .map(|p| {
            let is_captain = Some(p.gameweek_points) == top;
            TotwPlayer {
                pooled: p.clone(),
                is_captain,
                display_points: if is_captain {
                    p.gameweek_points * 2
                } else {
                    p.gameweek_points
                },
            }
        })
        .collect();

    TeamOfTheWeek { players }
}
