//! League-wide pool of started players.
//!
//! Every manager contributes the players in their starting lineup. Pools built
//! independently are combined with [`PlayerPool::merge`], which keeps the
//! higher-scoring record per player and sums ownership. That merge is
//! commutative and associative, so any completion order of per-manager work
//! yields the same pool.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::{
    cli::types::PlayerId,
    league::models::{Player, PooledPlayer},
};

/// Pooled players keyed by id; iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPool {
    players: BTreeMap<PlayerId, PooledPlayer>,
}

/// Serialized as a plain list in id order.
impl Serialize for PlayerPool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.players.values())
    }
}

impl PlayerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one manager starting `player` who scored `points` this gameweek.
    pub fn record(&mut self, player: &Player, points: i32) {
        self.absorb(PooledPlayer {
            player: player.clone(),
            gameweek_points: points,
            owned_count: 1,
        });
    }

    fn absorb(&mut self, incoming: PooledPlayer) {
        match self.players.get_mut(&incoming.player.id) {
            None => {
                self.players.insert(incoming.player.id, incoming);
            }
            Some(existing) => {
                let owned = existing.owned_count + incoming.owned_count;
                if incoming.gameweek_points > existing.gameweek_points {
                    *existing = incoming;
                }
                existing.owned_count = owned;
            }
        }
    }

    /// Combine two pools: max points per player, ownership summed.
    pub fn merge(mut self, other: PlayerPool) -> PlayerPool {
        if self.players.len() < other.players.len() {
            return other.merge(self);
        }
        for pooled in other.players.into_values() {
            self.absorb(pooled);
        }
        self
    }

    pub fn get(&self, id: PlayerId) -> Option<&PooledPlayer> {
        self.players.get(&id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Pooled players in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &PooledPlayer> {
        self.players.values()
    }
}

impl FromIterator<(Player, i32)> for PlayerPool {
    fn from_iter<I: IntoIterator<Item = (Player, i32)>>(iter: I) -> Self {
        let mut pool = PlayerPool::new();
        for (player, points) in iter {
            pool.record(&player, points);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{Cost, Position};

    fn player(id: u32) -> Player {
        Player {
            id: PlayerId::new(id),
            name: format!("P{}", id),
            cost: Cost::from_tenths(50),
            photo: id,
            position: Position::Midfielder,
        }
    }

    #[test]
    fn test_record_counts_every_owner() {
        let mut pool = PlayerPool::new();
        pool.record(&player(1), 5);
        pool.record(&player(1), 5);
        pool.record(&player(1), 5);

        let pooled = pool.get(PlayerId::new(1)).unwrap();
        assert_eq!(pooled.owned_count, 3);
        assert_eq!(pooled.gameweek_points, 5);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_record_keeps_max_points() {
        let mut pool = PlayerPool::new();
        pool.record(&player(1), 2);
        pool.record(&player(1), 9);
        pool.record(&player(1), 4);

        let pooled = pool.get(PlayerId::new(1)).unwrap();
        assert_eq!(pooled.gameweek_points, 9);
        assert_eq!(pooled.owned_count, 3);
    }

    #[test]
    fn test_merge_is_commutative() {
        let a: PlayerPool = vec![(player(1), 3), (player(2), 7)].into_iter().collect();
        let b: PlayerPool = vec![(player(2), 8), (player(3), 1)].into_iter().collect();

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab, ba);
        assert_eq!(ab.get(PlayerId::new(2)).unwrap().gameweek_points, 8);
        assert_eq!(ab.get(PlayerId::new(2)).unwrap().owned_count, 2);
    }

    #[test]
    fn test_merge_is_associative() {
        let a: PlayerPool = vec![(player(1), 3)].into_iter().collect();
        let b: PlayerPool = vec![(player(1), 6), (player(4), 2)].into_iter().collect();
        let c: PlayerPool = vec![(player(4), 2), (player(1), 1)].into_iter().collect();

        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
        assert_eq!(left.get(PlayerId::new(1)).unwrap().owned_count, 3);
        assert_eq!(left.get(PlayerId::new(4)).unwrap().owned_count, 2);
    }

    #[test]
    fn test_iteration_in_id_order() {
        let pool: PlayerPool = vec![(player(9), 1), (player(2), 1), (player(5), 1)]
            .into_iter()
            .collect();
        let ids: Vec<u32> = pool.iter().map(|p| p.player.id.as_u32()).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
