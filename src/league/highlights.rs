//! Headline awards for the gameweek.

use serde::Serialize;

use crate::league::models::{EnrichedManager, ManagerEntry, TransferImpact};

#[cfg(test)]
mod tests;

/// One award: who won it and by how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub manager_name: String,
    pub team_name: String,
    pub impact: i32,
}

impl Highlight {
    fn for_entry(title: &'static str, entry: &ManagerEntry, impact: i32) -> Self {
        Self {
            title,
            manager_name: entry.manager_name.clone(),
            team_name: entry.team_name.clone(),
            impact,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueHighlights {
    pub manager_of_the_week: Option<Highlight>,
    pub leader: Option<Highlight>,
    pub best_bench: Option<Highlight>,
    pub best_transfer: Option<Highlight>,
    pub wooden_spoon: Option<Highlight>,
}

impl LeagueHighlights {
    /// Awards that were given, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        [
            &self.manager_of_the_week,
            &self.leader,
            &self.best_bench,
            &self.best_transfer,
            &self.wooden_spoon,
        ]
        .into_iter()
        .flatten()
    }
}

/// First item with the greatest key. `Iterator::max_by_key` keeps the last.
fn first_max_by_key<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> i32,
{
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(b) if key(b) >= key(item) => Some(b),
        _ => Some(item),
    })
}

/// Compute the highlights from enriched standings and the transfer-impact list.
///
/// `managers` must be in standings order; ties go to the earlier manager.
pub fn league_highlights(
    managers: &[EnrichedManager],
    transfers: &[TransferImpact],
) -> LeagueHighlights {
    let award = |title, key: fn(&EnrichedManager) -> i32| {
        first_max_by_key(managers, key).map(|m| Highlight::for_entry(title, &m.entry, key(m)))
    };

    let wooden_spoon = first_max_by_key(managers, |m| -m.entry.gameweek_points)
        .map(|m| Highlight::for_entry("Wooden Spoon", &m.entry, m.entry.gameweek_points));

    let best_transfer = first_max_by_key(transfers, |t| t.diff).map(|t| Highlight {
        title: "Best Transfer",
        manager_name: t.manager_name.clone(),
        team_name: t.team_name.clone(),
        impact: t.diff,
    });

    LeagueHighlights {
        manager_of_the_week: award("Manager of the Week", |m| m.entry.gameweek_points),
        leader: award("League Leader", |m| m.entry.total_points),
        best_bench: award("Best Bench", |m| m.bench_points),
        best_transfer,
        wooden_spoon,
    }
}
