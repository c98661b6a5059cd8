//! League position per gameweek over the most recent gameweeks.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::{cli::types::Gameweek, league::models::HistoryPoint};


/// Default number of gameweeks tabulated.
pub const RANK_HISTORY_WINDOW: usize = 5;

/// League positions for one gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankRow {
    pub gameweek: Gameweek,
    /// Chart label, e.g. `GW12`.
    pub label: String,
    /// Team label (see [`unique_labels`]) to position (1 = best). Managers
    /// without a record that gameweek are absent.
    pub positions: BTreeMap<String, u32>,
}

/// One distinct label per team name, in input order.
///
/// Names that occur once are kept as is. Repeated names get a 1-based
/// occurrence suffix, `Same (1)`, `Same (2)`, skipping any label already taken.
pub fn unique_labels<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *totals.entry(name.as_ref()).or_default() += 1;
    }

    let mut used: HashSet<String> = HashSet::new();
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let mut label = name.to_string();
            if totals.get(name).copied().unwrap_or(0) > 1 || used.contains(&label) {
                let mut k = 1;
                label = format!("{} ({})", name, k);
                while used.contains(&label) {
                    k += 1;
                    label = format!("{} ({})", name, k);
                }
            }
            used.insert(label.clone());
            label
        })
        .collect()
}

/// Build one row per gameweek in the last `window` gameweeks of the longest history.
///
/// `series` holds `(team name, full history)` per manager in standings order.
/// The reference history is the longest one; on equal lengths the later one in
/// standings order wins. Within a gameweek managers are ranked by descending
/// total points, with equal totals keeping standings order. Teams are keyed by
/// [`unique_labels`] so every row's positions run 1..k.
pub fn build_rank_history(series: &[(&str, &[HistoryPoint])], window: usize) -> Vec<RankRow> {
    let reference = series
        .iter()
        .fold(None::<&[HistoryPoint]>, |best, (_, history)| match best {
            Some(b) if b.len() > history.len() => Some(b),
            _ => Some(*history),
        })
        .unwrap_or(&[]);

    let names: Vec<&str> = series.iter().map(|(name, _)| *name).collect();
    let labels = unique_labels(names.as_slice());

    let skip = reference.len().saturating_sub(window);
    reference[skip..]
        .iter()
        .map(|point| rank_gameweek(series, &labels, point.gameweek))
        .collect()
}

fn rank_gameweek(
    series: &[(&str, &[HistoryPoint])],
    labels: &[String],
    gameweek: Gameweek,
) -> RankRow {
    let mut present: Vec<(&str, i32)> = series
        .iter()
        .zip(labels)
        .filter_map(|((_, history), label)| {
            history
                .iter()
                .find(|h| h.gameweek == gameweek)
                .map(|h| (label.as_str(), h.total_points))
        })
        .collect();
    present.sort_by(|a, b| b.1.cmp(&a.1));

    let positions = present
        .into_iter()
        .enumerate()
        .map(|(i, (label, _))| (label.to_string(), i as u32 + 1))
        .collect();

    RankRow {
        gameweek,
        label: gameweek.label(),
        positions,
    }
}
