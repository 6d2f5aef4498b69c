use crate::domain::model::{
    CountersStore, Leaderboard, Name, Placement, PositionAssignment, Prize, RankingPolicy,
    Standing,
};
use crate::utils::error::{Result, TurnError};
use std::cmp::Ordering;

/// Points for positions 1 through 10.
pub const POINTS_SCHEDULE: [u64; 10] = [12, 10, 9, 8, 7, 6, 5, 4, 3, 2];
/// Points for every position after the schedule runs out.
pub const POINTS_FLOOR: u64 = 1;

/// `position` is 1-based.
pub fn points_for_position(position: usize) -> u64 {
    position
        .checked_sub(1)
        .and_then(|index| POINTS_SCHEDULE.get(index))
        .copied()
        .unwrap_or(POINTS_FLOOR)
}

#[derive(Debug, Clone, Copy)]
pub struct FairnessRanker {
    policy: RankingPolicy,
}

impl FairnessRanker {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RankingPolicy {
        self.policy
    }

    /// Ranks `names` (expected unique) and records the result in `counters`.
    ///
    /// An empty list fails with `EmptyInput` before `counters` is touched.
    pub fn rank(&self, names: &[Name], counters: &mut CountersStore) -> Result<PositionAssignment> {
        if names.is_empty() {
            return Err(TurnError::EmptyInput);
        }

        let placements = match self.policy {
            RankingPolicy::LeastUsedFirst => least_used_first(names, counters),
            RankingPolicy::InputOrderPoints => input_order_points(names, counters),
        };

        Ok(PositionAssignment {
            policy: self.policy,
            placements,
        })
    }

    pub fn leaderboard(&self, counters: &CountersStore) -> Leaderboard {
        if counters.is_empty() {
            return Leaderboard::NoData;
        }

        let mut entries: Vec<_> = counters.iter().collect();
        match self.policy {
            RankingPolicy::LeastUsedFirst => entries.sort_by(|(name_a, a), (name_b, b)| {
                b.first
                    .cmp(&a.first)
                    .then_with(|| b.second.cmp(&a.second))
                    .then_with(|| name_a.alphabetical_cmp(name_b))
            }),
            RankingPolicy::InputOrderPoints => entries.sort_by(|(name_a, a), (name_b, b)| {
                b.points_or_zero()
                    .cmp(&a.points_or_zero())
                    .then_with(|| b.first.cmp(&a.first))
                    .then_with(|| b.second.cmp(&a.second))
                    .then_with(|| name_a.alphabetical_cmp(name_b))
            }),
        }

        let standings = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, record))| Standing {
                rank: index + 1,
                name: name.clone(),
                record: *record,
                prize: Prize::for_rank(index + 1),
            })
            .collect();

        Leaderboard::Standings(standings)
    }
}

fn least_used_first(names: &[Name], counters: &mut CountersStore) -> Vec<Placement> {
    for name in names {
        counters.record_mut(name);
    }

    let total = |name: &Name| counters.get(name.as_str()).map_or(0, |r| r.top_two_total());
    let mut sorted: Vec<&Name> = names.iter().collect();
    sorted.sort_by(|a, b| match total(*a).cmp(&total(*b)) {
        Ordering::Equal => a.alphabetical_cmp(*b),
        other => other,
    });

    let placements: Vec<Placement> = sorted
        .into_iter()
        .enumerate()
        .map(|(index, name)| Placement {
            position: index + 1,
            name: name.clone(),
            points_awarded: None,
        })
        .collect();

    // 只記錄前兩名
    if let Some(first) = placements.first() {
        let record = counters.record_mut(&first.name);
        record.first = record.first.saturating_add(1);
    }
    if let Some(second) = placements.get(1) {
        let record = counters.record_mut(&second.name);
        record.second = record.second.saturating_add(1);
    }

    tracing::debug!(
        "Least-used-first ranking placed {} names, first: {:?}",
        placements.len(),
        placements.first().map(|p| p.name.as_str())
    );

    placements
}

fn input_order_points(names: &[Name], counters: &mut CountersStore) -> Vec<Placement> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let position = index + 1;
            let awarded = points_for_position(position);

            let record = counters.record_mut(name);
            record.points = Some(record.points_or_zero().saturating_add(awarded));
            match position {
                1 => record.first = record.first.saturating_add(1),
                2 => record.second = record.second.saturating_add(1),
                _ => {}
            }

            Placement {
                position,
                name: name.clone(),
                points_awarded: Some(awarded),
            }
        })
        .collect()
}
