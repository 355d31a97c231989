//! Per-role champion tendencies.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::calculate::{calculate_win_rate, first_match_or, Rule};
use crate::models::{Dataset, LaneAction, Observation, PriorityTier, Role, RoleTendency};

/// Champions with fewer games than this in a role are ignored.
pub const MIN_GAMES_FOR_TENDENCY: u32 = 2;

/// Games and win rate of the selected champion, fed to the rule tables.
#[derive(Debug, Clone, Copy)]
struct LaneSample {
    games: u32,
    win_rate: f64,
}

const PRIORITY_RULES: &[Rule<LaneSample, PriorityTier>] = &[
    Rule {
        name: "high: 3+ games, lopsided win rate",
        when: |s| s.games >= 3 && (s.win_rate >= 0.70 || s.win_rate <= 0.30),
        then: |_| PriorityTier::High,
    },
    Rule {
        name: "medium: 2+ games, skewed win rate",
        when: |s| s.games >= 2 && (s.win_rate >= 0.60 || s.win_rate <= 0.40),
        then: |_| PriorityTier::Medium,
    },
];

const ACTION_RULES: &[Rule<LaneSample, LaneAction>] = &[
    Rule {
        name: "comfort pick",
        when: |s| s.win_rate >= 0.60,
        then: |_| LaneAction::DenyComfortPick,
    },
    Rule {
        name: "struggling pick",
        when: |s| s.win_rate <= 0.40,
        then: |_| LaneAction::ForceLosingMatchup,
    },
];

/// Per-champion tally within one role, kept in first-seen order.
#[derive(Debug)]
struct ChampionTally<'a> {
    champion: &'a str,
    games: u32,
    wins: u32,
}

/// Find each role's most-played champion (2+ games) and how to answer it.
///
/// `roles` restricts the analysis; `None` or an empty slice means every role
/// present in the data. Roles without a qualifying champion are left out,
/// and a dataset without role/champion columns yields an empty map.
/// Equal game counts resolve to the champion seen first in the data.
pub fn role_tendencies(dataset: &Dataset, roles: Option<&[Role]>) -> BTreeMap<Role, RoleTendency> {
    let Some(observations) = dataset.observations() else {
        debug!("Role tendencies unavailable: dataset has no role/champion columns");
        return BTreeMap::new();
    };

    let wanted = |role: Role| match roles {
        Some(filter) if !filter.is_empty() => filter.contains(&role),
        _ => true,
    };

    let mut by_role: BTreeMap<Role, Vec<&Observation>> = BTreeMap::new();
    for obs in observations.iter().filter(|o| wanted(o.role)) {
        by_role.entry(obs.role).or_default().push(obs);
    }

    let results: BTreeMap<Role, RoleTendency> = by_role
        .into_iter()
        .filter_map(|(role, rows)| analyze_role(role, &rows).map(|t| (role, t)))
        .collect();

    debug!("Computed tendencies for {} roles", results.len());
    results
}

fn analyze_role(role: Role, rows: &[&Observation]) -> Option<RoleTendency> {
    let mut tallies: Vec<ChampionTally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for obs in rows {
        let slot = *index.entry(obs.champion.as_str()).or_insert_with(|| {
            tallies.push(ChampionTally {
                champion: obs.champion.as_str(),
                games: 0,
                wins: 0,
            });
            tallies.len() - 1
        });
        tallies[slot].games += 1;
        if obs.win {
            tallies[slot].wins += 1;
        }
    }

    let mut best: Option<&ChampionTally> = None;
    for tally in tallies.iter().filter(|t| t.games >= MIN_GAMES_FOR_TENDENCY) {
        if best.map_or(true, |b| tally.games > b.games) {
            best = Some(tally);
        }
    }

    let Some(best) = best else {
        debug!("No champion with {}+ games in {}", MIN_GAMES_FOR_TENDENCY, role);
        return None;
    };

    let sample = LaneSample {
        games: best.games,
        win_rate: calculate_win_rate(best.wins, best.games),
    };

    Some(RoleTendency {
        role,
        most_played_champion: best.champion.to_string(),
        count: sample.games,
        win_rate: sample.win_rate,
        priority: first_match_or(PRIORITY_RULES, &sample, |_| PriorityTier::Low),
        action: first_match_or(ACTION_RULES, &sample, |_| LaneAction::IgnoreAndPlayCrossMap),
    })
}
