//! Common team compositions and their archetypes.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Archetype, ChampionTag, CompositionEntry, Dataset};
use crate::registry::ChampionTags;

/// Number of compositions kept in the ranking.
pub const TOP_COMPOSITIONS: usize = 5;

/// A composition needs at least this many champions sharing a tag to
/// be classified as that tag's archetype.
pub const MIN_TAGS_FOR_ARCHETYPE: u32 = 2;

/// Rank the most frequent pick sets and classify each one.
///
/// Each `(match_id, team_id)` group becomes one composition, sorted by
/// champion name. Groups are visited in the order their key first appears
/// in the data and compositions with equal counts keep the order they
/// were first met in.
/// A dataset without champion data yields an empty list.
pub fn compositions(dataset: &Dataset, tags: &dyn ChampionTags) -> Vec<CompositionEntry> {
    let Some(observations) = dataset.observations() else {
        debug!("Compositions unavailable: dataset has no champion column");
        return Vec::new();
    };

    let mut teams: Vec<Vec<&str>> = Vec::new();
    let mut team_index: HashMap<(&str, &str), usize> = HashMap::new();
    for obs in observations {
        let key = (obs.match_id.as_str(), obs.team_id.as_str());
        let slot = *team_index.entry(key).or_insert_with(|| {
            teams.push(Vec::new());
            teams.len() - 1
        });
        teams[slot].push(obs.champion.as_str());
    }

    let mut ranked: Vec<(Vec<&str>, u32)> = Vec::new();
    let mut index: HashMap<Vec<&str>, usize> = HashMap::new();
    for mut champions in teams {
        champions.sort_unstable();
        match index.get(&champions) {
            Some(&slot) => ranked[slot].1 += 1,
            None => {
                index.insert(champions.clone(), ranked.len());
                ranked.push((champions, 1));
            }
        }
    }

    debug!("Found {} distinct compositions", ranked.len());

    // stable: equal counts keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_COMPOSITIONS);

    ranked
        .into_iter()
        .map(|(champions, count)| {
            let archetype = classify(&champions, tags);
            CompositionEntry::new(
                champions.into_iter().map(str::to_string).collect(),
                count,
                archetype,
            )
        })
        .collect()
}

/// Classify a composition by its most common champion tag.
///
/// Ties between tags go to the earlier [`ChampionTag`] variant
/// (skirmish, protect, engage, scaling). Fewer than
/// [`MIN_TAGS_FOR_ARCHETYPE`] matching champions is `Standard`.
pub fn classify<S: AsRef<str>>(champions: &[S], tags: &dyn ChampionTags) -> Archetype {
    let mut counts = [0u32; ChampionTag::ALL.len()];
    for champion in champions {
        if let Some(tag) = tags.tag_of(champion.as_ref()) {
            counts[tag as usize] += 1;
        }
    }

    let mut primary = ChampionTag::ALL[0];
    for tag in ChampionTag::ALL {
        if counts[tag as usize] > counts[primary as usize] {
            primary = tag;
        }
    }

    if counts[primary as usize] < MIN_TAGS_FOR_ARCHETYPE {
        Archetype::Standard
    } else {
        Archetype::from(primary)
    }
}
