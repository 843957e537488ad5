//! Nectar majority scoring for the Oceania expansion.
//!
//! Each habitat is scored on its own: the player who spent the most nectar
//! there takes the first-place bonus and the runner-up group splits the
//! second-place bonus. When several players tie for the lead they split both
//! bonuses between them and nobody is awarded second place. Spending nothing
//! never scores.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::constants::{MAJORITY_FIRST_BONUS, MAJORITY_SECOND_BONUS};
use super::input::ScoreInput;

/// Habitats compared for majority scoring
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Forest,
    Grassland,
    Wetland,
}

/// Optional rule additions selected when a game starts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Expansion {
    European,
    /// Adds nectar and habitat majority scoring
    Oceania,
}

impl Expansion {
    pub fn enables_majority_scoring(self) -> bool {
        matches!(self, Expansion::Oceania)
    }
}

/// Whether any of the active expansions scores habitat majorities
pub fn majority_scoring_active(expansions: &[Expansion]) -> bool {
    expansions.iter().any(|e| e.enables_majority_scoring())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionContribution {
    pub player_id: String,
    pub region: Region,
    pub amount: u32,
}

/// Flatten every player's nectar into per-region contributions.
pub fn contributions_from_inputs<'a, I>(inputs: I) -> Vec<RegionContribution>
where
    I: IntoIterator<Item = (&'a str, &'a ScoreInput)>,
{
    inputs
        .into_iter()
        .flat_map(|(player_id, input)| {
            Region::iter().map(move |region| RegionContribution {
                player_id: player_id.to_string(),
                region,
                amount: input.nectar.get(region),
            })
        })
        .collect()
}

/// Award bonus points for a single region.
///
/// Every contribution is assumed to belong to the same region. Only players
/// who receive points appear in the returned map.
pub fn allocate_region(contributions: &[RegionContribution]) -> HashMap<String, u32> {
    let mut groups: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for contribution in contributions.iter().filter(|c| c.amount > 0) {
        groups
            .entry(contribution.amount)
            .or_default()
            .push(contribution.player_id.as_str());
    }

    let mut ranked = groups.into_values().rev();
    let mut awards = HashMap::new();

    let Some(leaders) = ranked.next() else {
        return awards;
    };

    if let [leader] = leaders.as_slice() {
        awards.insert(leader.to_string(), MAJORITY_FIRST_BONUS);

        if let Some(runners_up) = ranked.next() {
            let share = MAJORITY_SECOND_BONUS / runners_up.len() as u32;
            for player_id in runners_up {
                awards.insert(player_id.to_string(), share);
            }
        }
    } else {
        let share = (MAJORITY_FIRST_BONUS + MAJORITY_SECOND_BONUS) / leaders.len() as u32;
        for player_id in leaders {
            awards.insert(player_id.to_string(), share);
        }
    }

    awards
}

/// Sum the majority bonus for every player across all regions.
///
/// Every player that appears in `contributions` is present in the result,
/// with 0 when they placed nowhere.
pub fn allocate_majority_bonus(contributions: &[RegionContribution]) -> HashMap<String, u32> {
    let mut totals: HashMap<String, u32> = contributions
        .iter()
        .map(|c| (c.player_id.clone(), 0))
        .collect();

    for region in Region::iter() {
        let in_region: Vec<RegionContribution> = contributions
            .iter()
            .filter(|c| c.region == region)
            .cloned()
            .collect();

        for (player_id, points) in allocate_region(&in_region) {
            *totals.entry(player_id).or_default() += points;
        }
    }

    totals
}
