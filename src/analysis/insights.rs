//! How-to-win recommendations.

use tracing::debug;

use crate::calculate::{first_match_or, flag_rate, format_percent, phase_win_rates, Rule};
use crate::models::{Dataset, Insight, InsightPriority};

/// Rates the recommendation tables read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightInputs {
    pub first_dragon_rate: f64,
    pub first_tower_rate: f64,
    pub early_win_rate: f64,
    pub late_win_rate: f64,
    pub overall_win_rate: f64,
}

impl InsightInputs {
    /// Compute the inputs with the same formulas as the team tendency analysis.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let outcomes = dataset.outcomes();
        let phases = phase_win_rates(&outcomes);
        Self {
            first_dragon_rate: flag_rate(outcomes.iter().map(|o| o.first_dragon)),
            first_tower_rate: flag_rate(outcomes.iter().map(|o| o.first_tower)),
            early_win_rate: phases.early,
            late_win_rate: phases.late,
            overall_win_rate: flag_rate(outcomes.iter().map(|o| o.win)),
        }
    }
}

const HIGH_RULES: &[Rule<InsightInputs, Insight>] = &[
    Rule {
        name: "weak dragon control",
        when: |i| i.first_dragon_rate < 0.40,
        then: |i| {
            Insight::new(
                InsightPriority::High,
                "FORCE DRAGON FIGHTS. DENY SOUL AT ALL COSTS.",
                format!(
                    "Opponent dragon control is weak ({} capture rate).",
                    format_percent(i.first_dragon_rate)
                ),
            )
        },
    },
    Rule {
        name: "late-game drop",
        when: |i| i.early_win_rate > i.late_win_rate + 0.15,
        then: |i| {
            Insight::new(
                InsightPriority::High,
                "STALL FOR LATE. PUNISH THEIR MID-GAME DESPERATION.",
                format!(
                    "Massive late-game drop detected ({} Early vs {} Late WR).",
                    format_percent(i.early_win_rate),
                    format_percent(i.late_win_rate)
                ),
            )
        },
    },
];

fn press_the_advantage(i: &InsightInputs) -> Insight {
    Insight::new(
        InsightPriority::High,
        "PRESS THE ADVANTAGE. DON'T LET THEM BREATHE.",
        format!(
            "Maintain pressure ({} overall win rate).",
            format_percent(i.overall_win_rate)
        ),
    )
}

const MEDIUM_RULES: &[Rule<InsightInputs, Insight>] = &[
    Rule {
        name: "weak first tower",
        when: |i| i.first_tower_rate < 0.50,
        then: |i| {
            Insight::new(
                InsightPriority::Medium,
                "CRASH WAVES. PUNISH WEAK ROTATIONS FOR PLATES.",
                format!(
                    "Subpar first tower control ({} rate).",
                    format_percent(i.first_tower_rate)
                ),
            )
        },
    },
    Rule {
        name: "scaling threat",
        when: |i| i.late_win_rate > i.early_win_rate + 0.10,
        then: |i| {
            Insight::new(
                InsightPriority::Medium,
                "INVADE EARLY. BREAK THEIR SCALING BEFORE IT STARTS.",
                format!(
                    "Scaling threat detected ({} Late WR vs {} Early).",
                    format_percent(i.late_win_rate),
                    format_percent(i.early_win_rate)
                ),
            )
        },
    },
];

fn control_vision(_: &InsightInputs) -> Insight {
    Insight::new(
        InsightPriority::Medium,
        "CONTROL VISION. PUNISH FACE-CHECKS IN RIVER.",
        "Standard objective pacing detected.",
    )
}

fn bait_baron() -> Insight {
    Insight::new(
        InsightPriority::Situational,
        "BAIT BARON. FORCE THEM INTO A BAD FACE-CHECK.",
        "Situational tactical opening.",
    )
}

/// Derive the three prioritized calls from precomputed rates.
pub fn insights_from(inputs: &InsightInputs) -> Vec<Insight> {
    vec![
        first_match_or(HIGH_RULES, inputs, press_the_advantage),
        first_match_or(MEDIUM_RULES, inputs, control_vision),
        bait_baron(),
    ]
}

/// Exactly three recommendations: HIGH, MEDIUM, then SITUATIONAL.
pub fn how_to_win(dataset: &Dataset) -> Vec<Insight> {
    let inputs = InsightInputs::from_dataset(dataset);
    debug!(?inputs, "Synthesizing how-to-win insights");
    insights_from(&inputs)
}
