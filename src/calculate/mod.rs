//! Statistics calculation helpers.
//!
//! Shared arithmetic for the analyzers:
//! - Win rates and flag means with a 0.0 default on empty input
//! - Early/late game split at the 30 minute mark
//! - Ordered rule tables (first matching rule wins)

use crate::models::Outcome;

/// Games shorter than this many seconds count as early-game results.
pub const EARLY_GAME_CUTOFF_SECS: u32 = 1800;

/// Calculate win rate from wins and games played.
pub fn calculate_win_rate(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    }
}

/// Fraction of `true` values. Zero values yield 0.0.
pub fn flag_rate<I>(flags: I) -> f64
where
    I: IntoIterator<Item = bool>,
{
    let (hits, total) = flags
        .into_iter()
        .fold((0u32, 0u32), |(hits, total), flag| (hits + flag as u32, total + 1));
    calculate_win_rate(hits, total)
}

/// Format a fraction as a percentage with two decimals ("42.50%").
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Win rates on each side of the early-game cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWinRates {
    pub early: f64,
    pub late: f64,
}

/// Split outcomes at [`EARLY_GAME_CUTOFF_SECS`] and compute each side's win rate.
/// An empty side has a win rate of 0.0.
pub fn phase_win_rates(outcomes: &[Outcome]) -> PhaseWinRates {
    let early = flag_rate(
        outcomes
            .iter()
            .filter(|o| o.game_duration < EARLY_GAME_CUTOFF_SECS)
            .map(|o| o.win),
    );
    let late = flag_rate(
        outcomes
            .iter()
            .filter(|o| o.game_duration >= EARLY_GAME_CUTOFF_SECS)
            .map(|o| o.win),
    );
    PhaseWinRates { early, late }
}

/// One row of an ordered decision table.
pub struct Rule<I, O> {
    /// Short label, used in debug output
    pub name: &'static str,
    pub when: fn(&I) -> bool,
    pub then: fn(&I) -> O,
}

/// Evaluate rules top to bottom and return the outcome of the first match.
pub fn first_match<I, O>(rules: &[Rule<I, O>], input: &I) -> Option<O> {
    rules.iter().find(|rule| (rule.when)(input)).map(|rule| {
        tracing::trace!(rule = rule.name, "rule matched");
        (rule.then)(input)
    })
}

/// Evaluate rules, falling back to `otherwise` when none match.
pub fn first_match_or<I, O>(rules: &[Rule<I, O>], input: &I, otherwise: fn(&I) -> O) -> O {
    first_match(rules, input).unwrap_or_else(|| otherwise(input))
}
