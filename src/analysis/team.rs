//! Team-wide objective and tempo tendencies.

use tracing::debug;

use crate::calculate::{flag_rate, phase_win_rates};
use crate::models::{Dataset, TeamTendency, WinPhase};

/// Objective control rates and the phase the team tends to win in.
///
/// Rates are means over player rows, which equals the per-team-game mean
/// only when every team-game contributes the same number of rows.
/// Equal early and late win rates classify as [`WinPhase::Late`].
pub fn team_tendencies(dataset: &Dataset) -> TeamTendency {
    let outcomes = dataset.outcomes();
    let phases = phase_win_rates(&outcomes);

    let tendency = TeamTendency {
        first_dragon_rate: flag_rate(outcomes.iter().map(|o| o.first_dragon)),
        first_tower_rate: flag_rate(outcomes.iter().map(|o| o.first_tower)),
        early_game_win_rate: phases.early,
        late_game_win_rate: phases.late,
        win_tendency: if phases.early > phases.late {
            WinPhase::Early
        } else {
            WinPhase::Late
        },
    };

    debug!(
        rows = outcomes.len(),
        tendency = %tendency.win_tendency,
        "Computed team tendencies"
    );
    tendency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamRecord;

    fn row(win: bool, game_duration: u32, first_dragon: bool, first_tower: bool) -> TeamRecord {
        TeamRecord {
            match_id: "m".to_string(),
            team_id: "t".to_string(),
            win,
            game_duration,
            first_dragon,
            first_tower,
        }
    }

    #[test]
    fn test_all_early_games() {
        // dragon 3/10, tower 6/10, all under 30 minutes, half won
        let rows = (0..10)
            .map(|i| row(i % 2 == 0, 1700, i < 3, i < 6))
            .collect();
        let t = team_tendencies(&Dataset::Partial(rows));

        assert!((t.first_dragon_rate - 0.3).abs() < 1e-9);
        assert!((t.first_tower_rate - 0.6).abs() < 1e-9);
        assert_eq!(t.early_game_win_rate, 0.5);
        assert_eq!(t.late_game_win_rate, 0.0);
        assert_eq!(t.win_tendency, WinPhase::Early);
    }

    #[test]
    fn test_equal_rates_resolve_late() {
        let rows = vec![
            row(true, 1500, false, false),
            row(false, 1500, false, false),
            row(true, 2500, false, false),
            row(false, 2500, false, false),
        ];
        let t = team_tendencies(&Dataset::Partial(rows));

        assert_eq!(t.early_game_win_rate, 0.5);
        assert_eq!(t.late_game_win_rate, 0.5);
        assert_eq!(t.win_tendency, WinPhase::Late);
    }

    #[test]
    fn test_late_game_team() {
        let rows = vec![
            row(false, 1600, true, true),
            row(true, 2200, true, false),
            row(true, 2000, false, true),
        ];
        let t = team_tendencies(&Dataset::Partial(rows));

        assert_eq!(t.early_game_win_rate, 0.0);
        assert_eq!(t.late_game_win_rate, 1.0);
        assert_eq!(t.win_tendency, WinPhase::Late);
    }

    #[test]
    fn test_empty_dataset_defaults_to_zero() {
        let t = team_tendencies(&Dataset::default());

        assert_eq!(t.first_dragon_rate, 0.0);
        assert_eq!(t.first_tower_rate, 0.0);
        assert_eq!(t.win_tendency, WinPhase::Late);
    }
}
