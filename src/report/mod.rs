//! Scouting report assembly and text rendering.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::calculate::format_percent;
use crate::models::{
    CompositionEntry, Dataset, Insight, PriorityTier, Role, RoleTendency, Schema, TeamTendency,
};
use crate::registry::ChampionTags;

/// Everything the analyses produce for one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutingReport {
    pub generated_at: DateTime<Utc>,
    pub schema: Schema,
    pub row_count: usize,
    pub match_count: usize,
    pub role_tendencies: BTreeMap<Role, RoleTendency>,
    pub team_tendency: TeamTendency,
    pub compositions: Vec<CompositionEntry>,
    pub insights: Vec<Insight>,
}

impl ScoutingReport {
    /// Run every analysis over `dataset`.
    pub fn build(dataset: &Dataset, tags: &dyn ChampionTags, roles: Option<&[Role]>) -> Self {
        Self {
            generated_at: Utc::now(),
            schema: dataset.schema(),
            row_count: dataset.len(),
            match_count: dataset.match_count(),
            role_tendencies: analysis::role_tendencies(dataset, roles),
            team_tendency: analysis::team_tendencies(dataset),
            compositions: analysis::compositions(dataset, tags),
            insights: analysis::how_to_win(dataset),
        }
    }

    /// Render the report as console text.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScoutingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);

        writeln!(f, "Loaded {} rows across {} matches.\n", self.row_count, self.match_count)?;

        writeln!(f, "--- [ LANE CHECKS ] ---")?;
        if self.role_tendencies.is_empty() {
            writeln!(f, "  Player-level tendencies unavailable for this dataset.")?;
        }
        for (role, t) in &self.role_tendencies {
            let (open, close) = match t.priority {
                PriorityTier::High => ("!!!", "!!!"),
                _ => (">>>", "<<<"),
            };
            writeln!(f, "  {} {} LANE ALERT: {} PRIORITY {}", open, role, t.priority, close)?;
            writeln!(
                f,
                "  Target: {} ({} games, {} WR)",
                t.most_played_champion,
                t.count,
                format_percent(t.win_rate)
            )?;
            writeln!(f, "  Action: {}\n", t.action)?;
        }

        let team = &self.team_tendency;
        writeln!(f, "--- [ OBJECTIVE CONTROL ] ---")?;
        writeln!(f, "  First Dragon: {}", format_percent(team.first_dragon_rate))?;
        writeln!(f, "  First Tower:  {}", format_percent(team.first_tower_rate))?;
        writeln!(
            f,
            "  Win Phase:    {} GAME",
            team.win_tendency.to_string().to_uppercase()
        )?;
        writeln!(f, "  Early WR:     {}", format_percent(team.early_game_win_rate))?;
        writeln!(f, "  Late WR:      {}", format_percent(team.late_game_win_rate))?;

        writeln!(f, "\n--- [ COMP READ ] ---")?;
        if self.compositions.is_empty() {
            writeln!(f, "  Composition patterns unavailable for this dataset.")?;
        }
        for comp in &self.compositions {
            writeln!(f, "  Archetype: {} (seen {}x)", comp.category, comp.count)?;
            writeln!(f, "  - Plan:    {}", comp.win_condition)?;
            writeln!(f, "  - Break:   {}", comp.break_point)?;
            writeln!(f, "  - Core:    {}", comp.composition.join(", "))?;
            writeln!(f, "{}", "-".repeat(20))?;
        }

        writeln!(f, "\n{}\n--- [ HOW TO BEAT THEM ] ---\n{}", rule, rule)?;
        for insight in &self.insights {
            writeln!(f, "\n[{} PRIORITY] {}", insight.priority, insight.recommendation)?;
            writeln!(f, "  Intel: {}", insight.metric)?;
        }
        Ok(())
    }
}
