use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::config::parse_roles;
use crate::models::{CompositionEntry, Insight, Role, RoleTendency, Schema, TeamTendency};
use crate::report::ScoutingReport;

// ── Shared params ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoleParams {
    /// Comma-separated role names, e.g. `TOP,MID`
    pub roles: Option<String>,
}

impl RoleParams {
    fn resolve(&self, state: &AppState) -> Result<Vec<Role>, ApiError> {
        match self.roles.as_deref() {
            Some(list) => parse_roles(list.split(',')).map_err(|e| ApiError::BadRequest(e.to_string())),
            None => Ok(state.default_roles.as_ref().clone()),
        }
    }
}

// ── Health ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rows: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        rows: state.dataset.len(),
    })
}

// ── Full report ─────────────────────────────────────────────────

pub async fn report(
    State(state): State<AppState>,
    Query(params): Query<RoleParams>,
) -> Result<Json<ScoutingReport>, ApiError> {
    let roles = params.resolve(&state)?;
    Ok(Json(ScoutingReport::build(
        &state.dataset,
        state.tags.as_ref(),
        Some(roles.as_slice()),
    )))
}

// ── Individual analyses ─────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub schema: Schema,
    pub available: bool,
    pub tendencies: BTreeMap<Role, RoleTendency>,
}

pub async fn roles(
    State(state): State<AppState>,
    Query(params): Query<RoleParams>,
) -> Result<Json<RolesResponse>, ApiError> {
    let roles = params.resolve(&state)?;
    let tendencies = analysis::role_tendencies(&state.dataset, Some(roles.as_slice()));
    Ok(Json(RolesResponse {
        schema: state.dataset.schema(),
        available: !tendencies.is_empty(),
        tendencies,
    }))
}

pub async fn team(State(state): State<AppState>) -> Json<TeamTendency> {
    Json(analysis::team_tendencies(&state.dataset))
}

#[derive(Debug, Serialize)]
pub struct CompositionsResponse {
    pub common_compositions: Vec<CompositionEntry>,
}

pub async fn compositions(State(state): State<AppState>) -> Json<CompositionsResponse> {
    Json(CompositionsResponse {
        common_compositions: analysis::compositions(&state.dataset, state.tags.as_ref()),
    })
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
}

pub async fn insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    Json(InsightsResponse {
        insights: analysis::how_to_win(&state.dataset),
    })
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::models::{Dataset, Observation, Role};
    use crate::registry::TagRegistry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn make_obs(match_id: &str, role: Role, champion: &str, win: bool, duration: u32) -> Observation {
        Observation {
            match_id: match_id.to_string(),
            team_id: "100".to_string(),
            role,
            champion: champion.to_string(),
            win,
            game_duration: duration,
            first_dragon: true,
            first_tower: false,
        }
    }

    fn setup_test_state(dataset: Dataset) -> AppState {
        AppState::new(dataset, Arc::new(TagRegistry::builtin()), Vec::new())
    }

    fn sample() -> Dataset {
        Dataset::Full(vec![
            make_obs("g1", Role::Mid, "Azir", true, 2100),
            make_obs("g1", Role::Adc, "Jinx", true, 2100),
            make_obs("g2", Role::Mid, "Azir", true, 2400),
            make_obs("g2", Role::Adc, "Jinx", true, 2400),
            make_obs("g3", Role::Mid, "Azir", false, 1500),
            make_obs("g3", Role::Adc, "Sivir", false, 1500),
        ])
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(setup_test_state(sample()));
        let (status, json) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["rows"], 6);
    }

    #[tokio::test]
    async fn test_report() {
        let app = build_router(setup_test_state(sample()));
        let (status, json) = get_json(app, "/api/report").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["match_count"], 3);
        assert_eq!(json["role_tendencies"]["MID"]["most_played_champion"], "Azir");
        assert_eq!(json["compositions"][0]["category"], "SCALING");
        assert_eq!(json["insights"].as_array().map(|a| a.len()), Some(3));
    }

    #[tokio::test]
    async fn test_roles_with_filter() {
        let app = build_router(setup_test_state(sample()));
        let (status, json) = get_json(app, "/api/roles?roles=adc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["available"], true);
        assert!(json["tendencies"]["MID"].is_null());
        assert_eq!(json["tendencies"]["ADC"]["most_played_champion"], "Jinx");
        assert_eq!(json["tendencies"]["ADC"]["action"], "DENY COMFORT PICK");
    }

    #[tokio::test]
    async fn test_roles_unknown_role_is_bad_request() {
        let app = build_router(setup_test_state(sample()));
        let (status, json) = get_json(app, "/api/roles?roles=TOP,coach").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_partial_dataset_degrades() {
        let app = build_router(setup_test_state(sample().into_partial()));

        let (status, json) = get_json(app.clone(), "/api/roles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["schema"], "partial");
        assert_eq!(json["available"], false);

        let (_, json) = get_json(app.clone(), "/api/compositions").await;
        assert_eq!(json["common_compositions"], Value::Array(vec![]));

        let (status, json) = get_json(app, "/api/team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["win_tendency"], "late");
    }

    #[tokio::test]
    async fn test_insights() {
        let app = build_router(setup_test_state(sample()));
        let (status, json) = get_json(app, "/api/insights").await;

        assert_eq!(status, StatusCode::OK);
        let priorities: Vec<&str> = json["insights"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i["priority"].as_str())
            .collect();
        assert_eq!(priorities, vec!["HIGH", "MEDIUM", "SITUATIONAL"]);
        assert_eq!(
            json["insights"][1]["recommendation"],
            "CRASH WAVES. PUNISH WEAK ROTATIONS FOR PLATES."
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = build_router(setup_test_state(sample()));
        let (status, json) = get_json(app, "/api/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
