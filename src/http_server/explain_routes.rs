//! Explanation and chart-data routes
//!
//! Local/global explanation rankings and the sky-map and scatter
//! payloads, all derived from the session's effective selection. An
//! unavailable ranking is a 200-level informational payload; the
//! frontend branches on `status` only.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::SourceClass;
use crate::explain::{
    rank_global, rank_local, DEFAULT_GLOBAL_RESULT_SIZE, DEFAULT_LOCAL_RESULT_SIZE,
};
use crate::render::{
    feature_scatter, global_bar_chart, local_bar_chart, sky_map_data, GlobalBarChart,
    LocalBarChart, ScatterPoint, SkyMapData,
};

use super::server::AppState;
use super::session_routes::{not_found, ErrorResponse};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct LocalRankQuery {
    #[serde(default = "default_local_size")]
    pub size: usize,
}

fn default_local_size() -> usize {
    DEFAULT_LOCAL_RESULT_SIZE
}

#[derive(Debug, Deserialize)]
pub struct GlobalRankQuery {
    #[serde(default = "default_global_size")]
    pub size: usize,
}

fn default_global_size() -> usize {
    DEFAULT_GLOBAL_RESULT_SIZE
}

#[derive(Debug, Deserialize)]
pub struct SkyMapQuery {
    #[serde(default = "default_point_scale")]
    pub scale: u32,
}

fn default_point_scale() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub feature: String,
}

#[derive(Debug, Serialize)]
pub struct LocalExplanationResponse {
    pub source: String,
    pub class1: SourceClass,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<LocalBarChart>,
}

#[derive(Debug, Serialize)]
pub struct GlobalExplanationResponse {
    pub source_count: usize,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<GlobalBarChart>,
}

#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    pub feature: String,
    pub points: Vec<ScatterPoint>,
}

// ==================
// Routes
// ==================

/// Explanation and chart-data routes
pub fn explain_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sessions/:id/explain", get(global_explanation_handler))
        .route(
            "/sessions/:id/explain/:source",
            get(local_explanation_handler),
        )
        .route("/sessions/:id/skymap", get(sky_map_handler))
        .route("/sessions/:id/scatter", get(scatter_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn local_explanation_handler(
    State(state): State<Arc<AppState>>,
    Path((id, source)): Path<(Uuid, String)>,
    Query(query): Query<LocalRankQuery>,
) -> Result<Json<LocalExplanationResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .sessions
        .with_session(id, |_| ())
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    let record = state
        .catalogue
        .classification()
        .get(&source)
        .ok_or_else(|| not_found(format!("Unknown source '{source}'")))?;

    let ranking = rank_local(&source, state.catalogue.contributions(), query.size);
    let chart = local_bar_chart(&source, record.class1, &ranking);
    Ok(Json(LocalExplanationResponse {
        source,
        class1: record.class1,
        status: if chart.is_some() {
            "available"
        } else {
            "unavailable"
        },
        chart,
    }))
}

async fn global_explanation_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<GlobalRankQuery>,
) -> Result<Json<GlobalExplanationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let selection = state
        .sessions
        .with_session(id, |session| session.effective_selection())
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    // Only sources that actually carry a contribution row participate
    let ids: Vec<String> = selection
        .iter()
        .filter(|record| record.has_explanation)
        .map(|record| record.name.clone())
        .collect();

    let ranking = rank_global(&ids, state.catalogue.contributions(), query.size);
    let chart = global_bar_chart(ids.len(), &ranking);
    Ok(Json(GlobalExplanationResponse {
        source_count: ids.len(),
        status: if chart.is_some() {
            "available"
        } else {
            "unavailable"
        },
        chart,
    }))
}

async fn sky_map_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<SkyMapQuery>,
) -> Result<Json<SkyMapData>, (StatusCode, Json<ErrorResponse>)> {
    let selection = state
        .sessions
        .with_session(id, |session| session.effective_selection())
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    Ok(Json(sky_map_data(&selection, query.scale)))
}

async fn scatter_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ScatterResponse>, (StatusCode, Json<ErrorResponse>)> {
    let selection = state
        .sessions
        .with_session(id, |session| session.effective_selection())
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    let points = feature_scatter(
        &query.feature,
        &selection,
        state.catalogue.feature_values(),
        state.catalogue.contributions(),
    )
    .ok_or_else(|| not_found(format!("Unknown feature '{}'", query.feature)))?;

    Ok(Json(ScatterResponse {
        feature: query.feature,
        points,
    }))
}
