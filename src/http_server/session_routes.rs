//! Session HTTP routes
//!
//! Session lifecycle, filter submission, row selection, and CSV export.
//! Empty filter results are informational payloads (`total: 0`), never
//! HTTP errors; only unknown sessions and invalid inputs map to error
//! statuses.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::{SourceClass, SourceRecord};
use crate::export;
use crate::filter::{apply_filters, ConeSearch, FilterCriteria};
use crate::observability::{Logger, Severity};

use super::server::AppState;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: Uuid,
    pub rows: Vec<SourceRecord>,
    /// Rows in the current filtered view
    pub total: usize,
    /// Size of the effective selection (equals `total` when the user
    /// selection is empty)
    pub selected: usize,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub probability_threshold: f64,
    #[serde(default)]
    pub classes: Vec<SourceClass>,
    #[serde(default)]
    pub require_explanation: bool,
    #[serde(default)]
    pub center_ra: Option<f64>,
    #[serde(default)]
    pub center_dec: Option<f64>,
    /// Arcminutes; zero disables the cone search
    #[serde(default)]
    pub radius_arcmin: f64,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub scope: ExportScope,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportScope {
    #[default]
    View,
    Selection,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

// ==================
// Routes
// ==================

/// Session routes
pub fn session_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/:id",
            get(get_view_handler).delete(close_session_handler),
        )
        .route("/sessions/:id/filter", post(submit_filter_handler))
        .route("/sessions/:id/selection", post(select_rows_handler))
        .route("/sessions/:id/export", get(export_handler))
        .with_state(state)
}

// ==================
// Helpers
// ==================

pub(super) fn not_found(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.into(),
            code: 404,
        }),
    )
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
            code: 400,
        }),
    )
}

fn session_response(state: &AppState, id: Uuid) -> Option<SessionResponse> {
    state.sessions.with_session(id, |session| SessionResponse {
        session: id,
        rows: session.view().to_vec(),
        total: session.view().len(),
        selected: session.effective_selection().len(),
    })
}

// ==================
// Handlers
// ==================

async fn create_session_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let id = state.sessions.create(state.catalogue.classification());
    Logger::log(
        Severity::Info,
        "session_created",
        &[("session", &id.to_string())],
    );
    let response = session_response(&state, id).unwrap_or(SessionResponse {
        session: id,
        rows: vec![],
        total: 0,
        selected: 0,
    });
    (StatusCode::CREATED, Json(response))
}

async fn get_view_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    session_response(&state, id)
        .map(Json)
        .ok_or_else(|| not_found(format!("Unknown session {id}")))
}

async fn close_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(format!("Unknown session {id}")))
    }
}

async fn submit_filter_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !request.probability_threshold.is_finite()
        || !(0.0..=1.0).contains(&request.probability_threshold)
    {
        return Err(bad_request(format!(
            "probability_threshold {} outside [0, 1]",
            request.probability_threshold
        )));
    }

    let cone = match (request.center_ra, request.center_dec) {
        (Some(ra), Some(dec)) => ConeSearch::new(ra, dec, request.radius_arcmin),
        _ => None,
    };
    let criteria = FilterCriteria {
        probability_threshold: request.probability_threshold,
        allowed_classes: request.classes,
        require_explanation: request.require_explanation,
        cone,
    };

    let view = apply_filters(state.catalogue.classification(), &criteria);
    Logger::log(
        Severity::Info,
        "filter_applied",
        &[
            ("session", &id.to_string()),
            ("matches", &view.len().to_string()),
        ],
    );

    state
        .sessions
        .update(id, |session| session.submit_filter(view))
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    session_response(&state, id)
        .map(Json)
        .ok_or_else(|| not_found(format!("Unknown session {id}")))
}

async fn select_rows_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .sessions
        .update(id, |session| session.select_rows(&request.ids))
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    session_response(&state, id)
        .map(Json)
        .ok_or_else(|| not_found(format!("Unknown session {id}")))
}

async fn export_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let rows = state
        .sessions
        .with_session(id, |session| match query.scope {
            ExportScope::View => session.view().to_vec(),
            ExportScope::Selection => session.effective_selection(),
        })
        .ok_or_else(|| not_found(format!("Unknown session {id}")))?;

    let body = export::encode_classification(&rows);
    Logger::log(
        Severity::Info,
        "export_written",
        &[
            ("session", &id.to_string()),
            ("rows", &rows.len().to_string()),
        ],
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"csc-classification.csv\"",
            ),
        ],
        body,
    ))
}
