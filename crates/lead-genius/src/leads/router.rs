use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::backoffice::{export_csv, DashboardKpis, LeadFilter};
use super::domain::{LeadStatus, LeadSubmission, Priority};
use super::repository::{LeadRepository, RepositoryError, SettingsStore};
use super::scoring::LeadScoringInput;
use super::service::{LeadIntakeService, LeadServiceError};
use super::settings::AppSettings;

/// Router exposing landing-page intake and the back-office endpoints.
pub fn lead_router<R, S>(service: Arc<LeadIntakeService<R, S>>) -> Router
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/leads",
            post(submit_handler::<R, S>).get(list_handler::<R, S>),
        )
        .route("/api/v1/leads/score", post(score_handler::<R, S>))
        .route("/api/v1/leads/kpis", get(kpis_handler::<R, S>))
        .route("/api/v1/leads/export", get(export_handler::<R, S>))
        .route(
            "/api/v1/settings",
            get(settings_handler::<R, S>).put(save_settings_handler::<R, S>),
        )
        .with_state(service)
}

/// Back-office list filters. `all` or an empty value disables a filter.
#[derive(Debug, Default, Deserialize)]
pub struct LeadListQuery {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

impl LeadListQuery {
    pub fn into_filter(self) -> Result<LeadFilter, String> {
        let status = match selected(self.status) {
            Some(code) => Some(
                LeadStatus::from_code(&code).ok_or_else(|| format!("unknown status '{code}'"))?,
            ),
            None => None,
        };
        let priority = match selected(self.priority) {
            Some(code) => Some(
                Priority::from_code(&code).ok_or_else(|| format!("unknown priority '{code}'"))?,
            ),
            None => None,
        };

        Ok(LeadFilter {
            location: self.location,
            status,
            priority,
        })
    }
}

fn selected(value: Option<String>) -> Option<String> {
    value.filter(|raw| {
        let raw = raw.trim();
        !raw.is_empty() && !raw.eq_ignore_ascii_case("all")
    })
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, Json(payload)).into_response()
}

fn service_error_response(error: LeadServiceError) -> Response {
    match error {
        LeadServiceError::Repository(RepositoryError::Conflict) => {
            error_response(StatusCode::CONFLICT, "lead already exists")
        }
        LeadServiceError::InvalidSettings(reason) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, reason)
        }
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn submit_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
    Json(submission): Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    match service.submit(submission) {
        Ok(lead) => (StatusCode::CREATED, Json(lead)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn score_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
    Json(input): Json<LeadScoringInput>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    (StatusCode::OK, Json(service.preview(&input))).into_response()
}

pub(crate) async fn list_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
    Query(query): Query<LeadListQuery>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(reason) => return error_response(StatusCode::BAD_REQUEST, reason),
    };

    match service.leads() {
        Ok(leads) => (StatusCode::OK, Json(filter.apply(&leads))).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn kpis_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    match service.leads() {
        Ok(leads) => {
            let kpis = DashboardKpis::from_leads(&leads, Utc::now().date_naive());
            (StatusCode::OK, Json(kpis)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn export_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
    Query(query): Query<LeadListQuery>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(reason) => return error_response(StatusCode::BAD_REQUEST, reason),
    };

    let leads = match service.leads() {
        Ok(leads) => filter.apply(&leads),
        Err(error) => return service_error_response(error),
    };

    match export_csv(&leads) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"leads.csv\""),
            ],
            body,
        )
            .into_response(),
        Err(error) => error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

pub(crate) async fn settings_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    match service.settings() {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn save_settings_handler<R, S>(
    State(service): State<Arc<LeadIntakeService<R, S>>>,
    Json(settings): Json<AppSettings>,
) -> Response
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    match service.save_settings(settings) {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(error) => service_error_response(error),
    }
}
