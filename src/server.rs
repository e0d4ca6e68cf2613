use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use crate::catalog::ListParams;
use crate::dashboard::{Dashboard, ReleaseDetail, ReleaseTable};
use crate::error::DashboardError;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn build_router(dashboard: Dashboard) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/dashboard/new-releases", get(new_releases_handler))
        .route("/dashboard/new-releases/:id/view", get(release_handler))
        .with_state(dashboard)
}

async fn healthz_handler() -> &'static str {
    "ok"
}

async fn new_releases_handler(
    State(dashboard): State<Dashboard>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ReleaseTable>, DashboardError> {
    let params = ListParams::from_query(&params);
    info!(
        route = "/dashboard/new-releases",
        page = params.page,
        query = %params.query,
        "request start"
    );
    dashboard.new_releases(&params).map(Json)
}

/// Ids that are not integers cannot name a release, so they are not found.
async fn release_handler(
    State(dashboard): State<Dashboard>,
    Path(raw_id): Path<String>,
) -> Result<Json<ReleaseDetail>, DashboardError> {
    info!(route = "/dashboard/new-releases/:id/view", id = %raw_id, "request start");
    let id = raw_id
        .trim()
        .parse::<i64>()
        .map_err(|_| DashboardError::NotFound { id: raw_id.clone() })?;
    dashboard.release(id).map(Json)
}
