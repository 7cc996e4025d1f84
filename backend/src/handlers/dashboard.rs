//! HTTP handler for the dashboard summary

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::dashboard::DashboardSummary;
use crate::services::DashboardService;
use crate::AppState;

/// Get the aggregate dashboard summary
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let service = DashboardService::new(state.db);
    let summary = service.summary().await?;

    Ok(Json(summary))
}
