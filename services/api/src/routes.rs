use crate::infra::{AppState, ListCatalog};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use hiring_views::entities::reports::ReportStatusSummary;
use hiring_views::error::AppError;
use hiring_views::listing::ListQuery;
use hiring_views::{EntityKind, ListPageView};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
pub(crate) struct ListPageResponse {
    pub(crate) list: EntityKind,
    pub(crate) title: &'static str,
    #[serde(flatten)]
    pub(crate) page: ListPageView,
    /// Detail link per item, aligned with `items`.
    pub(crate) detail_paths: Vec<Option<String>>,
}

pub(crate) fn list_router(catalog: Arc<ListCatalog>) -> Router {
    Router::new()
        .route(
            "/api/v1/lists/reports/summary",
            get(report_summary_endpoint),
        )
        .route("/api/v1/lists/:kind", get(list_endpoint))
        .with_state(catalog)
}

pub(crate) fn with_list_routes(catalog: Arc<ListCatalog>) -> Router {
    list_router(catalog)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_endpoint(
    State(catalog): State<Arc<ListCatalog>>,
    Path(kind): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListPageResponse>, AppError> {
    let kind: EntityKind = kind.parse()?;
    let query = ListQuery::from_params(params)?;

    let mut list = catalog.controller(kind);
    query.apply(&mut list)?;
    let page = list.page_view();
    debug!(
        list = %kind,
        total = page.total_items,
        page = page.current_page,
        "list page rendered"
    );

    let detail_paths = page
        .items
        .iter()
        .map(|record| kind.detail_path(record))
        .collect();

    Ok(Json(ListPageResponse {
        list: kind,
        title: kind.label(),
        page,
        detail_paths,
    }))
}

pub(crate) async fn report_summary_endpoint(
    State(catalog): State<Arc<ListCatalog>>,
) -> Json<ReportStatusSummary> {
    Json(ReportStatusSummary::from_records(
        catalog.records(EntityKind::Reports),
    ))
}
