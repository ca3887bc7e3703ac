use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::config::{INDEX_PREFIX, KIND_INDEX_PATTERN};
use crate::es::EsClient;
use crate::handlers::{error::DashboardError, AppState};
use crate::models::DashboardView;
use crate::templates::DashboardTemplate;

/// GET / - Zobrazí revize indexů a počty dokumentů podle druhu
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_dashboard(&state).await.map_err(|e| {
        tracing::error!("{}", e);
        e.to_response(state.debug)
    })
}

async fn render_dashboard(state: &AppState) -> Result<Html<String>, DashboardError> {
    let view = match tokio::time::timeout(
        state.request_timeout,
        load_dashboard_view(&state.client),
    ).await {
        Ok(result) => result?,
        Err(_) => return Err(DashboardError::Timeout(state.request_timeout)),
    };

    tracing::debug!(
        "Dashboard view: {} revisions, {} kinds",
        view.indices.len(),
        view.kinds.len()
    );

    let template = DashboardTemplate {
        prefix: INDEX_PREFIX.to_string(),
        view,
    };

    Ok(Html(template.render()?))
}

/// Oba dotazy jsou nezávislé, pouštíme je souběžně. Chyba kteréhokoliv
/// z nich shodí celý view.
pub async fn load_dashboard_view(client: &EsClient) -> anyhow::Result<DashboardView> {
    let (indices, kinds) = tokio::try_join!(
        client.cat_indices(),
        client.kind_aggregation(KIND_INDEX_PATTERN),
    )?;

    Ok(DashboardView::build(
        indices.iter().map(|i| i.index.as_str()),
        INDEX_PREFIX,
        kinds.as_ref(),
    ))
}
