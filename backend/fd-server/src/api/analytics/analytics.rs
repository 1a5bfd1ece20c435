//! Dashboard aggregates

use crate::{ApiResult, AppState, FlowResponse};

use fd_core::FlowSummary;

use axum::{Json, extract::State};
use chrono::Utc;

/// GET /api/v1/analytics/flow
///
/// Offer counts and quantities per lifecycle stage, recomputed from the
/// offers file on every call.
pub async fn flow_summary(State(state): State<AppState>) -> ApiResult<Json<FlowResponse>> {
    let offers = state.store.offers.find_all().await?;
    let flow = FlowSummary::from_offers(&offers);

    log::debug!("Computed flow summary over {} offers", flow.total_offers);

    Ok(Json(FlowResponse {
        flow,
        generated_at: Utc::now().timestamp(),
    }))
}
