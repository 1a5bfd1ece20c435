use fd_core::FlowSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FlowResponse {
    pub flow: FlowSummary,
    /// Unix seconds
    pub generated_at: i64,
}
