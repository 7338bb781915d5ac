use axum::{extract::State, Json};

use crate::models::portfolio::PortfolioData;
use crate::state::AppState;

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<PortfolioData> {
    Json(PortfolioData::clone(&state.portfolio))
}
