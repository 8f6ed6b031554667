use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::service::monthly::MonthlySalesQuery;

use super::{ApiError, AppState, ok_json};

pub fn routes() -> Router<AppState> {
    Router::new().route("/monthly_sales", get(monthly_sales))
}

async fn monthly_sales(
    State(svc): State<AppState>,
    Query(query): Query<MonthlySalesQuery>,
) -> Result<Json<[f64; 12]>, ApiError> {
    ok_json(svc.monthly_sales(&query))
}
