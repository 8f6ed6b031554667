use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::service::departments::DateRangeQuery;

use super::{ApiError, AppState, ok_json};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/percentage_of_department_wise_sold_items",
        get(department_share),
    )
}

async fn department_share(
    State(svc): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    ok_json(svc.department_share_percentage(&query))
}
