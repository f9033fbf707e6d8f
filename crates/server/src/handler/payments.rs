use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use shared::{
    abstract_trait::billing::DynBillingService,
    domain::{
        requests::MonthToDateRequest,
        responses::{ApiResponse, MonthToDate, PaymentDueResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    params(MonthToDateRequest),
    responses(
        (status = 200, description = "Month-to-date amount owed, or an empty object when the member has no current card", body = ApiResponse<PaymentDueResponse>),
        (status = 400, description = "Missing or malformed parameters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_payments(
    Extension(service): Extension<DynBillingService>,
    Query(params): Query<MonthToDateRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.month_to_date(&params).await? {
        MonthToDate::Due(response) => Ok(Json(response).into_response()),
        MonthToDate::NoCurrentCard => Ok(Json(json!({})).into_response()),
    }
}

pub fn payments_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/payments", get(get_payments))
        .layer(Extension(app_state.di_container.billing_service.clone()))
}
