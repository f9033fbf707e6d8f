use crate::domain::responses::ApiResponse;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDueResponse {
    pub member_uuid: Uuid,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_due: Decimal,
}

/// Outcome of the month-to-date billing calculation. A member without a
/// current card is a domain condition, not an error: the HTTP layer turns
/// it into an empty `{}` body.
#[derive(Debug)]
pub enum MonthToDate {
    Due(ApiResponse<PaymentDueResponse>),
    NoCurrentCard,
}
