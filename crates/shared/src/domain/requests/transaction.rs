use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTransactionRequest {
    #[validate(range(min = 1, message = "Card ID must be positive"))]
    pub card_id: i32,

    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    #[validate(length(max = 64, message = "Merchant name is too long"))]
    pub merchant: Option<String>,

    #[validate(length(max = 64, message = "Category is too long"))]
    pub category: Option<String>,

    pub transaction_date: NaiveDate,
}
