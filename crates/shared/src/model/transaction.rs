use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i32,
    pub card_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub merchant: Option<String>,
    pub category: Option<String>,
    pub transaction_date: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
}
