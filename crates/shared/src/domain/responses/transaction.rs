use crate::model::transaction::TransactionModel;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i32,
    pub card_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub merchant: Option<String>,
    pub category: Option<String>,
    pub transaction_date: NaiveDate,
    pub created_at: Option<String>,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.id,
            card_id: model.card_id,
            amount: model.amount,
            merchant: model.merchant,
            category: model.category,
            transaction_date: model.transaction_date,
            created_at: model.created_at.map(|dt| dt.to_string()),
        }
    }
}
