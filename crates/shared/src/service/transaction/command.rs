use crate::{
    abstract_trait::transaction::{
        repository::command::DynTransactionCommandRepository,
        service::command::TransactionCommandServiceTrait,
    },
    domain::{
        requests::CreateTransactionRequest,
        responses::{ApiResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{error, info};

pub struct TransactionCommandService {
    command: DynTransactionCommandRepository,
}

impl TransactionCommandService {
    pub async fn new(command: DynTransactionCommandRepository) -> Self {
        Self { command }
    }
}

fn validate_amount(amount: Decimal) -> Result<(), ServiceError> {
    if amount.normalize().scale() > 2 {
        return Err(ServiceError::InvalidAmount(format!(
            "{amount} has more than 2 decimal places"
        )));
    }

    // NUMERIC(14, 2) leaves twelve integer digits.
    let limit = Decimal::new(1_000_000_000_000, 0);
    if amount.abs() >= limit {
        return Err(ServiceError::InvalidAmount(format!(
            "{amount} exceeds the NUMERIC(14, 2) range"
        )));
    }

    Ok(())
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        validate_amount(req.amount)?;

        info!(
            "🧾 Recording transaction of {} on card {} at {}",
            req.amount,
            req.card_id,
            req.merchant.as_deref().unwrap_or("unknown merchant")
        );

        let transaction = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create transaction on card {}: {e}", req.card_id);
            ServiceError::from(e)
        })?;

        info!("✅ Recorded transaction {}", transaction.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Transaction recorded successfully".to_string(),
            data: TransactionResponse::from(transaction),
        })
    }
}
