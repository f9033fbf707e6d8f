use crate::{
    domain::{requests::MonthToDateRequest, responses::MonthToDate},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBillingService = Arc<dyn BillingServiceTrait + Send + Sync>;

#[async_trait]
pub trait BillingServiceTrait {
    /// Amount a member owes from the first day of the reference date's
    /// month through the reference date, inclusive.
    async fn month_to_date(&self, req: &MonthToDateRequest)
        -> Result<MonthToDate, ServiceError>;
}
