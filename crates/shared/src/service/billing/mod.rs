use crate::{
    abstract_trait::{
        billing::BillingServiceTrait, card::repository::query::DynCardQueryRepository,
        transaction::repository::query::DynTransactionQueryRepository,
    },
    domain::{
        requests::MonthToDateRequest,
        responses::{ApiResponse, MonthToDate, PaymentDueResponse},
    },
    errors::ServiceError,
    utils::month_to_date_window,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct BillingService {
    card_query: DynCardQueryRepository,
    transaction_query: DynTransactionQueryRepository,
}

impl BillingService {
    pub async fn new(
        card_query: DynCardQueryRepository,
        transaction_query: DynTransactionQueryRepository,
    ) -> Self {
        Self {
            card_query,
            transaction_query,
        }
    }
}

#[async_trait]
impl BillingServiceTrait for BillingService {
    async fn month_to_date(
        &self,
        req: &MonthToDateRequest,
    ) -> Result<MonthToDate, ServiceError> {
        info!(
            "💵 Computing month-to-date amount for member {} through {}",
            req.member_uuid, req.date
        );

        let card = self
            .card_query
            .find_current_for_member(req.member_uuid)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch current card for {}: {e}", req.member_uuid);
                ServiceError::from(e)
            })?;

        let Some(card) = card else {
            info!("💳 Member {} has no current card", req.member_uuid);
            return Ok(MonthToDate::NoCurrentCard);
        };

        let (period_start, period_end) = month_to_date_window(req.date);

        let amount_due = self
            .transaction_query
            .sum_amounts_in_window(card.id, period_start, period_end)
            .await
            .map_err(|e| {
                error!("❌ Failed to sum transactions for card {}: {e}", card.id);
                ServiceError::from(e)
            })?;

        info!(
            "✅ Member {} owes {amount_due} for {period_start}..{period_end}",
            req.member_uuid
        );

        Ok(MonthToDate::Due(ApiResponse {
            status: "success".to_string(),
            message: "Month-to-date amount computed".to_string(),
            data: PaymentDueResponse {
                member_uuid: req.member_uuid,
                period_start,
                period_end,
                amount_due,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            card::repository::query::CardQueryRepositoryTrait,
            transaction::repository::query::TransactionQueryRepositoryTrait,
        },
        errors::RepositoryError,
        model::{card::CardModel, transaction::TransactionModel},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use uuid::Uuid;

    struct InMemoryCardRepository {
        cards: Vec<CardModel>,
    }

    #[async_trait]
    impl CardQueryRepositoryTrait for InMemoryCardRepository {
        async fn find_current_for_member(
            &self,
            member_uuid: Uuid,
        ) -> Result<Option<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .iter()
                .filter(|c| c.member_uuid == member_uuid && c.is_current)
                .max_by_key(|c| c.id)
                .cloned())
        }
    }

    struct InMemoryTransactionRepository {
        transactions: Vec<TransactionModel>,
    }

    #[async_trait]
    impl TransactionQueryRepositoryTrait for InMemoryTransactionRepository {
        async fn find_by_card_in_window(
            &self,
            card_id: i32,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> Result<Vec<TransactionModel>, RepositoryError> {
            Ok(self
                .transactions
                .iter()
                .filter(|t| {
                    t.card_id == card_id
                        && t.transaction_date >= start_date
                        && t.transaction_date <= end_date
                })
                .cloned()
                .collect())
        }

        async fn sum_amounts_in_window(
            &self,
            card_id: i32,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> Result<Decimal, RepositoryError> {
            let total = self
                .find_by_card_in_window(card_id, start_date, end_date)
                .await?
                .iter()
                .map(|t| t.amount)
                .sum::<Decimal>();
            Ok(total.round_dp(2))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn card(id: i32, member_uuid: Uuid, is_current: bool) -> CardModel {
        CardModel {
            id,
            member_uuid,
            is_current,
            date_activated: Some(date(2021, 9, 15)),
            created_at: None,
        }
    }

    fn transaction(id: i32, card_id: i32, amount: &str, on: NaiveDate) -> TransactionModel {
        TransactionModel {
            id,
            card_id,
            amount: dec(amount),
            merchant: Some("corner store".to_string()),
            category: Some("groceries".to_string()),
            transaction_date: on,
            created_at: None,
        }
    }

    async fn billing(
        cards: Vec<CardModel>,
        transactions: Vec<TransactionModel>,
    ) -> BillingService {
        BillingService::new(
            Arc::new(InMemoryCardRepository { cards }),
            Arc::new(InMemoryTransactionRepository { transactions }),
        )
        .await
    }

    #[tokio::test]
    async fn sums_the_current_card_for_the_month_to_date() {
        let member_uuid = Uuid::new_v4();
        let service = billing(
            vec![
                card(1, member_uuid, false),
                card(2, member_uuid, true),
            ],
            vec![
                transaction(1, 2, "34.21", date(2021, 9, 16)),
                transaction(2, 2, "5.07", date(2021, 9, 18)),
                transaction(3, 2, "2.90", date(2021, 9, 22)),
                transaction(4, 2, "320.10", date(2021, 9, 30)),
            ],
        )
        .await;

        let result = service
            .month_to_date(&MonthToDateRequest {
                member_uuid,
                date: date(2021, 9, 30),
            })
            .await
            .unwrap();

        let MonthToDate::Due(response) = result else {
            panic!("expected an amount due");
        };
        assert_eq!(response.data.amount_due, dec("362.28"));
        assert_eq!(response.data.period_start, date(2021, 9, 1));
        assert_eq!(response.data.period_end, date(2021, 9, 30));
    }

    #[tokio::test]
    async fn excludes_transactions_outside_the_window() {
        let member_uuid = Uuid::new_v4();
        let service = billing(
            vec![card(1, member_uuid, true)],
            vec![
                // Prior month, day before the window opens.
                transaction(1, 1, "100.00", date(2021, 8, 31)),
                // On the reference date itself: included.
                transaction(2, 1, "25.00", date(2021, 9, 15)),
                // Day after the reference date: excluded.
                transaction(3, 1, "50.00", date(2021, 9, 16)),
            ],
        )
        .await;

        let result = service
            .month_to_date(&MonthToDateRequest {
                member_uuid,
                date: date(2021, 9, 15),
            })
            .await
            .unwrap();

        let MonthToDate::Due(response) = result else {
            panic!("expected an amount due");
        };
        assert_eq!(response.data.amount_due, dec("25.00"));
    }

    #[tokio::test]
    async fn no_current_card_is_a_domain_condition_not_an_error() {
        let member_uuid = Uuid::new_v4();
        let service = billing(vec![card(1, member_uuid, false)], vec![]).await;

        let result = service
            .month_to_date(&MonthToDateRequest {
                member_uuid,
                date: date(2021, 9, 30),
            })
            .await
            .unwrap();

        assert!(matches!(result, MonthToDate::NoCurrentCard));
    }

    #[tokio::test]
    async fn empty_transaction_set_sums_to_zero() {
        let member_uuid = Uuid::new_v4();
        let service = billing(vec![card(1, member_uuid, true)], vec![]).await;

        let result = service
            .month_to_date(&MonthToDateRequest {
                member_uuid,
                date: date(2021, 9, 30),
            })
            .await
            .unwrap();

        let MonthToDate::Due(response) = result else {
            panic!("expected an amount due of zero");
        };
        assert_eq!(response.data.amount_due, dec("0.00"));
    }

    #[tokio::test]
    async fn most_recently_created_current_card_wins_the_tie() {
        let member_uuid = Uuid::new_v4();
        // Two cards both flagged current: a data anomaly the schema allows.
        let service = billing(
            vec![
                card(1, member_uuid, true),
                card(2, member_uuid, true),
            ],
            vec![
                transaction(1, 1, "500.00", date(2021, 9, 10)),
                transaction(2, 2, "42.00", date(2021, 9, 10)),
            ],
        )
        .await;

        let result = service
            .month_to_date(&MonthToDateRequest {
                member_uuid,
                date: date(2021, 9, 30),
            })
            .await
            .unwrap();

        let MonthToDate::Due(response) = result else {
            panic!("expected an amount due");
        };
        assert_eq!(response.data.amount_due, dec("42.00"));
    }

    #[tokio::test]
    async fn repeated_queries_return_identical_results() {
        let member_uuid = Uuid::new_v4();
        let service = billing(
            vec![card(1, member_uuid, true)],
            vec![transaction(1, 1, "12.34", date(2021, 9, 5))],
        )
        .await;

        let req = MonthToDateRequest {
            member_uuid,
            date: date(2021, 9, 30),
        };

        let first = service.month_to_date(&req).await.unwrap();
        let second = service.month_to_date(&req).await.unwrap();

        let (MonthToDate::Due(a), MonthToDate::Due(b)) = (first, second) else {
            panic!("expected amounts due");
        };
        assert_eq!(a.data.amount_due, b.data.amount_due);
    }
}
