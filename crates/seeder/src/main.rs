use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::{Rng, rng};
use rust_decimal::Decimal;
use shared::{
    abstract_trait::{
        billing::BillingServiceTrait,
        card::service::command::CardCommandServiceTrait,
        member::service::command::MemberCommandServiceTrait,
        transaction::{
            repository::query::TransactionQueryRepositoryTrait,
            service::command::TransactionCommandServiceTrait,
        },
    },
    config::{Config, ConnectionManager},
    domain::{
        requests::{
            CreateCardRequest, CreateMemberRequest, CreateTransactionRequest, MonthToDateRequest,
        },
        responses::MonthToDate,
    },
    repository::{
        card::{CardCommandRepository, CardQueryRepository},
        member::MemberCommandRepository,
        transaction::{TransactionCommandRepository, TransactionQueryRepository},
    },
    service::{
        billing::BillingService, card::CardCommandService, member::MemberCommandService,
        transaction::TransactionCommandService,
    },
    utils::Logger,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const MEMBER_COUNT: usize = 100;
const TRANSACTIONS_PER_CARD: usize = 10;

const FIRST_NAMES: &[&str] = &[
    "Rory", "Maya", "Elena", "Marcus", "Priya", "Jonas", "Aisha", "Victor", "Nadia", "Felix",
];
const LAST_NAMES: &[&str] = &[
    "LaMendola", "Okafor", "Petrov", "Lindgren", "Tanaka", "Moreau", "Silva", "Kowalski",
    "Haddad", "Berg",
];
const MERCHANTS: &[&str] = &[
    "corner store", "gas station", "book shop", "cafe", "grocery", "pharmacy", "cinema",
];
const CATEGORIES: &[&str] = &["food", "fuel", "leisure", "household", "health"];

struct Seeder {
    members: Arc<MemberCommandService>,
    cards: Arc<CardCommandService>,
    transactions: Arc<TransactionCommandService>,
    transaction_query: Arc<TransactionQueryRepository>,
    billing: Arc<BillingService>,
}

fn pick(rng: &mut impl Rng, options: &[&str]) -> String {
    options[rng.random_range(0..options.len())].to_string()
}

fn random_amount(rng: &mut impl Rng) -> Decimal {
    // Cents in 0.00..=1000.00, already at NUMERIC(14, 2) scale.
    Decimal::new(rng.random_range(0..=100_000), 2)
}

fn random_date_between(rng: &mut impl Rng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    start + chrono::Duration::days(rng.random_range(0..=span))
}

impl Seeder {
    async fn seed_random_members(&self) -> Result<()> {
        let window_start = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
        let window_end = NaiveDate::from_ymd_opt(2021, 9, 30).unwrap();

        for _ in 0..MEMBER_COUNT {
            // ThreadRng is not Send, so draw everything before awaiting.
            let (member_req, activation_date, drafts) = {
                let mut rng = rng();
                let member_req = CreateMemberRequest {
                    first_name: pick(&mut rng, FIRST_NAMES),
                    last_name: pick(&mut rng, LAST_NAMES),
                    address: Some(format!("{} Main Street", rng.random_range(1..999))),
                    email: None,
                };
                let activation_date = random_date_between(&mut rng, window_start, window_end);
                let drafts: Vec<(Decimal, String, String, NaiveDate)> = (0..TRANSACTIONS_PER_CARD)
                    .map(|_| {
                        (
                            random_amount(&mut rng),
                            pick(&mut rng, MERCHANTS),
                            pick(&mut rng, CATEGORIES),
                            random_date_between(&mut rng, window_start, window_end),
                        )
                    })
                    .collect();
                (member_req, activation_date, drafts)
            };

            let member = self
                .members
                .create(&member_req)
                .await
                .context("Failed to seed member")?;

            let card = self
                .cards
                .create(&CreateCardRequest {
                    member_uuid: member.data.member_uuid,
                    is_current: true,
                    date_activated: Some(activation_date),
                })
                .await
                .context("Failed to seed card")?;

            for (amount, merchant, category, transaction_date) in drafts {
                self.transactions
                    .create(&CreateTransactionRequest {
                        card_id: card.data.id,
                        amount,
                        merchant: Some(merchant),
                        category: Some(category),
                        transaction_date,
                    })
                    .await
                    .context("Failed to seed transaction")?;
            }
        }

        info!("🌱 Seeded {MEMBER_COUNT} members with cards and transactions");

        Ok(())
    }

    /// A member with a replaced card: the old card keeps its history, the
    /// new one is current with a known month-to-date total.
    async fn seed_known_scenario(&self) -> Result<Uuid> {
        let switch_date = NaiveDate::from_ymd_opt(2021, 9, 15).unwrap();
        let month_start = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
        let month_end = NaiveDate::from_ymd_opt(2021, 9, 30).unwrap();

        let member = self
            .members
            .create(&CreateMemberRequest {
                first_name: "Bobby".to_string(),
                last_name: "DropTables".to_string(),
                address: Some("742 Evergreen Terrace".to_string()),
                email: Some("bobby@example.com".to_string()),
            })
            .await
            .context("Failed to seed scenario member")?;
        let member_uuid = member.data.member_uuid;

        let old_card = self
            .cards
            .create(&CreateCardRequest {
                member_uuid,
                is_current: false,
                date_activated: None,
            })
            .await
            .context("Failed to seed old card")?;

        let current_card = self
            .cards
            .create(&CreateCardRequest {
                member_uuid,
                is_current: true,
                date_activated: Some(switch_date),
            })
            .await
            .context("Failed to seed current card")?;

        let old_amounts = ["100.05", "14.32", "58.68"];
        for (i, amount) in old_amounts.iter().enumerate() {
            self.transactions
                .create(&CreateTransactionRequest {
                    card_id: old_card.data.id,
                    amount: amount.parse().unwrap(),
                    merchant: Some("legacy merchant".to_string()),
                    category: None,
                    transaction_date: month_start + chrono::Duration::days(i as i64),
                })
                .await
                .context("Failed to seed old-card transaction")?;
        }

        let current_amounts = ["34.21", "5.07", "2.90", "320.10"];
        for (i, amount) in current_amounts.iter().enumerate() {
            self.transactions
                .create(&CreateTransactionRequest {
                    card_id: current_card.data.id,
                    amount: amount.parse().unwrap(),
                    merchant: Some("corner store".to_string()),
                    category: Some("food".to_string()),
                    transaction_date: switch_date + chrono::Duration::days(i as i64),
                })
                .await
                .context("Failed to seed current-card transaction")?;
        }

        let window_transactions = self
            .transaction_query
            .find_by_card_in_window(current_card.data.id, month_start, month_end)
            .await
            .context("Failed to read back seeded transactions")?;

        info!(
            "🌱 Scenario member {member_uuid} holds {} current-card transactions in September",
            window_transactions.len()
        );

        Ok(member_uuid)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _logger = Logger::new("seeder", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🔌 Connecting to database at {}", config.safe_database_url());

    let pool = ConnectionManager::new_pool(&config.database_url(), config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let member_command = Arc::new(MemberCommandRepository::new(pool.clone()));
    let card_command = Arc::new(CardCommandRepository::new(pool.clone()));
    let card_query = Arc::new(CardQueryRepository::new(pool.clone()));
    let transaction_command = Arc::new(TransactionCommandRepository::new(pool.clone()));
    let transaction_query = Arc::new(TransactionQueryRepository::new(pool));

    let seeder = Seeder {
        members: Arc::new(MemberCommandService::new(member_command).await),
        cards: Arc::new(CardCommandService::new(card_command).await),
        transactions: Arc::new(TransactionCommandService::new(transaction_command).await),
        transaction_query: transaction_query.clone(),
        billing: Arc::new(BillingService::new(card_query, transaction_query).await),
    };

    seeder.seed_random_members().await?;
    let scenario_member = seeder.seed_known_scenario().await?;

    let outcome = seeder
        .billing
        .month_to_date(&MonthToDateRequest {
            member_uuid: scenario_member,
            date: NaiveDate::from_ymd_opt(2021, 9, 30).unwrap(),
        })
        .await
        .context("Failed to compute scenario month-to-date")?;

    match outcome {
        MonthToDate::Due(response) => info!(
            "✅ Scenario member owes {} for {}..{}",
            response.data.amount_due, response.data.period_start, response.data.period_end
        ),
        MonthToDate::NoCurrentCard => info!("💳 Scenario member has no current card"),
    }

    println!("🌱 Seeding complete");

    Ok(())
}
