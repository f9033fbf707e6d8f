mod api;
mod card;
mod health;
mod member;
mod payment;
mod transaction;

pub use self::api::ApiResponse;
pub use self::card::CardResponse;
pub use self::health::HealthResponse;
pub use self::member::{MemberCreatedResponse, MemberResponse};
pub use self::payment::{MonthToDate, PaymentDueResponse};
pub use self::transaction::TransactionResponse;
