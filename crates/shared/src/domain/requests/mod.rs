mod card;
mod member;
mod payment;
mod transaction;

pub use self::card::CreateCardRequest;
pub use self::member::{CreateMemberRequest, FindMemberRequest};
pub use self::payment::MonthToDateRequest;
pub use self::transaction::CreateTransactionRequest;
