pub mod command;
pub mod query;

pub use self::command::TransactionCommandRepository;
pub use self::query::TransactionQueryRepository;
