pub mod command;
pub mod query;

pub use self::command::MemberCommandRepository;
pub use self::query::MemberQueryRepository;
