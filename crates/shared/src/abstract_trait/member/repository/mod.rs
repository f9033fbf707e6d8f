pub mod command;
pub mod query;

pub use self::command::{DynMemberCommandRepository, MemberCommandRepositoryTrait};
pub use self::query::{DynMemberQueryRepository, MemberQueryRepositoryTrait};
