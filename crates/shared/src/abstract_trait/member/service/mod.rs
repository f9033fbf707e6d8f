pub mod command;
pub mod query;

pub use self::command::{DynMemberCommandService, MemberCommandServiceTrait};
pub use self::query::{DynMemberQueryService, MemberQueryServiceTrait};
