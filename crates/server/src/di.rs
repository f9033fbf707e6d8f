use shared::{
    abstract_trait::{
        billing::DynBillingService,
        member::{
            repository::{command::DynMemberCommandRepository, query::DynMemberQueryRepository},
            service::{command::DynMemberCommandService, query::DynMemberQueryService},
        },
    },
    config::ConnectionPool,
    repository::{
        card::CardQueryRepository,
        member::{MemberCommandRepository, MemberQueryRepository},
        transaction::TransactionQueryRepository,
    },
    service::{billing::BillingService, member::MemberCommandService, member::MemberQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub member_query_service: DynMemberQueryService,
    pub member_command_service: DynMemberCommandService,
    pub billing_service: DynBillingService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("member_query_service", &"MemberQueryService")
            .field("member_command_service", &"MemberCommandService")
            .field("billing_service", &"BillingService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(pool: ConnectionPool) -> Self {
        let member_query_repository =
            Arc::new(MemberQueryRepository::new(pool.clone())) as DynMemberQueryRepository;
        let member_command_repository =
            Arc::new(MemberCommandRepository::new(pool.clone())) as DynMemberCommandRepository;
        let card_query_repository = Arc::new(CardQueryRepository::new(pool.clone()));
        let transaction_query_repository = Arc::new(TransactionQueryRepository::new(pool));

        let member_query_service = Arc::new(MemberQueryService::new(member_query_repository).await)
            as DynMemberQueryService;
        let member_command_service =
            Arc::new(MemberCommandService::new(member_command_repository).await)
                as DynMemberCommandService;
        let billing_service = Arc::new(
            BillingService::new(card_query_repository, transaction_query_repository).await,
        ) as DynBillingService;

        Self {
            member_query_service,
            member_command_service,
            billing_service,
        }
    }
}
