use crate::{middleware::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::member::service::{
        command::DynMemberCommandService, query::DynMemberQueryService,
    },
    domain::{
        requests::{CreateMemberRequest, FindMemberRequest},
        responses::{ApiResponse, MemberCreatedResponse, MemberResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/member",
    tag = "Member",
    params(FindMemberRequest),
    responses(
        (status = 200, description = "Member details", body = ApiResponse<MemberResponse>),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_member(
    Extension(service): Extension<DynMemberQueryService>,
    Query(params): Query<FindMemberRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_uuid(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/member",
    tag = "Member",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = ApiResponse<MemberCreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Member already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_member(
    Extension(service): Extension<DynMemberCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn member_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/member", get(get_member))
        .route("/api/member", post(create_member))
        .layer(Extension(
            app_state.di_container.member_query_service.clone(),
        ))
        .layer(Extension(
            app_state.di_container.member_command_service.clone(),
        ))
}
