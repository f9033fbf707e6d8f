use async_trait::async_trait;
use axum::{
    Extension, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::{get, post},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::handler::{member, payments};
use shared::{
    abstract_trait::{
        billing::{BillingServiceTrait, DynBillingService},
        member::service::{
            command::{DynMemberCommandService, MemberCommandServiceTrait},
            query::{DynMemberQueryService, MemberQueryServiceTrait},
        },
    },
    domain::{
        requests::{CreateMemberRequest, FindMemberRequest, MonthToDateRequest},
        responses::{
            ApiResponse, MemberCreatedResponse, MemberResponse, MonthToDate, PaymentDueResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::member::MemberModel,
    utils::month_to_date_window,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

struct InMemoryMemberStore {
    members: Mutex<Vec<MemberModel>>,
}

impl InMemoryMemberStore {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            members: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MemberQueryServiceTrait for InMemoryMemberStore {
    async fn find_by_uuid(
        &self,
        req: &FindMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError> {
        let members = self.members.lock().unwrap();
        let member = members
            .iter()
            .find(|m| m.member_uuid == req.member_uuid)
            .cloned()
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member retrieved successfully".to_string(),
            data: MemberResponse::from(member),
        })
    }
}

#[async_trait]
impl MemberCommandServiceTrait for InMemoryMemberStore {
    async fn create(
        &self,
        req: &CreateMemberRequest,
    ) -> Result<ApiResponse<MemberCreatedResponse>, ServiceError> {
        let mut members = self.members.lock().unwrap();
        let member = MemberModel {
            id: members.len() as i32 + 1,
            member_uuid: Uuid::new_v4(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            address: req.address.clone(),
            email: req.email.clone(),
            created_at: None,
        };
        members.push(member.clone());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member created successfully".to_string(),
            data: MemberCreatedResponse::from(member),
        })
    }
}

struct FixedBillingService {
    billed_member: Uuid,
    amount: &'static str,
}

#[async_trait]
impl BillingServiceTrait for FixedBillingService {
    async fn month_to_date(
        &self,
        req: &MonthToDateRequest,
    ) -> Result<MonthToDate, ServiceError> {
        if req.member_uuid != self.billed_member {
            return Ok(MonthToDate::NoCurrentCard);
        }

        let (period_start, period_end) = month_to_date_window(req.date);
        Ok(MonthToDate::Due(ApiResponse {
            status: "success".to_string(),
            message: "Month-to-date amount computed".to_string(),
            data: PaymentDueResponse {
                member_uuid: req.member_uuid,
                period_start,
                period_end,
                amount_due: self.amount.parse().unwrap(),
            },
        }))
    }
}

fn member_router(store: Arc<InMemoryMemberStore>) -> Router {
    Router::new()
        .route("/api/member", get(member::get_member))
        .route("/api/member", post(member::create_member))
        .layer(Extension(store.clone() as DynMemberQueryService))
        .layer(Extension(store as DynMemberCommandService))
}

fn payments_router(billing: FixedBillingService) -> Router {
    Router::new()
        .route("/api/payments", get(payments::get_payments))
        .layer(Extension(Arc::new(billing) as DynBillingService))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_member(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/member")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_uri(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn created_member_is_retrievable_with_submitted_fields() {
    let store = InMemoryMemberStore::new();
    let app = member_router(store);

    let response = app
        .clone()
        .oneshot(post_member(json!({
            "first_name": "Rory",
            "last_name": "LaMendola",
            "address": "123 Main Street"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let member_uuid = created["data"]["member_uuid"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get_uri(&format!("/api/member?member_uuid={member_uuid}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["first_name"], "Rory");
    assert_eq!(fetched["data"]["last_name"], "LaMendola");
    assert_eq!(fetched["data"]["address"], "123 Main Street");
    assert_eq!(fetched["data"]["member_uuid"], Value::String(member_uuid));
}

#[tokio::test]
async fn unknown_member_yields_404_with_no_member_data() {
    let app = member_router(InMemoryMemberStore::new());

    let response = app
        .oneshot(get_uri(&format!("/api/member?member_uuid={}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_the_store() {
    let store = InMemoryMemberStore::new();
    let app = member_router(store.clone());

    let response = app
        .oneshot(post_member(json!({ "first_name": "Rory" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.members.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_required_field_is_rejected_before_the_store() {
    let store = InMemoryMemberStore::new();
    let app = member_router(store.clone());

    let response = app
        .oneshot(post_member(json!({
            "first_name": "",
            "last_name": "LaMendola"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.members.lock().unwrap().is_empty());
}

#[tokio::test]
async fn payments_returns_the_month_to_date_amount() {
    let member_uuid = Uuid::new_v4();
    let app = payments_router(FixedBillingService {
        billed_member: member_uuid,
        amount: "362.28",
    });

    let response = app
        .oneshot(get_uri(&format!(
            "/api/payments?member_uuid={member_uuid}&date=2021-09-30"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["amount_due"], json!(362.28));
    assert_eq!(body["data"]["period_start"], "2021-09-01");
    assert_eq!(body["data"]["period_end"], "2021-09-30");
}

#[tokio::test]
async fn payments_without_a_current_card_is_an_empty_object() {
    let app = payments_router(FixedBillingService {
        billed_member: Uuid::new_v4(),
        amount: "0.00",
    });

    let response = app
        .oneshot(get_uri(&format!(
            "/api/payments?member_uuid={}&date=2021-09-30",
            Uuid::new_v4()
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn payments_rejects_a_malformed_date() {
    let app = payments_router(FixedBillingService {
        billed_member: Uuid::new_v4(),
        amount: "0.00",
    });

    let response = app
        .oneshot(get_uri(&format!(
            "/api/payments?member_uuid={}&date=not-a-date",
            Uuid::new_v4()
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_gets_return_identical_bodies() {
    let store = InMemoryMemberStore::new();
    let app = member_router(store);

    let response = app
        .clone()
        .oneshot(post_member(json!({
            "first_name": "Maya",
            "last_name": "Okafor"
        })))
        .await
        .unwrap();
    let created = body_json(response).await;
    let member_uuid = created["data"]["member_uuid"].as_str().unwrap().to_string();

    let uri = format!("/api/member?member_uuid={member_uuid}");
    let first = body_json(app.clone().oneshot(get_uri(&uri)).await.unwrap()).await;
    let second = body_json(app.oneshot(get_uri(&uri)).await.unwrap()).await;

    assert_eq!(first, second);
}
