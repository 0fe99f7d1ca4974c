//! Tests for user handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{TimeZone, Utc};
use insta::assert_json_snapshot;
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::domain::{EmailAddress, ErrorCode, UserName};
use crate::inbound::http::api_scope;

fn john(id: i64) -> User {
    User::persisted(
        UserId::new(id),
        UserName::new("John Doe").expect("valid name"),
        EmailAddress::new("john.doe@test.com").expect("valid email"),
        Utc.with_ymd_and_hms(2025, 10, 22, 21, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

async fn call(
    query: MockUsersQuery,
    command: MockUsersCommand,
    request: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope()),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

#[rstest]
#[actix_web::test]
async fn list_returns_users_as_json_array() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_all_users()
        .times(1)
        .return_once(|| Ok(vec![john(1)]));

    let res = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri("/api/users"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<User> = actix_test::read_body_json(res).await;
    assert_eq!(body, vec![john(1)]);
}

#[rstest]
#[actix_web::test]
async fn get_renders_user_payload() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_user_by_id()
        .with(eq(UserId::new(1)))
        .times(1)
        .return_once(|_| Ok(Some(john(1))));

    let res = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri("/api/users/1"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: User = actix_test::read_body_json(res).await;
    assert_json_snapshot!(body, @r#"
    {
      "id": 1,
      "name": "John Doe",
      "email": "john.doe@test.com",
      "createdAt": "2025-10-22T21:00:00Z"
    }
    "#);
}

#[rstest]
#[actix_web::test]
async fn get_missing_user_is_not_found() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_user_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let res = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri("/api/users/999"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(actix_test::read_body(res).await.is_empty());
}

#[rstest]
#[case::non_numeric("/api/users/abc")]
#[case::overflow("/api/users/99999999999999999999")]
#[actix_web::test]
async fn non_integer_id_is_rejected_before_the_service(#[case] uri: &str) {
    let mut query = MockUsersQuery::new();
    query.expect_get_user_by_id().times(0);

    let res = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_and_ignores_client_identity() {
    let mut command = MockUsersCommand::new();
    command
        .expect_create_user()
        .withf(|draft| draft.created_at.is_none() && draft.name.as_ref() == "John Doe")
        .times(1)
        .return_once(|_| Ok(john(1)));

    let res = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::post().uri("/api/users").set_json(json!({
            "id": 42,
            "name": "John Doe",
            "email": "john.doe@test.com",
            "createdAt": "1999-01-01T00:00:00Z"
        })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: User = actix_test::read_body_json(res).await;
    assert_eq!(body.id(), Some(UserId::new(1)));
}

#[rstest]
#[case::blank_name(json!({"name": "  ", "email": "a@b.c"}), "name", "empty_name")]
#[case::blank_email(json!({"name": "Ann", "email": ""}), "email", "empty_email")]
#[case::long_name(json!({"name": "x".repeat(256), "email": "a@b.c"}), "name", "name_too_long")]
#[actix_web::test]
async fn create_rejects_invalid_fields(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let mut command = MockUsersCommand::new();
    command.expect_create_user().times(0);

    let res = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[case::missing_email(r#"{"name":"Ann"}"#)]
#[case::not_json("name=Ann")]
#[actix_web::test]
async fn create_rejects_malformed_bodies(#[case] raw: &'static str) {
    let res = call(
        MockUsersQuery::new(),
        MockUsersCommand::new(),
        actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload(raw),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn create_surfaces_duplicate_email_as_bad_request() {
    let mut command = MockUsersCommand::new();
    command.expect_create_user().times(1).return_once(|_| {
        Err(Error::invalid_request("email is already registered")
            .with_details(json!({ "field": "email", "code": "duplicate_email" })))
    });

    let res = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "John Doe", "email": "john.doe@test.com"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Error = actix_test::read_body_json(res).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
    assert_eq!(body.details(), Some(&json!({ "field": "email", "code": "duplicate_email" })));
}

#[rstest]
#[actix_web::test]
async fn update_missing_user_is_not_found() {
    let mut command = MockUsersCommand::new();
    command
        .expect_update_user()
        .with(eq(UserId::new(7)), mockall::predicate::always())
        .times(1)
        .return_once(|_, _| Ok(None));

    let res = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::put()
            .uri("/api/users/7")
            .set_json(json!({"name": "Ann", "email": "ann@example.com"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(actix_test::read_body(res).await.is_empty());
}

#[rstest]
#[actix_web::test]
async fn delete_returns_no_content() {
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_user()
        .with(eq(UserId::new(3)))
        .times(1)
        .return_once(|_| Ok(()));

    let res = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::delete().uri("/api/users/3"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let body = actix_test::read_body(res).await;
    assert!(body.is_empty());
}

#[rstest]
#[actix_web::test]
async fn storage_outage_maps_to_service_unavailable() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_all_users()
        .times(1)
        .return_once(|| Err(Error::service_unavailable("user repository unavailable")));

    let res = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri("/api/users"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
