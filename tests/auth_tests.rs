use actix_web::{App, http::StatusCode, test};
use chrono::{Datelike, Utc};
use serde_json::json;

use dayflow::database::models::{User, UserRole};
use dayflow::routes;

mod common;

#[actix_web::test]
async fn test_login_by_employee_id_sets_current_user() {
    common::setup_test_env();
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "loginId": "emp001", "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let user: User = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(user.id, common::EMPLOYEE_ID);
    assert_eq!(user.full_name, "Rahul Sharma");

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: User = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(me.email, "rahul.sharma@dayflow.com");
}

#[actix_web::test]
async fn test_login_failures() {
    common::setup_test_env();
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    // Unknown account
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "loginId": "nobody@dayflow.com", "password": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Missing password
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "loginId": "rahul.sharma@dayflow.com", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Employees cannot use the admin portal
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "loginId": "rahul.sharma@dayflow.com",
            "password": "x",
            "portal": "admin"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    assert!(!state.store.auth().await.is_authenticated());
}

#[actix_web::test]
async fn test_hr_can_use_admin_portal() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "loginId": "priya.hr@dayflow.com",
            "password": "x",
            "portal": "admin"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(user.role, UserRole::Hr);
}

#[actix_web::test]
async fn test_logout_clears_identity() {
    let state = common::test_state();
    common::sign_in_as(&state, common::EMPLOYEE_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/v1/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let message = common::assert_error_response(&test::read_body(resp).await);
    assert!(!message.is_empty());
}

#[actix_web::test]
async fn test_sign_up_creates_hr_account() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/sign-up")
        .set_json(json!({
            "companyName": "Acme Corp",
            "fullName": "Jane Doe",
            "email": "jane@acme.com",
            "phone": "+91 90000 00000",
            "password": "Secret@123",
            "confirmPassword": "Secret@123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user: User = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(user.role, UserRole::Hr);
    assert_eq!(
        user.employee_id,
        format!("ACJADO{}0001", Utc::now().year())
    );

    let auth = state.store.auth().await;
    assert_eq!(auth.current_user().map(|u| u.id.clone()), Some(user.id.clone()));
    let data = state.store.data().await;
    assert_eq!(
        data.job_details(&user.id).and_then(|j| j.company.clone()),
        Some("Acme Corp".to_string())
    );
}

fn sign_up_body(password: &str, confirm: &str) -> serde_json::Value {
    json!({
        "companyName": "Acme Corp",
        "fullName": "Jane Doe",
        "email": "jane@acme.com",
        "phone": "+91 90000 00000",
        "password": password,
        "confirmPassword": confirm
    })
}

#[actix_web::test]
async fn test_sign_up_rejects_only_mismatched_confirmation() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/sign-up")
        .set_json(sign_up_body("Secret@123", "Secret@124"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.data().await.users.len(), 9);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/sign-up")
        .set_json(sign_up_body("weak", "weak"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(state.store.data().await.users.len(), 10);
}

#[actix_web::test]
async fn test_forgot_password_and_strength_meter() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(json!({ "email": "rahul.sharma@dayflow.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(json!({ "email": "rahul" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    common::assert_error_response(&test::read_body(resp).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-strength")
        .set_json(json!({ "password": "abc" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let feedback: serde_json::Value =
        common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(feedback["isValid"], json!(false));
    assert_eq!(feedback["strength"]["label"], json!("Weak"));
}

#[actix_web::test]
async fn test_update_me_merges_into_identity() {
    let state = common::test_state();
    common::sign_in_as(&state, common::EMPLOYEE_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/auth/me")
        .set_json(json!({ "fullName": "Rahul K. Sharma" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(user.full_name, "Rahul K. Sharma");
    assert_eq!(user.email, "rahul.sharma@dayflow.com");
}
