mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_register_flow_success() {
    println!("\n[+] Running test: test_register_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/account/register")
        .set_json(test_data::register_payload("noah", "noah@example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "/");

    // Exactly one user row with the submitted identity
    let user = ctx.db.get_user_by_email("noah@example.com").await.unwrap();
    assert_eq!(user.username, "noah");
    assert!(!user.password_hash.is_empty());
    assert_ne!(user.password_hash, test_data::PASSWORD);
    println!("[/] Test passed: registration created the user.");
}

#[tokio::test]
async fn test_register_form_get() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/account/register").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "");
    assert_eq!(body["email"], "");
}

#[tokio::test]
async fn test_register_flow_duplicate_username() {
    println!("\n[+] Running test: test_register_flow_duplicate_username");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;

    let req = test::TestRequest::post()
        .uri("/account/register")
        .set_json(test_data::register_payload("noah", "other@example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_flow_duplicate_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;

    let req = test::TestRequest::post()
        .uri("/account/register")
        .set_json(test_data::register_payload("loudbook", "noah@example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_flow_invalid_submission() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // Bad email, short password
    let req = test::TestRequest::post()
        .uri("/account/register")
        .set_json(serde_json::json!({
            "username": "noah",
            "email": "not-an-email",
            "password": "short",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing persisted
    assert!(ctx.db.get_user_by_username("noah").await.is_err());
}

#[tokio::test]
async fn test_login_flow_success_redirects_home() {
    println!("\n[+] Running test: test_login_flow_success_redirects_home");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;

    let req = test::TestRequest::post()
        .uri("/account/login")
        .set_json(test_data::login_payload("noah", test_data::PASSWORD))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "/");

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "shop_session")
        .expect("No session cookie set");
    assert!(cookie.value().starts_with("sess_"));
    println!("[/] Test passed: session established.");
}

#[tokio::test]
async fn test_login_flow_follows_next() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;

    let req = test::TestRequest::post()
        .uri("/account/login?next=%2Faccount%2Fprofile")
        .set_json(test_data::login_payload("noah", test_data::PASSWORD))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "/account/profile");
}

#[tokio::test]
async fn test_login_flow_rejects_offsite_next() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;

    let req = test::TestRequest::post()
        .uri("/account/login?next=%2F%2Fevil.example.com")
        .set_json(test_data::login_payload("noah", test_data::PASSWORD))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "/");
}

#[tokio::test]
async fn test_login_flow_failure_is_generic() {
    println!("\n[+] Running test: test_login_flow_failure_is_generic");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;

    // Wrong password for an existing user
    let req = test::TestRequest::post()
        .uri("/account/login")
        .set_json(test_data::login_payload("noah", "wrong password!"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: serde_json::Value = test::read_body_json(resp).await;

    // Username that does not exist at all
    let req = test::TestRequest::post()
        .uri("/account/login")
        .set_json(test_data::login_payload("nobody", "wrong password!"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_user: serde_json::Value = test::read_body_json(resp).await;

    // The two failures are indistinguishable
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["error"], "incorrect login or password");
    println!("[/] Test passed: login failures do not leak account existence.");
}

#[tokio::test]
async fn test_logout_flow_clears_session() {
    println!("\n[+] Running test: test_logout_flow_clears_session");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "noah@example.com").await;
    let cookie = client.login("noah").await;

    let req = test::TestRequest::post()
        .uri("/account/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "/");

    // Session is gone: the profile now redirects to login
    let req = test::TestRequest::get()
        .uri("/account/profile")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    println!("[/] Test passed: logout destroyed the session.");
}

#[tokio::test]
async fn test_logout_flow_without_session_is_noop() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/account/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "/");
}
