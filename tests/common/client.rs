use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App, Error};
use shop_account::db::postgres_service::PostgresService;
use shop_account::types::user::DBUserCreate;
use shop_account::utils::token::hash_password;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(shop_account::routes::configure_routes)
    }

    /// Insert a user directly, bypassing the registration endpoint.
    /// Returns the id; the password is `super::test_data::PASSWORD`.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, email: &str) -> Uuid {
        let password_hash =
            hash_password(super::test_data::PASSWORD).expect("Failed to hash password");

        self.db
            .create_user(DBUserCreate {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("Failed to create test user")
    }

    /// Log in through the endpoint and hand back the session cookie.
    /// Spins up its own app instance; sessions live in the shared
    /// database, so the cookie is valid anywhere.
    #[allow(dead_code)]
    pub async fn login(&self, username: &str) -> Cookie<'static> {
        let app = test::init_service(self.create_app()).await;

        let req = test::TestRequest::post()
            .uri("/account/login")
            .set_json(super::test_data::login_payload(
                username,
                super::test_data::PASSWORD,
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(
            resp.status().is_redirection(),
            "login failed with status {}",
            resp.status()
        );

        resp.response()
            .cookies()
            .find(|c| c.name() == "shop_session")
            .expect("No session cookie on login response")
            .into_owned()
    }
}
