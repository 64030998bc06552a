use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration submission.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "not a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Empty seed returned by the GET form endpoints.
#[derive(Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
}

/// What goes into the user row; the password is already hashed here.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
