use entity::{profile::Model as ProfileModel, user::Model as UserModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile edit submission. The email field is always present (the form
/// is pre-populated with the current address); avatar is an opaque file
/// reference and optional.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileEditRequest {
    #[validate(email(message = "not a valid email address"))]
    pub email: String,
    pub avatar: Option<String>,
}

/// Pre-populated seed for the edit form.
#[derive(Serialize, Deserialize)]
pub struct ProfileEditForm {
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl ProfileView {
    pub fn new(user: &UserModel, profile: &ProfileModel) -> Self {
        ProfileView {
            username: user.username.clone(),
            email: user.email.clone(),
            avatar: profile.avatar.clone(),
        }
    }
}
