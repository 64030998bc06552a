pub mod confirm;
pub mod edit_profile;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
