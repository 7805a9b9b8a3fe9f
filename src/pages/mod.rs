pub mod dashboard;
pub mod error_page;
pub mod forgot_password;
pub mod login;
pub mod profile;
pub mod register;
pub mod reviews;
