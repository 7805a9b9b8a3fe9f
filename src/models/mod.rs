pub mod location;
pub mod review;
pub mod user;
