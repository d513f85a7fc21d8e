pub mod auth;
pub mod movie;
pub mod score;
pub mod user;
