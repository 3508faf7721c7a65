pub mod auth;
pub mod tours;
