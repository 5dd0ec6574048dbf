//! HTTP handlers

pub mod health;
pub mod persons;

pub use health::health;

pub const WELCOME: &str = "Welcome to our service!";

pub async fn welcome() -> &'static str {
    WELCOME
}
