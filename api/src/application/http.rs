pub mod enhancement;
pub mod health;
pub mod prompt;
pub mod server;
