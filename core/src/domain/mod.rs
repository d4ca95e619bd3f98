pub mod category;
pub mod common;
pub mod enhancement;
pub mod health;
pub mod prompt;
