pub mod db;
pub mod health;
pub mod llm;
pub mod prompt;
