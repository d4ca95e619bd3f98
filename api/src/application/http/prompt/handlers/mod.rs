pub mod create_prompt;
pub mod delete_prompt;
pub mod get_categories;
pub mod get_prompts;
pub mod update_prompt;
