pub mod enhance_prompt;
