mod in_memory_prompt_repository;
mod prompt_repository;

pub use in_memory_prompt_repository::InMemoryPromptRepository;
pub use prompt_repository::PostgresPromptRepository;
