use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{entities::prompt::Prompt, ports::PromptRepository, value_objects::PromptDraft},
};
use crate::entity::prompts::{
    ActiveModel as PromptActiveModel, Column as PromptColumn, Entity as PromptEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPromptRepository {
    pub db: DatabaseConnection,
}

impl PostgresPromptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PromptRepository for PostgresPromptRepository {
    async fn fetch_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        let prompts = PromptEntity::find()
            .order_by_desc(PromptColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch prompts: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Prompt::from)
            .collect::<Vec<Prompt>>();

        Ok(prompts)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CoreError> {
        let categories = PromptEntity::find()
            .select_only()
            .column(PromptColumn::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(categories)
    }

    async fn create_prompt(&self, draft: PromptDraft) -> Result<Prompt, CoreError> {
        let (title, content, category) = draft.into_parts();

        let created_prompt = PromptEntity::insert(PromptActiveModel {
            title: Set(title),
            content: Set(content),
            category: Set(category),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(Prompt::from)
        .map_err(|e| {
            error!("Failed to create prompt: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created_prompt)
    }

    async fn update_prompt(&self, prompt_id: Uuid, draft: PromptDraft) -> Result<u64, CoreError> {
        let (title, content, category) = draft.into_parts();

        let result = PromptEntity::update_many()
            .col_expr(PromptColumn::Title, Expr::value(title))
            .col_expr(PromptColumn::Content, Expr::value(content))
            .col_expr(PromptColumn::Category, Expr::value(category))
            .filter(PromptColumn::Id.eq(prompt_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update prompt: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn delete_prompt(&self, prompt_id: Uuid) -> Result<(), CoreError> {
        PromptEntity::delete_by_id(prompt_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete prompt: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
