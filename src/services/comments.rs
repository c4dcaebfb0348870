//! Comment ledger service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::comment::{CommentOut, CreateComment},
    repository::Repository,
};

#[derive(Clone)]
pub struct CommentsService {
    repository: Repository,
}

impl CommentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a comment to an item. Only a user whose booking on the item has
    /// already ended may comment.
    pub async fn create(
        &self,
        item_id: i64,
        comment: CreateComment,
        user_id: i64,
    ) -> AppResult<CommentOut> {
        comment
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let author = self.repository.users.get_by_id(user_id).await?;
        let item = self.repository.items.get_by_id(item_id).await?;

        if !self
            .repository
            .bookings
            .has_completed_booking(author.id, item.id)
            .await?
        {
            return Err(AppError::NotBooker(format!(
                "User {} has no completed booking on item {}",
                author.id, item.id
            )));
        }

        let created = self
            .repository
            .comments
            .create(item.id, author.id, &comment.text, Utc::now())
            .await?;
        tracing::info!("Comment {} added to item {}", created.id, item.id);
        Ok(CommentOut {
            id: created.id,
            text: created.text,
            author_name: author.name,
            created: created.created,
        })
    }
}
