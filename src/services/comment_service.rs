use crate::models::comments::{Comment, NewComment};
use crate::repositories::comment_repository::CommentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use std::sync::Arc;
use tracing::debug;

/// Business rules for comments. Holds only its injected repositories,
/// so one instance is shared across concurrent requests.
#[derive(Clone)]
pub struct CommentService {
    comment_repository: Arc<dyn CommentRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CommentService {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        CommentService {
            comment_repository,
            user_repository,
        }
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<(), AppError> {
        let user = self.user_repository.find_by_id(user_id).await?;
        if user.is_none() {
            return Err(AppError::NotFound(format!(
                "user with id {} not found",
                user_id
            )));
        }
        Ok(())
    }

    pub async fn create_comment(&self, user_id: i64, comment: &str) -> Result<Comment, AppError> {
        if comment.is_empty() || user_id == 0 {
            return Err(AppError::Validation(
                "user_id and comment are required".to_string(),
            ));
        }
        self.ensure_user_exists(user_id).await?;

        debug!("Creating comment for user {}", user_id);
        let created = self
            .comment_repository
            .create(NewComment {
                user_id,
                comment: comment.to_string(),
            })
            .await?;
        Ok(created)
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment, AppError> {
        let comment = self.comment_repository.find_by_id(id).await?;
        comment.ok_or_else(|| AppError::NotFound(format!("comment with id {} not found", id)))
    }

    pub async fn get_all_comments(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, AppError> {
        let comments = self.comment_repository.list_all(limit, offset).await?;
        Ok(comments)
    }

    pub async fn get_comments_by_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, AppError> {
        self.ensure_user_exists(user_id).await?;
        let comments = self
            .comment_repository
            .list_by_user(user_id, limit, offset)
            .await?;
        Ok(comments)
    }

    pub async fn update_comment(
        &self,
        id: i64,
        user_id: i64,
        comment: &str,
    ) -> Result<Comment, AppError> {
        let mut existing = self.get_comment(id).await?;
        self.ensure_user_exists(user_id).await?;
        if existing.user_id != user_id {
            // Ownership violations surface as the same kind as a
            // missing row.
            return Err(AppError::NotFound(format!(
                "comment with id {} not found for user {}",
                id, user_id
            )));
        }

        if !comment.is_empty() {
            existing.comment = comment.to_string();
        }

        debug!("Updating comment {}", id);
        let updated = self.comment_repository.update(&existing).await?;
        // A concurrent delete can remove the row between the fetch and
        // the update; the loser of that race sees no matching row.
        updated.ok_or_else(|| AppError::NotFound(format!("comment with id {} not found", id)))
    }

    pub async fn delete_comment(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.comment_repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "comment with id {} not found",
                id
            )));
        }
        debug!("Deleted comment {}", id);
        Ok(true)
    }
}
