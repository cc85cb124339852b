use crate::models::comments::{Comment, NewComment};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// Persistence contract for comments. The service layer only talks to
/// this trait, so tests can substitute an in-memory implementation.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persists a new comment and returns the stored row with its
    /// generated id and timestamps.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, sqlx::Error>;

    /// Returns the matching row, or `None` when no row has that id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, sqlx::Error>;

    /// Rows owned by `user_id`, ordered by id ascending. Empty when
    /// nothing matches, never an error.
    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, sqlx::Error>;

    /// All rows, ordered by id ascending, paginated by limit/offset.
    async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<Comment>, sqlx::Error>;

    /// Persists the text change for the row matching `comment.id` and
    /// refreshes `updated_at`. `None` when no row matched that id.
    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, sqlx::Error>;

    /// Removes the row matching `id`. True iff exactly one row was
    /// removed.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}

pub struct PgCommentRepository {
    db: Arc<PgPool>,
}

impl PgCommentRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PgCommentRepository { db }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (user_id, comment)
            VALUES ($1, $2)
            RETURNING id, user_id, comment, created_at, updated_at
            "#,
        )
        .bind(new_comment.user_id)
        .bind(new_comment.comment)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "SELECT id, user_id, comment, created_at, updated_at FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.db.as_ref())
        .await
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, comment, created_at, updated_at
            FROM comments
            WHERE user_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, comment, created_at, updated_at
            FROM comments
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET comment = $1, updated_at = now()
            WHERE id = $2
            RETURNING id, user_id, comment, created_at, updated_at
            "#,
        )
        .bind(&comment.comment)
        .bind(comment.id)
        .fetch_optional(self.db.as_ref())
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.db.as_ref())
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
