use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Clone)]
pub struct CreateCommentRequest {
    pub user_id: i64,
    pub comment: String,
}

#[derive(Deserialize, ToSchema, Clone)]
pub struct UpdateCommentRequest {
    pub user_id: i64,
    /// Replacement text. An empty string leaves the stored text
    /// unchanged.
    #[serde(default)]
    pub comment: String,
}
