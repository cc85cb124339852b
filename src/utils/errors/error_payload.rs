use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every failed comment operation. `r#type` is
/// the stable machine-readable kind; `message` is for humans and its
/// wording is not part of the contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    /// Human-readable description of the failure
    #[schema(example = "comment with id 42 not found")]
    pub message: String,
    /// HTTP status code, duplicated from the response
    #[schema(example = 404)]
    pub code: u16,
    /// Error kind identifier
    #[schema(example = "NOT_FOUND")]
    pub r#type: String,
    /// Extra context, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
