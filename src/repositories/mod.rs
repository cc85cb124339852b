pub mod comment_repository;
pub mod user_repository;
