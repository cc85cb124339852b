use apis::setup_routes;
use axum::Router;
use repositories::{
    comment_repository::PgCommentRepository, user_repository::PgUserRepository,
};
use services::comment_service::CommentService;
use sqlx::postgres::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod apis;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub comment_service: CommentService,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Arc::new(pool))
}

pub fn setup_services(db: Arc<PgPool>) -> CommentService {
    let comment_repository = Arc::new(PgCommentRepository::new(db.clone()));
    let user_repository = Arc::new(PgUserRepository::new(db));
    CommentService::new(comment_repository, user_repository)
}

pub async fn setup_router(settings: &settings::Settings) -> Result<Router, sqlx::Error> {
    let db = setup_database(&settings.database_url).await?;
    let comment_service = setup_services(db);
    let router = setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState { comment_service })))
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(env != "PROD")
        .init();
}
