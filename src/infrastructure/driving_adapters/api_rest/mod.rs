//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::comments::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentThreadUseCase,
};
use crate::application::use_cases::posts::{CreatePostUseCase, GetPostByIdUseCase, ListSubredditPostsUseCase};
use crate::application::use_cases::subreddits::{
    CreateSubredditUseCase, GetSubredditByNameUseCase, ListSubredditsUseCase,
};
use crate::application::use_cases::subscriptions::{SubscribeUseCase, UnsubscribeUseCase};
use crate::application::use_cases::users::{AuthenticateUserUseCase, GetUserByIdUseCase, RegisterUserUseCase};
use crate::application::use_cases::votes::CastVoteUseCase;
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::{
    Argon2PasswordHasher, PostgresCommentRepository, PostgresPostRepository, PostgresSubredditRepository,
    PostgresSubscriptionRepository, PostgresUserRepository, PostgresVoteRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub register_user_use_case: Arc<RegisterUserUseCase>,
    pub authenticate_user_use_case: Arc<AuthenticateUserUseCase>,
    pub get_user_by_id_use_case: Arc<GetUserByIdUseCase>,
    pub create_subreddit_use_case: Arc<CreateSubredditUseCase>,
    pub get_subreddit_by_name_use_case: Arc<GetSubredditByNameUseCase>,
    pub list_subreddits_use_case: Arc<ListSubredditsUseCase>,
    pub create_post_use_case: Arc<CreatePostUseCase>,
    pub get_post_by_id_use_case: Arc<GetPostByIdUseCase>,
    pub list_subreddit_posts_use_case: Arc<ListSubredditPostsUseCase>,
    pub create_comment_use_case: Arc<CreateCommentUseCase>,
    pub get_comment_thread_use_case: Arc<GetCommentThreadUseCase>,
    pub delete_comment_use_case: Arc<DeleteCommentUseCase>,
    pub subscribe_use_case: Arc<SubscribeUseCase>,
    pub unsubscribe_use_case: Arc<UnsubscribeUseCase>,
    pub cast_vote_use_case: Arc<CastVoteUseCase>,
}

impl AppState {
    /// Wire the PostgreSQL repositories and every use case onto one pool
    #[must_use]
    pub fn new(config: Arc<AppConfig>, pool: PgPool) -> Self {
        let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
        let subreddit_repository = Arc::new(PostgresSubredditRepository::new(pool.clone()));
        let post_repository = Arc::new(PostgresPostRepository::new(pool.clone()));
        let comment_repository = Arc::new(PostgresCommentRepository::new(pool.clone()));
        let subscription_repository = Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
        let vote_repository = Arc::new(PostgresVoteRepository::new(pool));
        let password_hasher = Arc::new(Argon2PasswordHasher::new());

        Self {
            config,
            register_user_use_case: Arc::new(RegisterUserUseCase::new(
                user_repository.clone(),
                password_hasher.clone(),
            )),
            authenticate_user_use_case: Arc::new(AuthenticateUserUseCase::new(
                user_repository.clone(),
                password_hasher,
            )),
            get_user_by_id_use_case: Arc::new(GetUserByIdUseCase::new(user_repository.clone())),
            create_subreddit_use_case: Arc::new(CreateSubredditUseCase::new(
                subreddit_repository.clone(),
                user_repository,
            )),
            get_subreddit_by_name_use_case: Arc::new(GetSubredditByNameUseCase::new(subreddit_repository.clone())),
            list_subreddits_use_case: Arc::new(ListSubredditsUseCase::new(subreddit_repository.clone())),
            create_post_use_case: Arc::new(CreatePostUseCase::new(
                post_repository.clone(),
                subreddit_repository.clone(),
            )),
            get_post_by_id_use_case: Arc::new(GetPostByIdUseCase::new(post_repository.clone())),
            list_subreddit_posts_use_case: Arc::new(ListSubredditPostsUseCase::new(
                post_repository.clone(),
                subreddit_repository.clone(),
            )),
            create_comment_use_case: Arc::new(CreateCommentUseCase::new(
                comment_repository.clone(),
                post_repository.clone(),
            )),
            get_comment_thread_use_case: Arc::new(GetCommentThreadUseCase::new(
                comment_repository.clone(),
                post_repository.clone(),
            )),
            delete_comment_use_case: Arc::new(DeleteCommentUseCase::new(comment_repository.clone())),
            subscribe_use_case: Arc::new(SubscribeUseCase::new(
                subscription_repository.clone(),
                subreddit_repository.clone(),
            )),
            unsubscribe_use_case: Arc::new(UnsubscribeUseCase::new(subscription_repository, subreddit_repository)),
            cast_vote_use_case: Arc::new(CastVoteUseCase::new(vote_repository, post_repository, comment_repository)),
        }
    }
}

/// Build the application router
///
/// CORS and rate limiting are left to the caller so tests can drive the
/// router without a peer address.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/public", handlers::public::router())
        .nest("/public", handlers::public::router())
        .nest("/api/auth", handlers::auth::router())
        .nest("/api/users", handlers::users::router())
        .nest("/api/subreddits", handlers::subreddits::router())
        .nest("/api/posts", handlers::posts::router())
        .nest("/api/comments", handlers::comments::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_config_extension,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
