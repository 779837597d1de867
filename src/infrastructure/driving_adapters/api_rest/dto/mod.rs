//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod auth;
pub mod comment;
pub mod pagination;
pub mod post;
pub mod public;
pub mod subreddit;
pub mod user;
pub mod vote;

pub use auth::{LoginDto, RegisterUserDto, TokenResponseDto};
pub use comment::{CommentResponseDto, CreateCommentDto};
pub use pagination::PaginationQuery;
pub use post::{CreatePostDto, PostResponseDto};
pub use public::{HealthResponseDto, InfoResponseDto};
pub use subreddit::{CreateSubredditDto, SubredditResponseDto, SubscriptionResponseDto};
pub use user::UserResponseDto;
pub use vote::{CastVoteDto, VoteTallyDto};
