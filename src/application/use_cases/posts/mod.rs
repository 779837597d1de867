//! Post Use Cases

mod create_post;
mod get_post_by_id;
mod list_subreddit_posts;

pub use create_post::CreatePostUseCase;
pub use get_post_by_id::GetPostByIdUseCase;
pub use list_subreddit_posts::ListSubredditPostsUseCase;
