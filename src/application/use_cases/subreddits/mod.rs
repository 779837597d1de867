//! Subreddit Use Cases

mod create_subreddit;
mod get_subreddit_by_name;
mod list_subreddits;

pub use create_subreddit::CreateSubredditUseCase;
pub use get_subreddit_by_name::GetSubredditByNameUseCase;
pub use list_subreddits::ListSubredditsUseCase;
