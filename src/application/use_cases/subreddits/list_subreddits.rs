//! List Subreddits Use Case

use std::sync::Arc;

use crate::domain::gateways::SubredditRepository;
use crate::domain::models::{Page, Subreddit};
use crate::shared::errors::UseCaseError;

/// Use case for browsing subreddits, most popular first
pub struct ListSubredditsUseCase {
    subreddit_repository: Arc<dyn SubredditRepository>,
}

impl ListSubredditsUseCase {
    /// Create a new ListSubredditsUseCase
    #[must_use]
    pub fn new(subreddit_repository: Arc<dyn SubredditRepository>) -> Self {
        Self { subreddit_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, page: Page) -> Result<Vec<Subreddit>, UseCaseError> {
        tracing::debug!(limit = page.limit(), offset = page.offset(), "Listing subreddits");

        let subreddits = self.subreddit_repository.list(page).await?;

        tracing::debug!(count = subreddits.len(), "Subreddits retrieved");
        Ok(subreddits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryStore;

    #[tokio::test]
    async fn should_order_by_subscribers_then_name() {
        let store = Arc::new(InMemoryStore::default());
        let owner = store.add_user("ferris");
        store.add_subreddit("zig", owner.id());
        store.add_subreddit("ada", owner.id());
        let popular = store.add_subreddit("rust", owner.id());
        {
            let mut subreddits = store.subreddits.lock().unwrap();
            let pos = subreddits.iter().position(|s| s.id() == popular.id()).unwrap();
            let bumped = subreddits.remove(pos).with_subscriber_delta(5);
            subreddits.push(bumped);
        }

        let names: Vec<String> = ListSubredditsUseCase::new(store)
            .execute(Page::default())
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();

        assert_eq!(names, vec!["rust", "ada", "zig"]);
    }

    #[tokio::test]
    async fn should_apply_page_window() {
        let store = Arc::new(InMemoryStore::default());
        let owner = store.add_user("ferris");
        for name in ["aaa", "bbb", "ccc"] {
            store.add_subreddit(name, owner.id());
        }

        let page = ListSubredditsUseCase::new(store).execute(Page::new(1, 1)).await.unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name(), "bbb");
    }
}
