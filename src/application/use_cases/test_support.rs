//! In-memory gateway fakes shared by the use case unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::gateways::{
    CommentRepository, PasswordHasher, PostRepository, SubredditRepository, SubscriptionRepository,
    UserRepository, VoteRepository,
};
use crate::domain::models::{
    Comment, CommentId, NewComment, NewPost, NewSubreddit, NewUser, Page, Post, PostId, Subreddit,
    SubredditId, Subscription, User, UserId, Vote, VoteDelta, VoteDirection, VoteTally, VoteTarget,
};
use crate::shared::errors::{DomainError, RepositoryError};

/// A single store backing every repository trait
#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<Vec<User>>,
    pub subreddits: Mutex<Vec<Subreddit>>,
    pub posts: Mutex<Vec<Post>>,
    pub comments: Mutex<Vec<Comment>>,
    pub subscriptions: Mutex<Vec<Subscription>>,
    pub votes: Mutex<Vec<Vote>>,
    failing: AtomicBool,
}

impl InMemoryStore {
    /// Every subsequent call fails with a database error
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    pub fn add_user(&self, username: &str) -> User {
        let user = User::new(NewUser {
            username: username.to_string(),
            email: format!("{username}@freddit.test"),
            password_hash: format!("hashed:{username}-password"),
            first_name: None,
            last_name: None,
            bio: None,
            avatar_url: None,
        })
        .unwrap();
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn add_subreddit(&self, name: &str, created_by: UserId) -> Subreddit {
        let subreddit = Subreddit::new(NewSubreddit {
            name: name.to_string(),
            title: format!("All about {name}"),
            description: None,
            sidebar_content: None,
            icon_url: None,
            banner_url: None,
            is_private: false,
            is_nsfw: false,
            created_by,
        })
        .unwrap();
        self.subreddits.lock().unwrap().push(subreddit.clone());
        subreddit
    }

    pub fn add_post(&self, author_id: UserId, subreddit_id: SubredditId, title: &str) -> Post {
        let post = Post::new(NewPost::new(author_id, subreddit_id, title)).unwrap();
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn put_post(&self, post: Post) {
        let mut posts = self.posts.lock().unwrap();
        posts.retain(|p| p.id() != post.id());
        posts.push(post);
    }

    pub fn add_comment(&self, author_id: UserId, post_id: PostId, parent: Option<CommentId>) -> Comment {
        let comment = Comment::new(NewComment {
            content: "A thoughtful reply".to_string(),
            parent_comment_id: parent,
            author_id,
            post_id,
        })
        .unwrap();
        self.comments.lock().unwrap().push(comment.clone());
        comment
    }

    pub fn post(&self, id: PostId) -> Option<Post> {
        self.posts.lock().unwrap().iter().find(|p| p.id() == id).cloned()
    }

    pub fn subreddit(&self, id: SubredditId) -> Option<Subreddit> {
        self.subreddits.lock().unwrap().iter().find(|s| s.id() == id).cloned()
    }

    pub fn comment(&self, id: CommentId) -> Option<Comment> {
        self.comments.lock().unwrap().iter().find(|c| c.id() == id).cloned()
    }

    fn adjust_subscribers(&self, subreddit_id: SubredditId, delta: i32) {
        let mut subreddits = self.subreddits.lock().unwrap();
        if let Some(pos) = subreddits.iter().position(|s| s.id() == subreddit_id) {
            let updated = subreddits.remove(pos).with_subscriber_delta(delta);
            subreddits.insert(pos, updated);
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.username() == username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().any(|u| u.username() == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().any(|u| u.email() == email))
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        self.check()?;
        self.users.lock().unwrap().push(user.clone());
        Ok(user.clone())
    }
}

#[async_trait]
impl SubredditRepository for InMemoryStore {
    async fn find_by_id(&self, id: SubredditId) -> Result<Option<Subreddit>, RepositoryError> {
        self.check()?;
        Ok(self.subreddit(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Subreddit>, RepositoryError> {
        self.check()?;
        Ok(self
            .subreddits
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<Subreddit>, RepositoryError> {
        self.check()?;
        let mut all = self.subreddits.lock().unwrap().clone();
        all.sort_by(|a, b| {
            b.subscriber_count()
                .cmp(&a.subscriber_count())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(all
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap())
            .take(usize::try_from(page.limit()).unwrap())
            .collect())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self
            .subreddits
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.name().eq_ignore_ascii_case(name)))
    }

    async fn create(&self, subreddit: &Subreddit) -> Result<Subreddit, RepositoryError> {
        self.check()?;
        self.subreddits.lock().unwrap().push(subreddit.clone());
        Ok(subreddit.clone())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        self.check()?;
        Ok(self.post(id))
    }

    async fn list_by_subreddit(
        &self,
        subreddit_id: SubredditId,
        page: Page,
    ) -> Result<Vec<Post>, RepositoryError> {
        self.check()?;
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.subreddit_id() == subreddit_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.is_stickied()
                .cmp(&a.is_stickied())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        Ok(posts
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap())
            .take(usize::try_from(page.limit()).unwrap())
            .collect())
    }

    async fn create(&self, post: &Post) -> Result<Post, RepositoryError> {
        self.check()?;
        self.posts.lock().unwrap().push(post.clone());
        Ok(post.clone())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError> {
        self.check()?;
        Ok(self.comment(id))
    }

    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, RepositoryError> {
        self.check()?;
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id() == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(Comment::created_at);
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        self.check()?;
        let post = self
            .post(comment.post_id())
            .ok_or_else(|| RepositoryError::NotFound(comment.post_id().to_string()))?;
        self.put_post(post.with_comment_added());
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment.clone())
    }

    async fn soft_delete(&self, id: CommentId) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut comments = self.comments.lock().unwrap();
        match comments.iter().position(|c| c.id() == id) {
            Some(pos) => {
                let deleted = comments.remove(pos).mark_deleted();
                comments.insert(pos, deleted);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn find(
        &self,
        user_id: UserId,
        subreddit_id: SubredditId,
    ) -> Result<Option<Subscription>, RepositoryError> {
        self.check()?;
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id() == user_id && s.subreddit_id() == subreddit_id)
            .cloned())
    }

    async fn create(&self, subscription: &Subscription) -> Result<Subscription, RepositoryError> {
        self.check()?;
        {
            let mut subscriptions = self.subscriptions.lock().unwrap();
            if subscriptions
                .iter()
                .any(|s| s.user_id() == subscription.user_id() && s.subreddit_id() == subscription.subreddit_id())
            {
                return Err(RepositoryError::UniqueViolation(
                    "subscriptions_user_subreddit_key".to_string(),
                ));
            }
            subscriptions.push(subscription.clone());
        }
        self.adjust_subscribers(subscription.subreddit_id(), 1);
        Ok(subscription.clone())
    }

    async fn delete(&self, user_id: UserId, subreddit_id: SubredditId) -> Result<bool, RepositoryError> {
        self.check()?;
        let removed = {
            let mut subscriptions = self.subscriptions.lock().unwrap();
            let before = subscriptions.len();
            subscriptions.retain(|s| !(s.user_id() == user_id && s.subreddit_id() == subreddit_id));
            subscriptions.len() < before
        };
        if removed {
            self.adjust_subscribers(subreddit_id, -1);
        }
        Ok(removed)
    }
}

#[async_trait]
impl VoteRepository for InMemoryStore {
    async fn cast(
        &self,
        user_id: UserId,
        target: VoteTarget,
        direction: Option<VoteDirection>,
    ) -> Result<VoteTally, RepositoryError> {
        self.check()?;

        let previous = {
            let mut votes = self.votes.lock().unwrap();
            let existing = votes
                .iter()
                .position(|v| v.user_id() == user_id && v.target() == target)
                .map(|pos| votes.remove(pos));
            let previous = existing.as_ref().map(Vote::direction);
            match (existing, direction) {
                (Some(vote), Some(next)) => votes.push(vote.with_direction(next)),
                (None, Some(next)) => votes.push(Vote::new(user_id, target, next)),
                (_, None) => {}
            }
            previous
        };

        let delta = VoteDelta::between(previous, direction);
        let (upvotes, downvotes) = match target {
            VoteTarget::Post(id) => {
                let post = self
                    .post(id)
                    .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?
                    .with_vote_delta(delta);
                let counts = (post.upvotes(), post.downvotes());
                self.put_post(post);
                counts
            }
            VoteTarget::Comment(id) => {
                let mut comments = self.comments.lock().unwrap();
                let pos = comments
                    .iter()
                    .position(|c| c.id() == id)
                    .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
                let comment = comments.remove(pos).with_vote_delta(delta);
                let counts = (comment.upvotes(), comment.downvotes());
                comments.insert(pos, comment);
                counts
            }
        };

        Ok(VoteTally {
            upvotes,
            downvotes,
            direction,
        })
    }
}

/// Reversible stand-in for argon2 so tests stay fast; counts hash calls
#[derive(Default)]
pub struct PlainPasswordHasher {
    hashes: AtomicUsize,
}

impl PlainPasswordHasher {
    pub fn hash_calls(&self) -> usize {
        self.hashes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("hashed:") == Some(password)
    }
}

/// A post restored as locked, for moderation scenarios
pub fn locked(post: &Post) -> Post {
    Post::restore(
        post.id(),
        post.title().to_string(),
        post.content().map(str::to_string),
        post.post_type(),
        post.url().map(str::to_string),
        post.image_url().map(str::to_string),
        post.video_url().map(str::to_string),
        post.upvotes(),
        post.downvotes(),
        post.comment_count(),
        post.is_nsfw(),
        true,
        post.is_stickied(),
        post.author_id(),
        post.subreddit_id(),
        post.created_at(),
        Utc::now(),
    )
}
