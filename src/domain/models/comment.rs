//! Comment Domain Model
//!
//! A reply to a post, optionally nested under another comment.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use validator::Validate;

use super::ids::{CommentId, PostId, UserId};
use super::validation::validate_not_blank;
use super::vote::VoteDelta;
use crate::shared::errors::DomainError;

/// Placeholder shown instead of the content of a deleted comment
pub const DELETED_PLACEHOLDER: &str = "[deleted]";

/// Data required to create a new Comment
#[derive(Debug, Clone, Validate)]
pub struct NewComment {
    #[validate(custom(function = "validate_not_blank", message = "Content is required"))]
    pub content: String,

    pub parent_comment_id: Option<CommentId>,

    pub author_id: UserId,

    pub post_id: PostId,
}

/// Comment domain entity
#[derive(Debug, Clone)]
pub struct Comment {
    id: CommentId,
    content: String,
    upvotes: i32,
    downvotes: i32,
    is_deleted: bool,
    parent_comment_id: Option<CommentId>,
    author_id: UserId,
    post_id: PostId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment with zeroed counters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the content is blank.
    pub fn new(data: NewComment) -> Result<Self, DomainError> {
        data.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: CommentId::new(),
            content: data.content,
            upvotes: 0,
            downvotes: 0,
            is_deleted: false,
            parent_comment_id: data.parent_comment_id,
            author_id: data.author_id,
            post_id: data.post_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Comment from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CommentId,
        content: String,
        upvotes: i32,
        downvotes: i32,
        is_deleted: bool,
        parent_comment_id: Option<CommentId>,
        author_id: UserId,
        post_id: PostId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            upvotes,
            downvotes,
            is_deleted,
            parent_comment_id,
            author_id,
            post_id,
            created_at,
            updated_at,
        }
    }

    /// Mark the comment as deleted (soft delete); replies stay attached
    #[must_use]
    pub fn mark_deleted(self) -> Self {
        Self {
            is_deleted: true,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Apply a vote transition to the counters
    #[must_use]
    pub fn with_vote_delta(self, delta: VoteDelta) -> Self {
        Self {
            upvotes: self.upvotes + delta.upvotes,
            downvotes: self.downvotes + delta.downvotes,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Content as readers see it
    #[must_use]
    pub fn visible_content(&self) -> &str {
        if self.is_deleted {
            DELETED_PLACEHOLDER
        } else {
            &self.content
        }
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.upvotes - self.downvotes
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> CommentId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn upvotes(&self) -> i32 {
        self.upvotes
    }

    #[must_use]
    pub fn downvotes(&self) -> i32 {
        self.downvotes
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    #[must_use]
    pub fn parent_comment_id(&self) -> Option<CommentId> {
        self.parent_comment_id
    }

    #[must_use]
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    #[must_use]
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Deepest nesting level a thread exposes; roots sit at level 0
pub const MAX_THREAD_DEPTH: usize = 50;

/// A comment together with its nested replies
#[derive(Debug, Clone)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<CommentThread>,
}

impl CommentThread {
    /// Arrange a flat list of comments into reply trees.
    ///
    /// Roots are comments without a parent, plus replies whose parent is not in
    /// the list. Siblings are ordered oldest first. Replies nested deeper than
    /// [`MAX_THREAD_DEPTH`] are lifted to that level.
    #[must_use]
    pub fn build(mut comments: Vec<Comment>) -> Vec<CommentThread> {
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let index: HashMap<CommentId, usize> = comments.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
        let mut roots = Vec::new();

        for (i, comment) in comments.iter().enumerate() {
            match comment.parent_comment_id.and_then(|parent| index.get(&parent)) {
                Some(&parent) => children[parent].push(i),
                None => roots.push(i),
            }
        }

        // Pre-order walk deciding where each comment hangs once the depth limit applies
        let mut placement: Vec<Option<Option<usize>>> = vec![None; comments.len()];
        let mut visit_order = Vec::with_capacity(comments.len());
        let mut stack: Vec<(usize, usize, Option<usize>)> = roots.iter().rev().map(|&root| (root, 0, None)).collect();

        while let Some((node, depth, attach_to)) = stack.pop() {
            placement[node] = Some(attach_to);
            visit_order.push(node);

            let (child_depth, child_attach_to) = if depth < MAX_THREAD_DEPTH {
                (depth + 1, Some(node))
            } else {
                (depth, attach_to)
            };
            for &child in children[node].iter().rev() {
                stack.push((child, child_depth, child_attach_to));
            }
        }

        let mut replies: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
        for (i, attach_to) in placement.iter().enumerate() {
            if let Some(Some(parent)) = attach_to {
                replies[*parent].push(i);
            }
        }

        // Every reply follows its new parent in pre-order, so a reverse pass
        // finishes children before their parent.
        let mut pending: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
        let mut built: Vec<Option<CommentThread>> = (0..pending.len()).map(|_| None).collect();

        for &node in visit_order.iter().rev() {
            let node_replies = replies[node].iter().filter_map(|&reply| built[reply].take()).collect();
            if let Some(comment) = pending[node].take() {
                built[node] = Some(CommentThread {
                    comment,
                    replies: node_replies,
                });
            }
        }

        roots.into_iter().filter_map(|root| built[root].take()).collect()
    }
}
