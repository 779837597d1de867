//! Vote Domain Model
//!
//! An up or down signal a user casts on a post or a comment. A user holds at
//! most one vote per target; changing or clearing it adjusts the target's
//! counters by a [`VoteDelta`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CommentId, PostId, UserId, VoteId};

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(Self::Up),
            "DOWN" => Ok(Self::Down),
            other => Err(format!("unknown vote direction '{other}'")),
        }
    }
}

/// What a vote was cast on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteTarget {
    Post(PostId),
    Comment(CommentId),
}

impl fmt::Display for VoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post(id) => write!(f, "post:{id}"),
            Self::Comment(id) => write!(f, "comment:{id}"),
        }
    }
}

/// Change to a target's counters caused by a vote transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteDelta {
    pub upvotes: i32,
    pub downvotes: i32,
}

impl VoteDelta {
    /// Counter change when a user's vote moves from `previous` to `next`
    #[must_use]
    pub fn between(previous: Option<VoteDirection>, next: Option<VoteDirection>) -> Self {
        let mut delta = Self::default();
        if previous == next {
            return delta;
        }
        match previous {
            Some(VoteDirection::Up) => delta.upvotes -= 1,
            Some(VoteDirection::Down) => delta.downvotes -= 1,
            None => {}
        }
        match next {
            Some(VoteDirection::Up) => delta.upvotes += 1,
            Some(VoteDirection::Down) => delta.downvotes += 1,
            None => {}
        }
        delta
    }
}

/// Vote domain entity
#[derive(Debug, Clone)]
pub struct Vote {
    id: VoteId,
    user_id: UserId,
    target: VoteTarget,
    direction: VoteDirection,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Vote {
    #[must_use]
    pub fn new(user_id: UserId, target: VoteTarget, direction: VoteDirection) -> Self {
        let now = Utc::now();
        Self {
            id: VoteId::new(),
            user_id,
            target,
            direction,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Vote from persisted data
    #[must_use]
    pub fn restore(
        id: VoteId,
        user_id: UserId,
        target: VoteTarget,
        direction: VoteDirection,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            target,
            direction,
            created_at,
            updated_at,
        }
    }

    /// Flip the vote to a new direction
    #[must_use]
    pub fn with_direction(self, direction: VoteDirection) -> Self {
        Self {
            direction,
            updated_at: Utc::now(),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> VoteId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn target(&self) -> VoteTarget {
        self.target
    }

    #[must_use]
    pub fn direction(&self) -> VoteDirection {
        self.direction
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

/// Counters of a target after a vote was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: i32,
    pub downvotes: i32,
    pub direction: Option<VoteDirection>,
}

impl VoteTally {
    #[must_use]
    pub fn score(&self) -> i32 {
        self.upvotes - self.downvotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VoteDirection::{Down, Up};

    #[test]
    fn test_delta_first_vote() {
        assert_eq!(VoteDelta::between(None, Some(Up)), VoteDelta { upvotes: 1, downvotes: 0 });
        assert_eq!(VoteDelta::between(None, Some(Down)), VoteDelta { upvotes: 0, downvotes: 1 });
    }

    #[test]
    fn test_delta_switch_direction() {
        assert_eq!(VoteDelta::between(Some(Up), Some(Down)), VoteDelta { upvotes: -1, downvotes: 1 });
        assert_eq!(VoteDelta::between(Some(Down), Some(Up)), VoteDelta { upvotes: 1, downvotes: -1 });
    }

    #[test]
    fn test_delta_clear_vote() {
        assert_eq!(VoteDelta::between(Some(Down), None), VoteDelta { upvotes: 0, downvotes: -1 });
        assert_eq!(VoteDelta::between(Some(Up), None), VoteDelta { upvotes: -1, downvotes: 0 });
    }

    #[test]
    fn test_delta_repeat_is_zero() {
        assert_eq!(VoteDelta::between(Some(Up), Some(Up)), VoteDelta::default());
        assert_eq!(VoteDelta::between(None, None), VoteDelta::default());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("UP".parse::<VoteDirection>().unwrap(), Up);
        assert_eq!("DOWN".parse::<VoteDirection>().unwrap(), Down);
        assert!("SIDEWAYS".parse::<VoteDirection>().is_err());
    }

    #[test]
    fn test_with_direction_keeps_identity() {
        let vote = Vote::new(UserId::new(), VoteTarget::Post(PostId::new()), Up);
        let id = vote.id();
        let flipped = vote.with_direction(Down);
        assert_eq!(flipped.id(), id);
        assert_eq!(flipped.direction(), Down);
    }

    #[test]
    fn test_tally_score() {
        let tally = VoteTally { upvotes: 10, downvotes: 3, direction: Some(Up) };
        assert_eq!(tally.score(), 7);
    }
}
