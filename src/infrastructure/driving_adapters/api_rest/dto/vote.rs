//! Vote DTOs

use serde::{Deserialize, Serialize};

use crate::domain::models::{VoteDirection, VoteTally};

/// Body of a vote request; a null or missing direction clears the vote
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastVoteDto {
    #[serde(default)]
    pub direction: Option<VoteDirection>,
}

/// Target counters after a vote
#[derive(Debug, Clone, Serialize)]
pub struct VoteTallyDto {
    pub upvotes: i32,
    pub downvotes: i32,
    pub score: i32,
    pub direction: Option<VoteDirection>,
}

impl From<VoteTally> for VoteTallyDto {
    fn from(tally: VoteTally) -> Self {
        Self {
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
            direction: tally.direction,
        }
    }
}
