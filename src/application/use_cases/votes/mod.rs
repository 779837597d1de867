//! Vote Use Cases

mod cast_vote;

pub use cast_vote::CastVoteUseCase;
