//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod comments;
pub mod posts;
pub mod subreddits;
pub mod subscriptions;
pub mod users;
pub mod votes;

#[cfg(test)]
pub(crate) mod test_support;
