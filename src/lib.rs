//! Freddit Backend
//!
//! A Reddit-like community API (users, subreddits, posts, threaded comments,
//! votes and subscriptions) following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
