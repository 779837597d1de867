//! Entity Identifiers
//!
//! Newtype wrappers around UUIDs so ids of different entities cannot be mixed up.

use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random id
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an id from an existing UUID
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = uuid::Error;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Ok(Self(Uuid::parse_str(value)?))
            }
        }
    };
}

entity_id!(
    /// Identifier of a registered user
    UserId
);
entity_id!(
    /// Identifier of a subreddit community
    SubredditId
);
entity_id!(
    /// Identifier of a post
    PostId
);
entity_id!(
    /// Identifier of a comment
    CommentId
);
entity_id!(
    /// Identifier of a subscription record
    SubscriptionId
);
entity_id!(
    /// Identifier of a vote record
    VoteId
);
