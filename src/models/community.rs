// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Community board posts, replies and the single-voter tally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_id: String,
    pub category: String,
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(default)]
    pub replies: Vec<CommunityReply>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// The local user's vote on this post, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<Vote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityReply {
    pub id: String,
    pub content: String,
    pub author: String,
    pub author_id: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<Vote>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_id: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateReply {
    pub content: String,
    pub author: String,
    pub author_id: String,
}

impl CommunityPost {
    pub(crate) fn from_create(id: String, input: CreatePost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            author_id: input.author_id,
            category: input.category,
            upvotes: 0,
            downvotes: 0,
            replies: Vec::new(),
            created_at: now,
            tags: input.tags,
            user_vote: None,
        }
    }
}

impl CommunityReply {
    pub(crate) fn from_create(id: String, input: CreateReply, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content: input.content,
            author: input.author,
            author_id: input.author_id,
            created_at: now,
            upvotes: 0,
            downvotes: 0,
            user_vote: None,
        }
    }
}

/// Anything carrying an up/down tally plus the one remembered local vote.
pub trait Votable {
    fn tally_mut(&mut self) -> (&mut u32, &mut u32, &mut Option<Vote>);

    /// Cast `vote`.
    ///
    /// Repeating the remembered vote withdraws it. Casting the opposite vote
    /// moves the tally from the old bucket to the new one.
    fn cast_vote(&mut self, vote: Vote) {
        let (up, down, remembered) = self.tally_mut();
        let current = *remembered;

        match current {
            Some(previous) if previous == vote => {
                decrement(up, down, vote);
                *remembered = None;
            }
            previous => {
                if let Some(previous) = previous {
                    decrement(up, down, previous);
                }
                match vote {
                    Vote::Up => *up += 1,
                    Vote::Down => *down += 1,
                }
                *remembered = Some(vote);
            }
        }
    }
}

fn decrement(up: &mut u32, down: &mut u32, vote: Vote) {
    match vote {
        Vote::Up => *up = up.saturating_sub(1),
        Vote::Down => *down = down.saturating_sub(1),
    }
}

impl Votable for CommunityPost {
    fn tally_mut(&mut self) -> (&mut u32, &mut u32, &mut Option<Vote>) {
        (&mut self.upvotes, &mut self.downvotes, &mut self.user_vote)
    }
}

impl Votable for CommunityReply {
    fn tally_mut(&mut self) -> (&mut u32, &mut u32, &mut Option<Vote>) {
        (&mut self.upvotes, &mut self.downvotes, &mut self.user_vote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(up: u32, down: u32) -> CommunityReply {
        CommunityReply {
            id: "r1".to_string(),
            content: "Nice".to_string(),
            author: "A".to_string(),
            author_id: "a".to_string(),
            created_at: Utc::now(),
            upvotes: up,
            downvotes: down,
            user_vote: None,
        }
    }

    #[test]
    fn test_same_vote_twice_withdraws() {
        let mut r = reply(4, 1);
        r.cast_vote(Vote::Up);
        assert_eq!((r.upvotes, r.user_vote), (5, Some(Vote::Up)));

        r.cast_vote(Vote::Up);
        assert_eq!((r.upvotes, r.downvotes, r.user_vote), (4, 1, None));
    }

    #[test]
    fn test_opposite_vote_moves_bucket() {
        let mut r = reply(4, 1);
        r.cast_vote(Vote::Up);
        r.cast_vote(Vote::Down);
        assert_eq!((r.upvotes, r.downvotes), (4, 2));
        assert_eq!(r.user_vote, Some(Vote::Down));
    }

    #[test]
    fn test_withdraw_never_underflows() {
        // A legacy snapshot may remember a vote the tally no longer reflects.
        let mut r = reply(0, 0);
        r.user_vote = Some(Vote::Down);
        r.cast_vote(Vote::Down);
        assert_eq!((r.upvotes, r.downvotes, r.user_vote), (0, 0, None));
    }
}
