// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use prep_tracker::models::Vote;

mod common;
use common::{empty_store, new_post, new_reply, seeded_store};

#[test]
fn test_post_and_reply_rewards() {
    let (mut store, _, _) = empty_store();
    let post_id = store.add_community_post(new_post());
    assert_eq!(store.total_xp(), 15);

    let reply_id = store
        .add_community_reply(&post_id, new_reply())
        .expect("post exists");
    assert_eq!(store.total_xp(), 25);

    let post = store.community_post(&post_id).unwrap();
    assert_eq!(post.replies.len(), 1);
    assert_eq!(post.replies[0].id, reply_id);
    assert_eq!((post.upvotes, post.downvotes), (0, 0));

    // Community activity does not move the streak.
    assert_eq!(store.current_streak(), 0);
}

#[test]
fn test_reply_to_unknown_post_is_noop() {
    let (mut store, memory, _) = empty_store();
    assert!(store.add_community_reply("missing", new_reply()).is_none());
    assert_eq!(store.total_xp(), 0);
    assert_eq!(memory.write_count(), 0);
}

#[test]
fn test_seeded_post_vote_toggle() {
    let (mut store, _, _) = seeded_store();

    assert!(store.vote_community_post("1", Vote::Up));
    let post = store.community_post("1").unwrap();
    assert_eq!((post.upvotes, post.downvotes), (46, 2));
    assert_eq!(post.user_vote, Some(Vote::Up));

    // Same vote again withdraws it.
    store.vote_community_post("1", Vote::Up);
    let post = store.community_post("1").unwrap();
    assert_eq!((post.upvotes, post.downvotes), (45, 2));
    assert_eq!(post.user_vote, None);
}

#[test]
fn test_switching_vote_moves_between_buckets() {
    let (mut store, _, _) = seeded_store();
    store.vote_community_post("1", Vote::Up);
    store.vote_community_post("1", Vote::Down);

    let post = store.community_post("1").unwrap();
    assert_eq!((post.upvotes, post.downvotes), (45, 3));
    assert_eq!(post.user_vote, Some(Vote::Down));
}

#[test]
fn test_reply_votes() {
    let (mut store, _, _) = empty_store();
    let post_id = store.add_community_post(new_post());
    let reply_id = store.add_community_reply(&post_id, new_reply()).unwrap();

    assert!(store.vote_community_reply(&post_id, &reply_id, Vote::Down));
    assert!(store.vote_community_reply(&post_id, &reply_id, Vote::Up));
    let reply = &store.community_post(&post_id).unwrap().replies[0];
    assert_eq!((reply.upvotes, reply.downvotes), (1, 0));

    assert!(!store.vote_community_reply(&post_id, "missing", Vote::Up));
    assert!(!store.vote_community_reply("missing", &reply_id, Vote::Up));
}

#[test]
fn test_voting_never_changes_xp() {
    let (mut store, _, _) = seeded_store();
    let xp = store.total_xp();
    store.vote_community_post("1", Vote::Up);
    store.vote_community_post("1", Vote::Down);
    assert_eq!(store.total_xp(), xp);
}
