//! Thread addressing as the chat screens use it.

use services::addressing::{split_thread_id, UNKNOWN_THREAD_LABEL};
use services::{
    id_for_display_name, pair_thread_id, title_from_thread_id, UserDirectory, DEFAULT_USER_ID,
};

#[test]
fn pair_id_is_the_same_from_both_sides() {
    assert_eq!(pair_thread_id("u_me", "u_otti"), "u_me__u_otti");
    assert_eq!(pair_thread_id("u_otti", "u_me"), "u_me__u_otti");
}

#[test]
fn title_names_the_other_party() {
    assert_eq!(title_from_thread_id("u_me__u_otti", "u_me"), "Otti");
    assert_eq!(
        UserDirectory::demo().thread_title("u_me__u_otti", DEFAULT_USER_ID),
        "Otti Cafe"
    );
}

#[test]
fn owner_names_route_to_one_thread() {
    // A listing owner opened from its detail screen and from the messages
    // list must land on the same conversation.
    let owner = id_for_display_name("Cafe Uno");
    assert_eq!(owner, "u_cafe_uno");

    let from_detail = pair_thread_id(DEFAULT_USER_ID, &owner);
    let from_list = pair_thread_id(&owner, DEFAULT_USER_ID);
    assert_eq!(from_detail, from_list);
    assert_eq!(split_thread_id(&from_detail), Some(("u_cafe_uno", "u_me")));
    assert_eq!(title_from_thread_id(&from_detail, DEFAULT_USER_ID), "Cafe Uno");
}

#[test]
fn distinct_pairs_never_collide() {
    let names = ["Otti Cafe", "Mr.Figo", "Bella Deli", "Urban Market", "Emma J.", "You"];
    let ids: Vec<String> = names.iter().map(|n| id_for_display_name(n)).collect();

    let mut threads = std::collections::HashSet::new();
    let mut pairs = 0;
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i..] {
            assert!(threads.insert(pair_thread_id(a, b)));
            pairs += 1;
        }
    }
    assert_eq!(threads.len(), pairs);
}

#[test]
fn unrelated_or_empty_threads_get_placeholder() {
    assert_eq!(title_from_thread_id("u_bella__u_figo", "u_me"), UNKNOWN_THREAD_LABEL);
    assert_eq!(title_from_thread_id("", "u_me"), UNKNOWN_THREAD_LABEL);
    assert!(!title_from_thread_id("garbage", "u_me").is_empty());
}
