//! # Thread addressing
//!
//! One conversation per pair of users, keyed by a deterministic id, so every
//! screen that opens a chat lands on the same thread without a backend.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::search::text_matches;

/// Joins the two halves of a thread id. Never produced inside a user id by
/// [`id_for_display_name`].
pub const THREAD_SEPARATOR: &str = "__";

/// Namespace marker on every user id.
pub const USER_PREFIX: &str = "u_";

/// Id of the signed-in demo user.
pub const DEFAULT_USER_ID: &str = "u_me";

/// Label for thread ids that are empty or do not involve the viewer.
pub const UNKNOWN_THREAD_LABEL: &str = "Unknown thread";

/// Canonical thread id for an unordered pair of users.
///
/// ```
/// use services::addressing::pair_thread_id;
/// assert_eq!(pair_thread_id("u_otti", "u_me"), "u_me__u_otti");
/// ```
pub fn pair_thread_id(a: &str, b: &str) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}{THREAD_SEPARATOR}{hi}")
}

/// Splits a thread id into its two user ids.
pub fn split_thread_id(id: &str) -> Option<(&str, &str)> {
    let (a, b) = id.split_once(THREAD_SEPARATOR)?;
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a, b))
}

/// Demo user id derived from a display name: `"Otti Cafe"` → `u_otti_cafe`.
pub fn id_for_display_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        format!("{USER_PREFIX}anonymous")
    } else {
        format!("{USER_PREFIX}{slug}")
    }
}

/// Human label for a user id: `u_bella_deli` → `Bella Deli`.
///
/// Falls back to the raw id when nothing readable remains.
pub fn humanize_user_id(id: &str) -> String {
    let bare = id.strip_prefix(USER_PREFIX).unwrap_or(id);
    let label = bare
        .split('_')
        .filter(|part| !part.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    if label.is_empty() {
        id.to_string()
    } else {
        label
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Which side of a thread the viewer is not.
enum OtherParty<'a> {
    User(&'a str),
    /// The viewer appears on neither side
    Unrelated,
    Malformed,
}

fn other_party<'a>(id: &'a str, self_id: &str) -> OtherParty<'a> {
    match split_thread_id(id) {
        Some((a, b)) if a == self_id => OtherParty::User(b),
        Some((a, b)) if b == self_id => OtherParty::User(a),
        Some(_) => OtherParty::Unrelated,
        None => OtherParty::Malformed,
    }
}

/// Label of the other participant, as shown in a chat header.
///
/// A self-thread (`u_me__u_me`) renders the viewer. Threads the viewer is not
/// part of render [`UNKNOWN_THREAD_LABEL`]; non-empty ids that are not thread
/// ids render as is.
pub fn title_from_thread_id(id: &str, self_id: &str) -> String {
    title_with(id, self_id, humanize_user_id)
}

fn title_with(id: &str, self_id: &str, render: impl Fn(&str) -> String) -> String {
    if id.is_empty() {
        return UNKNOWN_THREAD_LABEL.to_string();
    }
    match other_party(id, self_id) {
        OtherParty::User(other) => render(other),
        OtherParty::Unrelated => UNKNOWN_THREAD_LABEL.to_string(),
        OtherParty::Malformed => id.to_string(),
    }
}

/// A known demo identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownUser {
    pub name: String,
    /// Avatar colour, `#RRGGBB`
    pub color: String,
}

/// One row of the messages list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRow {
    pub id: String,
    pub name: String,
    pub last: String,
    pub color: String,
}

pub const DEFAULT_AVATAR_COLOR: &str = "#CFCFCF";

const CANNED_LAST_LINES: [&str; 4] = ["Hi", "Are you available today?", "Thanks!", "See you soon"];

static DEMO_USERS: Lazy<UserDirectory> = Lazy::new(|| {
    UserDirectory::from_entries([
        ("u_me", "You", DEFAULT_AVATAR_COLOR),
        ("u_otti", "Otti Cafe", DEFAULT_AVATAR_COLOR),
        ("u_figo", "Mr.Figo", "#0F4D3A"),
        ("u_bella", "Bella Deli", "#F48C04"),
        ("u_market", "Urban Market", "#8E9A9B"),
    ])
});

/// Display names and colours for known user ids.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, KnownUser>,
    /// Contacts in the order the messages list shows them
    contacts: Vec<String>,
}

impl UserDirectory {
    /// The bundled demo identities.
    pub fn demo() -> &'static UserDirectory {
        &DEMO_USERS
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let mut directory = Self::default();
        for (id, name, color) in entries {
            directory.insert(id, name, color);
        }
        directory
    }

    pub fn insert(&mut self, id: &str, name: &str, color: &str) {
        let known = KnownUser {
            name: name.to_string(),
            color: color.to_string(),
        };
        if self.users.insert(id.to_string(), known).is_none() {
            self.contacts.push(id.to_string());
        }
    }

    pub fn get(&self, id: &str) -> Option<&KnownUser> {
        self.users.get(id)
    }

    pub fn display_name(&self, id: &str) -> String {
        match self.get(id) {
            Some(user) => user.name.clone(),
            None => humanize_user_id(id),
        }
    }

    pub fn color(&self, id: &str) -> &str {
        self.get(id).map_or(DEFAULT_AVATAR_COLOR, |u| u.color.as_str())
    }

    /// Like [`title_from_thread_id`], preferring directory names.
    pub fn thread_title(&self, id: &str, self_id: &str) -> String {
        title_with(id, self_id, |other| self.display_name(other))
    }

    /// One thread row per contact other than `me`.
    pub fn seed_threads_for(&self, me: &str) -> Vec<ThreadRow> {
        self.contacts
            .iter()
            .filter(|uid| uid.as_str() != me)
            .enumerate()
            .map(|(i, uid)| {
                let name = self.display_name(uid);
                ThreadRow {
                    id: pair_thread_id(me, uid),
                    last: format!("{name} : {}", CANNED_LAST_LINES[i % CANNED_LAST_LINES.len()]),
                    color: self.color(uid).to_string(),
                    name,
                }
            })
            .collect()
    }
}

/// Rows whose name or last line contains `query` (case-insensitive).
pub fn filter_threads(rows: &[ThreadRow], query: &str) -> Vec<ThreadRow> {
    rows.iter()
        .filter(|r| text_matches(query, [r.name.as_str(), r.last.as_str()]))
        .cloned()
        .collect()
}
