// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session persistence: writing navigator state to a key-value session store
//! and validating it back on restore.

use std::collections::{BTreeMap, BTreeSet};

use outline_tree::{FlatTree, Uid};
use thiserror::Error;
use tracing::debug;

use crate::tracker::Tracker;

/// Key for the technology identifier the stored state belongs to.
pub const KEY_TECHNOLOGY: &str = "navigator.technology";
/// Key for the JSON-encoded open-node set.
pub const KEY_OPEN_NODES: &str = "navigator.openNodes";
/// Key for the JSON-encoded visible list.
pub const KEY_NODES_TO_RENDER: &str = "navigator.nodesToRender";
/// Key for the raw filter text.
pub const KEY_FILTER: &str = "navigator.filter";
/// Key for the JSON-encoded selected tag labels.
pub const KEY_SELECTED_TAGS: &str = "navigator.selectedTags";

/// Errors raised while writing navigator state.
///
/// Reads never error: anything that fails to decode or validate is treated
/// as a stale cache and dropped.
#[derive(Debug, Error)]
pub enum PersistError {
    /// State failed to encode as JSON.
    #[error("failed to encode navigator state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string key-value store scoped to the browsing session.
pub trait SessionStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
    /// Drop the value stored under `key`.
    fn remove(&mut self, key: &str);
}

/// An in-process [`SessionStore`], used by tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Navigator state read back from a session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restored {
    /// The expanded uids at save time.
    pub open: BTreeSet<Uid>,
    /// The materialized visible list at save time.
    pub visible: Vec<Uid>,
    /// The filter text at save time (possibly empty).
    pub filter_text: String,
    /// The selected tag labels at save time.
    pub tags: Vec<String>,
}

/// Write the tracker's state to `store` under the navigator keys.
pub fn save(
    store: &mut dyn SessionStore,
    technology: &str,
    tracker: &Tracker,
    filter_text: &str,
    tags: &[String],
) -> Result<(), PersistError> {
    store.set(KEY_TECHNOLOGY, technology);
    store.set(KEY_OPEN_NODES, &serde_json::to_string(tracker.open_nodes())?);
    store.set(
        KEY_NODES_TO_RENDER,
        &serde_json::to_string(&tracker.visible())?,
    );
    store.set(KEY_FILTER, filter_text);
    store.set(KEY_SELECTED_TAGS, &serde_json::to_string(&tags)?);
    Ok(())
}

/// Remove all navigator keys from `store`.
pub fn clear(store: &mut dyn SessionStore) {
    for key in [
        KEY_TECHNOLOGY,
        KEY_OPEN_NODES,
        KEY_NODES_TO_RENDER,
        KEY_FILTER,
        KEY_SELECTED_TAGS,
    ] {
        store.remove(key);
    }
}

/// Read navigator state back from `store`, validating it against the live
/// tree.
///
/// Returns `None` (and leaves the caller to start fresh) when the stored
/// technology differs from `technology`, when a required key is missing or
/// fails to decode, or when any stored uid does not exist in `tree`. Stored
/// state stays opaque otherwise: the visible list in particular is adopted
/// verbatim, never recomputed.
pub fn restore(
    store: &dyn SessionStore,
    technology: &str,
    tree: &FlatTree,
) -> Option<Restored> {
    let stored_technology = store.get(KEY_TECHNOLOGY)?;
    if stored_technology != technology {
        debug!(
            stored = %stored_technology,
            current = %technology,
            "navigator: persisted state is for another technology, ignoring"
        );
        return None;
    }

    let open: BTreeSet<Uid> = decode(store, KEY_OPEN_NODES)?;
    let visible: Vec<Uid> = decode(store, KEY_NODES_TO_RENDER)?;
    if !open.iter().chain(visible.iter()).all(|&uid| tree.contains(uid)) {
        debug!("navigator: persisted state references unknown nodes, ignoring");
        return None;
    }

    let filter_text = store.get(KEY_FILTER).unwrap_or_default();
    let tags: Vec<String> = store
        .get(KEY_SELECTED_TAGS)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    Some(Restored {
        open,
        visible,
        filter_text,
        tags,
    })
}

fn decode<T: serde::de::DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            debug!(key, %error, "navigator: persisted value failed to decode, ignoring");
            None
        }
    }
}
