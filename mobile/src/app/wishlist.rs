//! # Wishlist
//!
//! The member's "my conference" picks: a set of session ids. Adding twice or
//! removing something absent is a no-op.

use std::collections::BTreeSet;

use crate::app::selection::SessionId;

/// Set of wishlisted session ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistSet {
    sessions: BTreeSet<SessionId>,
}

impl WishlistSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`; returns `false` when it was already present
    pub fn add(&mut self, id: impl Into<SessionId>) -> bool {
        self.sessions.insert(id.into())
    }

    /// Remove `id`; returns `false` when it was not present
    pub fn remove(&mut self, id: &str) -> bool {
        self.sessions.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.iter()
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
