use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Local};

use super::PrefixIndex;

struct Published {
    index: Arc<PrefixIndex>,
    loaded_at: DateTime<Local>,
}

/// Shared reference to the live index. Readers take a cheap `Arc` clone; a rebuilt
/// index replaces the old one in a single swap and in-flight queries keep whichever
/// index they started with.
pub struct IndexHandle {
    current: RwLock<Published>,
}

impl IndexHandle {
    pub fn new(index: PrefixIndex) -> Self {
        Self {
            current: RwLock::new(Published {
                index: Arc::new(index),
                loaded_at: Local::now(),
            }),
        }
    }

    /// The currently published index.
    pub fn get(&self) -> Arc<PrefixIndex> {
        let cur = self.current.read().unwrap_or_else(PoisonError::into_inner);
        cur.index.clone()
    }

    /// When the current index was published.
    pub fn loaded_at(&self) -> DateTime<Local> {
        let cur = self.current.read().unwrap_or_else(PoisonError::into_inner);
        cur.loaded_at
    }

    /// Replace the published index with a fully built one.
    pub fn publish(&self, index: PrefixIndex) {
        let next = Published {
            index: Arc::new(index),
            loaded_at: Local::now(),
        };
        let mut cur = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *cur = next;
    }
}
