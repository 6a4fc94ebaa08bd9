//! Live SSE session ids.
//!
//! A session id is minted when a streaming connection opens and discarded on
//! disconnect. It carries no other state and is never persisted; the
//! registry exists so forgotten connections can be dropped, not retrieved.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashSet<Uuid>>>,
}

impl SessionRegistry {
    /// Mint a fresh session id and track it.
    #[must_use]
    pub fn mint(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.lock().insert(id);
        id
    }

    /// Drop a session id. Idempotent.
    pub fn forget(&self, id: Uuid) {
        self.inner.lock().remove(&id);
    }

    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.inner.lock().contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
