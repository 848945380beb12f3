use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Async mutexes keyed by a normalized lookup string.
///
/// Entries are dropped again once the last holder or waiter releases them, so
/// the map only grows with the number of keys in flight.
#[derive(Debug, Default)]
pub struct KeyedLocks {
    slots: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

pub struct KeyedLockGuard<'a> {
    owner: &'a KeyedLocks,
    key: String,
    slot: Arc<AsyncMutex<()>>,
    held: Option<OwnedMutexGuard<()>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &str) -> KeyedLockGuard<'_> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            slots.entry(key.to_string()).or_default().clone()
        };
        let held = slot.clone().lock_owned().await;
        KeyedLockGuard {
            owner: self,
            key: key.to_string(),
            slot,
            held: Some(held),
        }
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for KeyedLockGuard<'_> {
    fn drop(&mut self) {
        self.held.take();
        let mut slots = self
            .owner
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // map entry + this guard; anything above that is a waiter
        if Arc::strong_count(&self.slot) <= 2 {
            slots.remove(&self.key);
        }
    }
}
