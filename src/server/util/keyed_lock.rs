//! Per-key async mutual exclusion.
//!
//! Ticket opening is serialized per requester and ticket closing per ticket. Each
//! key maps to its own `tokio::sync::Mutex`; entries are created on demand and
//! dropped again once nobody holds or waits on them, so the registry does not grow
//! with the number of users ever seen.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::OwnedMutexGuard;

#[derive(Clone, Default)]
pub struct KeyedLocks {
    entries: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>,
}

/// Held lock for one key; releases and prunes the entry on drop.
pub struct KeyedLockGuard {
    key: String,
    entries: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until the lock for `key` is free and acquires it.
    pub async fn lock(&self, key: impl Into<String>) -> KeyedLockGuard {
        let key = key.into();
        let mutex = {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            entries.entry(key.clone()).or_default().clone()
        };

        let guard = mutex.lock_owned().await;

        KeyedLockGuard {
            key,
            entries: self.entries.clone(),
            guard: Some(guard),
        }
    }

    /// Number of keys currently tracked.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for KeyedLockGuard {
    fn drop(&mut self) {
        // Release before checking the count so a waiter that already cloned the
        // Arc keeps the entry alive.
        self.guard.take();

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(mutex) = entries.get(&self.key) {
            if Arc::strong_count(mutex) == 1 {
                entries.remove(&self.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;

    #[tokio::test]
    async fn serializes_holders_of_the_same_key() {
        let locks = KeyedLocks::new();
        let active = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = locks.clone();
            let active = active.clone();
            let max_seen = max_seen.clone();
            handles.push(tokio::spawn(async move {
                let _guard = locks.lock("user-1").await;
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn different_keys_do_not_block_each_other() {
        let locks = KeyedLocks::new();
        let _first = locks.lock("a").await;

        let second = tokio::time::timeout(Duration::from_millis(100), locks.lock("b")).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn prunes_entries_after_release() {
        let locks = KeyedLocks::new();
        {
            let _guard = locks.lock("a").await;
            assert_eq!(locks.len(), 1);
        }
        assert!(locks.is_empty());
    }
}
