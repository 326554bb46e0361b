//! Shared handle for hosts that call the manager from several places
//!
//! One mutex guards the whole manager, so operations stay serialized.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::{OverlayError, Result};
use crate::manager::CollectionManager;

/// Cloneable handle to one `CollectionManager`
#[derive(Debug)]
pub struct SharedCollectionManager<C, R, P> {
    inner: Arc<Mutex<CollectionManager<C, R, P>>>,
}

impl<C, R, P> Clone for SharedCollectionManager<C, R, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, R, P> SharedCollectionManager<C, R, P> {
    pub fn new(manager: CollectionManager<C, R, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Run `f` with exclusive access to the manager
    ///
    /// # Errors
    ///
    /// Returns `Concurrency` if a previous holder panicked, otherwise whatever
    /// `f` returns.
    pub fn with<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut CollectionManager<C, R, P>) -> Result<T>,
    {
        let mut guard = self.lock()?;
        f(&mut guard)
    }

    fn lock(&self) -> Result<MutexGuard<'_, CollectionManager<C, R, P>>> {
        self.inner.lock().map_err(|e| OverlayError::Concurrency {
            message: format!("collection manager lock poisoned: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::model::{CharacterHandle, OverlayId};
    use crate::persistence::RecordingSink;
    use crate::render::RecordingRenderer;

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let shared = SharedCollectionManager::new(CollectionManager::new(
            CharacterHandle(1),
            InMemoryCatalog::default(),
            RecordingRenderer::new(),
            RecordingSink::new(),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.with(|m| m.add(OverlayId::new(3))))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let (count, saves) = shared
            .with(|m| Ok((m.apply_count(OverlayId::new(3)), m.sink().save_count())))
            .unwrap();
        assert_eq!(count.map(|c| c.get()), Some(4));
        assert_eq!(saves, 4);
    }

    #[test]
    fn test_poisoned_lock_maps_to_concurrency_error() {
        let shared = SharedCollectionManager::new(CollectionManager::new(
            CharacterHandle(1),
            InMemoryCatalog::default(),
            RecordingRenderer::new(),
            RecordingSink::new(),
        ));

        let clone = shared.clone();
        let _ = thread::spawn(move || {
            clone.with::<(), _>(|_| panic!("boom")).ok();
        })
        .join();

        let result = shared.with(|m| Ok(m.len()));
        assert!(matches!(result, Err(OverlayError::Concurrency { .. })));
    }
}
