//! View Lifetime
//!
//! Abort handles for the fetches a view starts. Ending the lifetime (on
//! unmount) aborts whatever is still in flight so late responses are
//! dropped instead of written into state that no longer exists.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
struct Tracked {
    ended: bool,
    next_id: u64,
    /// Handles of fetches still running
    handles: HashMap<u64, AbortHandle>,
}

/// Cheap to clone; all clones share the same set of handles
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    tracked: Arc<Mutex<Tracked>>,
}

/// Releases a fetch's handle when the fetch finishes or is dropped
struct Release<'a> {
    lifetime: &'a ViewLifetime,
    id: u64,
}

impl Drop for Release<'_> {
    fn drop(&mut self) {
        self.lifetime.lock().handles.remove(&self.id);
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fut` to completion unless the lifetime ends first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut tracked = self.lock();
            if tracked.ended {
                return None;
            }
            let id = tracked.next_id;
            tracked.next_id += 1;
            tracked.handles.insert(id, handle);
            id
        };

        let _release = Release { lifetime: self, id };
        Abortable::new(fut, registration).await.ok()
    }

    /// Abort everything in flight; later `run` calls return `None` at once.
    pub fn end(&self) {
        let mut tracked = self.lock();
        tracked.ended = true;
        for (_, handle) in tracked.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_ended(&self) -> bool {
        self.lock().ended
    }

    /// Fetches started and not yet finished
    pub fn in_flight(&self) -> usize {
        self.lock().handles.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tracked> {
        self.tracked.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
