//! Command Serializer
//!
//! Per-device mutual exclusion around a driver. The serializer owns the
//! driver, so holding an [`ExclusiveAccess`] guard is the only way to reach
//! it. Release happens when the guard is dropped, on every exit path.
//!
//! The lock is not reentrant: acquiring it twice from the same task
//! deadlocks (`lock`) or reports busy (`try_lock`).

use std::future::Future;
use std::ops::{Deref, DerefMut};
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

pub struct CommandSerializer<D> {
    label: String,
    inner: Mutex<D>,
}

impl<D> CommandSerializer<D> {
    /// Wrap a driver; `label` identifies the device in trace output
    pub fn new(label: impl Into<String>, driver: D) -> Self {
        Self {
            label: label.into(),
            inner: Mutex::new(driver),
        }
    }

    /// Wait until no other operation is in flight, then take the driver
    pub async fn lock(&self, operation: &'static str) -> ExclusiveAccess<'_, D> {
        let guard = self.inner.lock().await;
        debug!(device = %self.label, operation, "serializer: entry");
        ExclusiveAccess {
            guard,
            label: &self.label,
            operation,
        }
    }

    /// Take the driver only if it is idle; `None` means the caller is skipped
    pub fn try_lock(&self, operation: &'static str) -> Option<ExclusiveAccess<'_, D>> {
        match self.inner.try_lock() {
            Ok(guard) => {
                debug!(device = %self.label, operation, "serializer: entry");
                Some(ExclusiveAccess {
                    guard,
                    label: &self.label,
                    operation,
                })
            }
            Err(_) => {
                debug!(
                    device = %self.label,
                    operation,
                    "serializer: busy, skipping"
                );
                None
            }
        }
    }

    /// Run `op` under the lock. With `blocking == false` a busy serializer
    /// skips `op` and returns `None`. The lock is held until the future
    /// returned by `op` completes.
    pub async fn with_exclusive_access<'a, T, F, Fut>(
        &'a self,
        operation: &'static str,
        blocking: bool,
        op: F,
    ) -> Option<T>
    where
        F: FnOnce(ExclusiveAccess<'a, D>) -> Fut,
        Fut: Future<Output = T>,
    {
        let access = if blocking {
            self.lock(operation).await
        } else {
            self.try_lock(operation)?
        };
        Some(op(access).await)
    }

    pub fn into_inner(self) -> D {
        self.inner.into_inner()
    }
}

/// Scoped ownership of the driver; the serializer is released on drop
pub struct ExclusiveAccess<'a, D> {
    guard: MutexGuard<'a, D>,
    label: &'a str,
    operation: &'static str,
}

impl<D> Deref for ExclusiveAccess<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.guard
    }
}

impl<D> DerefMut for ExclusiveAccess<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.guard
    }
}

impl<D> Drop for ExclusiveAccess<'_, D> {
    fn drop(&mut self) {
        debug!(
            device = %self.label,
            operation = self.operation,
            "serializer: exit"
        );
    }
}
