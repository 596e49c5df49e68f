use std::sync::{Arc, RwLock};

/// Shared mutable state with interior mutability.
///
/// `Shared<T>` is a cheap-to-clone handle over `Arc<RwLock<T>>`. Every clone
/// sees the same value, which lets a spawned submission task reach the
/// document and form state owned by the page.
///
/// A poisoned lock is recovered rather than propagated: a panic in one
/// handler must not leave the rest of the page unusable.
///
/// # Example
///
/// ```ignore
/// let phase = Shared::new(SubmissionPhase::Idle);
/// let started = phase.update(|p| {
///     if p.is_submitting() {
///         return false;
///     }
///     *p = SubmissionPhase::Submitting;
///     true
/// });
/// ```
#[derive(Debug)]
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Shared<T> {
    /// Create a new handle owning the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read(T::clone)
    }

    /// Replace the value
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Run a closure with shared access and return its result
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&*guard),
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    /// Run a closure with exclusive access and return its result.
    ///
    /// The closure runs under the write lock, so a check-and-set inside it is atomic
    /// with respect to every other handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        match self.inner.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                f(&mut *guard)
            }
        }
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
