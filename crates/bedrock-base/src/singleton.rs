// Singleton cell
// A value that may be created exactly once per process

use once_cell::sync::OnceCell;

use bedrock_error::{singleton_failure, SoftResult};

/// Holds at most one instance of `T` for its whole lifetime.
///
/// Creating the instance a second time is refused with a `Singleton`
/// failure instead of silently replacing or reusing the first one.
///
/// ```
/// use bedrock_base::Singleton;
///
/// static REGISTRY: Singleton<Vec<&str>> = Singleton::new("registry");
///
/// let registry = REGISTRY.create(|| vec!["alpha"]).unwrap();
/// assert_eq!(registry.len(), 1);
/// assert!(REGISTRY.create(Vec::new).is_err());
/// ```
#[derive(Debug)]
pub struct Singleton<T> {
    name: &'static str,
    cell: OnceCell<T>,
}

impl<T> Singleton<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::new(),
        }
    }

    /// Create the instance with `init`. Fails if it has already been created,
    /// in which case `init` is not run.
    pub fn create<F>(&self, init: F) -> SoftResult<&T>
    where
        F: FnOnce() -> T,
    {
        let mut created = false;
        let instance = self.cell.get_or_init(|| {
            created = true;
            init()
        });
        if !created {
            tracing::debug!(singleton = self.name, "Refusing to create singleton twice");
            return Err(singleton_failure(self.name));
        }
        Ok(instance)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_created(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_error::{SoftKind, Throwable};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_create_once() {
        let cell = Singleton::new("counter");
        assert!(cell.get().is_none());
        assert_eq!(*cell.create(|| 1).unwrap(), 1);
        assert!(cell.is_created());

        let failure = cell.create(|| 2).unwrap_err();
        assert_eq!(failure.kind(), SoftKind::Singleton);
        assert_eq!(failure.message(), Some("The counter has already been created"));
        assert_eq!(cell.get(), Some(&1));
    }

    #[test]
    fn test_concurrent_create_runs_init_once() {
        let cell = Arc::new(Singleton::new("pool"));
        let runs = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cell = Arc::clone(&cell);
                let runs = Arc::clone(&runs);
                std::thread::spawn(move || {
                    cell.create(|| {
                        runs.fetch_add(1, Ordering::SeqCst);
                        42
                    })
                    .is_ok()
                })
            })
            .collect();

        let successes = handles.into_iter().map(|h| h.join().unwrap()).filter(|ok| *ok).count();
        assert_eq!(successes, 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
