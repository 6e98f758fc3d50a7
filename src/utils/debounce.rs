use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the last of a burst of calls, once `wait` has passed without a
/// newer one. Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drops the pending call, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_only_last_call_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(30));
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        for i in 1..=3 {
            let runs = runs.clone();
            let last = last.clone();
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
                last.store(i, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_call() {
        let debouncer = Debouncer::new(Duration::from_millis(30));
        let runs = Arc::new(AtomicUsize::new(0));

        let counter = runs.clone();
        debouncer.call(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_separate_bursts_each_run() {
        tokio_test::block_on(async {
            let debouncer = Debouncer::new(Duration::from_millis(10));
            let runs = Arc::new(AtomicUsize::new(0));

            for _ in 0..2 {
                let counter = runs.clone();
                debouncer.call(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
                tokio::time::sleep(Duration::from_millis(80)).await;
            }

            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
