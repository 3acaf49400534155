use std::{collections::HashMap, future::Future, panic::AssertUnwindSafe, sync::Arc};

use futures::future::{BoxFuture, FutureExt, Shared};
use thiserror::Error;
use tokio::sync::Mutex;

/// The shared work panicked or its task was cancelled before producing a value.
#[derive(Debug, Clone, Error)]
#[error("in-flight work aborted: {0}")]
pub struct FlightAborted(pub String);

type InFlight<T> = Shared<BoxFuture<'static, Result<T, FlightAborted>>>;

/// Coalesces concurrent calls that share a key into one execution.
///
/// The work runs on its own task, so it finishes and clears its entry even
/// when every caller has gone away. Nothing is cached after it completes.
pub struct SingleFlight<T: Clone + Send + Sync + 'static> {
    in_flight: Arc<Mutex<HashMap<String, InFlight<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Runs `work` unless a call with the same key is already running, in
    /// which case that call's result is awaited instead.
    pub async fn run<F, Fut>(&self, key: String, work: F) -> Result<T, FlightAborted>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let shared = {
            let mut in_flight = self.in_flight.lock().await;
            match in_flight.get(&key) {
                Some(existing) => {
                    log::debug!("Joining in-flight generation {}", key);
                    existing.clone()
                }
                None => {
                    let registry = Arc::clone(&self.in_flight);
                    let entry_key = key.clone();
                    let fut = work();
                    // The registry lock is held until the entry is inserted,
                    // so the removal below always runs after the insert.
                    let handle = tokio::spawn(async move {
                        let output = AssertUnwindSafe(fut).catch_unwind().await;
                        registry.lock().await.remove(&entry_key);
                        output.map_err(|_| FlightAborted("work panicked".to_string()))
                    });
                    let shared = async move {
                        handle
                            .await
                            .map_err(|e| FlightAborted(e.to_string()))
                            .and_then(|output| output)
                    }
                    .boxed()
                    .shared();
                    in_flight.insert(key, shared.clone());
                    shared
                }
            }
        };

        shared.await
    }

    pub async fn in_flight_count(&self) -> usize {
        self.in_flight.lock().await.len()
    }
}
