//! Request-scoped context threaded into every resolver.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Cancellation plus request-scoped data, shared by every resolver of one
/// execution.
///
/// The executor checks [`Context::is_cancelled`] before launching each
/// field and after each completion; long-running resolvers should observe
/// the same flag themselves.
#[derive(Clone, Debug, Default)]
pub struct Context {
    values: Arc<HashMap<String, serde_json::Value>>,
    cancelled: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context carrying the given request-scoped values.
    pub fn with_values(
        values: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) -> Self {
        Self {
            values: Arc::new(values.into_iter().collect()),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Looks up a request-scoped value by key.
    pub fn value(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// A handle the caller keeps to cancel this context from another
    /// thread.
    pub fn cancellation_handle(&self) -> CancellationHandle {
        CancellationHandle(Arc::clone(&self.cancelled))
    }
}

/// Cancels the [`Context`] it was taken from.
#[derive(Clone, Debug)]
pub struct CancellationHandle(Arc<AtomicBool>);

impl CancellationHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
