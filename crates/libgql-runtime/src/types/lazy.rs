use std::sync::OnceLock;

/// A lazy-resolution node: either an eager value or a thunk materialized on
/// first touch.
///
/// Thunks break construction cycles (`A.field: B`, `B.field: A`): the thunk
/// body runs after both types exist, during schema construction. The result
/// is cached behind a one-shot initializer, so first-touch races during a
/// concurrent schema walk observe a single materialization.
pub struct Lazy<T> {
    thunk: Option<Box<dyn Fn() -> T + Send + Sync>>,
    cache: OnceLock<T>,
}

impl<T> Lazy<T> {
    /// An eager value; no thunk involved.
    pub fn value(value: T) -> Self {
        let cache = OnceLock::new();
        let _ = cache.set(value);
        Self { thunk: None, cache }
    }

    /// A deferred table, invoked lazily and at most once.
    pub fn thunk(thunk: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            thunk: Some(Box::new(thunk)),
            cache: OnceLock::new(),
        }
    }

    /// Materializes (on first call) and returns the value.
    pub fn get(&self) -> &T {
        self.cache.get_or_init(|| {
            let thunk = self
                .thunk
                .as_ref()
                .expect("Lazy holds either a cached value or a thunk");
            thunk()
        })
    }
}

impl<T: Default> std::default::Default for Lazy<T> {
    fn default() -> Self {
        Lazy::value(T::default())
    }
}

impl<T> std::convert::From<T> for Lazy<T> {
    fn from(value: T) -> Self {
        Lazy::value(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cache.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<unmaterialized>)"),
        }
    }
}
