//! Single-evaluation helpers: [`Thunk`] and [`once`]

use std::fmt;
use std::sync::OnceLock;

/// A nullary computation evaluated on first use and cached afterwards.
///
/// ```rust
/// use fpkit_func::Thunk;
///
/// let config = Thunk::new(|| "expensive".repeat(2));
/// assert!(!config.is_evaluated());
/// assert_eq!(config.force(), "expensiveexpensive");
/// assert!(config.is_evaluated());
/// ```
pub struct Thunk<T, F>
where
    F: Fn() -> T,
{
    init: F,
    value: OnceLock<T>,
}

impl<T, F> Thunk<T, F>
where
    F: Fn() -> T,
{
    /// Wraps `init` without running it.
    pub fn new(init: F) -> Self {
        Self {
            init,
            value: OnceLock::new(),
        }
    }

    /// Evaluates on the first call; later calls return the cached value.
    pub fn force(&self) -> &T {
        self.value.get_or_init(&self.init)
    }

    /// The cached value, if already evaluated.
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Whether `init` has run.
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Evaluates if needed and returns the value.
    pub fn into_value(self) -> T {
        let Self { init, value } = self;
        value.into_inner().unwrap_or_else(init)
    }
}

impl<T, F> fmt::Debug for Thunk<T, F>
where
    T: fmt::Debug,
    F: Fn() -> T,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk")
            .field("value", &self.value.get())
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}

/// Shorthand for [`Thunk::new`].
pub fn thunk<T, F>(init: F) -> Thunk<T, F>
where
    F: Fn() -> T,
{
    Thunk::new(init)
}

/// Runs `f` on the first call only; every later call returns a clone of
/// that first result and ignores its argument.
///
/// `f` must not call the returned function recursively.
///
/// ```rust
/// use fpkit_func::once;
///
/// let init = once(|port: u16| format!("listening on {port}"));
/// assert_eq!(init(8080), "listening on 8080");
/// assert_eq!(init(9090), "listening on 8080");
/// ```
pub fn once<A, R, F>(f: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
    R: Clone,
{
    let result = OnceLock::new();
    move |a| result.get_or_init(|| f(a)).clone()
}
