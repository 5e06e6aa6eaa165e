//! Process-wide collation setting
//!
//! Locale-aware sorting reads a single global collation locale. A sort that
//! needs a specific locale installs it with [`CollationGuard::install`]; the
//! guard restores the previous locale when dropped, whether the sort
//! returned normally, returned an error or unwound from a panic.
//!
//! # Thread Safety
//!
//! The guard holds a process-wide reentrant lock for its lifetime, so two
//! threads never observe each other's temporary locale. The same thread may
//! nest guards (a comparator that itself sorts by locale).
//!
//! # Comparison
//!
//! - `"C"` and `"POSIX"` compare byte-wise
//! - any other locale compares case-folded text first, then byte-wise to
//!   break ties

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use parking_lot::{ReentrantMutex, ReentrantMutexGuard, RwLock};
use tracing::{debug, warn};

/// Locale active when nothing has been installed
pub const DEFAULT_LOCALE: &str = "C";

static LOCALE: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new(DEFAULT_LOCALE.to_string()));
static LOCK: Lazy<ReentrantMutex<()>> = Lazy::new(|| ReentrantMutex::new(()));

/// Currently installed collation locale
pub fn current() -> String {
    LOCALE.read().clone()
}

/// Acquire the process-wide collation lock without changing the locale.
///
/// Holding it keeps other threads from swapping the locale.
pub fn lock() -> ReentrantMutexGuard<'static, ()> {
    LOCK.lock()
}

fn replace(locale: &str) -> String {
    std::mem::replace(&mut *LOCALE.write(), locale.to_string())
}

/// Scoped installation of a collation locale
#[must_use = "the previous locale is restored when the guard is dropped"]
pub struct CollationGuard {
    previous: String,
    failed: bool,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl CollationGuard {
    /// Install `locale`, remembering the current one
    pub fn install(locale: &str) -> Self {
        let lock = LOCK.lock();
        let previous = replace(locale);
        debug!(target: "typed_arrays::collation", from = %previous, to = locale, "Installed collation");
        Self {
            previous,
            failed: false,
            _lock: lock,
        }
    }

    /// Locale that will be restored on drop
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Record that the guarded work failed
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }
}

impl Drop for CollationGuard {
    fn drop(&mut self) {
        let installed = replace(&self.previous);
        if self.failed || std::thread::panicking() {
            warn!(
                target: "typed_arrays::collation",
                restored = %self.previous,
                discarded = %installed,
                "Restored collation after failed sort"
            );
        } else {
            debug!(target: "typed_arrays::collation", restored = %self.previous, "Restored collation");
        }
    }
}

/// Compare two strings under the current locale
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_in(&LOCALE.read(), a, b)
}

/// Compare two strings under an explicit locale
pub fn compare_in(locale: &str, a: &str, b: &str) -> Ordering {
    if is_byte_locale(locale) {
        return a.cmp(b);
    }
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn is_byte_locale(locale: &str) -> bool {
    locale.is_empty() || locale.eq_ignore_ascii_case("C") || locale.eq_ignore_ascii_case("POSIX")
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
