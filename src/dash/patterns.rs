//! Token pattern caching.
//!
//! Patterns depend on the separator, so they are compiled per separator and
//! kept in a small LRU cache.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use regex::Regex;
use tracing::{debug, trace};

/// Compiled token patterns for one separator.
#[derive(Debug)]
pub(crate) struct TokenPatterns {
    pub day: Regex,
    pub week: Regex,
    pub month: Regex,
    pub season: Regex,
    pub year: Regex,
}

impl TokenPatterns {
    fn compile(separator: &str) -> Result<Self, regex::Error> {
        // ASCII digits only: `\d` would also accept Persian digits
        const YEAR: &str = "([0-9]{1,4})";
        let sep = regex::escape(separator);

        Ok(TokenPatterns {
            day: Regex::new(&format!("^{YEAR}{sep}([0-9]{{2}}){sep}([0-9]{{2}})$"))?,
            week: Regex::new(&format!("^{YEAR}{sep}W([0-9]{{1,2}})$"))?,
            month: Regex::new(&format!("^{YEAR}{sep}([0-9]{{2}})$"))?,
            season: Regex::new(&format!("^{YEAR}{sep}S0?([1-4])$"))?,
            year: Regex::new(&format!("^{YEAR}$"))?,
        })
    }
}

/// Global cache of compiled patterns, keyed by separator.
static CACHE: Mutex<Option<LruCache<String, Arc<TokenPatterns>>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or compile the patterns for a separator, using the cache.
///
/// Returns `None` for an empty separator, where day and month tokens would
/// be indistinguishable, or if the patterns fail to compile.
pub(crate) fn patterns_for(separator: &str) -> Option<Arc<TokenPatterns>> {
    if separator.is_empty() {
        debug!("empty token separator");
        return None;
    }

    // A poisoned lock only means another thread panicked mid-insert; the
    // cache contents are still usable.
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(patterns) = cache.get(separator) {
        return Some(Arc::clone(patterns));
    }

    trace!(separator, "compiling token patterns");
    match TokenPatterns::compile(separator) {
        Ok(patterns) => {
            let patterns = Arc::new(patterns);
            cache.put(separator.to_string(), Arc::clone(&patterns));
            Some(patterns)
        }
        Err(err) => {
            debug!(separator, %err, "token patterns failed to compile");
            None
        }
    }
}
