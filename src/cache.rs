//! Parsed template cache.
//!
//! `format` calls pay template parsing once per distinct template string.
//! The cache is process-wide and bounded; hot templates stay resident
//! under the LRU policy.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::ast::Template;

const CACHE_SIZE: usize = 100;

static CACHE: Mutex<Option<LruCache<String, Template>>> = Mutex::new(None);

/// Returns the parsed form of `template`, parsing and caching on a miss.
pub fn get_or_parse(template: &str) -> Template {
    let mut guard = CACHE.lock().unwrap();
    let cache = guard.get_or_insert_with(|| {
        LruCache::new(NonZeroUsize::new(CACHE_SIZE).expect("cache size is non-zero"))
    });

    if let Some(parsed) = cache.get(template) {
        return parsed.clone();
    }

    let parsed = Template::parse(template);
    cache.put(template.to_string(), parsed.clone());
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_returns_equal_templates() {
        let first = get_or_parse("cached: {0}");
        let second = get_or_parse("cached: {0}");
        assert_eq!(first, second);
    }
}
