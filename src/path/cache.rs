//! Content-addressed cache of sampled paths.
//!
//! Keys are 128-bit xxh3 fingerprints of the path data and sampling options. Each entry keeps the
//! original path string so a fingerprint collision can never return the wrong geometry, plus the
//! parsed path so callers that need both never parse twice. Capacity is bounded; the least
//! recently used entry is evicted first.

use std::collections::HashMap;
use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::BezPath;
use crate::path::sample::{SampleOptions, SampledPath, parse_and_sample};

const XXH3_SEED: u64 = 0x5e7c_41d2_9b0a_3f17;

/// Default number of cached paths.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SampleKey {
    hi: u64,
    lo: u64,
}

impl SampleKey {
    fn new(d: &str, opts: SampleOptions) -> Self {
        let mut h = Xxh3::with_seed(XXH3_SEED);
        h.update(&(d.len() as u64).to_le_bytes());
        h.update(d.as_bytes());
        h.update(&opts.interval.to_bits().to_le_bytes());
        let v = h.digest128();
        Self {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    d: String,
    interval_bits: u64,
    sampled: Arc<SampledPath>,
    geometry: Option<Arc<BezPath>>,
    last_used: u64,
}

/// Hit/miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Bounded LRU cache of [`SampledPath`] values keyed by path content.
#[derive(Clone, Debug)]
pub struct SampleCache {
    capacity: usize,
    entries: HashMap<SampleKey, Vec<CacheEntry>>,
    len: usize,
    clock: u64,
    stats: CacheStats,
}

impl Default for SampleCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl SampleCache {
    /// Cache holding at most `capacity` paths (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            len: 0,
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Cached samples for `d`, refreshing their recency.
    pub fn get(&mut self, d: &str, opts: SampleOptions) -> Option<Arc<SampledPath>> {
        self.touch(d, opts).map(|e| Arc::clone(&e.sampled))
    }

    /// Store samples for `d`, evicting the least recently used entry when full.
    pub fn insert(
        &mut self,
        d: &str,
        opts: SampleOptions,
        sampled: SampledPath,
    ) -> Arc<SampledPath> {
        self.store(d, opts, Arc::new(sampled), None)
    }

    /// Cached samples for `d`, sampling and storing them on a miss.
    pub fn get_or_sample(&mut self, d: &str, opts: SampleOptions) -> Arc<SampledPath> {
        self.get_or_prepare(d, opts).0
    }

    /// Cached samples and parsed geometry for `d`, parsing `d` at most once per entry.
    ///
    /// The geometry is `None` when `d` does not parse.
    pub fn get_or_prepare(
        &mut self,
        d: &str,
        opts: SampleOptions,
    ) -> (Arc<SampledPath>, Option<Arc<BezPath>>) {
        if let Some(e) = self.touch(d, opts) {
            // Entries added through `insert` carry no geometry yet.
            if e.geometry.is_none() {
                e.geometry = BezPath::from_svg(d.trim()).ok().map(Arc::new);
            }
            return (Arc::clone(&e.sampled), e.geometry.clone());
        }
        let (geometry, sampled) = parse_and_sample(d, opts);
        let geometry = geometry.map(Arc::new);
        let sampled = self.store(d, opts, Arc::new(sampled), geometry.clone());
        (sampled, geometry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }

    fn touch(&mut self, d: &str, opts: SampleOptions) -> Option<&mut CacheEntry> {
        let key = SampleKey::new(d, opts);
        let bits = opts.interval.to_bits();
        self.clock += 1;
        let now = self.clock;
        let found = self
            .entries
            .get_mut(&key)
            .and_then(|b| b.iter_mut().find(|e| e.interval_bits == bits && e.d == d));
        match found {
            Some(e) => {
                self.stats.hits += 1;
                e.last_used = now;
                Some(e)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    fn store(
        &mut self,
        d: &str,
        opts: SampleOptions,
        sampled: Arc<SampledPath>,
        geometry: Option<Arc<BezPath>>,
    ) -> Arc<SampledPath> {
        let key = SampleKey::new(d, opts);
        let bits = opts.interval.to_bits();
        self.clock += 1;

        if let Some(existing) = self
            .entries
            .get_mut(&key)
            .and_then(|b| b.iter_mut().find(|e| e.interval_bits == bits && e.d == d))
        {
            existing.sampled = Arc::clone(&sampled);
            if geometry.is_some() {
                existing.geometry = geometry;
            }
            existing.last_used = self.clock;
            return sampled;
        }

        if self.len >= self.capacity {
            self.evict_lru();
        }
        self.entries.entry(key).or_default().push(CacheEntry {
            d: d.to_owned(),
            interval_bits: bits,
            sampled: Arc::clone(&sampled),
            geometry,
            last_used: self.clock,
        });
        self.len += 1;
        sampled
    }

    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .flat_map(|(k, bucket)| {
                bucket
                    .iter()
                    .enumerate()
                    .map(move |(i, e)| (*k, i, e.last_used))
            })
            .min_by_key(|&(_, _, used)| used)
            .map(|(k, i, _)| (k, i));
        let Some((key, idx)) = victim else {
            return;
        };
        if let Some(bucket) = self.entries.get_mut(&key) {
            bucket.swap_remove(idx);
            if bucket.is_empty() {
                self.entries.remove(&key);
            }
            self.len -= 1;
            self.stats.evictions += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/cache.rs"]
mod tests;
