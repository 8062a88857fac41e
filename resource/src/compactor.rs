//! Compaction of IRIs into `prefix:local` names.

use std::collections::HashMap;

use quadmesh_term::prefix::PrefixMap;

/// Compacts IRIs through a prefix map, caching the results.
///
/// A compactor lives for a single materialization run.
/// The longest matching namespace wins;
/// among namespaces of equal length, the first registered wins.
#[derive(Clone, Debug)]
pub struct PrefixCompactor<'a> {
    prefixes: Option<&'a PrefixMap>,
    cache: HashMap<String, String>,
}

impl<'a> PrefixCompactor<'a> {
    /// A compactor using the given prefix map.
    pub fn new(prefixes: &'a PrefixMap) -> Self {
        PrefixCompactor {
            prefixes: Some(prefixes),
            cache: HashMap::new(),
        }
    }

    /// A compactor returning every IRI unchanged.
    pub fn disabled() -> Self {
        PrefixCompactor {
            prefixes: None,
            cache: HashMap::new(),
        }
    }

    /// Whether this compactor may change IRIs.
    pub fn is_enabled(&self) -> bool {
        self.prefixes.is_some()
    }

    /// The short name of `iri`, or `iri` itself if no namespace matches.
    pub fn compact(&mut self, iri: &str) -> String {
        let Some(prefixes) = self.prefixes else {
            return iri.to_string();
        };
        if let Some(short) = self.cache.get(iri) {
            return short.clone();
        }
        let short = prefixes.compact(iri).unwrap_or_else(|| iri.to_string());
        self.cache.insert(iri.to_string(), short.clone());
        short
    }

    /// The number of IRIs compacted so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
