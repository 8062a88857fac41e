//! A [`PrefixMap`] associates prefixes to namespaces.
//!
//! It is used in both directions:
//! to expand `prefix:local` names into IRIs when building terms,
//! and to compact IRIs into `prefix:local` names when materializing graphs.

use crate::*;
use std::sync::Arc;

/// An ordered mapping from prefixes to namespace IRIs.
///
/// Prefixes are unique; inserting an existing prefix replaces its namespace
/// without changing its rank.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixMap {
    entries: Vec<(Arc<str>, Arc<str>)>,
}

impl PrefixMap {
    /// An empty prefix map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `namespace` to `prefix`.
    ///
    /// Fails if `prefix` does not match `PN_PREFIX?` or if `namespace` is not an absolute IRI.
    pub fn insert(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        if !is_valid_prefix(prefix) {
            return Err(TermError::InvalidPrefix(prefix.to_string()));
        }
        if !is_absolute_iri(namespace) {
            return Err(TermError::InvalidIri(namespace.to_string()));
        }
        match self.entries.iter_mut().find(|(p, _)| &**p == prefix) {
            Some((_, ns)) => *ns = namespace.into(),
            None => self.entries.push((prefix.into(), namespace.into())),
        }
        Ok(())
    }

    /// Same as [`insert`](PrefixMap::insert), in builder style.
    pub fn with(mut self, prefix: &str, namespace: &str) -> Result<Self> {
        self.insert(prefix, namespace)?;
        Ok(self)
    }

    /// Remove `prefix` from this map, returning its namespace if it was there.
    pub fn remove(&mut self, prefix: &str) -> Option<Arc<str>> {
        let i = self.entries.iter().position(|(p, _)| &**p == prefix)?;
        Some(self.entries.remove(i).1)
    }

    /// Return the namespace associated to this prefix, if any.
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| &**p == prefix)
            .map(|(_, ns)| &**ns)
    }

    /// Expand `prefix:local` into a full IRI, if `prefix` is known.
    ///
    /// The result is not checked for validity.
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        let ns = self.get_namespace(prefix)?;
        Some(format!("{ns}{local}"))
    }

    /// Return a prefix-suffix pair describing the given IRI, if any.
    ///
    /// The longest matching namespace wins;
    /// among namespaces of equal length, the first inserted wins.
    pub fn get_prefixed_pair<'s>(&'s self, iri: &'s str) -> Option<(&'s str, &'s str)> {
        let mut matched = 0;
        let mut found = None;
        for (p, ns) in &self.entries {
            if iri.starts_with(&**ns) && ns.len() > matched {
                matched = ns.len();
                found = Some((&**p, &iri[matched..]));
            }
        }
        found
    }

    /// Compact the given IRI into `prefix:suffix`, if a namespace matches.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.get_prefixed_pair(iri)
            .map(|(p, suffix)| format!("{p}:{suffix}"))
    }

    /// Iterate over the (prefix, namespace) pairs of this map, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(p, ns)| (&**p, &**ns))
    }

    /// The number of prefixes in this map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this map has no prefix.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> TryFrom<&'a [(&'a str, &'a str)]> for PrefixMap {
    type Error = TermError;

    fn try_from(pairs: &'a [(&'a str, &'a str)]) -> Result<Self> {
        let mut map = PrefixMap::new();
        for (p, ns) in pairs {
            map.insert(p, ns)?;
        }
        Ok(map)
    }
}

#[cfg(test)]
#[allow(clippy::unused_unit)] // test_case! generated warnings
mod test {
    use super::*;
    use test_case::test_case;

    fn make_map() -> PrefixMap {
        PrefixMap::try_from(
            &[
                ("s", "http://schema.org/"),
                ("a", "http://example.org/a/"),
                ("ab", "http://example.org/a/b#"),
                ("", "http://example.org/"),
            ][..],
        )
        .unwrap()
    }

    #[test_case("s", Some("http://schema.org/"); "s")]
    #[test_case("a", Some("http://example.org/a/"); "a")]
    #[test_case("ab", Some("http://example.org/a/b#"); "ab")]
    #[test_case("", Some("http://example.org/"); "empty")]
    #[test_case("sa", None; "sa")]
    fn get_namespace(prefix: &str, expected: Option<&str>) {
        assert_eq!(make_map().get_namespace(prefix), expected);
    }

    #[test_case("http://something.else.com/", None; "something else")]
    #[test_case("http://schema.org/Person", Some(("s", "Person")); "s:Person")]
    #[test_case("http://example.org/", Some(("", "")); "single colon")]
    #[test_case("http://example.org/a/c", Some(("a", "c")); "a:c")]
    #[test_case("http://example.org/a/b#c", Some(("ab", "c")); "ab:c")]
    #[test_case("http://example.org/a#c", Some(("", "a#c")); ":a#c")]
    fn get_prefixed_pair(iri: &str, expected: Option<(&str, &str)>) {
        assert_eq!(make_map().get_prefixed_pair(iri), expected);
    }

    #[test]
    fn equal_length_namespaces_keep_first() -> Result<()> {
        let map = PrefixMap::new()
            .with("x", "http://example.org/")
            .and_then(|m| m.with("y", "http://example.org/"))?;
        assert_eq!(map.compact("http://example.org/z"), Some("x:z".to_string()));
        Ok(())
    }

    #[test_case("s:Person", Some("http://schema.org/Person"); "known prefix")]
    #[test_case(":foo", Some("http://example.org/foo"); "empty prefix")]
    #[test_case("x:foo", None; "unknown prefix")]
    #[test_case("foo", None; "no colon")]
    fn expand(curie: &str, expected: Option<&str>) {
        assert_eq!(make_map().expand(curie).as_deref(), expected);
    }

    #[test]
    fn insert_replaces_in_place() -> Result<()> {
        let mut map = make_map();
        map.insert("a", "http://example.com/a/")?;
        assert_eq!(map.len(), 4);
        assert_eq!(map.iter().nth(1), Some(("a", "http://example.com/a/")));
        assert_eq!(map.remove("a").as_deref(), Some("http://example.com/a/"));
        assert_eq!(map.len(), 3);
        Ok(())
    }

    #[test_case("1x", "http://example.org/"; "bad prefix")]
    #[test_case("x", "not an iri"; "bad namespace")]
    fn insert_invalid(prefix: &str, ns: &str) {
        assert!(PrefixMap::new().insert(prefix, ns).is_err());
    }
}
