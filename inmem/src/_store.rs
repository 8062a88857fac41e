// this module is transparently re-exported by the crate root

use quadmesh_term::{Quad, Term};

/// Type alias for the iterators returned by [`QuadStore`] methods.
pub type QuadIter<'a> = Box<dyn Iterator<Item = Quad> + 'a>;

/// A set of [quads](Quad) that can be queried and mutated.
///
/// Implementors provide the primitives
/// ([`add`](QuadStore::add), [`delete`](QuadStore::delete), [`has`](QuadStore::has),
/// [`len`](QuadStore::len), [`quads`](QuadStore::quads), [`quads_matching`](QuadStore::quads_matching));
/// bulk mutation and set algebra are provided on top of them.
///
/// A store never contains the same quad twice.
pub trait QuadStore {
    /// Insert `quad`, returning `true` iff it was not already present.
    fn add(&mut self, quad: Quad) -> bool;

    /// Remove `quad`, returning `true` iff it was present.
    fn delete(&mut self, quad: &Quad) -> bool;

    /// Whether `quad` is present in this store.
    fn has(&self, quad: &Quad) -> bool;

    /// The number of quads in this store.
    fn len(&self) -> usize;

    /// Whether this store contains no quad.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An iterator over all quads of this store.
    ///
    /// Calling this method again restarts the iteration.
    /// Implementations should yield the quads in the order they were added,
    /// which materialization carries over to the order of values and resources.
    fn quads(&self) -> QuadIter<'_>;

    /// An iterator over all quads whose bound positions are equal to the given terms.
    ///
    /// `None` acts as a wildcard.
    /// A term that is not acceptable at its position matches nothing.
    fn quads_matching<'s>(
        &'s self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
        g: Option<&Term>,
    ) -> QuadIter<'s>;

    /// Insert all the given quads, returning how many were newly inserted.
    fn add_all<I>(&mut self, quads: I) -> usize
    where
        I: IntoIterator<Item = Quad>,
        Self: Sized,
    {
        quads.into_iter().filter(|q| self.add(q.clone())).count()
    }

    /// Remove all the quads matching the given pattern, returning how many were removed.
    fn delete_matches(
        &mut self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
        g: Option<&Term>,
    ) -> usize
    where
        Self: Sized,
    {
        let victims: Vec<Quad> = self.quads_matching(s, p, o, g).collect();
        victims.iter().filter(|q| self.delete(q)).count()
    }

    /// Whether every quad of `other` is in this store.
    fn contains<D>(&self, other: &D) -> bool
    where
        D: QuadStore,
        Self: Sized,
    {
        other.quads().all(|q| self.has(&q))
    }

    /// Whether this store and `other` contain exactly the same quads.
    fn equals<D>(&self, other: &D) -> bool
    where
        D: QuadStore,
        Self: Sized,
    {
        self.len() == other.len() && self.contains(other) && other.contains(self)
    }

    /// A new store with the quads of this store, followed by those of `other` not already in it.
    fn union<D>(&self, other: &D) -> Self
    where
        D: QuadStore,
        Self: Clone + Sized,
    {
        let mut res = self.clone();
        for q in other.quads() {
            res.add(q);
        }
        res
    }

    /// A new store with the quads of this store that are also in `other`.
    fn intersection<D>(&self, other: &D) -> Self
    where
        D: QuadStore,
        Self: Clone + Sized,
    {
        self.retain_clone(|q| other.has(q))
    }

    /// A new store with the quads of this store that are not in `other`.
    fn difference<D>(&self, other: &D) -> Self
    where
        D: QuadStore,
        Self: Clone + Sized,
    {
        self.retain_clone(|q| !other.has(q))
    }

    /// A copy of this store, keeping only the quads satisfying `keep`.
    fn retain_clone<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Quad) -> bool,
        Self: Clone + Sized,
    {
        let mut res = self.clone();
        let victims: Vec<Quad> = self.quads().filter(|q| !keep(q)).collect();
        for q in &victims {
            res.delete(q);
        }
        res
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Dataset;

    fn quad(s: &str, o: &str) -> Quad {
        Quad::triple(
            Term::named_node(&format!("http://example.org/{s}")).unwrap(),
            Term::named_node("http://example.org/p").unwrap(),
            Term::simple_literal(o),
        )
        .unwrap()
    }

    fn abc() -> (Dataset, Dataset) {
        let a: Dataset = [quad("a", "1"), quad("b", "2")].into_iter().collect();
        let b: Dataset = [quad("b", "2"), quad("c", "3")].into_iter().collect();
        (a, b)
    }

    #[test]
    fn union() {
        crate::test_setup();
        let (a, b) = abc();
        let u = a.union(&b);
        assert_eq!(u.len(), 3);
        assert!(u.contains(&a));
        assert!(u.contains(&b));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn intersection() {
        let (a, b) = abc();
        let i = a.intersection(&b);
        assert_eq!(i.len(), 1);
        assert!(i.has(&quad("b", "2")));
        assert!(a.contains(&i) && b.contains(&i));
    }

    #[test]
    fn difference() {
        let (a, b) = abc();
        let d = a.difference(&b);
        assert_eq!(d.len(), 1);
        assert!(d.has(&quad("a", "1")));
        assert!(d.intersection(&b).is_empty());
    }

    #[test]
    fn algebra_identities() {
        let (a, b) = abc();
        assert!(a.union(&a).equals(&a));
        assert!(a.intersection(&a).equals(&a));
        assert!(a.difference(&a).is_empty());
        assert!(a.union(&b).equals(&b.union(&a)));
        assert!(a
            .difference(&b)
            .union(&a.intersection(&b))
            .equals(&a));
    }

    #[test]
    fn equals_is_order_independent() {
        let (mut a, _) = abc();
        let mut a2: Dataset = [quad("b", "2"), quad("a", "1")].into_iter().collect();
        assert!(a.equals(&a2));
        assert!(a2.equals(&a));
        a2.add(quad("z", "0"));
        assert!(!a.equals(&a2));
        assert!(a2.contains(&a));
        a.add(quad("y", "0"));
        assert!(!a.equals(&a2));
    }

    #[test]
    fn bulk_helpers() {
        let (mut a, b) = abc();
        assert_eq!(a.add_all(b.quads()), 1);
        assert_eq!(a.len(), 3);
        let p = Term::named_node("http://example.org/p").unwrap();
        let two = Term::simple_literal("2");
        assert_eq!(a.delete_matches(None, Some(&p), Some(&two), None), 1);
        assert_eq!(a.len(), 2);
        assert_eq!(a.delete_matches(None, None, None, None), 2);
        assert!(a.is_empty());
    }
}
