//! In-memory implementation of [`QuadStore`].
//!
//! Terms are interned in a [`TermIndex`], and quads are stored as index tuples
//! in four ordered indexes (SPOG, POSG, OSPG, GSPO).
//! A pattern query scans the index whose leading positions cover
//! the most bound positions of the pattern,
//! and filters the remaining bound positions.
//!
//! Each quad also gets a sequence number when it is added,
//! so that [`quads`](QuadStore::quads) yields quads in insertion order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::empty;

use log::trace;
use quadmesh_term::factory::TermFactory;
use quadmesh_term::{Position, Quad, Term};

use crate::index::*;
use crate::{QuadIter, QuadStore};

/// The positions (in quad order) of each component of the four indexes.
static ORDERS: [[usize; 4]; 4] = [
    [0, 1, 2, 3], // SPOG
    [1, 2, 0, 3], // POSG
    [2, 0, 1, 3], // OSPG
    [3, 0, 1, 2], // GSPO
];

/// A heavily indexed in-memory dataset.
///
/// Fast to query but slow to load, with a relatively high memory footprint.
///
/// Besides its quads, a dataset carries a [`TermFactory`],
/// whose prefix context is used when materializing the dataset into a graph.
#[derive(Clone, Debug, Default)]
pub struct GenericDataset<TI: TermIndex> {
    factory: TermFactory,
    terms: TI,
    indexes: [BTreeSet<[TI::Index; 4]>; 4],
    seq: BTreeMap<[TI::Index; 4], u64>,
    order: BTreeMap<u64, [TI::Index; 4]>,
    next_seq: u64,
}

/// The default in-memory dataset.
pub type Dataset = GenericDataset<SimpleTermIndex<u32>>;

/// Flavours of Dataset implementations with a smaller memory-footprint.
///
/// The trade-off is that these implementations can only contain a small number (2^16) of terms.
pub mod small {
    use super::*;

    /// A heavily indexed dataset with 16-bit term indices.
    ///
    /// # Panics
    /// [`add`](QuadStore::add) panics when a quad brings the number of distinct terms
    /// ever added to this dataset beyond 2^16.
    /// (The same holds for [`Dataset`](super::Dataset) beyond 2^32 terms.)
    pub type Dataset = GenericDataset<SimpleTermIndex<u16>>;
}

impl<TI: TermIndex + Default> GenericDataset<TI> {
    /// An empty dataset with an empty prefix context.
    pub fn new() -> Self {
        Self::with_factory(TermFactory::default())
    }

    /// An empty dataset using the given factory.
    pub fn with_factory(factory: TermFactory) -> Self {
        GenericDataset {
            factory,
            terms: TI::default(),
            indexes: Default::default(),
            seq: BTreeMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// A new dataset with the same factory, containing the quads matching the given pattern.
    ///
    /// The quads keep their relative insertion order.
    pub fn matching(
        &self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
        g: Option<&Term>,
    ) -> Self {
        let mut found: Vec<(u64, [TI::Index; 4])> = self
            .scan(s, p, o, g)
            .filter_map(|spog| self.seq.get(&spog).map(|n| (*n, spog)))
            .collect();
        found.sort_unstable();
        let mut res = Self::with_factory(self.factory.clone());
        for (_, spog) in found {
            res.add(self.make_quad(spog));
        }
        res
    }

    /// A new dataset with the same factory, containing the quads satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Quad) -> bool,
    {
        let mut res = Self::with_factory(self.factory.clone());
        for q in self.quads().filter(|q| predicate(q)) {
            res.add(q);
        }
        res
    }
}

impl<TI: TermIndex> GenericDataset<TI> {
    /// The term factory of this dataset.
    pub fn factory(&self) -> &TermFactory {
        &self.factory
    }

    /// Mutable access to the term factory of this dataset.
    pub fn factory_mut(&mut self) -> &mut TermFactory {
        &mut self.factory
    }

    fn spog(&self) -> &BTreeSet<[TI::Index; 4]> {
        &self.indexes[0]
    }

    fn make_quad(&self, spog: [TI::Index; 4]) -> Quad {
        let [s, p, o, g] = spog.map(|i| self.terms.get_term(i).clone());
        Quad::new_unchecked(s, p, o, g)
    }

    /// The index of every term of `quad`, if they are all known.
    fn lookup(&self, quad: &Quad) -> Option<[TI::Index; 4]> {
        let [s, p, o, g] = quad.terms();
        Some([
            self.terms.get_index(s)?,
            self.terms.get_index(p)?,
            self.terms.get_index(o)?,
            self.terms.get_index(g)?,
        ])
    }

    /// The index tuples (in SPOG order) of the quads matching the given pattern.
    ///
    /// Without any bound position, they come in insertion order;
    /// otherwise, in the order of the scanned index.
    fn scan<'s>(
        &'s self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
        g: Option<&Term>,
    ) -> Box<dyn Iterator<Item = [TI::Index; 4]> + 's> {
        let mut pattern = [None; 4];
        for (k, (position, term)) in Position::ALL.iter().zip([s, p, o, g]).enumerate() {
            if let Some(term) = term {
                if !position.accepts(term.kind()) {
                    return Box::new(empty());
                }
                match self.terms.get_index(term) {
                    Some(i) => pattern[k] = Some(i),
                    None => return Box::new(empty()),
                }
            }
        }
        if pattern.iter().all(Option::is_none) {
            return Box::new(self.order.values().copied());
        }

        // pick the index whose leading positions cover the most bound positions
        let mut which = 0;
        let mut bound = 0;
        for (k, order) in ORDERS.iter().enumerate() {
            let b = order.iter().take_while(|pos| pattern[**pos].is_some()).count();
            if b > bound {
                which = k;
                bound = b;
            }
        }
        let order = &ORDERS[which];
        let mut lo = [TI::Index::ZERO; 4];
        let mut hi = [TI::Index::MAX; 4];
        for (k, pos) in order.iter().take(bound).enumerate() {
            if let Some(i) = pattern[*pos] {
                lo[k] = i;
                hi[k] = i;
            }
        }
        trace!("matching {pattern:?} on index {which} with {bound} bound position(s)");

        Box::new(
            self.indexes[which]
                .range(lo..=hi)
                .map(move |key| unpermute(*key, order))
                .filter(move |spog| {
                    spog.iter()
                        .zip(pattern.iter())
                        .all(|(i, pi)| pi.map_or(true, |pi| pi == *i))
                }),
        )
    }
}

fn permute<I: Index>(spog: [I; 4], order: &[usize; 4]) -> [I; 4] {
    order.map(|pos| spog[pos])
}

fn unpermute<I: Index>(key: [I; 4], order: &[usize; 4]) -> [I; 4] {
    let mut spog = key;
    for (k, pos) in order.iter().enumerate() {
        spog[*pos] = key[k];
    }
    spog
}

impl<TI: TermIndex> QuadStore for GenericDataset<TI> {
    fn add(&mut self, quad: Quad) -> bool {
        let spog = quad.terms().map(|t| self.terms.ensure_index(t));
        if self.indexes[0].insert(spog) {
            for (order, index) in ORDERS.iter().zip(self.indexes.iter_mut()).skip(1) {
                let i = index.insert(permute(spog, order));
                debug_assert!(i);
            }
            self.seq.insert(spog, self.next_seq);
            self.order.insert(self.next_seq, spog);
            self.next_seq += 1;
            trace!("added {quad}");
            true
        } else {
            false
        }
    }

    fn delete(&mut self, quad: &Quad) -> bool {
        let Some(spog) = self.lookup(quad) else {
            return false;
        };
        if self.indexes[0].remove(&spog) {
            for (order, index) in ORDERS.iter().zip(self.indexes.iter_mut()).skip(1) {
                let i = index.remove(&permute(spog, order));
                debug_assert!(i);
            }
            if let Some(n) = self.seq.remove(&spog) {
                self.order.remove(&n);
            }
            trace!("deleted {quad}");
            true
        } else {
            false
        }
    }

    fn has(&self, quad: &Quad) -> bool {
        match self.lookup(quad) {
            Some(spog) => self.spog().contains(&spog),
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.spog().len()
    }

    fn quads(&self) -> QuadIter<'_> {
        Box::new(self.order.values().map(|spog| self.make_quad(*spog)))
    }

    fn quads_matching<'s>(
        &'s self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
        g: Option<&Term>,
    ) -> QuadIter<'s> {
        Box::new(
            self.scan(s, p, o, g)
                .map(move |spog| self.make_quad(spog)),
        )
    }
}

impl<TI: TermIndex> PartialEq for GenericDataset<TI> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<TI: TermIndex> Eq for GenericDataset<TI> {}

impl<TI: TermIndex + Default> FromIterator<Quad> for GenericDataset<TI> {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

impl<TI: TermIndex> Extend<Quad> for GenericDataset<TI> {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        for q in iter {
            self.add(q);
        }
    }
}

impl<'a, TI: TermIndex> IntoIterator for &'a GenericDataset<TI> {
    type Item = Quad;
    type IntoIter = QuadIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads()
    }
}

/// One N-Quads line per quad.
impl<TI: TermIndex> fmt::Display for GenericDataset<TI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for q in self.quads() {
            writeln!(f, "{q}")?;
        }
        Ok(())
    }
}
