//! A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric [indices](`Index`).
use quadmesh_term::Term;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Abstraction of the short numeric indices representing [terms](`Term`) in a [`TermIndex`].
pub trait Index: Copy + std::fmt::Debug + Ord {
    /// The smallest index.
    const ZERO: Self;
    /// The greatest index.
    const MAX: Self;
    /// Convert from `usize`.
    ///
    /// # Panics
    /// If `other` does not fit in `Self`.
    fn from_usize(other: usize) -> Self;
    /// Convert into `usize`.
    fn into_usize(self) -> usize;
}

impl Index for usize {
    const ZERO: Self = 0;
    const MAX: Self = usize::MAX;
    fn from_usize(other: usize) -> Self {
        other
    }
    fn into_usize(self) -> usize {
        self
    }
}

impl Index for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u32")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

impl Index for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u16")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

//

/// A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric [indices](`Index`).
///
/// Two terms get the same index if and only if they have the same
/// [canonical key](Term::canonical_key).
pub trait TermIndex {
    /// The type of indices handed out by this term-index.
    type Index: Index;

    /// Get the index corresponding to term `t`, if it exists.
    ///
    /// Return `None` if this term-index does not contain a term equal to `t`.
    fn get_index(&self, t: &Term) -> Option<Self::Index>;
    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    ///
    /// # Panics
    /// If `t` is new and the term-index already holds as many terms as [`Self::Index`] can count.
    fn ensure_index(&mut self, t: &Term) -> Self::Index;
    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](TermIndex::get_index) or [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method may panic.
    fn get_term(&self, i: Self::Index) -> &Term;
}

/// A generic implementation of [`TermIndex`], keyed by canonical keys.
#[derive(Clone, Debug, Default)]
pub struct SimpleTermIndex<I: Index> {
    t2i: HashMap<String, I>,
    i2t: Vec<Term>,
}

impl<I: Index> SimpleTermIndex<I> {
    /// An empty term-index.
    pub fn new() -> Self {
        SimpleTermIndex {
            t2i: HashMap::new(),
            i2t: vec![],
        }
    }

    /// The number of terms in this term-index.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether this term-index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: Index> TermIndex for SimpleTermIndex<I> {
    type Index = I;

    fn get_index(&self, t: &Term) -> Option<Self::Index> {
        self.t2i.get(&t.canonical_key()).copied()
    }

    fn ensure_index(&mut self, t: &Term) -> Self::Index {
        match self.t2i.entry(t.canonical_key()) {
            Entry::Vacant(e) => {
                let i = I::from_usize(self.i2t.len());
                self.i2t.push(t.clone());
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    fn get_term(&self, i: Self::Index) -> &Term {
        &self.i2t[i.into_usize()]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quadmesh_term::ns::xsd;

    #[test]
    fn simple_term_index() -> Result<(), Box<dyn std::error::Error>> {
        let exa = Term::named_node("https://example.com/ns/a")?;
        let exb = Term::named_node("https://example.com/ns/b")?;
        let bn1 = Term::blank_node("bn1")?;
        let hello = Term::simple_literal("hello world");
        let answer = Term::literal_dt("42", xsd::integer)?;

        let mut sti = SimpleTermIndex::<u32>::new();
        assert!(sti.is_empty());
        assert_eq!(sti.len(), 0);

        for t in [&exa, &exb, &bn1, &hello, &answer] {
            assert_eq!(sti.get_index(t), None);
        }

        assert_eq!(sti.ensure_index(&exa), 0);
        assert!(!sti.is_empty());
        assert_eq!(sti.len(), 1);
        assert_eq!(sti.get_index(&exa), Some(0));
        assert_eq!(sti.get_index(&exb), None);

        assert_eq!(sti.ensure_index(&exb), 1);
        assert_eq!(sti.ensure_index(&bn1), 2);
        assert_eq!(sti.ensure_index(&hello), 3);
        assert_eq!(sti.ensure_index(&answer), 4);
        assert_eq!(sti.len(), 5);

        assert_eq!(sti.ensure_index(&exa), 0);
        assert_eq!(sti.ensure_index(&exb), 1);
        assert_eq!(sti.ensure_index(&bn1), 2);
        assert_eq!(sti.ensure_index(&hello), 3);
        assert_eq!(sti.ensure_index(&answer), 4);
        assert_eq!(sti.len(), 5);

        assert_eq!(sti.get_term(0), &exa);
        assert_eq!(sti.get_term(1), &exb);
        assert_eq!(sti.get_term(2), &bn1);
        assert_eq!(sti.get_term(3), &hello);
        assert_eq!(sti.get_term(4), &answer);

        Ok(())
    }

    #[test]
    fn equal_terms_share_an_index() -> Result<(), Box<dyn std::error::Error>> {
        let mut sti = SimpleTermIndex::<u16>::new();
        let i = sti.ensure_index(&Term::literal_dt("x", xsd::string)?);
        assert_eq!(sti.get_index(&Term::simple_literal("x")), Some(i));
        assert_eq!(sti.get_index(&Term::named_node("http://example.org/x")?), None);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "usize too big to be converted to u16")]
    fn small_term_index_overflows() {
        let mut sti = SimpleTermIndex::<u16>::new();
        for i in 0..=(u16::MAX as usize) {
            sti.ensure_index(&Term::simple_literal(&i.to_string()));
        }
        assert_eq!(sti.len(), 1 << 16);
        sti.ensure_index(&Term::simple_literal("one too many"));
    }

    #[cfg(feature = "all_tests")]
    #[test]
    fn big_simple_term_index() {
        const MAX: u32 = 20_000;
        let mut sti = SimpleTermIndex::<u32>::new();
        let terms: Vec<_> = (0..MAX)
            .map(|i| Term::literal_dt(&i.to_string(), xsd::integer).unwrap())
            .collect();
        for (i, t) in terms.iter().enumerate() {
            assert_eq!(sti.ensure_index(t), i as u32);
        }
        assert_eq!(sti.len(), MAX as usize);
        for (i, t) in terms.iter().enumerate() {
            assert_eq!(sti.ensure_index(t), i as u32);
            assert_eq!(sti.get_term(i as u32), t);
        }
    }
}
