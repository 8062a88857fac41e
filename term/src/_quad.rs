// this module is transparently re-exported by the crate root

use crate::*;
use std::fmt;

/// The four positions of a [`Quad`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum Position {
    /// The subject position
    Subject,
    /// The predicate position
    Predicate,
    /// The object position
    Object,
    /// The graph name position
    Graph,
}

impl Position {
    /// All positions, in quad order.
    pub const ALL: [Position; 4] = [
        Position::Subject,
        Position::Predicate,
        Position::Object,
        Position::Graph,
    ];

    /// Whether a term of the given kind may appear at this position.
    ///
    /// Variables are accepted everywhere, so that quads can serve as patterns.
    pub fn accepts(self, kind: TermKind) -> bool {
        use TermKind::*;
        match self {
            Position::Subject => matches!(kind, NamedNode | BlankNode | Variable),
            Position::Predicate => matches!(kind, NamedNode | Variable),
            Position::Object => !matches!(kind, DefaultGraph),
            Position::Graph => matches!(kind, NamedNode | BlankNode | DefaultGraph | Variable),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Subject => "subject",
            Position::Predicate => "predicate",
            Position::Object => "object",
            Position::Graph => "graph",
        })
    }
}

/// An RDF quad: a subject, a predicate and an object in a named or default graph.
///
/// A quad can only be built with terms that are acceptable at their position
/// (see [`Position::accepts`]).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    /// Build a quad, checking each term against its position.
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Result<Self> {
        check(Position::Subject, &subject)?;
        check(Position::Predicate, &predicate)?;
        check(Position::Object, &object)?;
        check(Position::Graph, &graph)?;
        Ok(Quad {
            subject,
            predicate,
            object,
            graph,
        })
    }

    /// Build a quad without checking the terms against their positions.
    ///
    /// # Precondition
    /// Each term must be acceptable at its position
    /// (typically because it was taken from another quad at the same position),
    /// otherwise the quad may break the invariants of the stores it is added to.
    pub fn new_unchecked(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        debug_assert!(check(Position::Subject, &subject).is_ok());
        debug_assert!(check(Position::Predicate, &predicate).is_ok());
        debug_assert!(check(Position::Object, &object).is_ok());
        debug_assert!(check(Position::Graph, &graph).is_ok());
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// Build a quad in the default graph.
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Result<Self> {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    /// The subject of this quad.
    pub fn s(&self) -> &Term {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn p(&self) -> &Term {
        &self.predicate
    }

    /// The object of this quad.
    pub fn o(&self) -> &Term {
        &self.object
    }

    /// The graph name of this quad ([`Term::DefaultGraph`] for the default graph).
    pub fn g(&self) -> &Term {
        &self.graph
    }

    /// The term at the given position.
    pub fn get(&self, position: Position) -> &Term {
        match position {
            Position::Subject => &self.subject,
            Position::Predicate => &self.predicate,
            Position::Object => &self.object,
            Position::Graph => &self.graph,
        }
    }

    /// The four terms of this quad, in quad order.
    pub fn terms(&self) -> [&Term; 4] {
        [&self.subject, &self.predicate, &self.object, &self.graph]
    }

    /// Consume this quad into its four terms.
    pub fn into_terms(self) -> [Term; 4] {
        [self.subject, self.predicate, self.object, self.graph]
    }

    /// Whether this quad is in the default graph.
    pub fn is_triple(&self) -> bool {
        self.graph.is_default_graph()
    }
}

fn check(position: Position, term: &Term) -> Result<()> {
    let kind = term.kind();
    if position.accepts(kind) {
        Ok(())
    } else {
        Err(TermError::TypeMismatch { position, kind })
    }
}

#[cfg(test)]
#[allow(clippy::unused_unit)] // test_case! generated warnings
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(Position::Subject, TermKind::Literal)]
    #[test_case(Position::Subject, TermKind::DefaultGraph)]
    #[test_case(Position::Predicate, TermKind::BlankNode)]
    #[test_case(Position::Predicate, TermKind::Literal)]
    #[test_case(Position::Object, TermKind::DefaultGraph)]
    #[test_case(Position::Graph, TermKind::Literal)]
    fn rejected(position: Position, kind: TermKind) {
        assert!(!position.accepts(kind));
    }

    #[test]
    fn literal_subject_is_a_type_mismatch() {
        let err = Quad::triple(
            Term::simple_literal("s"),
            Term::NamedNode("http://example.org/p".into()),
            Term::simple_literal("o"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TermError::TypeMismatch {
                position: Position::Subject,
                kind: TermKind::Literal
            }
        );
        assert_eq!(
            err.to_string(),
            "A Literal term can not be used as the subject of a quad"
        );
    }

    #[test]
    fn accessors() -> Result<()> {
        let s = Term::blank_node("s")?;
        let p = Term::named_node("http://example.org/p")?;
        let o = Term::literal_lang("o", "en")?;
        let g = Term::named_node("http://example.org/g")?;
        let q = Quad::new(s.clone(), p.clone(), o.clone(), g.clone())?;
        assert_eq!(q.s(), &s);
        assert_eq!(q.p(), &p);
        assert_eq!(q.o(), &o);
        assert_eq!(q.g(), &g);
        assert_eq!(q.get(Position::Object), &o);
        assert!(!q.is_triple());
        assert_eq!(q.into_terms(), [s, p, o, g]);
        Ok(())
    }
}
