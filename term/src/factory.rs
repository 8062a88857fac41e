//! A [`TermFactory`] creates terms and quads,
//! resolving prefixed names through its own prefix context.

use crate::prefix::PrefixMap;
use crate::*;

/// A factory for terms and quads.
///
/// The factory carries a prefix context:
/// wherever an IRI is expected, a `prefix:local` name can be given instead,
/// as long as `prefix` is registered in the context.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TermFactory {
    context: PrefixMap,
}

impl TermFactory {
    /// A factory with an empty prefix context.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory with the given prefix context.
    pub fn with_context(context: PrefixMap) -> Self {
        TermFactory { context }
    }

    /// The prefix context of this factory.
    pub fn context(&self) -> &PrefixMap {
        &self.context
    }

    /// Mutable access to the prefix context of this factory.
    pub fn context_mut(&mut self) -> &mut PrefixMap {
        &mut self.context
    }

    /// Resolve `txt` as a prefixed name if its prefix is registered,
    /// and return it unchanged otherwise.
    pub fn resolve(&self, txt: &str) -> String {
        self.context.expand(txt).unwrap_or_else(|| txt.to_string())
    }

    /// Get a new IRI term, from a full IRI or a prefixed name.
    pub fn named_node(&self, iri: &str) -> Result<Term> {
        Term::named_node(&self.resolve(iri))
    }

    /// Get a blank node with the given id, or a fresh one.
    pub fn blank_node(&self, id: Option<&str>) -> Result<Term> {
        match id {
            Some(id) => Term::blank_node(id),
            None => Ok(Term::fresh_blank_node()),
        }
    }

    /// Get a new literal, with an optional language tag or an optional datatype.
    ///
    /// The datatype may be a prefixed name.
    pub fn literal(&self, value: &str, language: Option<&str>, datatype: Option<&str>) -> Result<Term> {
        match datatype {
            Some(dt) => Term::literal(value, language, Some(&self.resolve(dt))),
            None => Term::literal(value, language, None),
        }
    }

    /// Get a new variable.
    pub fn variable(&self, name: &str) -> Result<Term> {
        Term::variable(name)
    }

    /// Get the default graph marker.
    pub fn default_graph(&self) -> Term {
        Term::DefaultGraph
    }

    /// Get a new quad. A missing graph name means the default graph.
    pub fn quad(&self, subject: Term, predicate: Term, object: Term, graph: Option<Term>) -> Result<Quad> {
        Quad::new(subject, predicate, object, graph.unwrap_or(Term::DefaultGraph))
    }

    /// Get a new quad in the default graph.
    pub fn triple(&self, subject: Term, predicate: Term, object: Term) -> Result<Quad> {
        Quad::triple(subject, predicate, object)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::{rdf, xsd};

    fn factory() -> TermFactory {
        let mut f = TermFactory::new();
        f.context_mut().insert("ex", "http://example.org/").unwrap();
        f.context_mut().insert("xsd", crate::ns::xsd::PREFIX).unwrap();
        f
    }

    #[test]
    fn named_node_expands_known_prefix() -> Result<()> {
        let f = factory();
        assert_eq!(f.named_node("ex:A")?.iri(), Some("http://example.org/A"));
        assert_eq!(f.named_node(rdf::type_)?.iri(), Some(rdf::type_));
        Ok(())
    }

    #[test]
    fn named_node_rejects_unknown_prefix_without_iri_syntax() {
        let f = factory();
        assert!(f.named_node("foo bar:baz").is_err());
    }

    #[test]
    fn literal_datatype_is_resolved() -> Result<()> {
        let f = factory();
        let lit = f.literal("42", None, Some("xsd:integer"))?;
        assert_eq!(lit.datatype(), Some(xsd::integer));
        assert_eq!(
            f.literal("chat", Some("fr"), Some("xsd:string")),
            Err(TermError::LanguageAndDatatype("chat".to_string()))
        );
        Ok(())
    }

    #[test]
    fn fresh_blank_nodes_differ() -> Result<()> {
        let f = factory();
        let b1 = f.blank_node(None)?;
        let b2 = f.blank_node(None)?;
        assert!(b1.is_blank_node());
        assert_ne!(b1, b2);
        assert_eq!(f.blank_node(Some("x"))?.bnode_id(), Some("x"));
        Ok(())
    }

    #[test]
    fn quad_defaults_to_default_graph() -> Result<()> {
        let f = factory();
        let q = f.quad(
            f.named_node("ex:s")?,
            f.named_node("ex:p")?,
            f.literal("o", None, None)?,
            None,
        )?;
        assert!(q.is_triple());
        assert_eq!(q, f.triple(q.s().clone(), q.p().clone(), q.o().clone())?);
        Ok(())
    }
}
