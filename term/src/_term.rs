// this module is transparently re-exported by the crate root

use crate::ns::{rdf, xsd};
use crate::*;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static FRESH_BNODE: AtomicUsize = AtomicUsize::new(0);

/// The prefix of the blank node identifiers built by [`Term::fresh_blank_node`].
///
/// [`Term::blank_node`] rejects identifiers starting with it.
pub const FRESH_BNODE_PREFIX: &str = "quadmesh-genid-";

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// A SPARQL or Notation3 variable
    Variable,
    /// The marker for the default graph of a dataset
    DefaultGraph,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An RDF literal: a lexical form with either a language tag or a datatype.
///
/// Language-tagged literals report `rdf:langString` as their datatype.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    lexical: Arc<str>,
    language: Option<Arc<str>>,
    datatype: Arc<str>,
}

impl Literal {
    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The datatype IRI of this literal.
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// Whether this literal is a plain `xsd:string`.
    pub fn is_string(&self) -> bool {
        self.language.is_none() && &*self.datatype == xsd::string
    }
}

/// An RDF term.
///
/// Terms are compared, hashed and ordered by value.
/// Two terms are equal exactly when their [`canonical_key`](Term::canonical_key)s are equal.
///
/// All text is held in [`Arc<str>`], so cloning a term is cheap.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// An absolute IRI.
    NamedNode(Arc<str>),
    /// A blank node, identified by its local id (without `_:`).
    BlankNode(Arc<str>),
    /// A literal.
    Literal(Literal),
    /// A variable, identified by its name (without `?`).
    Variable(Arc<str>),
    /// The default graph of a dataset.
    DefaultGraph,
}

impl Term {
    /// Build an IRI term, checking that `iri` is a valid absolute IRI.
    pub fn named_node(iri: &str) -> Result<Self> {
        if is_absolute_iri(iri) {
            Ok(Term::NamedNode(iri.into()))
        } else {
            Err(TermError::InvalidIri(iri.to_string()))
        }
    }

    /// Build a blank node with the given local identifier (without `_:`).
    ///
    /// Identifiers starting with [`FRESH_BNODE_PREFIX`] are reserved to
    /// [`fresh_blank_node`](Term::fresh_blank_node).
    pub fn blank_node(id: &str) -> Result<Self> {
        if id.starts_with(FRESH_BNODE_PREFIX) {
            Err(TermError::ReservedBlankNodeId(id.to_string()))
        } else if is_valid_bnode_id(id) {
            Ok(Term::BlankNode(id.into()))
        } else {
            Err(TermError::InvalidBlankNodeId(id.to_string()))
        }
    }

    /// Build a blank node whose identifier has never been handed out before
    /// in the current process, neither by this function nor by [`blank_node`](Term::blank_node).
    pub fn fresh_blank_node() -> Self {
        let n = FRESH_BNODE.fetch_add(1, Ordering::Relaxed);
        Term::BlankNode(format!("{FRESH_BNODE_PREFIX}{n}").into())
    }

    /// Build a literal of type `xsd:string`.
    pub fn simple_literal(lexical: &str) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            language: None,
            datatype: xsd::string.into(),
        })
    }

    /// Build a language-tagged literal.
    pub fn literal_lang(lexical: &str, tag: &str) -> Result<Self> {
        if !is_valid_language_tag(tag) {
            return Err(TermError::InvalidLanguageTag(tag.to_string()));
        }
        Ok(Term::Literal(Literal {
            lexical: lexical.into(),
            language: Some(tag.into()),
            datatype: rdf::langString.into(),
        }))
    }

    /// Build a datatyped literal.
    pub fn literal_dt(lexical: &str, datatype: &str) -> Result<Self> {
        if !is_absolute_iri(datatype) {
            return Err(TermError::InvalidIri(datatype.to_string()));
        }
        Ok(Term::Literal(Literal {
            lexical: lexical.into(),
            language: None,
            datatype: datatype.into(),
        }))
    }

    /// Build a literal with an optional language tag or an optional datatype.
    ///
    /// Fails if both are given. If none is given, the literal is an `xsd:string`.
    pub fn literal(lexical: &str, language: Option<&str>, datatype: Option<&str>) -> Result<Self> {
        match (language, datatype) {
            (Some(_), Some(_)) => Err(TermError::LanguageAndDatatype(lexical.to_string())),
            (Some(tag), None) => Self::literal_lang(lexical, tag),
            (None, Some(dt)) => Self::literal_dt(lexical, dt),
            (None, None) => Ok(Self::simple_literal(lexical)),
        }
    }

    /// Build a variable with the given name (without `?`).
    pub fn variable(name: &str) -> Result<Self> {
        if is_valid_variable_name(name) {
            Ok(Term::Variable(name.into()))
        } else {
            Err(TermError::InvalidVariableName(name.to_string()))
        }
    }

    /// The default graph marker.
    pub fn default_graph() -> Self {
        Term::DefaultGraph
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::DefaultGraph => TermKind::DefaultGraph,
        }
    }

    /// The value of this term: the IRI, the blank node id, the lexical form,
    /// the variable name, or the empty string for the default graph.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(txt) | Term::BlankNode(txt) | Term::Variable(txt) => txt,
            Term::Literal(lit) => lit.lexical_form(),
            Term::DefaultGraph => "",
        }
    }

    /// The IRI of this term, if it is a named node.
    pub fn iri(&self) -> Option<&str> {
        match self {
            Term::NamedNode(iri) => Some(iri),
            _ => None,
        }
    }

    /// The blank node identifier of this term, if it is a blank node.
    pub fn bnode_id(&self) -> Option<&str> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// This term as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The lexical form of this term, if it is a literal.
    pub fn lexical_form(&self) -> Option<&str> {
        self.as_literal().map(Literal::lexical_form)
    }

    /// The language tag of this term, if it is a language-tagged literal.
    pub fn language_tag(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::language_tag)
    }

    /// The datatype of this term, if it is a literal.
    pub fn datatype(&self) -> Option<&str> {
        self.as_literal().map(Literal::datatype)
    }

    /// The name of this term, if it is a variable.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this term is a named node.
    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Whether this term is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Whether this term is the default graph marker.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    /// The canonical key of this term.
    ///
    /// It encodes the kind of the term and its value
    /// (plus the language tag or datatype of literals) in N-Triples syntax,
    /// so that two terms have the same key if and only if they are equal.
    /// The default graph, which has no N-Triples form, is keyed as `DefaultGraph`.
    pub fn canonical_key(&self) -> String {
        match self {
            Term::DefaultGraph => "DefaultGraph".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}
