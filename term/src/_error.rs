use crate::{Position, TermKind};
use thiserror::Error;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when the creation of a term, a quad or a prefix mapping fails.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TermError {
    /// The IRI of a term must apply to [RFC 3987](https://tools.ietf.org/html/rfc3987).
    #[error("The given IRI '{0}' is not valid according to RFC3987")]
    InvalidIri(String),
    /// The language tags of literals must apply to Turtle's [LANGTAG](https://www.w3.org/TR/turtle/#grammar-production-LANGTAG) production.
    #[error("The given language tag '{0}' is not valid")]
    InvalidLanguageTag(String),
    /// Blank node identifiers must apply to Turtle's [BLANK_NODE_LABEL](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL) (without `_:`).
    #[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
    InvalidBlankNodeId(String),
    /// Blank node identifiers starting with [`FRESH_BNODE_PREFIX`](crate::FRESH_BNODE_PREFIX)
    /// are only handed out by [`Term::fresh_blank_node`](crate::Term::fresh_blank_node).
    #[error("The blank node identifier '{0}' is reserved for fresh blank nodes")]
    ReservedBlankNodeId(String),
    /// Names of variables must apply to SPARQL's [production rules](https://www.w3.org/TR/sparql11-query/#rVARNAME).
    #[error("The name '{0}' is not valid for a variable according to the SPARQL specification")]
    InvalidVariableName(String),
    /// A literal was given both a language tag and a datatype.
    #[error("The literal '{0}' can not have both a language tag and a datatype")]
    LanguageAndDatatype(String),
    /// Prefixes must match Turtle's `PN_PREFIX?`.
    #[error("The given prefix '{0}' does not match PN_PREFIX?")]
    InvalidPrefix(String),
    /// A term of the given kind can not be used at the given position of a quad.
    #[error("A {kind} term can not be used as the {position} of a quad")]
    TypeMismatch {
        /// Where the term was to be placed.
        position: Position,
        /// The kind of the offending term.
        kind: TermKind,
    },
}
